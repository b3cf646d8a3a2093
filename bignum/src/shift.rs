// Copyright (c) 2025 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://github.com/mintlayer/mintlayer-core/blob/master/LICENSE
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Bit shifts within a fixed-size buffer.
//!
//! A shift is split into a whole-word block move and an intra-word shift carrying bits between
//! neighbouring words. Bits pushed out of either end are lost and the buffer never grows;
//! unlike [`Magnitude::add`], which extends on carry-out.

use logging::log;

use crate::{
    error::MagnitudeError,
    magnitude::Magnitude,
    word::{lower_bytes, raise_bytes, WORD_BITS, WORD_BYTES},
};

fn split_bit_count(bit_count: u64) -> (usize, u32) {
    let word_shift = usize::try_from(bit_count / WORD_BITS as u64).unwrap_or(usize::MAX);
    let bit_shift = (bit_count % WORD_BITS as u64) as u32;
    (word_shift, bit_shift)
}

impl Magnitude {
    /// Shifts the value left by `bit_count` bits, dropping bits shifted past the buffer end.
    pub fn shift_left(&mut self, bit_count: u64) -> Result<(), MagnitudeError> {
        if !self.is_initialized() {
            log::trace!("Left shift of an uninitialized magnitude, nothing to do");
            return Ok(());
        }
        self.ensure_word_aligned()?;

        let (word_shift, bit_shift) = split_bit_count(bit_count);
        if word_shift >= self.word_count() {
            self.storage_mut().fill(0);
            return Ok(());
        }

        raise_bytes(self.storage_mut(), word_shift * WORD_BYTES);

        if bit_shift != 0 {
            let mut carry = 0;
            for i in word_shift..self.word_count() {
                let word = self.word_at(i);
                self.set_word_at(i, (word << bit_shift) | carry);
                carry = word >> (WORD_BITS - bit_shift);
            }
        }

        Ok(())
    }

    /// Shifts the value right by `bit_count` bits, filling the vacated high bits with zeros.
    pub fn shift_right(&mut self, bit_count: u64) -> Result<(), MagnitudeError> {
        if !self.is_initialized() {
            log::trace!("Right shift of an uninitialized magnitude, nothing to do");
            return Ok(());
        }
        self.ensure_word_aligned()?;

        let (word_shift, bit_shift) = split_bit_count(bit_count);
        if word_shift >= self.word_count() {
            self.storage_mut().fill(0);
            return Ok(());
        }

        lower_bytes(self.storage_mut(), word_shift * WORD_BYTES);

        if bit_shift != 0 {
            let mut carry = 0;
            for i in (0..self.word_count() - word_shift).rev() {
                let word = self.word_at(i);
                self.set_word_at(i, (word >> bit_shift) | carry);
                carry = word << (WORD_BITS - bit_shift);
            }
        }

        Ok(())
    }
}

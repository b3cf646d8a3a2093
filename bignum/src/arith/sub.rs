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

use std::cmp::Ordering;

use logging::log;
use utils::ensure;

use super::cmp_words;
use crate::{
    error::MagnitudeError,
    magnitude::Magnitude,
    word::{sub_with_borrow, Word},
};

/// Subtracts `subtrahend` from `acc` in place, returning the final borrow.
///
/// The borrow is zero whenever `acc >= subtrahend`.
pub(super) fn sub_in_place(acc: &mut [Word], subtrahend: &[Word]) -> Word {
    let mut borrow = 0;
    for (i, word) in acc.iter_mut().enumerate() {
        let other = subtrahend.get(i).copied();
        if other.is_none() && borrow == 0 {
            break;
        }

        let (diff, next_borrow) = sub_with_borrow(*word, other.unwrap_or(0), borrow);
        *word = diff;
        borrow = next_borrow;
    }
    borrow
}

impl Magnitude {
    /// Subtracts `subtrahend` from `self`, keeping the size of `self`.
    ///
    /// Fails with [`MagnitudeError::Underflow`] and leaves `self` untouched if `subtrahend`
    /// is the larger value. Nothing happens if either operand is uninitialized.
    pub fn subtract(&mut self, subtrahend: &Magnitude) -> Result<(), MagnitudeError> {
        if !self.is_initialized() || !subtrahend.is_initialized() {
            log::trace!("Subtraction with an uninitialized operand, nothing to do");
            return Ok(());
        }
        self.ensure_word_aligned()?;
        subtrahend.ensure_word_aligned()?;

        let mut diff = self.words();
        let subtrahend = subtrahend.words();
        ensure!(
            cmp_words(&diff, &subtrahend) != Ordering::Less,
            MagnitudeError::Underflow
        );

        let borrow = sub_in_place(&mut diff, &subtrahend);
        debug_assert_eq!(borrow, 0);

        self.write_words(&diff);
        Ok(())
    }
}

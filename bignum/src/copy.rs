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

//! The three copy strategies.
//!
//! All of them anchor at the least significant byte: a shorter destination keeps the low-order
//! bytes of the source, a longer one is zero-filled above them. None of them change the value
//! represented by the copied bytes, only the headroom around it.

use logging::log;

use crate::{
    error::MagnitudeError,
    magnitude::{allocate_zeroed, Magnitude},
    word::{low_bytes, split_low_mut},
};

impl Magnitude {
    /// Makes `self` a byte-for-byte clone of `src`, resizing it to `src.size()`.
    ///
    /// On allocation failure `self` is left unchanged.
    pub fn copy_exact(&mut self, src: &Magnitude) -> Result<(), MagnitudeError> {
        if !src.is_initialized() {
            log::trace!("Exact copy from an uninitialized magnitude, nothing to do");
            return Ok(());
        }

        let mut storage = allocate_zeroed(src.size())?;
        storage.copy_from_slice(src.as_bytes());
        self.replace_storage(storage);
        Ok(())
    }

    /// Copies `src` into the existing buffer of `self`, truncating or zero-extending at the
    /// most significant end. The size of `self` does not change.
    ///
    /// An uninitialized `self` is first allocated with the size of `src`.
    pub fn copy_preserving_size(&mut self, src: &Magnitude) -> Result<(), MagnitudeError> {
        if !src.is_initialized() {
            log::trace!("Size-preserving copy from an uninitialized magnitude, nothing to do");
            return Ok(());
        }
        if !self.is_initialized() {
            *self = Magnitude::init(src.size())?;
        }

        let count = self.size().min(src.size());
        copy_low_bytes(self, src, count);
        Ok(())
    }

    /// Copies at most `n` low-order bytes of `src`, zero-filling the rest of `self`.
    ///
    /// The count is clamped to the sizes of both buffers. An uninitialized `self` is first
    /// allocated with `n` bytes.
    pub fn copy_bounded(&mut self, src: &Magnitude, n: usize) -> Result<(), MagnitudeError> {
        if !src.is_initialized() {
            log::trace!("Bounded copy from an uninitialized magnitude, nothing to do");
            return Ok(());
        }
        if !self.is_initialized() {
            *self = Magnitude::init(n)?;
        }

        let count = n.min(src.size()).min(self.size());
        copy_low_bytes(self, src, count);
        Ok(())
    }
}

fn copy_low_bytes(dst: &mut Magnitude, src: &Magnitude, count: usize) {
    let (low, high) = split_low_mut(dst.storage_mut(), count);
    low.copy_from_slice(low_bytes(src.as_bytes(), count));
    high.fill(0);
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::word::WORD_BYTES;

    #[test]
    fn exact_copy_clones_bytes_and_size() {
        let src = Magnitude::from_u128(0xabcdef);
        let mut dst = Magnitude::init(5 * WORD_BYTES).unwrap();

        dst.copy_exact(&src).unwrap();
        assert_eq!(dst.size(), src.size());
        assert_eq!(dst.as_bytes(), src.as_bytes());
        assert_eq!(dst, src);
    }

    #[test]
    fn exact_copy_into_uninitialized() {
        let src = Magnitude::from_u128(99);
        let mut dst = Magnitude::empty();
        dst.copy_exact(&src).unwrap();
        assert_eq!(dst.as_bytes(), src.as_bytes());
    }

    #[test]
    fn copies_from_uninitialized_are_noops() {
        let src = Magnitude::empty();
        let mut dst = Magnitude::from_u128(5);

        dst.copy_exact(&src).unwrap();
        dst.copy_preserving_size(&src).unwrap();
        dst.copy_bounded(&src, 4).unwrap();

        assert_eq!(dst.size(), 16);
        assert_eq!(dst.to_u128(), Some(5));
    }

    #[test]
    fn preserving_copy_zero_extends() {
        let src = Magnitude::from_u128(u128::MAX);
        let mut dst = Magnitude::from_u128(0);
        dst.extend(2 * WORD_BYTES).unwrap();
        dst.set_word_at(dst.word_count() - 1, 77);

        dst.copy_preserving_size(&src).unwrap();
        assert_eq!(dst.size(), 16 + 2 * WORD_BYTES);
        assert_eq!(dst, src);
    }

    #[test]
    fn preserving_copy_truncates_high_bytes() {
        let src = Magnitude::from_u128(0x1122_3344_5566_7788_99aa_bbcc_ddee_ff00);
        let mut dst = Magnitude::init(4).unwrap();

        dst.copy_preserving_size(&src).unwrap();
        assert_eq!(dst.size(), 4);
        assert_eq!(dst.to_u128(), Some(0xddee_ff00));
    }

    #[test]
    fn preserving_copy_into_uninitialized_takes_source_size() {
        let src = Magnitude::from_u128(3);
        let mut dst = Magnitude::empty();
        dst.copy_preserving_size(&src).unwrap();
        assert_eq!(dst.size(), 16);
        assert_eq!(dst, src);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0xff)]
    #[case(3, 0xee_ffff)]
    #[case(8, 0x99aa_bbcc_ddee_ffff)]
    #[case(64, 0x1122_3344_5566_7788_99aa_bbcc_ddee_ffff)]
    fn bounded_copy(#[case] n: usize, #[case] expected: u128) {
        let src = Magnitude::from_u128(0x1122_3344_5566_7788_99aa_bbcc_ddee_ffff);
        let mut dst = Magnitude::from_u128(u128::MAX);

        dst.copy_bounded(&src, n).unwrap();
        assert_eq!(dst.size(), 16);
        assert_eq!(dst.to_u128(), Some(expected));
    }

    #[test]
    fn bounded_copy_clamps_to_destination() {
        let src = Magnitude::from_u128(0x0102_0304_0506);
        let mut dst = Magnitude::init(2).unwrap();

        dst.copy_bounded(&src, 10).unwrap();
        assert_eq!(dst.size(), 2);
        assert_eq!(dst.to_u128(), Some(0x0506));
    }

    #[test]
    fn bounded_copy_into_uninitialized_allocates_n_bytes() {
        let src = Magnitude::from_u128(0x0102_0304);
        let mut dst = Magnitude::empty();

        dst.copy_bounded(&src, 3).unwrap();
        assert_eq!(dst.size(), 3);
        assert_eq!(dst.to_u128(), Some(0x02_0304));
    }
}

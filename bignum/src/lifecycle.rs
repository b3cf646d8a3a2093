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

use logging::log;

use crate::{error::MagnitudeError, magnitude::Magnitude, word::WORD_BYTES};

impl Magnitude {
    /// Releases the buffer, leaving the magnitude uninitialized. Calling it again is a no-op.
    pub fn free(&mut self) {
        self.replace_storage(Vec::new());
    }

    /// Grows the buffer by `extra_bytes` without changing the value.
    ///
    /// An uninitialized magnitude is allocated with `extra_bytes` zero bytes instead. On
    /// allocation failure the magnitude is left untouched.
    pub fn extend(&mut self, extra_bytes: usize) -> Result<(), MagnitudeError> {
        if !self.is_initialized() {
            *self = Magnitude::init(extra_bytes)?;
            return Ok(());
        }
        if extra_bytes == 0 {
            return Ok(());
        }

        let new_size = self
            .size()
            .checked_add(extra_bytes)
            .ok_or(MagnitudeError::AllocationFailure {
                requested: usize::MAX,
            })?;

        let mut grown = Magnitude::init(new_size)?;
        grown.copy_preserving_size(self)?;

        log::debug!("Extending magnitude from {} to {} bytes", self.size(), new_size);

        *self = grown;
        Ok(())
    }

    /// Drops leading all-zero words, reallocating to the smallest word-aligned size that holds
    /// the value.
    ///
    /// At least one word is kept, so a zero value stays initialized.
    pub fn normalize(&mut self) -> Result<(), MagnitudeError> {
        if !self.is_initialized() {
            log::trace!("Normalizing an uninitialized magnitude, nothing to do");
            return Ok(());
        }
        self.ensure_word_aligned()?;

        let kept_words = self.significant_words().max(1);
        if kept_words == self.word_count() {
            return Ok(());
        }

        let new_size = kept_words * WORD_BYTES;
        let mut shrunk = Magnitude::init(new_size)?;
        shrunk.copy_bounded(self, new_size)?;

        log::debug!("Shrinking magnitude from {} to {} bytes", self.size(), new_size);

        *self = shrunk;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn free_is_idempotent() {
        let mut m = Magnitude::from_u128(42);
        m.free();
        assert!(!m.is_initialized());
        assert_eq!(m.size(), 0);

        m.free();
        assert!(!m.is_initialized());
        assert_eq!(m.size(), 0);
    }

    #[test]
    fn extend_uninitialized_allocates() {
        let mut m = Magnitude::empty();
        m.extend(2 * WORD_BYTES).unwrap();
        assert_eq!(m.size(), 2 * WORD_BYTES);
        assert!(m.is_zero());
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(WORD_BYTES)]
    #[case(5 * WORD_BYTES)]
    fn extend_preserves_value(#[case] extra: usize) {
        let value = 0xdead_beef_0000_0000_1234_5678_9abc_def0;
        let mut m = Magnitude::from_u128(value);
        m.extend(extra).unwrap();

        assert_eq!(m.size(), 16 + extra);
        assert_eq!(m.to_u128(), Some(value));
        assert_eq!(m, Magnitude::from_u128(value));
    }

    #[test]
    fn extend_failure_leaves_value_untouched() {
        let mut m = Magnitude::from_u128(7);
        assert!(matches!(
            m.extend(usize::MAX),
            Err(MagnitudeError::AllocationFailure { .. })
        ));
        assert_eq!(m.size(), 16);
        assert_eq!(m.to_u128(), Some(7));

        assert!(matches!(
            m.extend(isize::MAX as usize),
            Err(MagnitudeError::AllocationFailure { .. })
        ));
        assert_eq!(m.size(), 16);
    }

    #[test]
    fn normalize_drops_leading_zero_words() {
        let mut m = Magnitude::from_u128(0x1234);
        m.extend(3 * WORD_BYTES).unwrap();
        m.normalize().unwrap();

        assert_eq!(m.size(), WORD_BYTES);
        assert_eq!(m.to_u128(), Some(0x1234));
    }

    #[test]
    fn normalize_keeps_nonzero_top_word() {
        let mut m = Magnitude::from_u128(u128::MAX);
        m.normalize().unwrap();
        assert_eq!(m.size(), 16);
        assert_eq!(m.to_u128(), Some(u128::MAX));
    }

    #[test]
    fn normalize_zero_keeps_one_word() {
        let mut m = Magnitude::init(4 * WORD_BYTES).unwrap();
        m.normalize().unwrap();
        assert!(m.is_initialized());
        assert_eq!(m.size(), WORD_BYTES);
        assert!(m.is_zero());
    }

    #[test]
    fn normalize_checks_the_most_significant_word() {
        // Only the top word is non-zero: nothing may be dropped.
        let mut m = Magnitude::init(3 * WORD_BYTES).unwrap();
        m.set_word_at(2, 1);
        m.normalize().unwrap();
        assert_eq!(m.size(), 3 * WORD_BYTES);
        assert_eq!(m.word_at(2), 1);
    }

    #[test]
    fn normalize_rejects_misaligned_buffers() {
        let mut m = Magnitude::init(WORD_BYTES + 3).unwrap();
        assert_eq!(
            m.normalize(),
            Err(MagnitudeError::MisalignedSize {
                size: WORD_BYTES + 3
            })
        );
    }

    #[test]
    fn normalize_uninitialized_is_noop() {
        let mut m = Magnitude::empty();
        m.normalize().unwrap();
        assert!(!m.is_initialized());
    }
}

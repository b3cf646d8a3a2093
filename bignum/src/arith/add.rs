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

use crate::{
    error::MagnitudeError,
    magnitude::Magnitude,
    word::{add_with_carry, Word, WORD_BYTES},
};

/// Adds `addend` into `acc` in place, returning the carry out of the most significant word.
///
/// Words of `addend` beyond `acc.len()` are ignored; the caller sizes `acc` first.
pub(super) fn add_in_place(acc: &mut [Word], addend: &[Word]) -> Word {
    let mut carry = 0;
    for (i, word) in acc.iter_mut().enumerate() {
        let other = addend.get(i).copied();
        if other.is_none() && carry == 0 {
            break;
        }

        let (sum, next_carry) = add_with_carry(*word, other.unwrap_or(0), carry);
        *word = sum;
        carry = next_carry;
    }
    carry
}

impl Magnitude {
    /// Adds `addend` to `self`.
    ///
    /// `self` is grown to the size of `addend` if it is smaller, plus one more word if the
    /// most significant word carries out. The growth happens in a single step after the sum is
    /// known, so on allocation failure `self` keeps its size and value. Nothing happens if either operand is
    /// uninitialized.
    pub fn add(&mut self, addend: &Magnitude) -> Result<(), MagnitudeError> {
        if !self.is_initialized() || !addend.is_initialized() {
            log::trace!("Addition with an uninitialized operand, nothing to do");
            return Ok(());
        }
        self.ensure_word_aligned()?;
        addend.ensure_word_aligned()?;

        let mut sum = self.words();
        sum.resize(self.word_count().max(addend.word_count()), 0);

        let carry = add_in_place(&mut sum, &addend.words());
        if carry != 0 {
            sum.push(carry);
        }

        let needed = sum.len() * WORD_BYTES;
        if needed > self.size() {
            self.extend(needed - self.size())?;
        }

        self.write_words(&sum);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use test_utils::{
        make_seedable_rng,
        random::{Rng, Seed},
    };

    use super::*;

    #[test]
    fn carry_crosses_word_boundary() {
        let mut m = Magnitude::from_be_bytes(&[0x00, 0xff]);
        m.add(&Magnitude::from_be_bytes(&[0x01])).unwrap();
        assert_eq!(m.to_u128(), Some(0x100));

        let mut m = Magnitude::from_u128(u64::MAX as u128);
        m.add(&Magnitude::from_u128(1)).unwrap();
        assert_eq!(m.to_u128(), Some(1 << 64));
        assert_eq!(m.size(), 16);
    }

    #[test]
    fn final_carry_extends_by_one_word() {
        let mut m = Magnitude::from_be_bytes(&[0xff; WORD_BYTES]);
        assert_eq!(m.size(), WORD_BYTES);

        m.add(&Magnitude::from_be_bytes(&[0x01])).unwrap();
        assert_eq!(m.size(), 2 * WORD_BYTES);
        assert_eq!(m.words(), vec![0, 1]);
    }

    #[test]
    fn carry_out_of_u128() {
        let mut m = Magnitude::from_u128(u128::MAX);
        m.add(&Magnitude::from_u128(1)).unwrap();

        assert_eq!(m.size(), 16 + WORD_BYTES);
        assert_eq!(m.to_u128(), None);

        let mut expected = vec![0u8; 17];
        expected[0] = 1;
        assert_eq!(m.to_be_bytes(), expected);
    }

    #[test]
    fn smaller_destination_grows_to_addend_size() {
        let mut m = Magnitude::from_be_bytes(&[0x02]);
        let mut addend = Magnitude::from_u128(1 << 100);
        addend.extend(2 * WORD_BYTES).unwrap();

        m.add(&addend).unwrap();
        assert_eq!(m.size(), addend.size());
        assert_eq!(m.to_u128(), Some((1 << 100) + 2));
    }

    #[test]
    fn wider_addend_with_carry_out_grows_once() {
        let mut m = Magnitude::from_be_bytes(&[0xff; WORD_BYTES]);
        let mut addend = Magnitude::init(2 * WORD_BYTES).unwrap();
        addend.set_word_at(0, 1);
        addend.set_word_at(1, Word::MAX);

        m.add(&addend).unwrap();
        assert_eq!(m.size(), 3 * WORD_BYTES);
        assert_eq!(m.words(), vec![0, 0, 1]);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(u128::MAX)]
    #[case(0xdead_beef)]
    fn adding_zero_is_identity(#[case] value: u128) {
        let mut m = Magnitude::from_u128(value);
        m.add(&Magnitude::init(WORD_BYTES).unwrap()).unwrap();
        assert_eq!(m.size(), 16);
        assert_eq!(m.to_u128(), Some(value));
    }

    #[test]
    fn uninitialized_operands_are_ignored() {
        let mut m = Magnitude::from_u128(5);
        m.add(&Magnitude::empty()).unwrap();
        assert_eq!(m.to_u128(), Some(5));

        let mut m = Magnitude::empty();
        m.add(&Magnitude::from_u128(5)).unwrap();
        assert!(!m.is_initialized());
    }

    #[test]
    fn misaligned_operands_are_rejected() {
        let mut m = Magnitude::init(3).unwrap();
        assert_eq!(
            m.add(&Magnitude::from_u128(1)),
            Err(MagnitudeError::MisalignedSize { size: 3 })
        );

        let mut m = Magnitude::from_u128(1);
        assert_eq!(
            m.add(&Magnitude::init(5).unwrap()),
            Err(MagnitudeError::MisalignedSize { size: 5 })
        );
        assert_eq!(m.to_u128(), Some(1));
    }

    #[rstest]
    #[trace]
    #[case(Seed::from_entropy())]
    fn matches_u128_addition(#[case] seed: Seed) {
        let mut rng = make_seedable_rng!(seed);

        for _ in 0..1000 {
            let a = rng.gen::<u128>() >> rng.gen_range(1..128);
            let b = rng.gen::<u128>() >> rng.gen_range(1..128);

            let mut m = Magnitude::from_u128(a);
            m.add(&Magnitude::from_u128(b)).unwrap();
            assert_eq!(m.to_u128(), Some(a + b));
        }
    }
}

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

use super::{cmp_words, significant_len, sub::sub_in_place};
use crate::{
    error::MagnitudeError,
    magnitude::Magnitude,
    word::{Word, HALF_WORD_BITS, LOW_HALF_MASK, WORD_BITS},
};

/// Quotient and remainder of `dividend / divisor` for a divisor below `2^HALF_WORD_BITS`.
///
/// Works on half-word digits so every partial dividend fits in a single word.
fn div_rem_half_word(dividend: &[Word], divisor: Word) -> (Vec<Word>, Word) {
    debug_assert!(divisor != 0 && divisor <= LOW_HALF_MASK);

    let mut quotient = vec![0; dividend.len()];
    let mut rem: Word = 0;

    for (i, &word) in dividend.iter().enumerate().rev() {
        let high = ((rem << HALF_WORD_BITS) | (word >> HALF_WORD_BITS)) / divisor;
        rem = ((rem << HALF_WORD_BITS) | (word >> HALF_WORD_BITS)) % divisor;

        let low = ((rem << HALF_WORD_BITS) | (word & LOW_HALF_MASK)) / divisor;
        rem = ((rem << HALF_WORD_BITS) | (word & LOW_HALF_MASK)) % divisor;

        quotient[i] = (high << HALF_WORD_BITS) | low;
    }

    (quotient, rem)
}

/// Shifts `words` left by one bit, shifting `bit` in at the bottom.
fn shift_in_bit(words: &mut [Word], bit: Word) {
    let mut carry = bit;
    for word in words.iter_mut() {
        let next_carry = *word >> (WORD_BITS - 1);
        *word = (*word << 1) | carry;
        carry = next_carry;
    }
    debug_assert_eq!(carry, 0);
}

/// Quotient as long as `dividend` and remainder as long as `divisor`.
fn div_rem_words(dividend: &[Word], divisor: &[Word]) -> (Vec<Word>, Vec<Word>) {
    debug_assert!(significant_len(divisor) > 0);

    if significant_len(divisor) == 1 && divisor[0] <= LOW_HALF_MASK {
        let (quotient, rem) = div_rem_half_word(dividend, divisor[0]);
        let mut remainder = vec![0; divisor.len()];
        remainder[0] = rem;
        return (quotient, remainder);
    }

    div_rem_binary(dividend, divisor)
}

/// Bit-by-bit long division.
fn div_rem_binary(dividend: &[Word], divisor: &[Word]) -> (Vec<Word>, Vec<Word>) {
    let divisor_len = significant_len(divisor);

    let mut quotient = vec![0; dividend.len()];
    // One spare word: the running remainder is below the divisor, doubled plus one.
    let mut rem = vec![0; divisor_len + 1];

    let total_bits = significant_len(dividend) * WORD_BITS as usize;
    for bit in (0..total_bits).rev() {
        let (word_idx, bit_idx) = (bit / WORD_BITS as usize, bit % WORD_BITS as usize);
        shift_in_bit(&mut rem, (dividend[word_idx] >> bit_idx) & 1);

        if cmp_words(&rem, divisor) != Ordering::Less {
            let borrow = sub_in_place(&mut rem, &divisor[..divisor_len]);
            debug_assert_eq!(borrow, 0);
            quotient[word_idx] |= 1 << bit_idx;
        }
    }

    let mut remainder = vec![0; divisor.len()];
    remainder[..divisor_len].copy_from_slice(&rem[..divisor_len]);
    (quotient, remainder)
}

impl Magnitude {
    /// Divides `self` by `divisor`, storing the quotient in `self` and the remainder in
    /// `remainder`.
    ///
    /// The size of `self` does not change. `remainder` is grown to the size of `divisor` if it
    /// is smaller (an uninitialized `remainder` is allocated). Nothing happens if `self` or
    /// `divisor` is uninitialized; a zero divisor fails with
    /// [`MagnitudeError::DivisionByZero`] and leaves both outputs untouched.
    pub fn divide(
        &mut self,
        divisor: &Magnitude,
        remainder: &mut Magnitude,
    ) -> Result<(), MagnitudeError> {
        if !self.is_initialized() || !divisor.is_initialized() {
            log::trace!("Division with an uninitialized operand, nothing to do");
            return Ok(());
        }
        self.ensure_word_aligned()?;
        divisor.ensure_word_aligned()?;
        if remainder.is_initialized() {
            remainder.ensure_word_aligned()?;
        }
        ensure!(!divisor.is_zero(), MagnitudeError::DivisionByZero);

        let divisor_words = divisor.words();
        let (quotient, rem) = div_rem_words(&self.words(), &divisor_words);

        if remainder.size() < divisor.size() {
            remainder.extend(divisor.size() - remainder.size())?;
        }

        remainder.write_words(&rem);
        self.write_words(&quotient);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use test_utils::{make_seedable_rng, random::Seed, random_be_bytes, random_u128_any_width};

    use super::*;
    use crate::word::WORD_BYTES;

    fn divide(a: u128, b: u128) -> (Magnitude, Magnitude) {
        let mut quotient = Magnitude::from_u128(a);
        let mut remainder = Magnitude::empty();
        quotient.divide(&Magnitude::from_u128(b), &mut remainder).unwrap();
        (quotient, remainder)
    }

    #[rstest]
    #[case(0, 1, 0, 0)]
    #[case(7, 1, 7, 0)]
    #[case(7, 2, 3, 1)]
    #[case(100, 7, 14, 2)]
    #[case(3, 5, 0, 3)]
    #[case(u128::MAX, u128::MAX, 1, 0)]
    #[case(u128::MAX, 1 << 64, u64::MAX as u128, u64::MAX as u128)]
    #[case(u128::MAX, 0x1_0000_0001, u128::MAX / 0x1_0000_0001, u128::MAX % 0x1_0000_0001)]
    #[case(1 << 127, 3, (1 << 127) / 3, (1 << 127) % 3)]
    fn vectors(
        #[case] a: u128,
        #[case] b: u128,
        #[case] expected_quotient: u128,
        #[case] expected_remainder: u128,
    ) {
        let (quotient, remainder) = divide(a, b);
        assert_eq!(quotient.size(), 16);
        assert_eq!(remainder.size(), 16);
        assert_eq!(quotient.to_u128(), Some(expected_quotient));
        assert_eq!(remainder.to_u128(), Some(expected_remainder));
    }

    #[test]
    fn division_by_zero_is_reported() {
        let mut m = Magnitude::from_u128(10);
        let mut remainder = Magnitude::from_u128(99);

        assert_eq!(
            m.divide(&Magnitude::init(WORD_BYTES).unwrap(), &mut remainder),
            Err(MagnitudeError::DivisionByZero)
        );
        assert_eq!(m.to_u128(), Some(10));
        assert_eq!(remainder.to_u128(), Some(99));
    }

    #[test]
    fn remainder_keeps_larger_size() {
        let mut m = Magnitude::from_u128(1000);
        let mut remainder = Magnitude::init(4 * WORD_BYTES).unwrap();
        remainder.set_word_at(3, Word::MAX);

        m.divide(&Magnitude::from_be_bytes(&[0x03]), &mut remainder).unwrap();
        assert_eq!(m.to_u128(), Some(333));
        assert_eq!(remainder.size(), 4 * WORD_BYTES);
        assert_eq!(remainder.to_u128(), Some(1));
    }

    #[test]
    fn remainder_grows_to_divisor_size() {
        let mut m = Magnitude::from_u128(u128::MAX);
        let mut remainder = Magnitude::from_be_bytes(&[0x00]);

        m.divide(&Magnitude::from_u128(u128::MAX - 1), &mut remainder).unwrap();
        assert_eq!(m.to_u128(), Some(1));
        assert_eq!(remainder.size(), 16);
        assert_eq!(remainder.to_u128(), Some(1));
    }

    #[test]
    fn uninitialized_operands_are_ignored() {
        let mut m = Magnitude::from_u128(5);
        let mut remainder = Magnitude::empty();
        m.divide(&Magnitude::empty(), &mut remainder).unwrap();
        assert_eq!(m.to_u128(), Some(5));
        assert!(!remainder.is_initialized());
    }

    #[test]
    fn half_word_path_matches_long_division() {
        let dividend = [Word::MAX, 12345, Word::MAX >> 3];

        for divisor in [1, 7, 10, LOW_HALF_MASK] {
            let (quotient, rem) = div_rem_half_word(&dividend, divisor);
            let (expected_quotient, expected_rem) = div_rem_binary(&dividend, &[divisor]);

            assert_eq!(quotient, expected_quotient);
            assert_eq!(vec![rem], expected_rem);
        }
    }

    #[rstest]
    #[trace]
    #[case(Seed::from_entropy())]
    fn matches_u128_division(#[case] seed: Seed) {
        let mut rng = make_seedable_rng!(seed);

        for _ in 0..500 {
            let a = random_u128_any_width(&mut rng);
            let b = random_u128_any_width(&mut rng).max(1);

            let (quotient, remainder) = divide(a, b);
            assert_eq!(quotient.to_u128(), Some(a / b));
            assert_eq!(remainder.to_u128(), Some(a % b));
        }
    }

    #[rstest]
    #[trace]
    #[case(Seed::from_entropy())]
    fn quotient_times_divisor_plus_remainder(#[case] seed: Seed) {
        let mut rng = make_seedable_rng!(seed);

        for _ in 0..50 {
            let dividend = Magnitude::from_be_bytes(&random_be_bytes(&mut rng, 1..64));
            let divisor = Magnitude::from_be_bytes(&random_be_bytes(&mut rng, 1..32));
            if divisor.is_zero() {
                continue;
            }

            let mut quotient = dividend.clone();
            let mut remainder = Magnitude::empty();
            quotient.divide(&divisor, &mut remainder).unwrap();
            assert!(remainder < divisor);

            quotient.multiply(&divisor).unwrap();
            quotient.add(&remainder).unwrap();
            assert_eq!(quotient, dividend);
        }
    }
}

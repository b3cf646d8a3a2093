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

use super::significant_len;
use crate::{
    error::MagnitudeError,
    magnitude::Magnitude,
    word::{add_with_carry, mul_wide, Word, WORD_BYTES},
};

/// Schoolbook product of `a` and `b`, `a.len() + b.len()` words long.
fn mul_words(a: &[Word], b: &[Word]) -> Vec<Word> {
    let mut product = vec![0; a.len() + b.len()];

    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }

        let mut carry = 0;
        for (j, &y) in b.iter().enumerate() {
            let (low, high) = mul_wide(x, y);
            let (sum, c1) = add_with_carry(product[i + j], low, 0);
            let (sum, c2) = add_with_carry(sum, carry, 0);
            product[i + j] = sum;
            // x * y + product + carry fits in two words, so this cannot overflow.
            carry = high + c1 + c2;
        }
        product[i + b.len()] = carry;
    }

    product
}

impl Magnitude {
    /// Multiplies `self` by `factor`.
    ///
    /// `self` grows by as many words as the product needs beyond its current size. Nothing
    /// happens if either operand is uninitialized.
    pub fn multiply(&mut self, factor: &Magnitude) -> Result<(), MagnitudeError> {
        if !self.is_initialized() || !factor.is_initialized() {
            log::trace!("Multiplication with an uninitialized operand, nothing to do");
            return Ok(());
        }
        self.ensure_word_aligned()?;
        factor.ensure_word_aligned()?;

        let product = mul_words(&self.words(), &factor.words());
        let needed = significant_len(&product);

        if needed > self.word_count() {
            log::debug!(
                "Product needs {} words, growing from {}",
                needed,
                self.word_count()
            );
            self.extend((needed - self.word_count()) * WORD_BYTES)?;
        }

        self.write_words(&product[..needed]);
        Ok(())
    }
}

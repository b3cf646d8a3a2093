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

//! Arithmetic storing its result into the first operand.
//!
//! Each operation reads both operands into word vectors (least significant word first),
//! computes there, and only then writes back, growing the destination first if the result
//! needs more room. A failed allocation therefore never leaves a half-written result behind.

mod add;
mod div;
mod mul;
mod sub;

use std::cmp::Ordering;

use crate::word::Word;

/// Number of words up to and including the most significant non-zero one.
fn significant_len(words: &[Word]) -> usize {
    words.iter().rposition(|w| *w != 0).map_or(0, |i| i + 1)
}

/// Compares two word slices by value; their lengths may differ.
fn cmp_words(a: &[Word], b: &[Word]) -> Ordering {
    let len_a = significant_len(a);
    let len_b = significant_len(b);
    if len_a != len_b {
        return len_a.cmp(&len_b);
    }

    a[..len_a].iter().rev().cmp(b[..len_b].iter().rev())
}

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

pub mod random;

use std::ops::Range;

use rand::Rng;

/// Random big-endian byte string with a length drawn from `len_range`.
pub fn random_be_bytes(rng: &mut impl Rng, len_range: Range<usize>) -> Vec<u8> {
    if len_range.is_empty() {
        return Vec::new();
    }
    let len = rng.gen_range(len_range);
    (0..len).map(|_| rng.gen()).collect()
}

/// Random `u128` whose bit width is itself random, so small values show up as often as
/// large ones.
pub fn random_u128_any_width(rng: &mut impl Rng) -> u128 {
    rng.gen::<u128>() >> rng.gen_range(0..128)
}

/// Random `B`-tagged bit string with exactly `digit_count` digits.
pub fn random_bit_string(rng: &mut impl Rng, digit_count: usize) -> String {
    std::iter::once('B')
        .chain((0..digit_count).map(|_| if rng.gen::<bool>() { '1' } else { '0' }))
        .collect()
}

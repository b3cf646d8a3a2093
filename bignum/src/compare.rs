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

use crate::magnitude::Magnitude;

/// Three-way comparison of two values, independent of their buffer sizes.
///
/// An uninitialized magnitude is smaller than any initialized one, and two uninitialized
/// magnitudes are equal.
pub fn compare(a: &Magnitude, b: &Magnitude) -> Ordering {
    match (a.is_initialized(), b.is_initialized()) {
        (false, false) => return Ordering::Equal,
        (false, true) => return Ordering::Less,
        (true, false) => return Ordering::Greater,
        (true, true) => {}
    }

    // Leading zero bytes are skipped on each side separately, the buffers may differ in size.
    let len_a = a.significant_bytes();
    let len_b = b.significant_bytes();
    if len_a != len_b {
        return len_a.cmp(&len_b);
    }

    (0..len_a)
        .rev()
        .map(|i| a.byte_at(i).cmp(&b.byte_at(i)))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

impl Ord for Magnitude {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Magnitude {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other).is_eq()
    }
}

impl Eq for Magnitude {}

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

use crate::magnitude::Magnitude;

impl Magnitude {
    /// Reverses the byte order of the whole buffer in place.
    ///
    /// This flips between the two endian presentations of a buffer and therefore changes the
    /// represented value unless the caller built the buffer in the opposite convention.
    pub fn reverse(&mut self) {
        self.storage_mut().reverse();
    }
}

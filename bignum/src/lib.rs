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

//! Arbitrary-precision unsigned integers backed by a resizable byte buffer.
//!
//! [`Magnitude`] owns a buffer holding the value in host byte order, logically split into
//! native words. On top of it sit buffer lifecycle (allocate, extend, normalize, free), three
//! copy strategies, byte reversal, comparison, bit shifts and arithmetic. Every operation works
//! through the significance-indexed view in [`word`], so none of them depend on the host byte
//! order.
//!
//! Mutating operations return `Result<(), MagnitudeError>`. An uninitialized operand is not an
//! error: the operation simply does nothing.

mod arith;
mod compare;
mod copy;
mod error;
mod lifecycle;
mod magnitude;
mod reverse;
mod shift;
mod text;

pub mod word;

pub use compare::compare;
pub use error::{MagnitudeError, TextError};
pub use magnitude::Magnitude;
pub use word::{Word, WORD_BITS, WORD_BYTES};

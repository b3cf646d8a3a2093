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

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MagnitudeError {
    #[error("Failed to allocate a buffer of {requested} bytes")]
    AllocationFailure { requested: usize },
    #[error("Buffer size {size} is not a multiple of the word width")]
    MisalignedSize { size: usize },
    #[error("Subtraction result would be negative")]
    Underflow,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Invalid textual representation: {0}")]
    InvalidText(#[from] TextError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("Empty input")]
    Empty,
    #[error("Unknown representation tag '{0}'")]
    UnknownTag(char),
    #[error("No digits after the representation tag")]
    MissingDigits,
    #[error("Invalid digit '{digit}' at position {position}")]
    InvalidDigit { position: usize, digit: char },
}

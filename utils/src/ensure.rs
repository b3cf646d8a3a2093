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

//! Early exit from a function unless some condition holds.

/// Early exit if given condition is not satisfied.
///
/// There are two variants:
/// * `ensure!(cond)` returns from the enclosing function with [`None`] if `cond` fails
/// * `ensure!(cond, err)` returns from the function with [`Err`]`(err)` if `cond` fails
///
/// Example with [Option]:
/// ```
/// # use utils::ensure;
/// fn low_word(bytes: &[u8]) -> Option<u64> {
///     ensure!(bytes.len() >= 8);
///     Some(u64::from_le_bytes(bytes[..8].try_into().ok()?))
/// }
///
/// assert_eq!(low_word(&[1, 0, 0, 0, 0, 0, 0, 0, 9]), Some(1));
/// assert_eq!(low_word(&[1, 2, 3]), None);
/// ```
///
/// Example with [Result]:
/// ```
/// # use utils::ensure;
/// # #[derive(PartialEq, Eq, Debug)]
/// enum WidthError {
///     Empty,
///     Misaligned(usize),
/// }
///
/// fn word_count(size: usize) -> Result<usize, WidthError> {
///     ensure!(size != 0, WidthError::Empty);
///     ensure!(size % 8 == 0, WidthError::Misaligned(size));
///     Ok(size / 8)
/// }
///
/// assert_eq!(word_count(16), Ok(2));
/// assert_eq!(word_count(0), Err(WidthError::Empty));
/// assert_eq!(word_count(12), Err(WidthError::Misaligned(12)));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr $(,)?) => {
        $cond.then_some(())?
    };
    ($cond:expr, $err:expr $(,)?) => {
        $cond.then_some(()).ok_or_else(|| $err)?
    };
}

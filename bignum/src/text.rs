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

//! Textual input and output.
//!
//! The input format is a one-character tag followed by digits, most significant first. Only
//! the `B` tag (binary digits) is recognized.

use std::{fmt, str::FromStr};

use crate::{
    error::{MagnitudeError, TextError},
    magnitude::Magnitude,
    word::{Word, WORD_BITS, WORD_BYTES},
};

const BIT_STRING_TAG: char = 'B';

impl Magnitude {
    /// Parses a tagged textual representation such as `B1011`.
    ///
    /// The buffer is sized to the smallest whole number of words (at least one) that holds
    /// every digit, leading zero digits included.
    pub fn init_from_text(text: &str) -> Result<Magnitude, MagnitudeError> {
        let mut chars = text.chars();
        let tag = chars.next().ok_or(TextError::Empty)?;
        if tag != BIT_STRING_TAG {
            return Err(TextError::UnknownTag(tag).into());
        }

        let digits = chars.as_str();
        if digits.is_empty() {
            return Err(TextError::MissingDigits.into());
        }

        let word_count = digits.len().div_ceil(WORD_BITS as usize).max(1);
        let mut words: Vec<Word> = vec![0; word_count];

        for (position, digit) in digits.chars().enumerate() {
            let bit = digits.len() - 1 - position;
            match digit {
                '0' => {}
                '1' => words[bit / WORD_BITS as usize] |= 1 << (bit % WORD_BITS as usize),
                _ => {
                    return Err(TextError::InvalidDigit {
                        position: position + 1,
                        digit,
                    }
                    .into())
                }
            }
        }

        let mut magnitude = Magnitude::init(word_count * WORD_BYTES)?;
        magnitude.write_words(&words);
        Ok(magnitude)
    }

    /// The `B`-tagged binary representation accepted by [`Magnitude::init_from_text`], without
    /// leading zero digits. `None` for an uninitialized magnitude.
    pub fn to_text(&self) -> Option<String> {
        self.is_initialized().then(|| format!("{BIT_STRING_TAG}{self:b}"))
    }
}

impl FromStr for Magnitude {
    type Err = MagnitudeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Magnitude::init_from_text(s)
    }
}

const UNINITIALIZED: &str = "<uninitialized>";

impl fmt::LowerHex for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_initialized() {
            return f.write_str(UNINITIALIZED);
        }

        let bytes = self.to_be_bytes();
        let digits = match bytes.split_first() {
            None => "0".to_owned(),
            Some((first, rest)) => rest.iter().fold(format!("{first:x}"), |mut acc, byte| {
                acc.push_str(&format!("{byte:02x}"));
                acc
            }),
        };

        f.pad_integral(true, "0x", &digits)
    }
}

impl fmt::Binary for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_initialized() {
            return f.write_str(UNINITIALIZED);
        }

        let bytes = self.to_be_bytes();
        let digits = match bytes.split_first() {
            None => "0".to_owned(),
            Some((first, rest)) => rest.iter().fold(format!("{first:b}"), |mut acc, byte| {
                acc.push_str(&format!("{byte:08b}"));
                acc
            }),
        };

        f.pad_integral(true, "0b", &digits)
    }
}

/// Hexadecimal with a `0x` prefix, most significant digit first.
impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_initialized() {
            return f.write_str(UNINITIALIZED);
        }
        write!(f, "{self:#x}")
    }
}

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

use utils::ensure;

use crate::{
    error::MagnitudeError,
    word::{byte_index, load_word, store_word, Word, WORD_BYTES},
};

/// An unsigned arbitrary-precision integer stored in an exclusively owned byte buffer.
///
/// The buffer holds the value in host byte order (see [`crate::word`]). A magnitude with an
/// empty buffer is the uninitialized state; most operations treat it as an absent argument
/// and do nothing.
///
/// Equality and ordering compare values, not buffers: a 4-byte zero equals a 16-byte zero.
#[derive(Debug, Clone, Default)]
pub struct Magnitude {
    storage: Vec<u8>,
}

/// Allocates a zero-filled buffer, reporting failure instead of aborting.
pub(crate) fn allocate_zeroed(size: usize) -> Result<Vec<u8>, MagnitudeError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(size)
        .map_err(|_| MagnitudeError::AllocationFailure { requested: size })?;
    buf.resize(size, 0);
    Ok(buf)
}

impl Magnitude {
    /// The uninitialized magnitude.
    pub const fn empty() -> Self {
        Self {
            storage: Vec::new(),
        }
    }

    /// Allocates a zero-valued magnitude of `size_bytes` bytes.
    ///
    /// A size of zero yields the uninitialized magnitude.
    pub fn init(size_bytes: usize) -> Result<Self, MagnitudeError> {
        Ok(Self {
            storage: allocate_zeroed(size_bytes)?,
        })
    }

    pub fn from_u128(value: u128) -> Self {
        Self {
            storage: value.to_ne_bytes().to_vec(),
        }
    }

    /// Builds a magnitude from big-endian bytes, sized to the smallest whole number of words
    /// (at least one) that holds them.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let words = bytes.len().div_ceil(WORD_BYTES).max(1);
        let mut storage = vec![0u8; words * WORD_BYTES];
        let len = storage.len();

        for (i, byte) in bytes.iter().rev().enumerate() {
            storage[byte_index(len, i)] = *byte;
        }

        Self { storage }
    }

    /// The value as a `u128`, or `None` if it is uninitialized or does not fit.
    pub fn to_u128(&self) -> Option<u128> {
        if !self.is_initialized() {
            return None;
        }

        let significant = self.significant_bytes();
        ensure!(significant <= std::mem::size_of::<u128>());

        Some(
            (0..significant)
                .rev()
                .fold(0u128, |acc, i| (acc << 8) | self.byte_at(i) as u128),
        )
    }

    /// Big-endian bytes of the significant part of the value; empty for zero.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        (0..self.significant_bytes()).rev().map(|i| self.byte_at(i)).collect()
    }

    pub fn is_initialized(&self) -> bool {
        !self.storage.is_empty()
    }

    /// Buffer length in bytes.
    pub fn size(&self) -> usize {
        self.storage.len()
    }

    pub fn word_count(&self) -> usize {
        self.storage.len() / WORD_BYTES
    }

    /// Raw buffer in host byte order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage
    }

    /// True when every byte is zero, including the uninitialized case.
    pub fn is_zero(&self) -> bool {
        self.storage.iter().all(|b| *b == 0)
    }

    /// Byte with significance `i`, 0 being the least significant.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.size()`.
    pub fn byte_at(&self, i: usize) -> u8 {
        self.storage[byte_index(self.storage.len(), i)]
    }

    /// Word with significance `i`, 0 being the least significant.
    ///
    /// # Panics
    ///
    /// Panics if the word lies outside the buffer, i.e. `i >= self.word_count()`, or if the
    /// size is not a multiple of [`WORD_BYTES`] and the word would straddle the buffer end.
    pub fn word_at(&self, i: usize) -> Word {
        load_word(&self.storage, i)
    }

    /// Overwrites the word with significance `i`.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Magnitude::word_at`].
    pub fn set_word_at(&mut self, i: usize, value: Word) {
        store_word(&mut self.storage, i, value)
    }

    /// All words, least significant first.
    pub fn words(&self) -> Vec<Word> {
        (0..self.word_count()).map(|i| self.word_at(i)).collect()
    }

    /// Number of bytes up to and including the most significant non-zero byte.
    pub fn significant_bytes(&self) -> usize {
        (0..self.size()).rev().find(|i| self.byte_at(*i) != 0).map_or(0, |i| i + 1)
    }

    /// Number of words up to and including the most significant non-zero word.
    pub fn significant_words(&self) -> usize {
        (0..self.word_count()).rev().find(|i| self.word_at(*i) != 0).map_or(0, |i| i + 1)
    }

    /// Overwrites the value with `words` (least significant first), zeroing the words above.
    pub(crate) fn write_words(&mut self, words: &[Word]) {
        debug_assert!(words.len() <= self.word_count());

        for i in 0..self.word_count() {
            self.set_word_at(i, words.get(i).copied().unwrap_or(0));
        }
    }

    pub(crate) fn storage_mut(&mut self) -> &mut [u8] {
        &mut self.storage
    }

    /// Adopts `storage` as the new buffer, dropping the old one.
    pub(crate) fn replace_storage(&mut self, storage: Vec<u8>) {
        self.storage = storage;
    }

    pub(crate) fn ensure_word_aligned(&self) -> Result<(), MagnitudeError> {
        ensure!(
            self.storage.len() % WORD_BYTES == 0,
            MagnitudeError::MisalignedSize {
                size: self.storage.len()
            }
        );
        Ok(())
    }
}

impl From<u128> for Magnitude {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

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

//! Significance-indexed view over a native-order byte buffer.
//!
//! A magnitude buffer holds the whole integer in host byte order: on little-endian hosts the
//! least significant byte comes first, on big-endian hosts it comes last. Everything in this
//! module takes an index by significance (0 is always the least significant byte or word) and
//! maps it to a buffer offset, so the rest of the crate never branches on endianness.

use std::ops::Range;

use static_assertions::const_assert;

/// The native arithmetic unit.
pub type Word = usize;

pub const WORD_BYTES: usize = std::mem::size_of::<Word>();
pub const WORD_BITS: u32 = Word::BITS;
pub const HALF_WORD_BITS: u32 = WORD_BITS / 2;
pub const LOW_HALF_MASK: Word = Word::MAX >> HALF_WORD_BITS;

const_assert!(WORD_BITS % 2 == 0);
const_assert!(WORD_BYTES * 8 == WORD_BITS as usize);

const LITTLE_ENDIAN_HOST: bool = cfg!(target_endian = "little");

/// Buffer offset of the byte with significance `i` in a buffer of `len` bytes.
#[inline]
pub fn byte_index(len: usize, i: usize) -> usize {
    debug_assert!(i < len);
    if LITTLE_ENDIAN_HOST {
        i
    } else {
        len - 1 - i
    }
}

/// Buffer range of the word with significance `i` in a buffer of `len` bytes.
#[inline]
pub fn word_range(len: usize, i: usize) -> Range<usize> {
    debug_assert!((i + 1) * WORD_BYTES <= len);
    if LITTLE_ENDIAN_HOST {
        i * WORD_BYTES..(i + 1) * WORD_BYTES
    } else {
        len - (i + 1) * WORD_BYTES..len - i * WORD_BYTES
    }
}

#[inline]
pub fn load_word(buf: &[u8], i: usize) -> Word {
    let mut bytes = [0u8; WORD_BYTES];
    bytes.copy_from_slice(&buf[word_range(buf.len(), i)]);
    Word::from_ne_bytes(bytes)
}

#[inline]
pub fn store_word(buf: &mut [u8], i: usize, value: Word) {
    let range = word_range(buf.len(), i);
    buf[range].copy_from_slice(&value.to_ne_bytes());
}

/// The `n` least significant bytes of `buf`.
pub fn low_bytes(buf: &[u8], n: usize) -> &[u8] {
    if LITTLE_ENDIAN_HOST {
        &buf[..n]
    } else {
        &buf[buf.len() - n..]
    }
}

/// Splits `buf` into its `n` least significant bytes and everything above them.
pub fn split_low_mut(buf: &mut [u8], n: usize) -> (&mut [u8], &mut [u8]) {
    if LITTLE_ENDIAN_HOST {
        buf.split_at_mut(n)
    } else {
        let at = buf.len() - n;
        let (high, low) = buf.split_at_mut(at);
        (low, high)
    }
}

/// Moves the contents `n` bytes towards the most significant end.
///
/// Bytes pushed past the most significant end are lost, the vacated low bytes are zeroed.
pub fn raise_bytes(buf: &mut [u8], n: usize) {
    let len = buf.len();
    if n >= len {
        buf.fill(0);
        return;
    }

    if LITTLE_ENDIAN_HOST {
        buf.copy_within(0..len - n, n);
        buf[..n].fill(0);
    } else {
        buf.copy_within(n..len, 0);
        buf[len - n..].fill(0);
    }
}

/// Moves the contents `n` bytes towards the least significant end.
///
/// Bytes pushed past the least significant end are lost, the vacated high bytes are zeroed.
pub fn lower_bytes(buf: &mut [u8], n: usize) {
    let len = buf.len();
    if n >= len {
        buf.fill(0);
        return;
    }

    if LITTLE_ENDIAN_HOST {
        buf.copy_within(n..len, 0);
        buf[len - n..].fill(0);
    } else {
        buf.copy_within(0..len - n, n);
        buf[..n].fill(0);
    }
}

/// Adds two words and an incoming carry of 0 or 1, returning the sum and the outgoing carry.
///
/// The addition is split into half words so that no intermediate value exceeds the native
/// width; the carry out of the low half feeds the high half.
#[inline]
pub fn add_with_carry(a: Word, b: Word, carry: Word) -> (Word, Word) {
    debug_assert!(carry <= 1);

    let low = (a & LOW_HALF_MASK) + (b & LOW_HALF_MASK) + carry;
    let carry = low >> HALF_WORD_BITS;

    let high = (a >> HALF_WORD_BITS) + (b >> HALF_WORD_BITS) + carry;
    let carry = high >> HALF_WORD_BITS;

    ((high << HALF_WORD_BITS) | (low & LOW_HALF_MASK), carry)
}

/// Subtracts `b` and an incoming borrow of 0 or 1 from `a`, returning the difference and the
/// outgoing borrow.
#[inline]
pub fn sub_with_borrow(a: Word, b: Word, borrow: Word) -> (Word, Word) {
    debug_assert!(borrow <= 1);

    // Each half borrows one unit of the next half up front, which keeps the difference
    // non-negative; the top bit tells whether that unit was actually needed.
    let base = LOW_HALF_MASK + 1;

    let low = base + (a & LOW_HALF_MASK) - (b & LOW_HALF_MASK) - borrow;
    let borrow = 1 - (low >> HALF_WORD_BITS);

    let high = base + (a >> HALF_WORD_BITS) - (b >> HALF_WORD_BITS) - borrow;
    let borrow = 1 - (high >> HALF_WORD_BITS);

    (
        ((high & LOW_HALF_MASK) << HALF_WORD_BITS) | (low & LOW_HALF_MASK),
        borrow,
    )
}

/// Full product of two words as a `(low, high)` pair.
#[inline]
pub fn mul_wide(a: Word, b: Word) -> (Word, Word) {
    let (a0, a1) = (a & LOW_HALF_MASK, a >> HALF_WORD_BITS);
    let (b0, b1) = (b & LOW_HALF_MASK, b >> HALF_WORD_BITS);

    let p00 = a0 * b0;
    let p01 = a0 * b1;
    let p10 = a1 * b0;
    let p11 = a1 * b1;

    let middle = (p00 >> HALF_WORD_BITS) + (p01 & LOW_HALF_MASK) + (p10 & LOW_HALF_MASK);

    let low = (p00 & LOW_HALF_MASK) | (middle << HALF_WORD_BITS);
    let high = p11 + (p01 >> HALF_WORD_BITS) + (p10 >> HALF_WORD_BITS) + (middle >> HALF_WORD_BITS);

    (low, high)
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Big-endian load/store primitives for hash state words.
//!
//! Converts between byte buffers and arrays of `u32`/`u64` words, most
//! significant byte first, independently of the host byte order.
//!
//! Two layers:
//! - single-word conversions (`u32_from_be`, `u32_to_be`, ...) that zeroize
//!   their source after reading, so no copy of the value lingers on the stack
//! - slice conversions (`u32s_from_be_bytes`, `u32s_to_be_bytes`, ...) that
//!   check the length contract and are built on the single-word layer
//!
//! References:
//! - FIPS 180-4, Section 3.1 (big-endian word convention)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "test-utils")]
extern crate alloc;

#[cfg(test)]
mod tests;

mod error;

#[cfg(feature = "test-utils")]
mod test_utils;

use zeroize::Zeroize;

pub use error::LoadStoreError;

#[cfg(feature = "test-utils")]
pub use test_utils::hex_to_bytes;

#[inline(always)]
fn check_lengths(words: usize, bytes: usize, word_size: usize) -> Result<(), LoadStoreError> {
    if bytes % word_size != 0 {
        return Err(LoadStoreError::Misaligned {
            len: bytes,
            word_size,
        });
    }

    if words != bytes / word_size {
        return Err(LoadStoreError::LengthMismatch {
            words,
            bytes,
            word_size,
        });
    }

    Ok(())
}

/// Generates the single-word and slice big-endian conversions for one word type.
macro_rules! impl_be_conversions {
    ($type:ty, $size:expr, $fn_from:ident, $fn_to:ident, $fn_from_slice:ident, $fn_to_slice:ident) => {
        #[doc = concat!("Converts ", stringify!($size), " big-endian bytes to a `", stringify!($type), "`, zeroizing the source bytes.")]
        ///
        /// The word is accumulated with shifts, most significant byte first,
        /// and each source byte is cleared right after it is read.
        #[inline(always)]
        pub fn $fn_from(dst: &mut $type, bytes: &mut [u8; $size]) {
            *dst = 0;
            for byte in bytes.iter_mut() {
                *dst = (*dst << 8) | (*byte as $type);
                *byte = 0;
            }
        }

        #[doc = concat!("Converts a `", stringify!($type), "` to big-endian bytes, zeroizing the source.")]
        #[inline(always)]
        pub fn $fn_to(src: &mut $type, bytes: &mut [u8; $size]) {
            for (i, byte) in bytes.iter_mut().enumerate() {
                *byte = (*src >> (8 * ($size - 1 - i))) as u8;
            }
            *src = 0;
        }

        #[doc = concat!("Loads big-endian bytes into `", stringify!($type), "` words.")]
        ///
        #[doc = concat!("`input.len()` must be a multiple of ", stringify!($size), " and `output` must hold exactly `input.len() / ", stringify!($size), "` words.")]
        ///
        /// # Errors
        ///
        /// [`LoadStoreError::Misaligned`] or [`LoadStoreError::LengthMismatch`]
        /// when the length contract is broken. `output` is left untouched.
        pub fn $fn_from_slice(output: &mut [$type], input: &[u8]) -> Result<(), LoadStoreError> {
            check_lengths(output.len(), input.len(), $size)?;

            let mut tmp = [0u8; $size];
            for (word, chunk) in output.iter_mut().zip(input.chunks_exact($size)) {
                tmp.copy_from_slice(chunk);
                $fn_from(word, &mut tmp);
            }

            Ok(())
        }

        #[doc = concat!("Stores `", stringify!($type), "` words as big-endian bytes.")]
        ///
        #[doc = concat!("`output.len()` must be a multiple of ", stringify!($size), " and `input` must hold exactly `output.len() / ", stringify!($size), "` words.")]
        ///
        /// # Errors
        ///
        /// [`LoadStoreError::Misaligned`] or [`LoadStoreError::LengthMismatch`]
        /// when the length contract is broken. `output` is left untouched.
        pub fn $fn_to_slice(output: &mut [u8], input: &[$type]) -> Result<(), LoadStoreError> {
            check_lengths(input.len(), output.len(), $size)?;

            let mut tmp = [0u8; $size];
            for (chunk, word) in output.chunks_exact_mut($size).zip(input.iter()) {
                let mut value = *word;
                $fn_to(&mut value, &mut tmp);
                chunk.copy_from_slice(&tmp);
            }
            tmp.zeroize();

            Ok(())
        }
    };
}

impl_be_conversions!(
    u32,
    4,
    u32_from_be,
    u32_to_be,
    u32s_from_be_bytes,
    u32s_to_be_bytes
);
impl_be_conversions!(
    u64,
    8,
    u64_from_be,
    u64_to_be,
    u64s_from_be_bytes,
    u64s_to_be_bytes
);

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Load/store error.
///
/// Every variant is a caller contract violation. When one is returned,
/// the output buffer has not been touched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStoreError {
    /// Byte length is not a multiple of the word size
    #[error("byte length {len} is not a multiple of the word size ({word_size})")]
    Misaligned {
        /// Byte length that was supplied.
        len: usize,
        /// Word size in bytes (4 or 8).
        word_size: usize,
    },

    /// Word slice does not hold exactly `bytes / word_size` words
    #[error("LengthMismatch[{words} words for {bytes} bytes of {word_size}-byte words]")]
    LengthMismatch {
        /// Number of words in the word slice.
        words: usize,
        /// Number of bytes in the byte slice.
        bytes: usize,
        /// Word size in bytes (4 or 8).
        word_size: usize,
    },
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use bulwark_loadstore::LoadStoreError;
use thiserror::Error;

/// SHA-256 engine error.
///
/// Every variant is a caller contract violation. An operation that returns
/// an error has not folded any input into the chaining value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sha256Error {
    /// Input length does not match the block-aligned length the operation requires
    #[error("input length mismatch: expected {expected} bytes, got {got}")]
    BlockLength {
        /// Required length in bytes.
        expected: usize,
        /// Supplied length in bytes.
        got: usize,
    },

    /// State was zeroized and not re-initialized
    #[error("state used before init")]
    Uninitialized,

    /// `update_last` already ran; only `finish` is allowed
    #[error("final block already padded; only finish is allowed")]
    AlreadyPadded,

    /// `finish` called before `update_last`
    #[error("finish called before update_last")]
    NotPadded,

    /// State already produced its digest; call `init` to start a new message
    #[error("state already finished; call init to start a new message")]
    Finished,

    /// Total message length would overflow the 64-bit bit-length field
    #[error("total message length exceeds 2^61 - 1 bytes")]
    LengthOverflow,

    /// Word/byte conversion contract broken
    #[error("LoadStoreError: {0}")]
    LoadStore(#[from] LoadStoreError),
}

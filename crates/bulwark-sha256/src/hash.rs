// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::consts::{SIZE_BLOCK, SIZE_HASH};
use crate::error::Sha256Error;
use crate::state::Sha256State;

/// SHA-256 of a complete message.
///
/// Runs `init`, `update_multi` over the whole blocks of `input`,
/// `update_last` over the rest and `finish`, exactly as an incremental
/// caller would.
///
/// # Panics
///
/// Panics if `input` is 2^61 bytes or longer, which no addressable slice
/// reaches in practice.
pub fn hash(out: &mut [u8; SIZE_HASH], input: &[u8]) {
    if let Err(err) = hash_fresh(out, input) {
        panic!("SHA-256 contract violation on a fresh state: {err}");
    }
}

fn hash_fresh(out: &mut [u8; SIZE_HASH], input: &[u8]) -> Result<(), Sha256Error> {
    let mut state = Sha256State::new();

    let n_blocks = input.len() / SIZE_BLOCK;
    let (blocks, tail) = input.split_at(n_blocks * SIZE_BLOCK);

    state.update_multi(blocks, n_blocks)?;
    state.update_last(tail)?;
    state.finish(out)
}

/// [`hash`] returning the digest by value.
///
/// # Example
///
/// ```
/// let digest = bulwark_sha256::sha256(b"abc");
/// assert_eq!(digest[..4], [0xba, 0x78, 0x16, 0xbf]);
/// ```
pub fn sha256(input: &[u8]) -> [u8; SIZE_HASH] {
    let mut out = [0u8; SIZE_HASH];
    hash(&mut out, input);
    out
}

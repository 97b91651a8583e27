// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Reference helpers built only on the bare compression function

use crate::compress::compress_block;
use crate::consts::{H0, SIZE_BLOCK, SIZE_HASH};

/// Pads `msg` per FIPS 180-4 Section 5.1.1 in one go.
pub(crate) fn reference_padding(msg: &[u8]) -> Vec<u8> {
    let mut padded = msg.to_vec();
    padded.push(0x80);
    while padded.len() % SIZE_BLOCK != SIZE_BLOCK - 8 {
        padded.push(0);
    }
    padded.extend_from_slice(&((msg.len() as u64) * 8).to_be_bytes());
    padded
}

/// Digest computed block by block from H(0) over `reference_padding(msg)`.
pub(crate) fn reference_digest(msg: &[u8]) -> [u8; SIZE_HASH] {
    let mut h = H0;
    for chunk in reference_padding(msg).chunks_exact(SIZE_BLOCK) {
        let block: [u8; SIZE_BLOCK] = chunk.try_into().expect("chunk is one block");
        compress_block(&mut h, &block);
    }

    let mut out = [0u8; SIZE_HASH];
    for (dst, word) in out.chunks_exact_mut(4).zip(h.iter()) {
        dst.copy_from_slice(&word.to_be_bytes());
    }
    out
}

/// Deterministic, non-repeating test message.
pub(crate) fn message(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 + 13) as u8).collect()
}

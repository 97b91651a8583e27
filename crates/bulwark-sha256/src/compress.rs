// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 compression function per RFC 6234 Section 6.2.2

use bulwark_loadstore::u32_from_be;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{K256, SIZE_BLOCK};
use crate::word32::{bsig0, bsig1, ch, maj, ssig0, ssig1};

/// Scratch space for one compression.
///
/// All working values live here so they can be wiped after every block
/// instead of lingering on the stack.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct Compressor {
    // Message schedule W[0..63]
    w: [u32; 64],

    // Working variables a..h
    wv: [u32; 8],

    // Temporaries
    t1: u32,
    t2: u32,
    tmp_word: [u8; 4],
}

impl Compressor {
    pub(crate) const fn new() -> Self {
        Self {
            w: [0; 64],
            wv: [0; 8],
            t1: 0,
            t2: 0,
            tmp_word: [0; 4],
        }
    }

    /// Folds one block into the chaining value `h`.
    ///
    /// `block` is exactly [`SIZE_BLOCK`] bytes; callers slice it with
    /// `chunks_exact(SIZE_BLOCK)` or pass a fixed-size array.
    pub(crate) fn compress(&mut self, h: &mut [u32; 8], block: &[u8]) {
        debug_assert_eq!(block.len(), SIZE_BLOCK);

        // Step 1: W[0..15] from block (big-endian)
        for (wt, chunk) in self.w.iter_mut().zip(block.chunks_exact(4)) {
            self.tmp_word.copy_from_slice(chunk);
            u32_from_be(wt, &mut self.tmp_word);
        }

        // W[16..63]: W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
        for t in 16..64 {
            self.w[t] = ssig1(self.w[t - 2])
                .wrapping_add(self.w[t - 7])
                .wrapping_add(ssig0(self.w[t - 15]))
                .wrapping_add(self.w[t - 16]);
        }

        // Step 2: working variables from H(i-1)
        self.wv.copy_from_slice(h);

        // Step 3: 64 rounds
        for (k, wt) in K256.iter().zip(self.w.iter()) {
            let [a, b, c, _, e, f, g, hh] = self.wv;

            // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
            self.t1 = hh
                .wrapping_add(bsig1(e))
                .wrapping_add(ch(e, f, g))
                .wrapping_add(*k)
                .wrapping_add(*wt);

            // T2 = Σ0(a) + Maj(a,b,c)
            self.t2 = bsig0(a).wrapping_add(maj(a, b, c));

            // h=g, g=f, f=e, e=d+T1, d=c, c=b, b=a, a=T1+T2
            self.wv.rotate_right(1);
            self.wv[4] = self.wv[4].wrapping_add(self.t1);
            self.wv[0] = self.t1.wrapping_add(self.t2);
        }

        // Step 4: H(i) = H(i-1) + working variables
        for (hi, vi) in h.iter_mut().zip(self.wv.iter()) {
            *hi = hi.wrapping_add(*vi);
        }

        self.zeroize();
    }
}

/// SHA-256 compression function (single block).
///
/// Updates the chaining value `h` with one 512-bit message block. No
/// padding and no length accounting: callers that need a full digest use
/// [`Sha256State`](crate::Sha256State) or [`hash`](crate::hash).
///
/// # Arguments
/// * `h` - Chaining value (8 × u32, input/output)
/// * `block` - Message block (64 bytes)
pub fn compress_block(h: &mut [u32; 8], block: &[u8; SIZE_BLOCK]) {
    let mut compressor = Compressor::new();
    compressor.compress(h, block);
}

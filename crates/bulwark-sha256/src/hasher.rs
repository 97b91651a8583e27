// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming SHA-256 over arbitrary-length chunks.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{SIZE_BLOCK, SIZE_HASH};
use crate::error::Sha256Error;
use crate::state::Sha256State;

/// Streaming SHA-256 hasher.
///
/// Buffers a partial block between calls and drives a [`Sha256State`]
/// with whole blocks; the buffered tail goes to `update_last` on finalize.
///
/// # Example
///
/// ```
/// use bulwark_sha256::Sha256;
///
/// let mut hasher = Sha256::new();
/// hasher.update(b"a").unwrap();
/// hasher.update(b"bc").unwrap();
///
/// assert_eq!(hasher.finalize().unwrap(), bulwark_sha256::sha256(b"abc"));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Sha256 {
    state: Sha256State,

    // Input buffering
    buffer: [u8; SIZE_BLOCK],
    buffer_len: usize,
}

impl Sha256 {
    /// Creates a hasher for a new message.
    pub fn new() -> Self {
        Self {
            state: Sha256State::new(),
            buffer: [0; SIZE_BLOCK],
            buffer_len: 0,
        }
    }

    /// Absorbs `data`.
    ///
    /// # Errors
    ///
    /// [`Sha256Error::LengthOverflow`] if the message would exceed 2^61 - 1
    /// bytes, or [`Sha256Error::Uninitialized`] after an explicit `zeroize()`.
    /// Nothing is absorbed on error.
    pub fn update(&mut self, data: &[u8]) -> Result<(), Sha256Error> {
        self.state.ensure_ready()?;
        let pending = self
            .buffer_len
            .checked_add(data.len())
            .ok_or(Sha256Error::LengthOverflow)?;
        self.state.ensure_capacity(pending)?;

        let mut data = data;

        // Fill buffer if partially filled
        if self.buffer_len > 0 {
            let copy_len = core::cmp::min(SIZE_BLOCK - self.buffer_len, data.len());
            self.buffer[self.buffer_len..self.buffer_len + copy_len]
                .copy_from_slice(&data[..copy_len]);
            self.buffer_len += copy_len;
            data = &data[copy_len..];

            if self.buffer_len < SIZE_BLOCK {
                return Ok(());
            }

            self.state.update(&self.buffer)?;
            self.buffer.zeroize();
            self.buffer_len = 0;
        }

        // Process full blocks
        let n_blocks = data.len() / SIZE_BLOCK;
        let (blocks, rest) = data.split_at(n_blocks * SIZE_BLOCK);
        self.state.update_multi(blocks, n_blocks)?;

        // Buffer remaining
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();

        Ok(())
    }

    /// Writes the digest to `out` and resets the hasher for a new message.
    ///
    /// # Errors
    ///
    /// [`Sha256Error::Uninitialized`] after an explicit `zeroize()`.
    pub fn finalize_into(&mut self, out: &mut [u8; SIZE_HASH]) -> Result<(), Sha256Error> {
        self.state.update_last(&self.buffer[..self.buffer_len])?;
        self.state.finish(out)?;
        self.reset();

        Ok(())
    }

    /// Consumes the hasher and returns the digest.
    ///
    /// # Errors
    ///
    /// See [`finalize_into`](Self::finalize_into).
    pub fn finalize(mut self) -> Result<[u8; SIZE_HASH], Sha256Error> {
        let mut out = [0u8; SIZE_HASH];
        self.finalize_into(&mut out)?;
        Ok(out)
    }

    /// Discards buffered input and restarts at H(0).
    pub fn reset(&mut self) {
        self.state.init();
        self.buffer.zeroize();
        self.buffer_len = 0;
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

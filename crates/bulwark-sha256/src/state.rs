// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 incremental state machine per RFC 6234 Section 6.2
//!
//! ```text
//! Uninitialized --init--> Ready --update/update_multi--> Ready
//!                         Ready --update_last--> Padded --finish--> Finished
//! ```
//!
//! `init` is accepted from every phase and restarts the message.

use bulwark_loadstore::{u32s_to_be_bytes, u64_to_be};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::compress::Compressor;
use crate::consts::{H0, MAX_MESSAGE_LEN, SIZE_BLOCK, SIZE_HASH};
use crate::error::Sha256Error;

/// Room needed after the message tail: the `0x80` marker plus the 64-bit length
const PADDING_MIN: usize = 1 + 8;

/// Lifecycle position of a [`Sha256State`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Zeroized; must be initialized before use.
    Uninitialized,
    /// Accepting full blocks.
    Ready,
    /// Final padded block(s) folded in; waiting for `finish`.
    Padded,
    /// Digest produced; terminal until the next `init`.
    Finished,
}

/// SHA-256 hash state.
///
/// Owned by the caller and mutated in place through `&mut`. Holds the
/// chaining value, the compression scratch space and the running byte
/// count; see [`SIZE_STATE`](crate::SIZE_STATE) for the word layout.
/// Everything is zeroized on drop.
///
/// # Example
///
/// ```
/// use bulwark_sha256::{SIZE_BLOCK, SIZE_HASH, Sha256State};
///
/// let message = [0x61u8; 100];
/// let (blocks, tail) = message.split_at(SIZE_BLOCK);
///
/// let mut state = Sha256State::new();
/// state.update_multi(blocks, 1).unwrap();
/// state.update_last(tail).unwrap();
///
/// let mut digest = [0u8; SIZE_HASH];
/// state.finish(&mut digest).unwrap();
///
/// assert_eq!(digest, bulwark_sha256::sha256(&message));
/// ```
pub struct Sha256State {
    // Hash state H(i) per RFC 6234 Section 6.2.1
    h: [u32; 8],

    // Compression scratch (schedule, working variables)
    core: Compressor,

    // Final one or two blocks assembled by update_last
    pad: [u8; 2 * SIZE_BLOCK],

    // Bytes folded in so far
    total_len: u64,

    phase: Phase,
}

impl Sha256State {
    /// Creates a state in [`Phase::Ready`], equivalent to allocating and calling [`init`](Self::init).
    pub fn new() -> Self {
        let mut state = Self {
            h: [0; 8],
            core: Compressor::new(),
            pad: [0; 2 * SIZE_BLOCK],
            total_len: 0,
            phase: Phase::Uninitialized,
        };
        state.init();
        state
    }

    /// Resets to H(0) with a zero byte counter. Valid from any phase.
    pub fn init(&mut self) {
        self.zeroize();
        self.h = H0;
        self.phase = Phase::Ready;
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of message bytes folded into the chaining value so far.
    pub fn bytes_processed(&self) -> u64 {
        self.total_len
    }

    /// Folds exactly one block into the chaining value.
    ///
    /// # Errors
    ///
    /// Phase errors ([`Sha256Error::Uninitialized`], [`Sha256Error::AlreadyPadded`],
    /// [`Sha256Error::Finished`]) and [`Sha256Error::LengthOverflow`].
    pub fn update(&mut self, block: &[u8; SIZE_BLOCK]) -> Result<(), Sha256Error> {
        self.ensure_ready()?;
        let total = self.advanced_len(SIZE_BLOCK)?;

        self.core.compress(&mut self.h, block);
        self.total_len = total;

        Ok(())
    }

    /// [`update`](Self::update) for callers holding a slice.
    ///
    /// # Errors
    ///
    /// [`Sha256Error::BlockLength`] unless `block.len() == SIZE_BLOCK`, plus the
    /// errors of [`update`](Self::update).
    pub fn update_slice(&mut self, block: &[u8]) -> Result<(), Sha256Error> {
        let block: &[u8; SIZE_BLOCK] =
            block.try_into().map_err(|_| Sha256Error::BlockLength {
                expected: SIZE_BLOCK,
                got: block.len(),
            })?;

        self.update(block)
    }

    /// Folds `n_blocks` contiguous blocks, in order.
    ///
    /// # Errors
    ///
    /// [`Sha256Error::BlockLength`] unless `data.len() == n_blocks * SIZE_BLOCK`,
    /// plus the errors of [`update`](Self::update). Nothing is consumed on error.
    pub fn update_multi(&mut self, data: &[u8], n_blocks: usize) -> Result<(), Sha256Error> {
        self.ensure_ready()?;

        let expected = n_blocks
            .checked_mul(SIZE_BLOCK)
            .ok_or(Sha256Error::LengthOverflow)?;
        if data.len() != expected {
            return Err(Sha256Error::BlockLength {
                expected,
                got: data.len(),
            });
        }

        let total = self.advanced_len(data.len())?;

        for block in data.chunks_exact(SIZE_BLOCK) {
            self.core.compress(&mut self.h, block);
        }
        self.total_len = total;

        Ok(())
    }

    /// Folds the final fragment and the padding per RFC 6234 Section 4.1.
    ///
    /// Any length is accepted: whole blocks at the front of `data` are
    /// compressed first, then the remaining tail (shorter than a block) is
    /// followed by `0x80`, zeros and the 64-bit big-endian message bit length.
    ///
    /// # Errors
    ///
    /// Phase errors and [`Sha256Error::LengthOverflow`].
    pub fn update_last(&mut self, data: &[u8]) -> Result<(), Sha256Error> {
        self.ensure_ready()?;
        let total = self.advanced_len(data.len())?;

        let (blocks, tail) = data.split_at(data.len() - data.len() % SIZE_BLOCK);
        for block in blocks.chunks_exact(SIZE_BLOCK) {
            self.core.compress(&mut self.h, block);
        }

        self.pad[..tail.len()].copy_from_slice(tail);
        self.pad[tail.len()] = 0x80;

        // Tail + 0x80 + length fits one block, or the length spills into a
        // second, padding-only block (tails of 56..=63 bytes).
        let final_len = if SIZE_BLOCK - tail.len() >= PADDING_MIN {
            SIZE_BLOCK
        } else {
            2 * SIZE_BLOCK
        };

        let mut bit_len = total * 8;
        let mut len_bytes = [0u8; 8];
        u64_to_be(&mut bit_len, &mut len_bytes);
        self.pad[final_len - 8..final_len].copy_from_slice(&len_bytes);

        for block in self.pad[..final_len].chunks_exact(SIZE_BLOCK) {
            self.core.compress(&mut self.h, block);
        }

        self.pad.zeroize();
        len_bytes.zeroize();
        self.total_len = total;
        self.phase = Phase::Padded;

        Ok(())
    }

    /// Writes the digest: the chaining value serialized big-endian.
    ///
    /// The chaining value itself is left as is; the state becomes
    /// [`Phase::Finished`] and accepts nothing but [`init`](Self::init).
    ///
    /// # Errors
    ///
    /// [`Sha256Error::NotPadded`] if [`update_last`](Self::update_last) has not
    /// run, [`Sha256Error::Uninitialized`] or [`Sha256Error::Finished`].
    pub fn finish(&mut self, out: &mut [u8; SIZE_HASH]) -> Result<(), Sha256Error> {
        match self.phase {
            Phase::Padded => {}
            Phase::Ready => return Err(Sha256Error::NotPadded),
            Phase::Uninitialized => return Err(Sha256Error::Uninitialized),
            Phase::Finished => return Err(Sha256Error::Finished),
        }

        u32s_to_be_bytes(out, &self.h)?;
        self.phase = Phase::Finished;

        Ok(())
    }

    /// Fails unless `len` more bytes keep the message within the length field.
    pub(crate) fn ensure_capacity(&self, len: usize) -> Result<(), Sha256Error> {
        self.advanced_len(len).map(|_| ())
    }

    pub(crate) fn ensure_ready(&self) -> Result<(), Sha256Error> {
        match self.phase {
            Phase::Ready => Ok(()),
            Phase::Uninitialized => Err(Sha256Error::Uninitialized),
            Phase::Padded => Err(Sha256Error::AlreadyPadded),
            Phase::Finished => Err(Sha256Error::Finished),
        }
    }

    fn advanced_len(&self, len: usize) -> Result<u64, Sha256Error> {
        u64::try_from(len)
            .ok()
            .and_then(|len| self.total_len.checked_add(len))
            .filter(|total| *total <= MAX_MESSAGE_LEN)
            .ok_or(Sha256Error::LengthOverflow)
    }

    #[cfg(test)]
    pub(crate) fn chaining_value(&self) -> [u32; 8] {
        self.h
    }

    #[cfg(test)]
    pub(crate) fn set_total_len(&mut self, total_len: u64) {
        self.total_len = total_len;
    }
}

impl Default for Sha256State {
    fn default() -> Self {
        Self::new()
    }
}

impl Zeroize for Sha256State {
    /// Wipes every word of the state and drops it back to [`Phase::Uninitialized`].
    fn zeroize(&mut self) {
        self.h.zeroize();
        self.core.zeroize();
        self.pad.zeroize();
        self.total_len.zeroize();
        self.phase = Phase::Uninitialized;
    }
}

impl Drop for Sha256State {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for Sha256State {}

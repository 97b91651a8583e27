// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Incremental SHA-256 with secure memory handling
//!
//! Implementation per FIPS 180-4 and RFC 6234. The engine is an explicit
//! state machine over a caller-owned [`Sha256State`]:
//! `init` → `update`/`update_multi` (whole blocks) → `update_last` (tail +
//! padding) → `finish`. [`hash`] composes the four steps and [`Sha256`]
//! wraps them for arbitrary-length streaming input.
//!
//! Contract violations (wrong block length, update after finish, ...) are
//! reported as [`Sha256Error`], never as a wrong digest. All intermediate
//! values are zeroized.
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod compress;
mod consts;
mod error;
mod hash;
mod hasher;
mod state;
mod word32;

pub use bulwark_loadstore::LoadStoreError;
pub use compress::compress_block;
pub use consts::{SIZE_BLOCK, SIZE_HASH, SIZE_STATE};
pub use error::Sha256Error;
pub use hash::{hash, sha256};
pub use hasher::Sha256;
pub use state::{Phase, Sha256State};

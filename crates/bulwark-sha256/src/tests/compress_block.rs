// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Test for compress_block (single SHA-256 compression, no padding)
//
// References:
// [1] FIPS 180-4: Secure Hash Standard (SHS), Section 6.2
// [2] NIST SHA-256 Examples PDF (one-block message "abc")
//     https://csrc.nist.gov/csrc/media/projects/cryptographic-standards-and-guidelines/documents/examples/SHA256.pdf

use crate::compress::compress_block;
use crate::consts::H0;

fn abc_block() -> [u8; 64] {
    let mut block = [0u8; 64];
    block[..3].copy_from_slice(b"abc");
    block[3] = 0x80;
    block[63] = 0x18; // 24 bits
    block
}

#[test]
fn test_compress_block_abc() {
    let mut h = H0;

    compress_block(&mut h, &abc_block());

    let expected = [
        0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61,
        0xf20015ad,
    ];
    assert_eq!(h, expected, "H(1) mismatch for 'abc'");
}

#[test]
fn test_compress_block_chains() {
    // Same block twice: second call starts from the first output
    let mut once = H0;
    compress_block(&mut once, &abc_block());
    let mut twice = once;
    compress_block(&mut twice, &abc_block());

    assert_ne!(twice, once);

    let mut replay = H0;
    compress_block(&mut replay, &abc_block());
    compress_block(&mut replay, &abc_block());
    assert_eq!(replay, twice);
}

#[test]
fn test_compress_block_depends_on_every_byte() {
    let base = [0u8; 64];
    let mut reference = H0;
    compress_block(&mut reference, &base);

    for i in 0..64 {
        let mut block = base;
        block[i] = 1;
        let mut h = H0;
        compress_block(&mut h, &block);
        assert_ne!(h, reference, "flipping byte {i} left the output unchanged");
    }
}

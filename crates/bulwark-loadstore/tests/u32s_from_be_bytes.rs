// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod u32s_from_be_bytes_tests {
    use bulwark_loadstore::{LoadStoreError, hex_to_bytes, u32s_from_be_bytes};

    #[test]
    fn test_sha256_block_words() {
        // "abc" padded to one SHA-256 block (FIPS 180-4, Section 5.1.1)
        let mut block = [0u8; 64];
        block[..3].copy_from_slice(b"abc");
        block[3] = 0x80;
        block[63] = 0x18;

        let mut words = [0u32; 16];
        u32s_from_be_bytes(&mut words, &block).expect("Failed to u32s_from_be_bytes(..)");

        assert_eq!(words[0], 0x61626380);
        assert!(words[1..15].iter().all(|&w| w == 0));
        assert_eq!(words[15], 0x00000018);
    }

    #[test]
    fn test_hex_vector() {
        let bytes = hex_to_bytes("ba7816bf8f01cfea");
        let mut words = [0u32; 2];

        u32s_from_be_bytes(&mut words, &bytes).expect("Failed to u32s_from_be_bytes(..)");

        assert_eq!(words, [0xba7816bf, 0x8f01cfea]);
    }

    #[test]
    fn test_source_is_not_modified() {
        let bytes = [0xDE, 0xAD, 0xBE, 0xEF];
        let mut words = [0u32; 1];

        u32s_from_be_bytes(&mut words, &bytes).expect("Failed to u32s_from_be_bytes(..)");

        assert_eq!(bytes, [0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(words, [0xDEADBEEF]);
    }

    #[test]
    fn test_too_many_words() {
        let mut words = [0u32; 2];

        assert_eq!(
            u32s_from_be_bytes(&mut words, &[0u8; 4]),
            Err(LoadStoreError::LengthMismatch {
                words: 2,
                bytes: 4,
                word_size: 4
            })
        );
    }
}

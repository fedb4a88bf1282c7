// tests/core/blowfish.rs
use bcrypt_kdf::blowfish::{stream_to_word, CipherState};

/// Plain Blowfish: the unsalted schedule over `key` from the initial state
fn keyed(key: &[u8]) -> CipherState {
    let mut state = CipherState::new();
    state.expand0_state(key);
    state
}

#[test]
fn test_encipher_matches_reference_vectors() {
    // (key, plaintext, ciphertext) from Schneier's Blowfish test set
    let vectors: [([u8; 8], (u32, u32), (u32, u32)); 3] = [
        ([0x00; 8], (0x0000_0000, 0x0000_0000), (0x4ef9_9745, 0x6198_dd78)),
        ([0xff; 8], (0xffff_ffff, 0xffff_ffff), (0x5186_6fd5, 0xb85e_cb8a)),
        (
            [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef],
            (0x1111_1111, 0x1111_1111),
            (0x61f9_c380, 0x2281_b096),
        ),
    ];

    for (key, (l, r), expected) in vectors {
        assert_eq!(keyed(&key).encipher(l, r), expected, "key {key:02x?}");
    }
}

#[test]
fn test_encrypt_blocks_is_pairwise_encipher() {
    let state = keyed(b"block mixer");
    let mut words = [1u32, 2, 3, 4, 5, 6, 7, 8];
    state.encrypt_blocks(&mut words);

    for (i, pair) in words.chunks_exact(2).enumerate() {
        let l = 2 * i as u32 + 1;
        let expected = state.encipher(l, l + 1);
        assert_eq!((pair[0], pair[1]), expected);
    }
}

#[test]
fn test_zero_salt_expansion_matches_unsalted_expansion() {
    let mut salted = CipherState::new();
    salted.expand_state(&[0u8; 64], b"some key material");
    let unsalted = keyed(b"some key material");

    assert_eq!(
        salted.encipher(0xdead_beef, 0x0bad_f00d),
        unsalted.encipher(0xdead_beef, 0x0bad_f00d)
    );
}

#[test]
fn test_salt_changes_expanded_state() {
    let mut a = CipherState::new();
    a.expand_state(b"salt-a", b"key");
    let mut b = CipherState::new();
    b.expand_state(b"salt-b", b"key");

    assert_ne!(a.encipher(0, 0), b.encipher(0, 0));
}

#[test]
fn test_stream_to_word_wraps_and_keeps_cursor() {
    let data = [0x01, 0x02, 0x03];
    let mut cursor = 0;

    assert_eq!(stream_to_word(&data, &mut cursor), 0x0102_0301);
    assert_eq!(cursor, 1);
    assert_eq!(stream_to_word(&data, &mut cursor), 0x0203_0102);
    assert_eq!(cursor, 2);
}

#[test]
fn test_stream_to_word_reads_big_endian() {
    let mut cursor = 0;
    let magic = b"OxychromaticBlowfishSwatDynamite";

    assert_eq!(stream_to_word(magic, &mut cursor), u32::from_be_bytes(*b"Oxyc"));
    assert_eq!(stream_to_word(magic, &mut cursor), u32::from_be_bytes(*b"hrom"));
}

#[test]
fn test_debug_hides_tables() {
    assert_eq!(format!("{:?}", CipherState::new()), "CipherState { ... }");
}

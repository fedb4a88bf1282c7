// tests/core/bhash.rs
use crate::common::sha512;
use bcrypt_kdf::aliases::BcryptHash32;
use bcrypt_kdf::bhash::bcrypt_hash;
use bcrypt_kdf::bcrypt_pbkdf;

fn counted(salt: &[u8], count: u32) -> Vec<u8> {
    let mut v = salt.to_vec();
    v.extend_from_slice(&count.to_be_bytes());
    v
}

#[test]
fn test_bcrypt_hash_known_answer() {
    let mut out = BcryptHash32::new([0u8; 32]);
    bcrypt_hash(
        &sha512(b"password"),
        &sha512(&counted(b"salt", 1)),
        &mut out,
    );

    let expected =
        hex::decode("7af41469e52860da49debfaa6a4e12a2cb857b907b2bb20d2902a9ccd424adb1").unwrap();
    assert_eq!(out.expose_secret().as_slice(), expected.as_slice());
}

#[test]
fn test_bcrypt_hash_is_single_round_single_block_kdf() {
    let mut out = BcryptHash32::new([0u8; 32]);
    bcrypt_hash(
        &sha512(b"hunter2"),
        &sha512(&counted(b"pepper", 1)),
        &mut out,
    );

    let key = bcrypt_pbkdf(b"hunter2", b"pepper", 1, 32).unwrap();
    assert_eq!(out.expose_secret().as_slice(), key.expose_secret().as_slice());
}

#[test]
fn test_bcrypt_hash_is_deterministic_and_input_sensitive() {
    let pass = sha512(b"pass");
    let salt = sha512(b"salt");

    let mut a = BcryptHash32::new([0u8; 32]);
    let mut b = BcryptHash32::new([0xffu8; 32]);
    bcrypt_hash(&pass, &salt, &mut a);
    bcrypt_hash(&pass, &salt, &mut b);
    assert_eq!(a.expose_secret(), b.expose_secret());

    let mut swapped = BcryptHash32::new([0u8; 32]);
    bcrypt_hash(&salt, &pass, &mut swapped);
    assert_ne!(a.expose_secret(), swapped.expose_secret());
}

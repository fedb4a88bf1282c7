// src/bhash.rs
//! The bcrypt hash: one deliberately slow 32-byte digest
//!
//! Differs from classic bcrypt password hashing in that both inputs are
//! SHA-512 digests, the output is 256 bits, the encrypted seed is
//! "OxychromaticBlowfishSwatDynamite" and the key expansion always runs
//! 64 rounds. Extra cost comes from the caller iterating this hash.

use zeroize::Zeroizing;

use crate::aliases::{BcryptHash32, Sha512Digest64};
use crate::blowfish::{stream_to_word, CipherState};
use crate::consts::{BCRYPT_EXPANSION_ROUNDS, BCRYPT_MAGIC, BCRYPT_WORDS};

/// Compute the bcrypt hash of a pre-hashed password and pre-hashed salt.
///
/// Deterministic in its two inputs; every intermediate (cipher state,
/// seed copy, word buffer) is wiped before returning.
pub fn bcrypt_hash(
    sha2pass: &Sha512Digest64,
    sha2salt: &Sha512Digest64,
    out: &mut BcryptHash32,
) {
    let pass = sha2pass.expose_secret();
    let salt = sha2salt.expose_secret();

    // key expansion
    let mut state = CipherState::new();
    state.expand_state(salt, pass);
    for _ in 0..BCRYPT_EXPANSION_ROUNDS {
        state.expand0_state(salt);
        state.expand0_state(pass);
    }

    // encryption
    let seed = Zeroizing::new(*BCRYPT_MAGIC);
    let mut cdata = Zeroizing::new([0u32; BCRYPT_WORDS]);
    let mut cursor = 0;
    for word in cdata.iter_mut() {
        *word = stream_to_word(&seed[..], &mut cursor);
    }
    for _ in 0..BCRYPT_EXPANSION_ROUNDS {
        state.encrypt_blocks(&mut cdata[..]);
    }

    // copy out, least significant byte first within each word
    for (chunk, word) in out
        .expose_secret_mut()
        .chunks_exact_mut(4)
        .zip(cdata.iter())
    {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
}

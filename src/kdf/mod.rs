// src/kdf/mod.rs
//! bcrypt-pbkdf: PBKDF2-style stretching with the bcrypt hash as PRF
//!
//! For each output block (counter starting at 1):
//!
//! 1. hash `salt ‖ be32(counter)` and run the bcrypt hash against the
//!    pre-hashed password,
//! 2. `rounds - 1` more times, hash the previous bcrypt output, run the
//!    bcrypt hash again and XOR the result into the block,
//! 3. scatter the block into the key through [`OutputLayout`].
//!
//! Any rejected input leaves the caller's buffer filled with secure random
//! bytes, so a caller that ignores the error never ends up with a
//! predictable key.

pub mod layout;
pub mod params;

pub use layout::OutputLayout;
pub use params::{validate, KdfParams, KdfSettings};


use tracing::{debug, trace, warn};

use crate::aliases::{BcryptHash32, CountSalt, DerivedKey, Sha512Digest64};
use crate::bhash::bcrypt_hash;
use crate::consts::{BCRYPT_HASH_LEN, COUNTER_LEN, DIGEST_LEN};
use crate::error::{KdfError, Result};
use crate::hash::{HashFunction, Sha512};
use crate::rng::{OsRandom, SecureRandom};

/// bcrypt-pbkdf bound to a digest backend and a secure random source.
#[derive(Clone, Default)]
pub struct BcryptPbkdf<H = Sha512, R = OsRandom> {
    hash: H,
    rng: R,
}

impl BcryptPbkdf {
    /// SHA-512 from `sha2`, randomness from the OS.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: HashFunction, R: SecureRandom> BcryptPbkdf<H, R> {
    pub fn with_backends(hash: H, rng: R) -> Self {
        Self { hash, rng }
    }

    pub fn hash_function(&self) -> &H {
        &self.hash
    }

    /// Derive `key.len()` bytes into `key`.
    ///
    /// # Errors
    ///
    /// - [`KdfError::InvalidParameters`] - zero rounds, empty password or
    ///   salt, zero or over-long key, over-long salt
    /// - [`KdfError::ResourceExhausted`] - scratch allocation failed
    ///
    /// On error every byte of `key` has been overwritten with random data.
    pub fn derive_key_into(
        &self,
        password: &[u8],
        salt: &[u8],
        rounds: u32,
        key: &mut [u8],
    ) -> Result<()> {
        let result = self.try_derive(password, salt, rounds, key);
        self.randomise_on_error(result, key)
    }

    /// Every failure, whatever its cause, overwrites `key` before returning.
    fn randomise_on_error(&self, result: Result<()>, key: &mut [u8]) -> Result<()> {
        if let Err(err) = &result {
            warn!(
                %err,
                key_len = key.len(),
                "bcrypt-pbkdf failed, output randomised"
            );
            self.rng.fill(key);
        }
        result
    }

    /// Derive a fresh `key_len`-byte key. The result is wiped on drop.
    pub fn derive_key(
        &self,
        password: &[u8],
        salt: &[u8],
        rounds: u32,
        key_len: usize,
    ) -> Result<DerivedKey> {
        // Fail before allocating a buffer that could be absurdly large
        validate(password, salt, rounds, key_len)?;
        let mut key = DerivedKey::new(vec![0u8; key_len]);
        self.derive_key_into(password, salt, rounds, key.expose_secret_mut())?;
        Ok(key)
    }

    /// Derive a key from stored parameters.
    pub fn derive_key_with_params(
        &self,
        password: &[u8],
        params: &KdfParams,
        key_len: usize,
    ) -> Result<DerivedKey> {
        self.derive_key(password, params.salt(), params.rounds(), key_len)
    }

    fn try_derive(
        &self,
        password: &[u8],
        salt: &[u8],
        rounds: u32,
        key: &mut [u8],
    ) -> Result<()> {
        validate(password, salt, rounds, key.len())?;

        let mut buf = Vec::new();
        buf.try_reserve_exact(salt.len() + COUNTER_LEN)
            .map_err(|_| KdfError::ResourceExhausted)?;
        buf.extend_from_slice(salt);
        buf.extend_from_slice(&[0u8; COUNTER_LEN]);
        let mut count_salt = CountSalt::new(buf);

        let layout = OutputLayout::new(key.len());
        debug!(
            rounds,
            key_len = key.len(),
            stride = layout.stride(),
            amt = layout.amt(),
            "deriving bcrypt-pbkdf key"
        );

        // collapse password
        let mut sha2pass = Sha512Digest64::new([0u8; DIGEST_LEN]);
        self.hash.hash_into(password, &mut sha2pass);

        let mut sha2salt = Sha512Digest64::new([0u8; DIGEST_LEN]);
        let mut out = BcryptHash32::new([0u8; BCRYPT_HASH_LEN]);
        let mut tmpout = BcryptHash32::new([0u8; BCRYPT_HASH_LEN]);

        let mut remaining = key.len();
        let mut count: u32 = 1;
        while remaining > 0 {
            let counter_at = salt.len();
            count_salt.expose_secret_mut()[counter_at..]
                .copy_from_slice(&count.to_be_bytes());

            // first round, salt is salt
            self.hash.hash_into(count_salt.expose_secret(), &mut sha2salt);
            bcrypt_hash(&sha2pass, &sha2salt, &mut tmpout);
            out.expose_secret_mut().copy_from_slice(tmpout.expose_secret());

            // subsequent rounds, salt is previous output
            for _ in 1..rounds {
                self.hash.hash_into(tmpout.expose_secret(), &mut sha2salt);
                bcrypt_hash(&sha2pass, &sha2salt, &mut tmpout);
                xor_into(out.expose_secret_mut(), tmpout.expose_secret());
            }

            let written = layout.scatter(count, out.expose_secret(), remaining, key);
            debug_assert!(written > 0, "every block must place at least one byte");
            trace!(block = count, written, "block assembled");
            remaining -= written;
            count += 1;
        }

        debug!(blocks = count - 1, "bcrypt-pbkdf key derived");
        Ok(())
    }
}

fn xor_into(acc: &mut [u8], block: &[u8]) {
    for (a, b) in acc.iter_mut().zip(block) {
        *a ^= *b;
    }
}

impl<H, R> std::fmt::Debug for BcryptPbkdf<H, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BcryptPbkdf { .. }")
    }
}

/// Derive a key with the default backends.
pub fn bcrypt_pbkdf(
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    key_len: usize,
) -> Result<DerivedKey> {
    BcryptPbkdf::new().derive_key(password, salt, rounds, key_len)
}

/// Derive into a caller buffer with the default backends, randomising it
/// on error.
pub fn bcrypt_pbkdf_into(
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    key: &mut [u8],
) -> Result<()> {
    BcryptPbkdf::new().derive_key_into(password, salt, rounds, key)
}

// src/hash/mod.rs
//! Pluggable SHA-512 dependency
//!
//! The KDF pre-hashes the password once and hashes every per-round salt
//! through a [`HashFunction`] chosen at construction time, so the real
//! backend can be swapped (or mocked in tests) without touching the core.

pub mod backends;

use crate::aliases::Sha512Digest64;

/// A 512-bit digest function.
///
/// Implementations must be deterministic and side-effect free. The digest
/// is written straight into a zeroizing buffer owned by the caller.
pub trait HashFunction {
    fn hash_into(&self, input: &[u8], out: &mut Sha512Digest64);
}

impl<H: HashFunction + ?Sized> HashFunction for &H {
    fn hash_into(&self, input: &[u8], out: &mut Sha512Digest64) {
        (**self).hash_into(input, out)
    }
}

/// Default backend
pub type Sha512 = backends::Sha2Sha512;

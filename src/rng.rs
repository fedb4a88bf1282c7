// src/rng.rs
//! Secure random source
//!
//! Used to randomise the output buffer when a derivation is rejected and
//! to draw fresh salts. The OS primitive behind it is an implementation
//! detail of [`OsRandom`].

use rand::rngs::OsRng;
use rand::{RngCore, TryRngCore};

/// A source of cryptographically secure random bytes.
pub trait SecureRandom {
    /// Fill `buf` completely. Must not fail.
    fn fill(&self, buf: &mut [u8]);
}

impl<R: SecureRandom + ?Sized> SecureRandom for &R {
    fn fill(&self, buf: &mut [u8]) {
        (**self).fill(buf)
    }
}

/// Operating-system randomness, falling back to the OS-seeded thread RNG
/// if the direct OS call reports an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl SecureRandom for OsRandom {
    fn fill(&self, buf: &mut [u8]) {
        if let Err(err) = OsRng.try_fill_bytes(buf) {
            tracing::warn!(%err, "OS random source failed, using thread RNG");
            rand::rng().fill_bytes(buf);
        }
    }
}

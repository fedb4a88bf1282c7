// src/hash/backends/sha2.rs
//! SHA-512 using the pure Rust `sha2` crate.

use sha2::digest::generic_array::GenericArray;
use sha2::Digest as _;

use crate::aliases::Sha512Digest64;
use crate::hash::HashFunction;

/// SHA-512 backed by the `sha2` crate.
///
/// Fully portable, no C libraries involved. The digest is finalized
/// directly into the caller's buffer so no unwiped copy of the output is
/// left behind.
///
/// Limitation: `sha2` 0.10 does not zeroize its hasher on drop, so the
/// last partially filled 128-byte input block (which holds all of a short
/// password) stays in the dropped hasher's stack slot until overwritten.
/// Use a backend with a wiping hasher if that matters for your threat
/// model.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha2Sha512;

impl HashFunction for Sha2Sha512 {
    fn hash_into(&self, input: &[u8], out: &mut Sha512Digest64) {
        let mut hasher = sha2::Sha512::new();
        hasher.update(input);
        hasher.finalize_into(GenericArray::from_mut_slice(
            &mut out.expose_secret_mut()[..],
        ));
    }
}

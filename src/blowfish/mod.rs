// src/blowfish/mod.rs
//! Blowfish-derived mixing core used by the bcrypt hash
//!
//! This is not a general-purpose cipher: there is no decryption, and the
//! key schedule is exposed in the two bcrypt flavours (salted and
//! zero-salt) so callers can rebuild the schedule from evolving state.
//! All operations mutate in place and never allocate.

pub mod tables;

use zeroize::Zeroize;

use tables::{P_INIT, S_INIT};

const P_WORDS: usize = 18;
const FEISTEL_ROUNDS: usize = 16;

/// Read the next big-endian 32-bit word from `data`, wrapping at the end.
///
/// `cursor` is shared across calls so successive words continue where the
/// previous one stopped. `data` must not be empty.
pub fn stream_to_word(data: &[u8], cursor: &mut usize) -> u32 {
    let mut word = 0u32;
    for _ in 0..4 {
        if *cursor >= data.len() {
            *cursor = 0;
        }
        word = (word << 8) | u32::from(data[*cursor]);
        *cursor += 1;
    }
    word
}

/// Permutation array plus substitution boxes. Wiped on drop.
pub struct CipherState {
    p: [u32; P_WORDS],
    s: [[u32; 256]; 4],
}

impl CipherState {
    /// Fresh state holding the standard Blowfish constants.
    pub fn new() -> Self {
        Self {
            p: P_INIT,
            s: S_INIT,
        }
    }

    #[inline(always)]
    fn f(&self, x: u32) -> u32 {
        let a = self.s[0][(x >> 24) as usize];
        let b = self.s[1][((x >> 16) & 0xff) as usize];
        let c = self.s[2][((x >> 8) & 0xff) as usize];
        let d = self.s[3][(x & 0xff) as usize];
        (a.wrapping_add(b) ^ c).wrapping_add(d)
    }

    /// Encrypt one 64-bit block held as two 32-bit halves.
    pub fn encipher(&self, mut l: u32, mut r: u32) -> (u32, u32) {
        for i in (0..FEISTEL_ROUNDS).step_by(2) {
            l ^= self.p[i];
            r ^= self.f(l);
            r ^= self.p[i + 1];
            l ^= self.f(r);
        }
        l ^= self.p[FEISTEL_ROUNDS];
        r ^= self.p[FEISTEL_ROUNDS + 1];
        (r, l)
    }

    /// Encrypt `words` in place as consecutive (left, right) pairs.
    pub fn encrypt_blocks(&self, words: &mut [u32]) {
        debug_assert!(words.len() % 2 == 0, "block data must be whole 64-bit blocks");
        for pair in words.chunks_exact_mut(2) {
            let (l, r) = self.encipher(pair[0], pair[1]);
            pair[0] = l;
            pair[1] = r;
        }
    }

    fn mix_key(&mut self, key: &[u8]) {
        let mut cursor = 0;
        for p in self.p.iter_mut() {
            *p ^= stream_to_word(key, &mut cursor);
        }
    }

    /// Salted key schedule: fold `key` into P, then regenerate P and S by
    /// chaining encryptions whose inputs are XORed with successive salt words.
    pub fn expand_state(&mut self, salt: &[u8], key: &[u8]) {
        self.mix_key(key);

        let mut cursor = 0;
        let (mut l, mut r) = (0u32, 0u32);
        for i in (0..P_WORDS).step_by(2) {
            l ^= stream_to_word(salt, &mut cursor);
            r ^= stream_to_word(salt, &mut cursor);
            (l, r) = self.encipher(l, r);
            self.p[i] = l;
            self.p[i + 1] = r;
        }
        for sbox in 0..4 {
            for k in (0..256).step_by(2) {
                l ^= stream_to_word(salt, &mut cursor);
                r ^= stream_to_word(salt, &mut cursor);
                (l, r) = self.encipher(l, r);
                self.s[sbox][k] = l;
                self.s[sbox][k + 1] = r;
            }
        }
    }

    /// Unsalted key schedule (the plain Blowfish one): fold `key` into P,
    /// then regenerate P and S from a chain starting at the all-zero block.
    pub fn expand0_state(&mut self, key: &[u8]) {
        self.mix_key(key);

        let (mut l, mut r) = (0u32, 0u32);
        for i in (0..P_WORDS).step_by(2) {
            (l, r) = self.encipher(l, r);
            self.p[i] = l;
            self.p[i + 1] = r;
        }
        for sbox in 0..4 {
            for k in (0..256).step_by(2) {
                (l, r) = self.encipher(l, r);
                self.s[sbox][k] = l;
                self.s[sbox][k + 1] = r;
            }
        }
    }
}

impl Default for CipherState {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CipherState {
    fn drop(&mut self) {
        self.p.zeroize();
        for sbox in self.s.iter_mut() {
            sbox.zeroize();
        }
    }
}

impl std::fmt::Debug for CipherState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CipherState { ... }")
    }
}

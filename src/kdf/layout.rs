// src/kdf/layout.rs
//! Non-linear output assembly
//!
//! Byte `i` of block `b` (1-based counter) lands at `i * stride + (b - 1)`,
//! so the key is striped across every block instead of laid out
//! contiguously. Producing any prefix of the key therefore costs as much
//! as producing all of it.

use crate::consts::BCRYPT_HASH_LEN;

/// Index mapping for one key length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputLayout {
    key_len: usize,
    stride: usize,
    amt: usize,
}

impl OutputLayout {
    /// `key_len` must be non-zero; validation happens before this is built.
    pub fn new(key_len: usize) -> Self {
        debug_assert!(key_len > 0);
        let stride = key_len.div_ceil(BCRYPT_HASH_LEN);
        let amt = key_len.div_ceil(stride);
        Self {
            key_len,
            stride,
            amt,
        }
    }

    pub fn key_len(&self) -> usize {
        self.key_len
    }

    /// Distance between two consecutive bytes of the same block in the key.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Upper bound on bytes taken from one block.
    pub fn amt(&self) -> usize {
        self.amt
    }

    /// Where byte `byte_index` of block `block_index` (counter, starting
    /// at 1) goes, or `None` if that position is past the end of the key.
    pub fn destination_index(&self, block_index: u32, byte_index: usize) -> Option<usize> {
        debug_assert!(block_index >= 1, "block counter starts at 1");
        debug_assert!(byte_index < BCRYPT_HASH_LEN);
        let dest = byte_index
            .checked_mul(self.stride)?
            .checked_add(block_index.checked_sub(1)? as usize)?;
        (dest < self.key_len).then_some(dest)
    }

    /// Copy up to `min(amt, remaining)` bytes of `block` into `key` and
    /// return how many were written.
    ///
    /// Stops at the first destination past the end of the key; the caller
    /// subtracts exactly the returned count from what remains.
    pub fn scatter(
        &self,
        block_index: u32,
        block: &[u8],
        remaining: usize,
        key: &mut [u8],
    ) -> usize {
        debug_assert_eq!(key.len(), self.key_len);
        let amt = self.amt.min(remaining).min(block.len());
        let mut written = 0;
        for (i, byte) in block.iter().take(amt).enumerate() {
            let Some(dest) = self.destination_index(block_index, i) else {
                break;
            };
            key[dest] = *byte;
            written += 1;
        }
        written
    }
}

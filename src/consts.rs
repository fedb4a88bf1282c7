// src/consts.rs
//! Shared constants: algorithm sizes, input limits and defaults

/// Output size of the injected digest function (SHA-512)
pub const DIGEST_LEN: usize = 64;

/// Number of 32-bit words produced by one bcrypt hash
pub const BCRYPT_WORDS: usize = 8;

/// Size of one bcrypt hash block in bytes
pub const BCRYPT_HASH_LEN: usize = BCRYPT_WORDS * 4;

/// Seed encrypted by every bcrypt hash
pub const BCRYPT_MAGIC: &[u8; BCRYPT_HASH_LEN] = b"OxychromaticBlowfishSwatDynamite";

/// Key-schedule amplification rounds (and encryption passes) per bcrypt hash
pub const BCRYPT_EXPANSION_ROUNDS: usize = 64;

/// Largest derivable key: one output byte per (block, byte) pair
pub const MAX_KEY_LEN: usize = BCRYPT_HASH_LEN * BCRYPT_HASH_LEN;

/// Largest accepted salt (1 MiB)
pub const MAX_SALT_LEN: usize = 1 << 20;

/// Width of the big-endian block counter appended to the salt
pub const COUNTER_LEN: usize = 4;

/// Default rounds for newly generated parameters
// Matches what passphrase-protected key files use by default
pub const DEFAULT_ROUNDS: u32 = 16;

/// Default salt length for newly generated parameters
pub const DEFAULT_SALT_LEN: usize = 16;

/// Environment variable naming the TOML config file
pub const CONFIG_PATH_ENV: &str = "BCRYPT_KDF_CONFIG";

/// Config file used when `BCRYPT_KDF_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "bcrypt-kdf.toml";

/// Environment override for the configured rounds
pub const ROUNDS_ENV: &str = "BCRYPT_KDF_ROUNDS";

/// Environment override for the configured salt length
pub const SALT_LEN_ENV: &str = "BCRYPT_KDF_SALT_LEN";

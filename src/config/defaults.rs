// src/config/defaults.rs
use crate::config::app::KdfSection;
use crate::consts::{DEFAULT_ROUNDS, DEFAULT_SALT_LEN};

pub fn default_rounds() -> u32 {
    DEFAULT_ROUNDS
}

pub fn default_salt_len() -> usize {
    DEFAULT_SALT_LEN
}

pub fn default_kdf() -> KdfSection {
    KdfSection {
        rounds: default_rounds(),
        salt_len: default_salt_len(),
    }
}

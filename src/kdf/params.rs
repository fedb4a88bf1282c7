// src/kdf/params.rs
//! Input validation, cost presets and stored salt/rounds pairs

use crate::consts::{DEFAULT_ROUNDS, DEFAULT_SALT_LEN, MAX_KEY_LEN, MAX_SALT_LEN};
use crate::error::{InvalidParameter, KdfError};
use crate::rng::{OsRandom, SecureRandom};

/// Fail-fast checks run before any derivation work.
pub fn validate(
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    key_len: usize,
) -> Result<(), KdfError> {
    if rounds < 1 {
        return Err(InvalidParameter::ZeroRounds.into());
    }
    if password.is_empty() {
        return Err(InvalidParameter::EmptyPassword.into());
    }
    if salt.is_empty() {
        return Err(InvalidParameter::EmptySalt.into());
    }
    if key_len == 0 {
        return Err(InvalidParameter::ZeroKeyLength.into());
    }
    if key_len > MAX_KEY_LEN {
        return Err(InvalidParameter::KeyLengthTooLong {
            len: key_len,
            max: MAX_KEY_LEN,
        }
        .into());
    }
    validate_salt_len(salt.len())
}

// Sole salt check for `KdfParams::new` and `generate_with`
fn validate_salt_len(len: usize) -> Result<(), KdfError> {
    if len == 0 {
        return Err(InvalidParameter::EmptySalt.into());
    }
    if len > MAX_SALT_LEN {
        return Err(InvalidParameter::SaltTooLong {
            len,
            max: MAX_SALT_LEN,
        }
        .into());
    }
    Ok(())
}

/// Cost settings used when generating new parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfSettings {
    pub rounds: u32,
    pub salt_len: usize,
}

impl KdfSettings {
    pub const PARANOID: Self = Self {
        rounds: 64,
        salt_len: 32,
    };

    /// What passphrase-protected key files use out of the box
    pub const DEFAULT: Self = Self {
        rounds: DEFAULT_ROUNDS,
        salt_len: DEFAULT_SALT_LEN,
    };

    /// Fast settings, for tests only
    pub const TEST: Self = Self {
        rounds: 1,
        salt_len: DEFAULT_SALT_LEN,
    };
}

impl Default for KdfSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A salt and round count that reproduce the same key from the same password.
///
/// Both must be stored next to whatever the derived key protects.
#[derive(Clone, PartialEq, Eq)]
pub struct KdfParams {
    salt: Vec<u8>,
    rounds: u32,
}

impl KdfParams {
    /// Wrap a stored pair, rejecting values `derive_key` would reject.
    pub fn new(salt: Vec<u8>, rounds: u32) -> Result<Self, KdfError> {
        if rounds < 1 {
            return Err(InvalidParameter::ZeroRounds.into());
        }
        validate_salt_len(salt.len())?;
        Ok(Self { salt, rounds })
    }

    /// Fresh parameters with a random salt from the OS.
    pub fn generate(settings: &KdfSettings) -> Result<Self, KdfError> {
        Self::generate_with(settings, &OsRandom)
    }

    /// Fresh parameters with a salt drawn from `rng`.
    pub fn generate_with<R: SecureRandom>(
        settings: &KdfSettings,
        rng: &R,
    ) -> Result<Self, KdfError> {
        validate_salt_len(settings.salt_len)?;
        let mut salt = vec![0u8; settings.salt_len];
        rng.fill(&mut salt);
        Self::new(salt, settings.rounds)
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }
}

impl std::fmt::Debug for KdfParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KdfParams")
            .field("salt_len", &self.salt.len())
            .field("rounds", &self.rounds)
            .finish()
    }
}

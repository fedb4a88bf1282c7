// src/lib.rs
//! bcrypt-kdf: bcrypt-pbkdf passphrase key derivation
//!
//! Features:
//! - bcrypt-pbkdf, bit-exact with the OpenBSD reference (passphrase-protected key files)
//! - Pluggable SHA-512 backend and secure random source
//! - Non-linear output striping, up to 1024-byte keys
//! - Every secret intermediate wiped on drop via secure-gate / zeroize
//! - Rejected input randomises the output buffer
//!
//! ```
//! let key = bcrypt_kdf::bcrypt_pbkdf(b"password", b"salt", 4, 32)?;
//! assert_eq!(key.expose_secret().len(), 32);
//! # Ok::<(), bcrypt_kdf::KdfError>(())
//! ```

pub mod aliases;
pub mod bhash;
pub mod blowfish;
pub mod config;
pub mod consts;
pub mod hash;
pub mod kdf;
pub mod rng;

pub mod error;

// Re-export everything users need at the crate root
pub use aliases::{BcryptHash32, DerivedKey, Sha512Digest64};
pub use config::load as load_config;
pub use error::{ConfigError, InvalidParameter, KdfError, Result};
pub use hash::{HashFunction, Sha512};
pub use kdf::{bcrypt_pbkdf, bcrypt_pbkdf_into, BcryptPbkdf, KdfParams, KdfSettings};
pub use rng::{OsRandom, SecureRandom};

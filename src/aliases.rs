// src/aliases.rs
//! Re-exports secure-gate's secret buffer types
//!
//! Every sensitive intermediate of a derivation lives in one of these,
//! so it is wiped on drop whichever way the call exits.

pub use secure_gate::{dynamic_alias, fixed_alias};

// Fixed-size secrets
fixed_alias!(Sha512Digest64, 64); // pre-hashed password / per-round salt digest
fixed_alias!(BcryptHash32, 32); // one bcrypt hash output / XOR accumulator

// Dynamic secrets
dynamic_alias!(CountSalt, Vec<u8>); // salt ‖ big-endian block counter
dynamic_alias!(DerivedKey, Vec<u8>); // owned result of `derive_key`

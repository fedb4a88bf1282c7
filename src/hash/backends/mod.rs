// src/hash/backends/mod.rs
mod sha2;
pub use self::sha2::Sha2Sha512;

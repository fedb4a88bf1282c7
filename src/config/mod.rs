// src/config/mod.rs
//! Configuration system for bcrypt-kdf
//!
//! Lazy-loaded process config: built-in defaults, then a TOML file, then
//! env overrides. Only parameter generation reads it; derivation itself
//! is fully determined by its arguments.

pub use app::{load, Config, KdfSection};

mod app;
mod defaults;

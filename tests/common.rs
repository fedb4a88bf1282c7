// tests/common.rs
//! Shared test utilities: logging setup and instrumented backends

#![allow(dead_code)] // each test binary uses a different subset

use std::cell::{Cell, RefCell};

use bcrypt_kdf::aliases::Sha512Digest64;
use bcrypt_kdf::hash::backends::Sha2Sha512;
use bcrypt_kdf::{HashFunction, SecureRandom};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer()) // works in `cargo test`
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent, safe to call multiple times
}

/// SHA-512 of `data` through the default backend
pub fn sha512(data: &[u8]) -> Sha512Digest64 {
    let mut out = Sha512Digest64::new([0u8; 64]);
    Sha2Sha512.hash_into(data, &mut out);
    out
}

/// Real SHA-512 that records every input it is asked to hash
#[derive(Default)]
pub struct RecordingSha512 {
    pub inputs: RefCell<Vec<Vec<u8>>>,
}

impl HashFunction for RecordingSha512 {
    fn hash_into(&self, input: &[u8], out: &mut Sha512Digest64) {
        self.inputs.borrow_mut().push(input.to_vec());
        Sha2Sha512.hash_into(input, out);
    }
}

/// Real SHA-512 that only counts calls
#[derive(Default)]
pub struct CountingSha512 {
    pub calls: Cell<usize>,
}

impl HashFunction for CountingSha512 {
    fn hash_into(&self, input: &[u8], out: &mut Sha512Digest64) {
        self.calls.set(self.calls.get() + 1);
        Sha2Sha512.hash_into(input, out);
    }
}

/// "Random" source that fills with a fixed byte, so tests can see it ran
pub struct PatternRandom(pub u8);

impl SecureRandom for PatternRandom {
    fn fill(&self, buf: &mut [u8]) {
        buf.fill(self.0);
    }
}

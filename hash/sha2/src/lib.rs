//! An implementation of the SHA-256 cryptographic hash algorithm.
//!
//! Create a `Sha256` object, feed it input with the `input` method (which
//! may be called any number of times with arbitrary splits of the
//! message), then read the 32-byte digest with the `result` method, which
//! consumes the object. For one-shot use see `hash_digest::digest` and
//! `hash_digest::digest_scattered`.

#![no_std]

mod consts;
mod sha256;

pub use sha256::{sha256_digest_block, Sha256, Sha256Compress};

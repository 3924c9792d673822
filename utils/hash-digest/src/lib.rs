//! The `Digest` trait shared by the hash crates in this workspace, plus
//! one-shot convenience functions built on top of it.

#![no_std]

pub use generic_array;

use generic_array::typenum::Unsigned;
use generic_array::{ArrayLength, GenericArray};

/// The Digest trait specifies an interface common to digest functions.
pub trait Digest: Default {
    /// Output digest size in bytes.
    type OutputSize: ArrayLength<u8>;
    /// Input block size in bytes.
    type BlockSize: ArrayLength<u8>;

    /// Create a new digest instance.
    fn new() -> Self {
        Default::default()
    }

    /// Digest input data. This method can be called repeatedly for use with
    /// streaming messages.
    fn input(&mut self, input: &[u8]);

    /// Retrieve the digest result. This method consumes the digest
    /// instance, so feeding further input into a finalized digest is a
    /// compile error rather than a silently wrong result.
    fn result(self) -> GenericArray<u8, Self::OutputSize>;

    /// Get the block size in bytes.
    fn block_bytes(&self) -> usize {
        Self::BlockSize::to_usize()
    }

    /// Get the output size in bytes.
    fn output_bytes(&self) -> usize {
        Self::OutputSize::to_usize()
    }

    /// Get the output size in bits.
    fn output_bits(&self) -> usize {
        8 * Self::OutputSize::to_usize()
    }
}

/// Compute the digest of a contiguous message in one call.
pub fn digest<D: Digest>(data: &[u8]) -> GenericArray<u8, D::OutputSize> {
    let mut sh = D::new();
    sh.input(data);
    sh.result()
}

/// Compute the digest of a message supplied as a sequence of chunks. The
/// result equals `digest` of the concatenation of the chunks.
pub fn digest_scattered<D: Digest>(
    chunks: &[&[u8]],
) -> GenericArray<u8, D::OutputSize> {
    let mut sh = D::new();
    for chunk in chunks {
        sh.input(chunk);
    }
    sh.result()
}

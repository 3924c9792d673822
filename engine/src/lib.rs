//! Generic streaming driver for Merkle-Damgard hash functions with a
//! 64-byte block and a 64-bit length field, which covers SHA-1 and
//! SHA-256.
//!
//! The driver owns everything the compression function does not: the
//! partial-block buffer, the message bit-length counter, padding and
//! length encoding at finalization, and the finalized flag. A hash crate
//! supplies only its compression function and initial state through the
//! `MdCompress` trait; the driver is monomorphized per variant, so the
//! compression call is static dispatch.

#![no_std]

use hash_buffer::{FixedBuffer64, StandardPadding};
use hash_bytes::{add_bytes_to_bits, write_u64_be};

/// Block size in bytes of the hashes this driver supports.
pub const BLOCK_BYTES: usize = 64;

/// A Merkle-Damgard compression function over 64-byte blocks.
///
/// Implementations are zero-sized marker types; the per-variant constants
/// (round constants, round count) are private to the implementing crate.
pub trait MdCompress {
    /// The chaining state, `[u32; 5]` for SHA-1 and `[u32; 8]` for SHA-256.
    type State: Copy;

    /// The algorithm's initial state vector.
    const INITIAL_STATE: Self::State;

    /// Compress exactly one 64-byte block into the state. A pure function
    /// of (state, block); implementations must panic if `block` is not
    /// exactly `BLOCK_BYTES` long, which is unreachable from this driver.
    fn compress(state: &mut Self::State, block: &[u8]);
}

/// The streaming context for a compression function `C`: buffers
/// arbitrary-length input into blocks and performs padding and length
/// encoding at finalization.
///
/// Lifecycle: `new` -> any number of `input` calls -> one `finish` call.
/// `input` or `finish` on an already-finished engine panics; `reset`
/// returns the engine to its initial state for reuse.
pub struct MdEngine<C: MdCompress> {
    state: C::State,
    length_bits: u64,
    buffer: FixedBuffer64,
    finished: bool,
}

impl<C: MdCompress> MdEngine<C> {
    /// Create an engine in the algorithm's initial state.
    pub fn new() -> MdEngine<C> {
        MdEngine {
            state: C::INITIAL_STATE,
            length_bits: 0,
            buffer: FixedBuffer64::new(),
            finished: false,
        }
    }

    /// Reset to the initial state, clearing the buffer and length counter.
    pub fn reset(&mut self) {
        self.state = C::INITIAL_STATE;
        self.length_bits = 0;
        self.buffer.reset();
        self.finished = false;
    }

    /// Absorb input bytes. Complete blocks are compressed as they form;
    /// any tail shorter than a block is buffered.
    pub fn input(&mut self, input: &[u8]) {
        assert!(!self.finished, "input after finish");
        self.length_bits = add_bytes_to_bits(self.length_bits, input.len() as u64);
        let state = &mut self.state;
        self.buffer.input(input, |block| C::compress(state, block));
    }

    /// Pad the message, encode the bit length, and compress the final
    /// block(s). After this the engine is inert until `reset`.
    pub fn finish(&mut self) {
        assert!(!self.finished, "finish called twice");
        let state = &mut self.state;
        self.buffer
            .standard_padding(8, |block| C::compress(state, block));
        write_u64_be(self.buffer.next(8), self.length_bits);
        C::compress(state, self.buffer.full_buffer());
        self.finished = true;
    }

    /// The current chaining state. Only meaningful as a digest once
    /// `finish` has run.
    pub fn state(&self) -> &C::State {
        &self.state
    }
}

impl<C: MdCompress> Default for MdEngine<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: MdCompress> Clone for MdEngine<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: MdCompress> Copy for MdEngine<C> {}

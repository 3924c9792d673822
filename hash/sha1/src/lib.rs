//! An implementation of the SHA-1 cryptographic hash.
//!
//! First create a `Sha1` object using the `Sha1` constructor, then feed it
//! input using the `input` method, which may be called any number of times.
//! Read the 20-byte digest with the `result` method, which consumes the
//! object.
//!
//! SHA-1 is cryptographically broken for collision resistance and should
//! not be used in new designs that depend on it; it is provided for
//! compatibility with existing formats and protocols.

#![no_std]

use generic_array::typenum::{U20, U64};
use generic_array::GenericArray;
use hash_bytes::{read_u32v_be, write_u32v_be};
use hash_digest::Digest;
use md_engine::{MdCompress, MdEngine, BLOCK_BYTES};

mod consts;
use crate::consts::{H, K, ROUNDS, STATE_LEN};

/// The boolean round function and constant for round `i`, as a function of
/// the working variables `b`, `c`, `d`.
fn round_f(i: usize, b: u32, c: u32, d: u32) -> (u32, u32) {
    match i / 20 {
        0 => ((b & c) | (!b & d), K[0]),
        1 => (b ^ c ^ d, K[1]),
        2 => ((b & c) | (b & d) | (c & d), K[2]),
        _ => (b ^ c ^ d, K[3]),
    }
}

/// Process one 64-byte block with the SHA-1 compression function.
pub fn sha1_digest_block(state: &mut [u32; STATE_LEN], block: &[u8]) {
    assert_eq!(block.len(), BLOCK_BYTES);

    let mut w = [0u32; ROUNDS];
    read_u32v_be(&mut w[..16], block);
    for i in 16..ROUNDS {
        w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for (i, &wi) in w.iter().enumerate() {
        let (f, k) = round_f(i, b, c, d);
        let tmp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(wi);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = tmp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

/// Marker type binding the SHA-1 compression function into the generic
/// streaming driver.
#[derive(Clone, Copy)]
pub struct Sha1Compress;

impl MdCompress for Sha1Compress {
    type State = [u32; STATE_LEN];

    const INITIAL_STATE: [u32; STATE_LEN] = H;

    fn compress(state: &mut [u32; STATE_LEN], block: &[u8]) {
        sha1_digest_block(state, block);
    }
}

/// Structure representing the state of a SHA-1 computation.
#[derive(Clone, Copy, Default)]
pub struct Sha1 {
    engine: MdEngine<Sha1Compress>,
}

impl Sha1 {
    /// Construct a new SHA-1 digest.
    pub fn new() -> Sha1 {
        Sha1 {
            engine: MdEngine::new(),
        }
    }

    /// Reset the digest to its initial state for reuse.
    pub fn reset(&mut self) {
        self.engine.reset();
    }
}

impl Digest for Sha1 {
    type OutputSize = U20;
    type BlockSize = U64;

    fn input(&mut self, msg: &[u8]) {
        self.engine.input(msg);
    }

    fn result(mut self) -> GenericArray<u8, U20> {
        self.engine.finish();

        let mut out = GenericArray::default();
        write_u32v_be(out.as_mut_slice(), self.engine.state());
        out
    }
}

#[cfg(test)]
mod tests;

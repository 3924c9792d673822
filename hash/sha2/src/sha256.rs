use generic_array::typenum::{U32, U64};
use generic_array::GenericArray;
use hash_bytes::{read_u32v_be, write_u32v_be};
use hash_digest::Digest;
use md_engine::{MdCompress, MdEngine, BLOCK_BYTES};

use crate::consts::{H256, K32, ROUNDS, STATE_LEN};

// The FIPS 180-4 logical functions for SHA-256.

fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

fn sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

fn sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

fn choose(e: u32, f: u32, g: u32) -> u32 {
    g ^ (e & (f ^ g))
}

fn majority(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Process one 64-byte block with the SHA-256 compression function.
pub fn sha256_digest_block(state: &mut [u32; STATE_LEN], block: &[u8]) {
    assert_eq!(block.len(), BLOCK_BYTES);

    let mut w = [0u32; ROUNDS];
    read_u32v_be(&mut w[..16], block);
    for i in 16..ROUNDS {
        w[i] = sigma1(w[i - 2])
            .wrapping_add(w[i - 7])
            .wrapping_add(sigma0(w[i - 15]))
            .wrapping_add(w[i - 16]);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for i in 0..ROUNDS {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(choose(e, f, g))
            .wrapping_add(K32[i])
            .wrapping_add(w[i]);
        let t2 = big_sigma0(a).wrapping_add(majority(a, b, c));
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}

/// Marker type binding the SHA-256 compression function into the generic
/// streaming driver.
#[derive(Clone, Copy)]
pub struct Sha256Compress;

impl MdCompress for Sha256Compress {
    type State = [u32; STATE_LEN];

    const INITIAL_STATE: [u32; STATE_LEN] = H256;

    fn compress(state: &mut [u32; STATE_LEN], block: &[u8]) {
        sha256_digest_block(state, block);
    }
}

/// The SHA-256 hash algorithm.
#[derive(Clone, Copy, Default)]
pub struct Sha256 {
    engine: MdEngine<Sha256Compress>,
}

impl Sha256 {
    /// Construct a new SHA-256 digest.
    pub fn new() -> Sha256 {
        Sha256 {
            engine: MdEngine::new(),
        }
    }

    /// Reset the digest to its initial state for reuse.
    pub fn reset(&mut self) {
        self.engine.reset();
    }
}

impl Digest for Sha256 {
    type OutputSize = U32;
    type BlockSize = U64;

    fn input(&mut self, msg: &[u8]) {
        self.engine.input(msg);
    }

    fn result(mut self) -> GenericArray<u8, U32> {
        self.engine.finish();

        let mut out = GenericArray::default();
        write_u32v_be(out.as_mut_slice(), self.engine.state());
        out
    }
}

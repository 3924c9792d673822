//! Byte-order and length-counter helpers shared by the hash crates.
//!
//! The Merkle-Damgard hashes implemented in this workspace consume their
//! input as big-endian words and encode the message bit length big-endian
//! at finalization; the helpers here keep that code out of the per-hash
//! crates.

#![no_std]

/// Copy bytes from `src` to `dst`. The slices must have the same length.
pub fn copy_memory(src: &[u8], dst: &mut [u8]) {
    assert!(dst.len() == src.len());
    dst.copy_from_slice(src);
}

/// Zero all bytes in `dst`.
pub fn zero(dst: &mut [u8]) {
    for b in dst.iter_mut() {
        *b = 0;
    }
}

/// Write a slice of u32s into a byte slice in big-endian format. The
/// destination must be exactly four times as long as the input.
pub fn write_u32v_be(dst: &mut [u8], input: &[u32]) {
    assert!(dst.len() == 4 * input.len());
    for (chunk, &val) in dst.chunks_exact_mut(4).zip(input.iter()) {
        chunk.copy_from_slice(&val.to_be_bytes());
    }
}

/// Write a u64 into an 8-byte slice in big-endian format.
pub fn write_u64_be(dst: &mut [u8], val: u64) {
    assert!(dst.len() == 8);
    dst.copy_from_slice(&val.to_be_bytes());
}

/// Read a slice of big-endian u32s from `input`. The input must be exactly
/// four times as long as the destination.
pub fn read_u32v_be(dst: &mut [u32], input: &[u8]) {
    assert!(input.len() == 4 * dst.len());
    for (val, chunk) in dst.iter_mut().zip(input.chunks_exact(4)) {
        *val = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

/// Add the specified number of input bytes to an existing bit count,
/// returning the new count.
///
/// The count is kept at full 64-bit precision. If the total would exceed
/// 2^64 bits, the message is longer than SHA-1/SHA-256 can encode in their
/// length field and this function panics rather than silently wrapping.
pub fn add_bytes_to_bits(bits: u64, bytes: u64) -> u64 {
    let (new_high_bits, new_low_bits) = (bytes >> 61, bytes << 3);
    if new_high_bits > 0 {
        panic!("message length overflows the 64-bit bit counter");
    }
    match bits.checked_add(new_low_bits) {
        Some(sum) => sum,
        None => panic!("message length overflows the 64-bit bit counter"),
    }
}

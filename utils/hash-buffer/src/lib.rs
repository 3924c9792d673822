//! A fixed-size buffer that accumulates a byte stream into hash-sized
//! blocks.
//!
//! Block hash functions consume their input in fixed-size chunks, but
//! callers hand them arbitrary-length slices. `FixedBuffer` holds the
//! unprocessed tail between calls; the `input` method takes care of
//! processing complete blocks and clearing the buffer automatically.
//! The other methods hand out raw buffer space and require the caller to
//! process the buffer itself, which is what the padding code in
//! `StandardPadding` does.

#![no_std]

use hash_bytes::{copy_memory, zero};

/// A fixed-size block accumulation buffer. `SIZE` is the block size of the
/// hash in bytes.
#[derive(Clone, Copy)]
pub struct FixedBuffer<const SIZE: usize> {
    buffer: [u8; SIZE],
    buffer_idx: usize,
}

/// A 64-byte block buffer, the block size of SHA-1 and SHA-256.
pub type FixedBuffer64 = FixedBuffer<64>;

impl<const SIZE: usize> FixedBuffer<SIZE> {
    /// Create a new, empty buffer.
    pub fn new() -> FixedBuffer<SIZE> {
        FixedBuffer {
            buffer: [0u8; SIZE],
            buffer_idx: 0,
        }
    }

    /// Input a slice of bytes. Each time the buffer becomes full it is
    /// processed with `func` and cleared; input beyond a partial buffer is
    /// fed to `func` one block at a time straight from `input`, without an
    /// intermediate copy.
    pub fn input<F: FnMut(&[u8])>(&mut self, input: &[u8], mut func: F) {
        let mut i = 0;

        // If there is already data in the buffer, copy as much as we can
        // into it and process the block if the buffer becomes full.
        if self.buffer_idx != 0 {
            let buffer_remaining = SIZE - self.buffer_idx;
            if input.len() >= buffer_remaining {
                copy_memory(
                    &input[..buffer_remaining],
                    &mut self.buffer[self.buffer_idx..SIZE],
                );
                self.buffer_idx = 0;
                func(&self.buffer);
                i += buffer_remaining;
            } else {
                copy_memory(
                    input,
                    &mut self.buffer[self.buffer_idx..][..input.len()],
                );
                self.buffer_idx += input.len();
                return;
            }
        }

        // Process whole blocks directly from the input slice.
        while input.len() - i >= SIZE {
            func(&input[i..i + SIZE]);
            i += SIZE;
        }

        // Stash the remaining tail. At this point the buffer is empty and
        // fewer than SIZE bytes are left.
        let input_remaining = input.len() - i;
        copy_memory(&input[i..], &mut self.buffer[..input_remaining]);
        self.buffer_idx += input_remaining;
    }

    /// Reset the buffer to empty.
    pub fn reset(&mut self) {
        self.buffer_idx = 0;
    }

    /// Zero the buffer up until the specified index and mark those bytes as
    /// used. The current position must not be past that index.
    pub fn zero_until(&mut self, idx: usize) {
        assert!(idx >= self.buffer_idx);
        zero(&mut self.buffer[self.buffer_idx..idx]);
        self.buffer_idx = idx;
    }

    /// Get a mutable slice of the next `len` bytes of the buffer and mark
    /// them as used. There must be at least that many bytes remaining.
    pub fn next(&mut self, len: usize) -> &mut [u8] {
        self.buffer_idx += len;
        &mut self.buffer[self.buffer_idx - len..self.buffer_idx]
    }

    /// Get the full buffer. It must already be full; this clears it as well.
    pub fn full_buffer(&mut self) -> &[u8] {
        assert!(self.buffer_idx == SIZE);
        self.buffer_idx = 0;
        &self.buffer[..SIZE]
    }

    /// Get the current position of the buffer.
    pub fn position(&self) -> usize {
        self.buffer_idx
    }

    /// Get the number of bytes remaining until the buffer is full.
    pub fn remaining(&self) -> usize {
        SIZE - self.buffer_idx
    }

    /// Get the size of the buffer.
    pub fn size(&self) -> usize {
        SIZE
    }
}

impl<const SIZE: usize> Default for FixedBuffer<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Standard Merkle-Damgard padding on top of a `FixedBuffer`.
pub trait StandardPadding {
    /// Append the `0x80` marker byte and zero-fill so that exactly `rem`
    /// bytes (the length field) remain in the buffer. If fewer than `rem`
    /// bytes were available, the buffer is zero-filled, processed with
    /// `func`, cleared, and zero-filled again up to the length field. The
    /// buffer must not be full when this is called.
    fn standard_padding<F: FnMut(&[u8])>(&mut self, rem: usize, func: F);
}

impl<const SIZE: usize> StandardPadding for FixedBuffer<SIZE> {
    fn standard_padding<F: FnMut(&[u8])>(&mut self, rem: usize, mut func: F) {
        self.next(1)[0] = 128;

        if self.remaining() < rem {
            self.zero_until(SIZE);
            func(self.full_buffer());
        }

        self.zero_until(SIZE - rem);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use self::std::vec::Vec;
    use super::{FixedBuffer64, StandardPadding};

    fn collect_blocks(buf: &mut FixedBuffer64, input: &[u8]) -> Vec<Vec<u8>> {
        let mut blocks = Vec::new();
        buf.input(input, |block| blocks.push(block.to_vec()));
        blocks
    }

    #[test]
    fn whole_blocks_bypass_the_buffer() {
        let mut buf = FixedBuffer64::new();
        let data = [7u8; 192];
        let blocks = collect_blocks(&mut buf, &data);
        assert_eq!(blocks.len(), 3);
        assert_eq!(buf.position(), 0);
    }

    #[test]
    fn partial_input_is_stashed() {
        let mut buf = FixedBuffer64::new();
        assert!(collect_blocks(&mut buf, &[1u8; 63]).is_empty());
        assert_eq!(buf.position(), 63);
        assert_eq!(buf.remaining(), 1);

        // One more byte completes the block.
        let blocks = collect_blocks(&mut buf, &[2u8; 1]);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0][..63], [1u8; 63]);
        assert_eq!(blocks[0][63], 2);
        assert_eq!(buf.position(), 0);
    }

    #[test]
    fn topped_up_buffer_then_streaming() {
        let mut buf = FixedBuffer64::new();
        collect_blocks(&mut buf, &[1u8; 10]);
        // 10 buffered + 150 new = one topped-up block, one streamed block,
        // 32-byte tail.
        let blocks = collect_blocks(&mut buf, &[2u8; 150]);
        assert_eq!(blocks.len(), 2);
        assert_eq!(buf.position(), 32);
    }

    #[test]
    fn padding_fits_in_current_block() {
        let mut buf = FixedBuffer64::new();
        collect_blocks(&mut buf, &[0xabu8; 55]);

        let mut extra = 0;
        buf.standard_padding(8, |_| extra += 1);
        assert_eq!(extra, 0);
        assert_eq!(buf.position(), 56);
    }

    #[test]
    fn padding_spills_into_second_block() {
        let mut buf = FixedBuffer64::new();
        collect_blocks(&mut buf, &[0xabu8; 56]);

        let mut spilled = Vec::new();
        buf.standard_padding(8, |block| spilled.push(block.to_vec()));
        assert_eq!(spilled.len(), 1);
        assert_eq!(spilled[0][56], 0x80);
        assert_eq!(spilled[0][57..], [0u8; 7]);
        // The second padding block is all zeros up to the length field.
        assert_eq!(buf.position(), 56);
    }

    #[test]
    #[should_panic]
    fn zero_until_cannot_rewind() {
        let mut buf = FixedBuffer64::new();
        buf.next(10);
        buf.zero_until(5);
    }
}

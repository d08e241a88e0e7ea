//! Utility functions used across the library.

/// XORs two 16-byte blocks and writes the result to `output`.
///
/// Used by the CBC chaining paths and by the test-side encryptors.
///
/// # Panics (by contract)
///
/// Panics if any argument is shorter than 16 bytes. Callers always pass
/// exact-size cipher blocks.
#[inline(always)]
pub fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    for i in 0..16 {
        output[i] = block_a[i] ^ block_b[i];
    }
}

/// Decode a little-endian u32 from the first 4 bytes of `buf`.
///
/// # Panics (by contract)
///
/// Panics if `buf.len() < 4`.
#[inline(always)]
pub fn load_le32(buf: &[u8]) -> u32 {
    u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]])
}

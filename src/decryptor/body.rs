//! Body decryption — Twofish-256 in CBC mode.
//!
//! The body is everything between the prologue and the 48-byte footer.
//! Decryption is eager: the whole body fits comfortably in memory for
//! realistic vault sizes, and the plaintext buffer wipes itself on
//! drop. This stage knows nothing about field structure.

use twofish::cipher::{BlockDecrypt, KeyInit};
use twofish::Twofish;
use zeroize::Zeroizing;

use crate::consts::{BLOCK_SIZE, HASH_SIZE};
use crate::crypto::TwofishBlock;
use crate::error::Psafe3Error;
use crate::utils::xor_blocks;

/// Decrypt `ciphertext` with standard CBC chaining: each plaintext
/// block is the block decryption XORed with the previous ciphertext
/// block, seeded by `iv`.
///
/// Output length equals input length. Fails with `MalformedBody` when
/// the input is not a whole number of cipher blocks.
pub fn decrypt_body(
    ciphertext: &[u8],
    key: &[u8; HASH_SIZE],
    iv: &[u8; BLOCK_SIZE],
) -> Result<Zeroizing<Vec<u8>>, Psafe3Error> {
    if ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(Psafe3Error::MalformedBody(
            "body length is not a multiple of the cipher block size",
        ));
    }

    let cipher = Twofish::new_from_slice(key)
        .map_err(|_| Psafe3Error::CryptoEngine("invalid Twofish key length"))?;

    let mut plaintext = Zeroizing::new(vec![0u8; ciphertext.len()]);
    let mut prev = *iv;

    for (chunk, out) in ciphertext
        .chunks_exact(BLOCK_SIZE)
        .zip(plaintext.chunks_exact_mut(BLOCK_SIZE))
    {
        let mut block = TwofishBlock::clone_from_slice(chunk);
        cipher.decrypt_block(&mut block);
        xor_blocks(&block, &prev, out);
        prev.copy_from_slice(chunk);
    }

    Ok(plaintext)
}

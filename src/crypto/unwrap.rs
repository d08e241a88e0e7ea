//! Working-key recovery from the prologue's wrapped key blocks.
//!
//! Each 32-byte working key is stored as two independent 16-byte
//! Twofish-ECB ciphertext blocks keyed by the stretched key. There is
//! no chaining between the two halves.

use twofish::cipher::{BlockDecrypt, KeyInit};
use twofish::Twofish;
use zeroize::Zeroizing;

use crate::consts::{BLOCK_SIZE, HASH_SIZE};
use crate::crypto::TwofishBlock;
use crate::error::Psafe3Error;
use crate::secrets::{StretchedKey, WorkingKeys};

/// Decrypt one wrapped-key pair into a 32-byte working key.
///
/// `block_a` and `block_b` are decrypted independently under the
/// stretched key and concatenated. The result wipes itself on drop.
pub fn recover_working_key(
    stretched: &StretchedKey,
    block_a: &[u8; BLOCK_SIZE],
    block_b: &[u8; BLOCK_SIZE],
) -> Result<Zeroizing<[u8; HASH_SIZE]>, Psafe3Error> {
    let cipher = Twofish::new_from_slice(stretched.as_bytes())
        .map_err(|_| Psafe3Error::CryptoEngine("invalid Twofish key length"))?;

    let mut key = Zeroizing::new([0u8; HASH_SIZE]);
    for (half, wrapped) in [block_a, block_b].into_iter().enumerate() {
        let mut block = TwofishBlock::clone_from_slice(wrapped);
        cipher.decrypt_block(&mut block);
        key[half * BLOCK_SIZE..(half + 1) * BLOCK_SIZE].copy_from_slice(&block);
    }
    Ok(key)
}

/// Recover both working keys from the four wrapped blocks:
/// (b0, b1) → cipher key K, (b2, b3) → HMAC key L.
pub fn recover_working_keys(
    stretched: &StretchedKey,
    wrapped: &[[u8; BLOCK_SIZE]; 4],
) -> Result<WorkingKeys, Psafe3Error> {
    let cipher_key = recover_working_key(stretched, &wrapped[0], &wrapped[1])?;
    let hmac_key = recover_working_key(stretched, &wrapped[2], &wrapped[3])?;
    Ok(WorkingKeys::new(*cipher_key, *hmac_key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::kdf::stretch_key;
    use twofish::cipher::BlockEncrypt;

    fn wrap(stretched: &StretchedKey, key: &[u8; 32]) -> ([u8; 16], [u8; 16]) {
        let cipher = Twofish::new_from_slice(stretched.as_bytes()).unwrap();
        let mut a = TwofishBlock::clone_from_slice(&key[..16]);
        let mut b = TwofishBlock::clone_from_slice(&key[16..]);
        cipher.encrypt_block(&mut a);
        cipher.encrypt_block(&mut b);
        (a.into(), b.into())
    }

    #[test]
    fn unwrap_inverts_ecb_wrap() {
        let stretched = stretch_key(b"passphrase", &[7u8; 32], 3);
        let original: [u8; 32] = core::array::from_fn(|i| (i * 3) as u8);
        let (a, b) = wrap(&stretched, &original);
        let recovered = recover_working_key(&stretched, &a, &b).unwrap();
        assert_eq!(*recovered, original);
    }

    #[test]
    fn recovery_is_deterministic() {
        let stretched = stretch_key(b"passphrase", &[7u8; 32], 3);
        let a = [0xa5u8; 16];
        let b = [0x5au8; 16];
        let first = recover_working_key(&stretched, &a, &b).unwrap();
        let second = recover_working_key(&stretched, &a, &b).unwrap();
        assert_eq!(*first, *second);
    }

    #[test]
    fn pairs_map_to_cipher_and_hmac_keys() {
        let stretched = stretch_key(b"x", &[1u8; 32], 1);
        let k: [u8; 32] = [0x11; 32];
        let l: [u8; 32] = [0x22; 32];
        let (b0, b1) = wrap(&stretched, &k);
        let (b2, b3) = wrap(&stretched, &l);
        let keys = recover_working_keys(&stretched, &[b0, b1, b2, b3]).unwrap();
        assert_eq!(keys.cipher_key(), &k);
        assert_eq!(keys.hmac_key(), &l);
    }
}

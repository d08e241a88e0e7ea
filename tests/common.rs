//! tests/common.rs
//! Shared fixture builder: constructs well-formed PWS3 file images in
//! memory so the decode pipeline can be tested end to end without
//! shipping binary fixtures.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use twofish::cipher::{BlockEncrypt, KeyInit};
use twofish::Twofish;

pub type HmacSha256 = Hmac<Sha256>;

pub const BLOCK_SIZE: usize = 16;
pub const EOF_MARKER: &[u8; 16] = b"PWS3-EOFPWS3-EOF";

/// Standard passphrase used across the end-to-end tests.
pub const TEST_PASSPHRASE: &[u8] = b"test";

/// Fast iteration count for tests.
pub const TEST_ITERATIONS: u32 = 1;

pub const TEST_SALT: [u8; 32] = [0x53; 32];
pub const TEST_IV: [u8; 16] = [0x1f; 16];
pub const TEST_CIPHER_KEY: [u8; 32] = [0xc1; 32];
pub const TEST_HMAC_KEY: [u8; 32] = [0xa7; 32];

fn xor16(a: &[u8], b: &[u8]) -> [u8; 16] {
    core::array::from_fn(|i| a[i] ^ b[i])
}

/// Iterated-SHA256 stretch, mirroring the format definition
/// independently of the library under test.
pub fn stretch(passphrase: &[u8], salt: &[u8; 32], iterations: u32) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(passphrase);
    hasher.update(salt);
    let mut state: [u8; 32] = hasher.finalize().into();
    for _ in 0..iterations {
        state = Sha256::digest(state).into();
    }
    state
}

/// Twofish-ECB wrap of a 32-byte working key into two 16-byte blocks.
fn wrap_key(stretched: &[u8; 32], key: &[u8; 32]) -> ([u8; 16], [u8; 16]) {
    let cipher = Twofish::new_from_slice(stretched).unwrap();
    let mut halves = [[0u8; 16]; 2];
    for (half, out) in halves.iter_mut().enumerate() {
        let mut block = twofish::cipher::Block::<Twofish>::clone_from_slice(
            &key[half * 16..(half + 1) * 16],
        );
        cipher.encrypt_block(&mut block);
        out.copy_from_slice(&block);
    }
    (halves[0], halves[1])
}

/// Encode one record: LE length, type byte, value, padding to a block
/// boundary. Padding bytes are fixed junk; they must never show up in
/// decoded values or in the HMAC.
pub fn encode_record(field_type: u8, value: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&(value.len() as u32).to_le_bytes());
    out.push(field_type);
    out.extend_from_slice(value);
    while out.len() % BLOCK_SIZE != 0 {
        out.push(0xEE);
    }
    out
}

fn cbc_encrypt(plaintext: &[u8], key: &[u8; 32], iv: &[u8; 16]) -> Vec<u8> {
    assert_eq!(plaintext.len() % BLOCK_SIZE, 0);
    let cipher = Twofish::new_from_slice(key).unwrap();
    let mut out = Vec::with_capacity(plaintext.len());
    let mut prev = *iv;
    for chunk in plaintext.chunks_exact(BLOCK_SIZE) {
        let mut block = twofish::cipher::Block::<Twofish>::from(xor16(chunk, &prev));
        cipher.encrypt_block(&mut block);
        prev.copy_from_slice(&block);
        out.extend_from_slice(&block);
    }
    out
}

/// Build a complete PWS3 file image containing the given fields, with
/// a correct verification hash, wrapped keys, and authentication tag.
pub fn build_vault(passphrase: &[u8], iterations: u32, fields: &[(u8, &[u8])]) -> Vec<u8> {
    let stretched = stretch(passphrase, &TEST_SALT, iterations);
    let verification_hash: [u8; 32] = Sha256::digest(stretched).into();
    let (b0, b1) = wrap_key(&stretched, &TEST_CIPHER_KEY);
    let (b2, b3) = wrap_key(&stretched, &TEST_HMAC_KEY);

    let mut plaintext = Vec::new();
    let mut mac = <HmacSha256 as Mac>::new_from_slice(&TEST_HMAC_KEY).unwrap();
    for (field_type, value) in fields {
        plaintext.extend(encode_record(*field_type, value));
        mac.update(value);
    }
    let tag: [u8; 32] = mac.finalize().into_bytes().into();

    let mut file = Vec::new();
    file.extend_from_slice(b"PWS3");
    file.extend_from_slice(&TEST_SALT);
    file.extend_from_slice(&iterations.to_le_bytes());
    file.extend_from_slice(&verification_hash);
    for block in [b0, b1, b2, b3] {
        file.extend_from_slice(&block);
    }
    file.extend_from_slice(&TEST_IV);
    file.extend(cbc_encrypt(&plaintext, &TEST_CIPHER_KEY, &TEST_IV));
    file.extend_from_slice(EOF_MARKER);
    file.extend_from_slice(&tag);
    file
}

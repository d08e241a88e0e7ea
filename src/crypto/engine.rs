//! Process-wide crypto engine lifecycle.
//!
//! The reference library exposes explicit `init`/`term` calls for its
//! crypto backend. The RustCrypto primitives need no global state, but
//! the lifecycle contract is kept: [`init`] must succeed before the
//! first decode, [`term`] follows the last one, and both are idempotent
//! and cheap to call again. [`init`] runs a SHA-256 known-answer check
//! once; a failure is permanent for the life of the process.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

use sha2::{Digest, Sha256};

use crate::error::Psafe3Error;

static INIT: Once = Once::new();
static HEALTHY: AtomicBool = AtomicBool::new(false);

/// SHA-256 of the empty input, the standard known-answer vector.
const SHA256_EMPTY: [u8; 32] = [
    0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14, 0x9a, 0xfb, 0xf4, 0xc8, 0x99, 0x6f, 0xb9,
    0x24, 0x27, 0xae, 0x41, 0xe4, 0x64, 0x9b, 0x93, 0x4c, 0xa4, 0x95, 0x99, 0x1b, 0x78, 0x52,
    0xb8, 0x55,
];

/// Bring up the crypto engine. Safe to call more than once; the
/// self-test runs only the first time.
pub fn init() -> Result<(), Psafe3Error> {
    INIT.call_once(|| {
        let digest: [u8; 32] = Sha256::digest([]).into();
        HEALTHY.store(digest == SHA256_EMPTY, Ordering::Release);
    });
    if HEALTHY.load(Ordering::Acquire) {
        Ok(())
    } else {
        Err(Psafe3Error::CryptoEngine("SHA-256 self-test failed"))
    }
}

/// Shut down the crypto engine. The pure-Rust primitives hold no
/// process-wide resources, so this only exists to honor the lifecycle
/// contract; it is idempotent and never fails.
pub fn term() {}

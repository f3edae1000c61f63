//! One-shot digests for the standard variants.
//!
//! | Function      | Variant      | Output |
//! |---------------|--------------|--------|
//! | [`keccak224`] | Keccak-224   | 28 bytes |
//! | [`keccak256`] | Keccak-256   | 32 bytes |
//! | [`keccak384`] | Keccak-384   | 48 bytes |
//! | [`keccak512`] | Keccak-512   | 64 bytes |

use crate::params::{ByteArray, Keccak224, Keccak256, Keccak384, Keccak512, Variant};

/// Full-length digest of `input` for variant `V`.
#[inline]
pub fn digest<V: Variant>(input: impl AsRef<[u8]>) -> V::Output {
    let mut out = V::Output::zeroed();
    keccak_r3_sponge::keccak(V::SIZE.sponge_rate(), input.as_ref(), out.as_mut());
    out
}

/// Keccak-224(input) -> 28 bytes.
#[inline]
pub fn keccak224(input: impl AsRef<[u8]>) -> [u8; 28] {
    digest::<Keccak224>(input)
}

/// Keccak-256(input) -> 32 bytes.
#[inline]
pub fn keccak256(input: impl AsRef<[u8]>) -> [u8; 32] {
    digest::<Keccak256>(input)
}

/// Keccak-384(input) -> 48 bytes.
#[inline]
pub fn keccak384(input: impl AsRef<[u8]>) -> [u8; 48] {
    digest::<Keccak384>(input)
}

/// Keccak-512(input) -> 64 bytes.
#[inline]
pub fn keccak512(input: impl AsRef<[u8]>) -> [u8; 64] {
    digest::<Keccak512>(input)
}

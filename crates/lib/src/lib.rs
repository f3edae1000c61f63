//! `keccak-r3` -- Keccak message digests as submitted to round 3 of the SHA-3
//! competition.
//!
//! These are *not* FIPS 202 SHA-3: the message is padded with the
//! domain-separation byte `0x01` (and the closing `0x80` bit of pad10*1)
//! rather than SHA-3's `0x06`. This is the variant commonly called
//! "Keccak-256" in Ethereum and elsewhere.
//!
//! A digest size of `d` bytes selects rate `200 - 2d` and capacity `2d`.
//! The four standard sizes have marker types ([`Keccak224`], [`Keccak256`],
//! [`Keccak384`], [`Keccak512`]); any `d` in `1..=99` is accepted by
//! [`Keccak::new`].
//!
//! ```
//! use keccak_r3::{Keccak, keccak256};
//!
//! let mut hasher = Keccak::keccak256();
//! hasher.update(b"ab")?;
//! hasher.update(b"c")?;
//! let digest = hasher.finalize_full()?;
//! assert_eq!(digest.as_ref(), keccak256(b"abc"));
//! # Ok::<(), keccak_r3::Error>(())
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

pub mod hash;
pub mod hasher;
pub mod params;
pub mod types;

pub use hash::{digest, keccak224, keccak256, keccak384, keccak512};
pub use hasher::Keccak;
pub use keccak_r3_sponge::Phase;
pub use keccak_r3_perm as perm;
pub use keccak_r3_sponge as sponge;
pub use params::{
    ByteArray, DigestSize, Keccak224, Keccak256, Keccak384, Keccak512, MAX_DIGEST_SIZE,
    STATE_BYTES, Variant,
};
pub use types::{AlgorithmName, Digest};

use keccak_r3_sponge::SpongeError;

/// Errors returned by [`Keccak`] and [`DigestSize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Digest size outside `1..=MAX_DIGEST_SIZE`.
    #[error("invalid digest size {size}: expected 1..={max} bytes", max = MAX_DIGEST_SIZE)]
    InvalidDigestSize {
        /// Rejected size in bytes.
        size: usize,
    },
    /// Finalize asked for more bytes than the configured digest size.
    #[error("requested {requested} output bytes from a {digest_size}-byte digest")]
    OutputTooLong {
        /// Bytes requested by the caller.
        requested: usize,
        /// Configured digest size.
        digest_size: usize,
    },
    /// [`Keccak::verify`] was given an empty tag, which would match any
    /// message.
    #[error("expected digest is empty")]
    EmptyTag,
    /// Update or finalize on a hasher that was already finalized.
    #[error("hasher already finalized; call reset before reuse")]
    Finalized,
}

impl From<SpongeError> for Error {
    fn from(err: SpongeError) -> Self {
        match err {
            SpongeError::Finalized => Self::Finalized,
            SpongeError::InvalidRate { rate } => Self::InvalidDigestSize {
                size: STATE_BYTES.saturating_sub(rate) / 2,
            },
        }
    }
}

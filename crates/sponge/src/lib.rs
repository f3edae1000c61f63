//! Byte-oriented Keccak sponge with the round-3 multi-rate padding.
//!
//! The sponge absorbs bytes at an arbitrary even rate, pads with the
//! domain-separation byte [`KECCAK_PAD`] at the current offset plus
//! [`FINAL_BIT`] in the last byte of the block, and squeezes any number of
//! bytes. The rate is fixed per instance; see [`Rate`].
//!
//! Both [`Sponge`] (incremental, with an explicit absorbing/finalized state
//! machine) and [`keccak`] (one-shot) are driven by the same internal
//! absorb/pad/squeeze routines.

#![no_std]
#![deny(unsafe_code)]

mod sponge;

pub use keccak_r3_perm::{PLEN, STATE_BYTES};
pub use sponge::{Phase, Sponge, keccak};

/// Round-3 Keccak domain-separation byte, XORed at the end of the message.
pub const KECCAK_PAD: u8 = 0x01;

/// Domain-separation suffix written by the padding.
///
/// Every suffix byte is nonzero with bit 7 clear, so it can never cancel
/// [`FINAL_BIT`] when both land in the last byte of a block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Round-3 Keccak, [`KECCAK_PAD`].
    #[default]
    Keccak,
    /// FIPS-202 SHA-3 framing (`0x06`); cross-checks only.
    #[doc(hidden)]
    Sha3,
    /// FIPS-202 SHAKE framing (`0x1F`); cross-checks only.
    #[doc(hidden)]
    Shake,
}

impl Domain {
    /// Every domain, for exhaustive checks.
    pub(crate) const ALL: [Self; 3] = [Self::Keccak, Self::Sha3, Self::Shake];

    /// Suffix byte XORed at the end of the message.
    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        match self {
            Self::Keccak => KECCAK_PAD,
            Self::Sha3 => 0x06,
            Self::Shake => 0x1F,
        }
    }
}

/// Closing bit of pad10*1, XORed into the last byte of the rate block.
pub const FINAL_BIT: u8 = 0x80;

/// Smallest rate accepted by [`Rate::new`].
pub const MIN_RATE: usize = 2;

/// Largest rate accepted by [`Rate::new`].
pub const MAX_RATE: usize = STATE_BYTES - 2;

/// Errors reported by the sponge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SpongeError {
    /// Rate outside `MIN_RATE..=MAX_RATE` or odd.
    #[error(
        "invalid sponge rate {rate}: expected an even value in {min}..={max}",
        min = MIN_RATE,
        max = MAX_RATE
    )]
    InvalidRate {
        /// Rejected rate in bytes.
        rate: usize,
    },
    /// Absorb or finalize after the sponge was already finalized.
    #[error("sponge already finalized; reset before reuse")]
    Finalized,
}

/// Validated sponge rate in bytes.
///
/// The capacity is always `STATE_BYTES - rate`. Rates are even because they
/// come from `200 - 2d` for a digest of `d` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rate(usize);

impl Rate {
    /// Validate `bytes` as a rate.
    pub const fn new(bytes: usize) -> Result<Self, SpongeError> {
        if bytes < MIN_RATE || bytes > MAX_RATE || bytes % 2 != 0 {
            return Err(SpongeError::InvalidRate { rate: bytes });
        }
        Ok(Self(bytes))
    }

    /// Rate in bytes.
    #[inline]
    #[must_use]
    pub const fn bytes(self) -> usize {
        self.0
    }

    /// Capacity in bytes (`STATE_BYTES - rate`).
    #[inline]
    #[must_use]
    pub const fn capacity(self) -> usize {
        STATE_BYTES - self.0
    }
}

const _: () = {
    assert!(STATE_BYTES == 200);
    let mut i = 0;
    while i < Domain::ALL.len() {
        let byte = Domain::ALL[i].byte();
        assert!(byte != 0 && byte & FINAL_BIT == 0);
        i += 1;
    }
};

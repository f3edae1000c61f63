//! Incremental Keccak hasher.
//!
//! One engine type covers every digest size; the presets only pick the
//! size. A hasher is created absorbing, accepts any number of
//! [`update`](Keccak::update) calls, is finalized once, and must be
//! [`reset`](Keccak::reset) before it hashes another message.

use keccak_r3_sponge::{Phase, Sponge};
use subtle::ConstantTimeEq;
use tracing::{debug, trace};

use crate::{
    Error,
    params::{DigestSize, Keccak224, Keccak256, Keccak384, Keccak512, Variant},
    types::{AlgorithmName, Digest},
};

/// Keccak hasher with a digest size fixed at construction.
#[derive(Clone, Debug)]
pub struct Keccak {
    sponge: Sponge,
    digest_size: DigestSize,
}

impl Keccak {
    /// Hasher producing `digest_size` bytes; `digest_size` must be in
    /// `1..=99`.
    pub fn new(digest_size: usize) -> Result<Self, Error> {
        let size = DigestSize::new(digest_size).inspect_err(|_| {
            debug!(digest_size, "rejected digest size");
        })?;
        Ok(Self::with_digest_size(size))
    }

    #[must_use]
    pub const fn with_digest_size(digest_size: DigestSize) -> Self {
        Self {
            sponge: Sponge::new(digest_size.sponge_rate()),
            digest_size,
        }
    }

    /// Hasher for a preset.
    #[must_use]
    pub const fn of<V: Variant>() -> Self {
        Self::with_digest_size(V::SIZE)
    }

    #[must_use]
    pub const fn keccak224() -> Self {
        Self::of::<Keccak224>()
    }

    #[must_use]
    pub const fn keccak256() -> Self {
        Self::of::<Keccak256>()
    }

    #[must_use]
    pub const fn keccak384() -> Self {
        Self::of::<Keccak384>()
    }

    #[must_use]
    pub const fn keccak512() -> Self {
        Self::of::<Keccak512>()
    }

    /// Absorb more message bytes.
    pub fn update(&mut self, data: &[u8]) -> Result<(), Error> {
        self.sponge.absorb(data)?;
        Ok(())
    }

    /// Builder-style [`update`](Self::update).
    pub fn chain(mut self, data: impl AsRef<[u8]>) -> Result<Self, Error> {
        self.update(data.as_ref())?;
        Ok(self)
    }

    /// Zero the state and start a new message. Valid in any phase.
    pub fn reset(&mut self) {
        self.sponge.reset();
    }

    /// Finalize into `out`, producing `out.len()` bytes.
    ///
    /// `out.len()` may be anything up to the digest size; shorter outputs are
    /// prefixes of the full digest. The length is checked before the phase,
    /// and a rejected call leaves the hasher untouched.
    pub fn truncated_finalize_into(&mut self, out: &mut [u8]) -> Result<(), Error> {
        if out.len() > self.digest_size() {
            return Err(self.output_too_long(out.len()));
        }
        self.sponge.finalize(out)?;
        trace!(algorithm = %self.algorithm_name(), len = out.len(), "finalized");
        Ok(())
    }

    /// Finalize and return the first `size` bytes of the digest.
    pub fn finalize(&mut self, size: usize) -> Result<Digest, Error> {
        if size > self.digest_size() {
            return Err(self.output_too_long(size));
        }
        let mut digest = Digest::zeroed(size);
        self.truncated_finalize_into(digest.as_mut_slice())?;
        Ok(digest)
    }

    /// Finalize and return the full digest.
    pub fn finalize_full(&mut self) -> Result<Digest, Error> {
        self.finalize(self.digest_size())
    }

    /// Finalize to `expected.len()` bytes and compare in constant time.
    ///
    /// An empty `expected` is rejected with [`Error::EmptyTag`] and leaves
    /// the hasher untouched.
    pub fn verify(&mut self, expected: &[u8]) -> Result<bool, Error> {
        if expected.is_empty() {
            debug!(algorithm = %self.algorithm_name(), "rejected empty tag");
            return Err(Error::EmptyTag);
        }
        let actual = self.finalize(expected.len())?;
        Ok(actual.as_bytes().ct_eq(expected).into())
    }

    /// One-shot truncated digest with a custom size.
    pub fn calculate_truncated(
        digest_size: usize, input: impl AsRef<[u8]>, size: usize,
    ) -> Result<Digest, Error> {
        let mut hasher = Self::new(digest_size)?;
        hasher.update(input.as_ref())?;
        hasher.finalize(size)
    }

    /// Configured digest size in bytes.
    #[inline]
    #[must_use]
    pub const fn digest_size(&self) -> usize {
        self.digest_size.bytes()
    }

    #[inline]
    #[must_use]
    pub const fn digest_size_param(&self) -> DigestSize {
        self.digest_size
    }

    /// Bytes absorbed per permutation (the rate).
    #[inline]
    #[must_use]
    pub const fn block_size(&self) -> usize {
        self.digest_size.rate()
    }

    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.digest_size.capacity()
    }

    #[inline]
    #[must_use]
    pub const fn algorithm_name(&self) -> AlgorithmName {
        self.digest_size.algorithm_name()
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.sponge.phase()
    }

    /// Bytes absorbed into the current block, `0..block_size()`.
    #[inline]
    #[must_use]
    pub const fn buffered(&self) -> usize {
        self.sponge.position()
    }

    fn output_too_long(&self, requested: usize) -> Error {
        debug!(algorithm = %self.algorithm_name(), requested, "rejected oversized finalize");
        Error::OutputTooLong {
            requested,
            digest_size: self.digest_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn presets_report_sizes() {
        assert_eq!(Keccak::keccak224().digest_size(), 28);
        assert_eq!(Keccak::keccak256().digest_size(), 32);
        assert_eq!(Keccak::keccak384().digest_size(), 48);
        assert_eq!(Keccak::keccak512().digest_size(), 64);
        assert_eq!(Keccak::keccak256().block_size(), 136);
        assert_eq!(Keccak::keccak512().capacity(), 128);
        assert_eq!(Keccak::keccak384().algorithm_name().bits(), 384);
    }

    #[test]
    fn new_rejects_bad_sizes() {
        assert_eq!(Keccak::new(0).err(), Some(Error::InvalidDigestSize { size: 0 }));
        assert_eq!(Keccak::new(100).err(), Some(Error::InvalidDigestSize { size: 100 }));
        assert!(Keccak::new(99).is_ok());
        assert!(Keccak::new(1).is_ok());
    }

    #[test]
    fn empty_keccak256() {
        let digest = Keccak::keccak256().finalize_full().expect("fresh hasher");
        assert_eq!(
            digest.as_bytes(),
            hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
        );
    }

    #[test]
    fn oversized_finalize_is_rejected_without_state_change() {
        let mut hasher = Keccak::keccak224();
        hasher.update(b"abc").expect("absorbing");
        assert_eq!(
            hasher.finalize(29).err(),
            Some(Error::OutputTooLong {
                requested: 29,
                digest_size: 28
            })
        );
        let mut big = [0u8; 40];
        assert_eq!(
            hasher.truncated_finalize_into(&mut big),
            Err(Error::OutputTooLong {
                requested: 40,
                digest_size: 28
            })
        );
        assert_eq!(hasher.phase(), Phase::Absorbing);
        assert_eq!(hasher.buffered(), 3);
        assert!(hasher.finalize(28).is_ok());
    }

    #[test]
    fn second_finalize_and_update_fail() {
        let mut hasher = Keccak::keccak256();
        hasher.finalize_full().expect("fresh hasher");
        assert_eq!(hasher.finalize_full().err(), Some(Error::Finalized));
        assert_eq!(hasher.update(b"x"), Err(Error::Finalized));
        hasher.reset();
        assert!(hasher.update(b"x").is_ok());
    }

    #[test]
    fn verify_accepts_prefix_and_rejects_mismatch() {
        let full = Keccak::keccak256()
            .chain(b"abc")
            .and_then(|mut h| h.finalize_full())
            .expect("fresh hasher");

        let mut hasher = Keccak::keccak256().chain(b"abc").expect("absorbing");
        assert_eq!(hasher.verify(full.as_bytes()), Ok(true));

        hasher.reset();
        hasher.update(b"abc").expect("absorbing");
        assert_eq!(hasher.verify(&full.as_bytes()[..16]), Ok(true));

        hasher.reset();
        hasher.update(b"abd").expect("absorbing");
        assert_eq!(hasher.verify(full.as_bytes()), Ok(false));

        hasher.reset();
        hasher.update(b"another message").expect("absorbing");
        assert_eq!(hasher.verify(&[]), Err(Error::EmptyTag));
        assert_eq!(hasher.phase(), Phase::Absorbing);
        assert_eq!(hasher.verify(&full.as_bytes()[..1]), Ok(false));

        hasher.reset();
        assert_eq!(
            hasher.verify(&[0u8; 33]),
            Err(Error::OutputTooLong {
                requested: 33,
                digest_size: 32
            })
        );
    }

    #[test]
    fn calculate_truncated_is_prefix() {
        let full = Keccak::calculate_truncated(48, b"message", 48).expect("valid");
        let short = Keccak::calculate_truncated(48, b"message", 5).expect("valid");
        assert_eq!(short.as_bytes(), &full.as_bytes()[..5]);
        assert_eq!(
            Keccak::calculate_truncated(0, b"message", 0).err(),
            Some(Error::InvalidDigestSize { size: 0 })
        );
    }
}

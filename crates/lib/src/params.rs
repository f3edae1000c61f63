//! Digest-size configuration. [`DigestSize`] for arbitrary sizes, the
//! [`Variant`] trait and marker types Keccak224, Keccak256, Keccak384,
//! Keccak512 for the standard ones.

pub use keccak_r3_sponge::STATE_BYTES;
use keccak_r3_sponge::Rate;
use zeroize::Zeroize;

use crate::{Error, types::AlgorithmName};

/// Largest accepted digest size in bytes; 100 would leave a zero rate.
pub const MAX_DIGEST_SIZE: usize = STATE_BYTES / 2 - 1;

/// Validated digest size `d` in bytes, `1..=MAX_DIGEST_SIZE`.
///
/// Rate and capacity are derived: `r = 200 - 2d`, `c = 2d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigestSize {
    size: usize,
    rate: Rate,
}

impl DigestSize {
    /// Validate `size` (in bytes).
    pub const fn new(size: usize) -> Result<Self, Error> {
        if size == 0 || size > MAX_DIGEST_SIZE {
            return Err(Error::InvalidDigestSize { size });
        }
        match Rate::new(STATE_BYTES - 2 * size) {
            Ok(rate) => Ok(Self { size, rate }),
            Err(_) => Err(Error::InvalidDigestSize { size }),
        }
    }

    /// Digest size in bytes.
    #[inline]
    #[must_use]
    pub const fn bytes(self) -> usize {
        self.size
    }

    /// Digest size in bits.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> usize {
        self.size * 8
    }

    /// Rate in bytes, `200 - 2d`.
    #[inline]
    #[must_use]
    pub const fn rate(self) -> usize {
        self.rate.bytes()
    }

    /// Capacity in bytes, `2d`.
    #[inline]
    #[must_use]
    pub const fn capacity(self) -> usize {
        self.rate.capacity()
    }

    /// The sponge rate parameter for this size.
    #[inline]
    #[must_use]
    pub const fn sponge_rate(self) -> Rate {
        self.rate
    }

    /// `"Keccak-{8d}"`.
    #[inline]
    #[must_use]
    pub const fn algorithm_name(self) -> AlgorithmName {
        AlgorithmName::new(self.bits())
    }
}

impl TryFrom<usize> for DigestSize {
    type Error = Error;

    fn try_from(size: usize) -> Result<Self, Error> {
        Self::new(size)
    }
}

/// Fixed-size byte buffer holding a preset's digest.
pub trait ByteArray:
    AsRef<[u8]> + AsMut<[u8]> + Clone + core::fmt::Debug + Zeroize + Send + Sync + 'static {
    /// Array length in bytes.
    const LEN: usize;

    /// Return a zero-filled instance.
    fn zeroed() -> Self;
}

impl<const SIZE: usize> ByteArray for [u8; SIZE] {
    const LEN: usize = SIZE;

    #[inline]
    fn zeroed() -> Self {
        [0u8; SIZE]
    }
}

/// Standard Keccak variant implemented by Keccak224, Keccak256, Keccak384,
/// Keccak512.
pub trait Variant: 'static {
    /// Digest size in bytes.
    const DIGEST_SIZE: usize;
    /// Static copy of the display name, `"Keccak-{8 * DIGEST_SIZE}"`.
    ///
    /// The name is derived from the digest size by
    /// [`DigestSize::algorithm_name`]; this constant only mirrors it for
    /// `const` contexts and is checked against the derivation at compile
    /// time.
    const NAME: &'static str;
    /// Validated size; evaluating this for an out-of-range preset fails the
    /// build.
    const SIZE: DigestSize = match DigestSize::new(Self::DIGEST_SIZE) {
        Ok(size) => size,
        Err(_) => panic!("preset digest size out of range"),
    };

    /// Backing array for a full-length digest.
    type Output: ByteArray;
}

/// Keccak-224 (28-byte digest, rate 144).
#[derive(Debug, Clone, Copy)]
pub struct Keccak224;

impl Variant for Keccak224 {
    const DIGEST_SIZE: usize = 28;
    const NAME: &'static str = "Keccak-224";

    type Output = [u8; 28];
}

/// Keccak-256 (32-byte digest, rate 136).
#[derive(Debug, Clone, Copy)]
pub struct Keccak256;

impl Variant for Keccak256 {
    const DIGEST_SIZE: usize = 32;
    const NAME: &'static str = "Keccak-256";

    type Output = [u8; 32];
}

/// Keccak-384 (48-byte digest, rate 104).
#[derive(Debug, Clone, Copy)]
pub struct Keccak384;

impl Variant for Keccak384 {
    const DIGEST_SIZE: usize = 48;
    const NAME: &'static str = "Keccak-384";

    type Output = [u8; 48];
}

/// Keccak-512 (64-byte digest, rate 72).
#[derive(Debug, Clone, Copy)]
pub struct Keccak512;

impl Variant for Keccak512 {
    const DIGEST_SIZE: usize = 64;
    const NAME: &'static str = "Keccak-512";

    type Output = [u8; 64];
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = {
    // --- Structural invariants ---
    macro_rules! check_variant {
        ($t:ty, $name:literal, $rate:literal) => {
            assert!(<$t>::SIZE.rate() + <$t>::SIZE.capacity() == STATE_BYTES);
            assert!(<$t>::SIZE.capacity() == 2 * <$t>::DIGEST_SIZE);
            assert!(<$t>::SIZE.rate() == $rate);
            assert!(<<$t as Variant>::Output as ByteArray>::LEN == <$t>::DIGEST_SIZE);
            assert!(str_eq(<$t>::NAME, $name));
        };
    }
    check_variant!(Keccak224, "Keccak-224", 144);
    check_variant!(Keccak256, "Keccak-256", 136);
    check_variant!(Keccak384, "Keccak-384", 104);
    check_variant!(Keccak512, "Keccak-512", 72);

    assert!(MAX_DIGEST_SIZE == 99);
};

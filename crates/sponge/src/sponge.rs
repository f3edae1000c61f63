//! Incremental and one-shot sponge.
//!
//! The state is addressed as 200 bytes, little-endian within each lane. All
//! control flow depends only on the rate, the current offset, and input or
//! output lengths; byte values are only ever XORed or copied.

use core::fmt;

use keccak_r3_perm::{PLEN, f1600};
use tracing::{debug, trace};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{Domain, FINAL_BIT, Rate, SpongeError};

/// Lifecycle of a [`Sponge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Accepting input; the initial state and the state after a reset.
    Absorbing,
    /// Output has been produced; only [`Sponge::reset`] is accepted.
    Finalized,
}

/// Keccak sponge with a fixed rate and domain-separation byte.
///
/// Invariant: `position < rate` whenever the sponge is absorbing.
#[derive(Clone)]
pub struct Sponge {
    state: [u64; PLEN],
    position: usize,
    rate: Rate,
    domain: Domain,
    phase: Phase,
}

impl Sponge {
    /// Zeroed sponge using the round-3 Keccak padding.
    #[must_use]
    pub const fn new(rate: Rate) -> Self {
        Self::with_domain(rate, Domain::Keccak)
    }

    /// Zeroed sponge with the given domain-separation suffix.
    #[must_use]
    pub const fn with_domain(rate: Rate, domain: Domain) -> Self {
        Self {
            state: [0; PLEN],
            position: 0,
            rate,
            domain,
            phase: Phase::Absorbing,
        }
    }

    /// XOR `input` into the state, permuting after every full block.
    ///
    /// Splitting a message across any number of calls gives the same state
    /// as a single call with the concatenation.
    pub fn absorb(&mut self, input: &[u8]) -> Result<(), SpongeError> {
        self.ensure_absorbing("absorb")?;
        self.position = absorb(&mut self.state, self.position, self.rate.bytes(), input);
        Ok(())
    }

    /// Pad, permute, and squeeze `out.len()` bytes.
    ///
    /// Moves the sponge to [`Phase::Finalized`].
    pub fn finalize(&mut self, out: &mut [u8]) -> Result<(), SpongeError> {
        self.ensure_absorbing("finalize")?;
        let rate = self.rate.bytes();
        pad(&mut self.state, self.position, rate, self.domain.byte());
        squeeze(&mut self.state, rate, out);
        self.position = 0;
        self.phase = Phase::Finalized;
        trace!(rate, out_len = out.len(), "sponge finalized");
        Ok(())
    }

    /// Zero the state and return to [`Phase::Absorbing`].
    pub fn reset(&mut self) {
        self.state.zeroize();
        self.position = 0;
        self.phase = Phase::Absorbing;
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn rate(&self) -> Rate {
        self.rate
    }

    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.rate.capacity()
    }

    #[inline]
    #[must_use]
    pub const fn domain(&self) -> Domain {
        self.domain
    }

    /// Bytes absorbed into the current, not yet permuted, block.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    fn ensure_absorbing(&self, op: &'static str) -> Result<(), SpongeError> {
        if self.phase == Phase::Finalized {
            debug!(op, "rejected: sponge already finalized");
            return Err(SpongeError::Finalized);
        }
        Ok(())
    }
}

impl Drop for Sponge {
    fn drop(&mut self) {
        self.state.zeroize();
        self.position.zeroize();
    }
}

impl ZeroizeOnDrop for Sponge {}

impl fmt::Debug for Sponge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sponge")
            .field("rate", &self.rate.bytes())
            .field("domain", &self.domain)
            .field("position", &self.position)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

/// One-shot round-3 Keccak: absorb `input` at `rate` and fill `out`.
///
/// `out` may be longer than the rate; further blocks are squeezed as needed.
pub fn keccak(rate: Rate, input: &[u8], out: &mut [u8]) {
    let rate = rate.bytes();
    let mut state = [0u64; PLEN];
    let position = absorb(&mut state, 0, rate, input);
    pad(&mut state, position, rate, Domain::Keccak.byte());
    squeeze(&mut state, rate, out);
    state.zeroize();
}

#[inline(always)]
fn xor_byte(state: &mut [u64; PLEN], offset: usize, byte: u8) {
    state[offset / 8] ^= u64::from(byte) << (8 * (offset % 8));
}

/// XOR `bytes` into the state starting at byte `offset`.
///
/// `offset + bytes.len()` must not exceed the state width.
fn xor_into(state: &mut [u64; PLEN], offset: usize, bytes: &[u8]) {
    let head = ((8 - offset % 8) % 8).min(bytes.len());
    let (head_bytes, rest) = bytes.split_at(head);
    for (i, &b) in head_bytes.iter().enumerate() {
        xor_byte(state, offset + i, b);
    }

    let mut lanes = rest.chunks_exact(8);
    for (s, b) in state[(offset + head) / 8..].iter_mut().zip(&mut lanes) {
        *s ^= u64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]);
    }

    let tail = lanes.remainder();
    let tail_offset = offset + bytes.len() - tail.len();
    for (i, &b) in tail.iter().enumerate() {
        xor_byte(state, tail_offset + i, b);
    }
}

fn absorb(state: &mut [u64; PLEN], mut position: usize, rate: usize, mut input: &[u8]) -> usize {
    while !input.is_empty() {
        let take = (rate - position).min(input.len());
        let (block, rest) = input.split_at(take);
        xor_into(state, position, block);
        position += take;
        input = rest;
        if position == rate {
            f1600(state);
            position = 0;
        }
    }
    position
}

/// pad10*1: domain byte at `position`, final bit at `rate - 1`, then permute.
///
/// With `position == rate - 1` both land in the same byte.
fn pad(state: &mut [u64; PLEN], position: usize, rate: usize, domain: u8) {
    xor_byte(state, position, domain);
    xor_byte(state, rate - 1, FINAL_BIT);
    f1600(state);
}

#[inline]
fn extract(state: &[u64; PLEN], out: &mut [u8]) {
    for (chunk, word) in out.chunks_mut(8).zip(state) {
        chunk.copy_from_slice(&word.to_le_bytes()[..chunk.len()]);
    }
}

/// Copy rate-sized blocks out of an already padded and permuted state.
fn squeeze(state: &mut [u64; PLEN], rate: usize, out: &mut [u8]) {
    let mut blocks = out.chunks_mut(rate);
    if let Some(first) = blocks.next() {
        extract(state, first);
    }
    for block in blocks {
        f1600(state);
        extract(state, block);
    }
}

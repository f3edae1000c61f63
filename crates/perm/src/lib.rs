//! `keccak-r3-perm` -- the Keccak-f\[1600\] permutation.
//!
//! `no_std`, allocation-free, and branch-free with respect to state
//! contents: every call runs the same fixed sequence of 24 rounds. The state
//! is 25 little-endian 64-bit lanes; lane `(x, y)` lives at index `x + 5y`.
//!
//! ```
//! let mut state = [0u64; keccak_r3_perm::PLEN];
//! keccak_r3_perm::f1600(&mut state);
//! assert_eq!(state[0], 0xF1258F7940E1DDE7);
//! ```

#![no_std]
#![deny(unsafe_code)]
#![allow(clippy::needless_range_loop)]

mod round;

pub use round::{chi, iota, pi, rho, theta};

/// Number of 64-bit lanes in the state.
pub const PLEN: usize = 25;

/// Width of the state in bytes (1600 bits).
pub const STATE_BYTES: usize = PLEN * 8;

/// Number of rounds of Keccak-f\[1600\].
pub const ROUNDS: usize = 24;

/// Iota round constants, one per round.
pub const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// Rho rotation offsets, indexed `[x][y]`.
pub const RHO_OFFSETS: [[u32; 5]; 5] = [
    [0, 36, 3, 41, 18],
    [1, 44, 10, 45, 2],
    [62, 6, 43, 15, 61],
    [28, 55, 25, 21, 56],
    [27, 20, 39, 8, 14],
];

/// Lane index of `(x, y)`.
#[inline(always)]
#[must_use]
pub const fn lane(x: usize, y: usize) -> usize {
    x + 5 * y
}

/// One full round: theta, rho, pi, chi, then iota with `rc`.
#[inline(always)]
fn round(state: &mut [u64; PLEN], rc: u64) {
    theta(state);
    rho(state);
    pi(state);
    chi(state);
    iota(state, rc);
}

/// Keccak-f\[1600\]: all 24 rounds.
#[inline]
pub fn f1600(state: &mut [u64; PLEN]) {
    for &rc in &ROUND_CONSTANTS {
        round(state, rc);
    }
}

/// Keccak-p\[1600, n\]: the last `rounds` rounds of Keccak-f\[1600\].
///
/// `rounds` above [`ROUNDS`] is clamped, so `keccak_p(s, 24)` and
/// `keccak_p(s, 100)` both equal [`f1600`].
#[inline]
pub fn keccak_p(state: &mut [u64; PLEN], rounds: usize) {
    let rounds = rounds.min(ROUNDS);
    for &rc in &ROUND_CONSTANTS[ROUNDS - rounds..] {
        round(state, rc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // XKCP KeccakF-1600-IntermediateValues.txt
    const ZERO_ONCE: [u64; PLEN] = [
        0xF1258F7940E1DDE7, 0x84D5CCF933C0478A, 0xD598261EA65AA9EE, 0xBD1547306F80494D,
        0x8B284E056253D057, 0xFF97A42D7F8E6FD4, 0x90FEE5A0A44647C4, 0x8C5BDA0CD6192E76,
        0xAD30A6F71B19059C, 0x30935AB7D08FFC64, 0xEB5AA93F2317D635, 0xA9A6E6260D712103,
        0x81A57C16DBCF555F, 0x43B831CD0347C826, 0x01F22F1A11A5569F, 0x05E5635A21D9AE61,
        0x64BEFEF28CC970F2, 0x613670957BC46611, 0xB87C5A554FD00ECB, 0x8C3EE88A1CCF32C8,
        0x940C7922AE3A2614, 0x1841F924A2C509E4, 0x16F53526E70465C2, 0x75F644E97F30A13B,
        0xEAF1FF7B5CECA249,
    ];

    const ZERO_TWICE: [u64; PLEN] = [
        0x2D5C954DF96ECB3C, 0x6A332CD07057B56D, 0x093D8D1270D76B6C, 0x8A20D9B25569D094,
        0x4F9C4F99E5E7F156, 0xF957B9A2DA65FB38, 0x85773DAE1275AF0D, 0xFAF4F247C3D810F7,
        0x1F1B9EE6F79A8759, 0xE4FECC0FEE98B425, 0x68CE61B6B9CE68A1, 0xDEEA66C4BA8F974F,
        0x33C43D836EAFB1F5, 0xE00654042719DBD9, 0x7CF8A9F009831265, 0xFD5449A6BF174743,
        0x97DDAD33D8994B40, 0x48EAD5FC5D0BE774, 0xE3B8C8EE55B7B03C, 0x91A0226E649E42E9,
        0x900E3129E7BADD7B, 0x202A9EC5FAA3CCE8, 0x5B3402464E1C3DB6, 0x609F4E62A44C1059,
        0x20D06CD26A8FBF5C,
    ];

    /// LFSR x^8 + x^6 + x^5 + x^4 + 1, output bit `t`.
    fn rc_bit(t: usize) -> u64 {
        let mut r: u8 = 1;
        for _ in 0..t % 255 {
            let high = r & 0x80;
            r <<= 1;
            if high != 0 {
                r ^= 0x71;
            }
        }
        u64::from(r & 1)
    }

    #[test]
    fn f1600_of_zero_matches_xkcp() {
        let mut state = [0u64; PLEN];
        f1600(&mut state);
        assert_eq!(state, ZERO_ONCE);
        f1600(&mut state);
        assert_eq!(state, ZERO_TWICE);
    }

    #[test]
    fn round_constants_follow_lfsr() {
        for (i, &rc) in ROUND_CONSTANTS.iter().enumerate() {
            let mut expected = 0u64;
            for j in 0..7 {
                expected |= rc_bit(j + 7 * i) << ((1 << j) - 1);
            }
            assert_eq!(rc, expected, "round constant {i}");
        }
    }

    #[test]
    fn rho_offsets_follow_triangular_walk() {
        let (mut x, mut y) = (1usize, 0usize);
        for t in 0..24u32 {
            let expected = ((t + 1) * (t + 2) / 2) % 64;
            assert_eq!(RHO_OFFSETS[x][y], expected, "offset ({x}, {y})");
            (x, y) = (y, (2 * x + 3 * y) % 5);
        }
        assert_eq!(RHO_OFFSETS[0][0], 0);
    }

    #[test]
    fn keccak_p_full_equals_f1600() {
        let mut a = [0u64; PLEN];
        let mut b = [0u64; PLEN];
        f1600(&mut a);
        keccak_p(&mut b, ROUNDS);
        assert_eq!(a, b);
    }

    #[test]
    fn keccak_p_clamps_round_count() {
        let mut a = [0u64; PLEN];
        keccak_p(&mut a, 1000);
        assert_eq!(a, ZERO_ONCE);
    }

    #[test]
    fn keccak_p_zero_rounds_is_identity() {
        let mut state: [u64; PLEN] = core::array::from_fn(|i| i as u64 * 0x0101_0101);
        let before = state;
        keccak_p(&mut state, 0);
        assert_eq!(state, before);
    }

    #[test]
    fn keccak_p_uses_trailing_constants() {
        // One round of Keccak-p[1600, 1] on zero: only iota contributes.
        let mut state = [0u64; PLEN];
        keccak_p(&mut state, 1);
        assert_eq!(state[0], ROUND_CONSTANTS[ROUNDS - 1]);
        assert!(state[1..].iter().all(|&lane| lane == 0));
    }
}

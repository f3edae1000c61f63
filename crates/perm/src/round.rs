//! The five step mappings of a Keccak-f\[1600\] round.
//!
//! Each step touches every lane unconditionally; none of them inspects lane
//! values to decide what to do next.

use crate::{PLEN, RHO_OFFSETS, lane};

/// Theta: XOR each lane with the parities of the two neighbouring columns.
#[inline(always)]
pub fn theta(a: &mut [u64; PLEN]) {
    let mut c = [0u64; 5];
    for x in 0..5 {
        c[x] = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    }
    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            a[lane(x, y)] ^= d;
        }
    }
}

/// Rho: rotate every lane by its fixed offset.
#[inline(always)]
pub fn rho(a: &mut [u64; PLEN]) {
    for x in 0..5 {
        for y in 0..5 {
            a[lane(x, y)] = a[lane(x, y)].rotate_left(RHO_OFFSETS[x][y]);
        }
    }
}

/// Pi: lane `(x, y)` moves to `(y, 2x + 3y mod 5)`.
#[inline(always)]
pub fn pi(a: &mut [u64; PLEN]) {
    let src = *a;
    for x in 0..5 {
        for y in 0..5 {
            a[lane(y, (2 * x + 3 * y) % 5)] = src[lane(x, y)];
        }
    }
}

/// Chi: `a[x] ^= !a[x + 1] & a[x + 2]` along each row.
#[inline(always)]
pub fn chi(a: &mut [u64; PLEN]) {
    for y in 0..5 {
        let row = [a[lane(0, y)], a[lane(1, y)], a[lane(2, y)], a[lane(3, y)], a[lane(4, y)]];
        for x in 0..5 {
            a[lane(x, y)] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
        }
    }
}

/// Iota: XOR the round constant into lane `(0, 0)`.
#[inline(always)]
pub fn iota(a: &mut [u64; PLEN], rc: u64) {
    a[0] ^= rc;
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Source of uniform samples in `[0, 1)`.
///
/// Randomized heuristics take this as an explicit parameter so callers can
/// seed them, replay them, or feed a scripted sequence in tests.
pub trait RandomSource {
    /// Returns the next sample in `[0, 1)`.
    fn next_unit(&mut self) -> f32;
}

/// Stateful `xoroshiro128+` pseudo-random number generator.
///
/// * Not cryptographically secure.
/// * Matching seeds yield identical sequences across supported platforms.
#[derive(Debug, Clone, Copy)]
pub struct Prng {
    state: [u64; 2],
}

impl Prng {
    /// Constructs a PRNG from two 64-bit seeds.
    ///
    /// The all-zero state is a fixed point of xoroshiro and is replaced by a
    /// non-zero constant.
    pub fn from_seed(seed0: u64, seed1: u64) -> Self {
        let mut state = [seed0, seed1];
        if state[0] == 0 && state[1] == 0 {
            state[0] = 0x9e37_79b9_7f4a_7c15;
        }
        Self { state }
    }

    /// Constructs a PRNG from a single 64-bit seed via SplitMix64 expansion.
    pub fn from_seed_u64(seed: u64) -> Self {
        fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }

        let mut sm_state = seed;
        let s0 = splitmix64(&mut sm_state);
        let s1 = splitmix64(&mut sm_state);
        Self::from_seed(s0, s1)
    }

    fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);

        result
    }

    /// Returns the next float in `[0, 1)`.
    ///
    /// The high 23 bits fill the mantissa of a float in `[1, 2)`, which is
    /// then shifted down by one.
    pub fn next_f32(&mut self) -> f32 {
        let raw = self.next_u64();
        // 64 - 41 = 23 bits always fit in u32.
        let mantissa = u32::try_from(raw >> 41).unwrap_or(0);
        f32::from_bits(mantissa | 0x3f80_0000) - 1.0
    }

    /// Returns the next float in `[lo, hi)` (or `lo` when the range is empty).
    pub fn next_range(&mut self, lo: f32, hi: f32) -> f32 {
        scale_unit(self.next_f32(), lo, hi)
    }
}

// Maps `unit` in `[0, 1)` onto `[lo, hi)`. Rounding can land on `hi` when the
// span is small next to the magnitude of the bounds; such results step down
// to the largest float below `hi`.
fn scale_unit(unit: f32, lo: f32, hi: f32) -> f32 {
    let value = unit.mul_add(hi - lo, lo);
    if value < hi || hi <= lo {
        value
    } else {
        hi.next_down().max(lo)
    }
}

impl RandomSource for Prng {
    fn next_unit(&mut self) -> f32 {
        self.next_f32()
    }
}

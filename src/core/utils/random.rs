//! Deterministic random source for the simulations
//!
//! Xorshift32. Seeded streams are identical on native and wasm builds.

/// Xorshift32 random number generator
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Seeded xorshift32 stream with the range helpers the engines need.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u32,
}

impl Rng {
    /// Create a generator. A zero seed would lock xorshift at zero, so it is
    /// replaced with a fixed non-zero constant.
    pub fn new(seed: u32) -> Self {
        Self { state: if seed == 0 { 0x9E37_79B9 } else { seed } }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        xorshift32(&mut self.state)
    }

    /// Uniform byte in `0..=255`.
    #[inline]
    pub fn byte(&mut self) -> u8 {
        (self.next_u32() >> 24) as u8
    }

    /// Uniform value in `[0, upper)`. Returns 0 when `upper` is 0.
    #[inline]
    pub fn below(&mut self, upper: u32) -> u32 {
        if upper == 0 {
            return 0;
        }
        // Multiply-shift keeps the high (better mixed) bits.
        ((self.next_u32() as u64 * upper as u64) >> 32) as u32
    }

    /// Uniform value in `[low, high)`. Returns `low` for an empty range.
    #[inline]
    pub fn range(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        low + self.below(high - low)
    }

    /// Uniform value in `[low, high]`.
    #[inline]
    pub fn range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        if high < low {
            return low;
        }
        low + self.below(high - low + 1)
    }

    /// True with probability `numerator / 256`.
    #[inline]
    pub fn chance256(&mut self, numerator: u16) -> bool {
        (self.byte() as u16) < numerator
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new(12345)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xorshift32_no_zero() {
        let mut state = 1u32;
        for _ in 0..1000 {
            assert_ne!(xorshift32(&mut state), 0);
        }
    }

    #[test]
    fn zero_seed_is_replaced() {
        let mut rng = Rng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn ranges_stay_in_bounds() {
        let mut rng = Rng::new(7);
        for _ in 0..10_000 {
            let v = rng.range(160, 255);
            assert!((160..255).contains(&v));
            let w = rng.range_inclusive(100, 220);
            assert!((100..=220).contains(&w));
            assert!(rng.below(7) < 7);
        }
        assert_eq!(rng.range(5, 5), 5);
        assert_eq!(rng.below(0), 0);
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = Rng::new(42);
        let mut b = Rng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }
}

//! Saturating 8-bit arithmetic
//!
//! Every energy update in both engines goes through these helpers, so no
//! cell can ever leave its [floor, ceiling] band regardless of how large the
//! requested change is.

/// Add `amount` to `value`, never exceeding `ceiling`.
#[inline]
pub fn increase_to(value: u8, amount: u32, ceiling: u8) -> u8 {
    let r = (value as u32).saturating_add(amount);
    if r > ceiling as u32 {
        ceiling
    } else {
        r as u8
    }
}

/// Subtract `amount` from `value`, never going below `floor`.
#[inline]
pub fn reduce_to(value: u8, amount: u32, floor: u8) -> u8 {
    let r = value as i64 - amount as i64;
    if r < floor as i64 {
        floor
    } else {
        r as u8
    }
}

/// `increase_to` with the full byte range.
#[inline]
pub fn increase(value: u8, amount: u32) -> u8 {
    increase_to(value, amount, u8::MAX)
}

/// `reduce_to` with the full byte range.
#[inline]
pub fn reduce(value: u8, amount: u32) -> u8 {
    reduce_to(value, amount, 0)
}

/// Scale `value` by `factor / 256`.
///
/// `factor` is allowed above 255 (retention coefficients are 0..=256), the
/// result is still clamped to a byte.
#[inline]
pub fn scale8(value: u8, factor: u16) -> u8 {
    ((value as u32 * factor as u32) >> 8).min(u8::MAX as u32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increase_saturates_at_ceiling() {
        assert_eq!(increase(250, 10), 255);
        assert_eq!(increase(10, u32::MAX), 255);
        assert_eq!(increase_to(100, 50, 120), 120);
        assert_eq!(increase_to(100, 10, 120), 110);
    }

    #[test]
    fn reduce_saturates_at_floor() {
        assert_eq!(reduce(5, 40), 0);
        assert_eq!(reduce(5, u32::MAX), 0);
        assert_eq!(reduce_to(100, 90, 20), 20);
        assert_eq!(reduce_to(100, 30, 20), 70);
    }

    #[test]
    fn scale8_matches_retention_formula() {
        // 200 * 200 >> 8 == 156
        assert_eq!(scale8(200, 200), 156);
        assert_eq!(scale8(255, 0), 0);
        assert_eq!(scale8(255, 256), 255);
    }
}

//! Candidates for digit extraction, `log2` and square roots.

/// Get the `i`th digit of the binary representation of `x`, counting from the most significant digit.
///
/// The representation has no leading zeros, except that `0` is written as a single `0`.
///
/// # Example
/// ```
/// use gf2rref::bits::bit_at_string;
///
/// assert_eq!(bit_at_string(0b1011, 1), Some(false));
/// assert_eq!(bit_at_string(0b1011, 4), None);
/// ```
pub fn bit_at_string(x: u64, i: usize) -> Option<bool> {
    format!("{x:b}").chars().nth(i).map(|c| c == '1')
}

/// Same as [`bit_at_string`], but computed with shifts.
pub fn bit_at_shift(x: u64, i: usize) -> Option<bool> {
    let len = x.checked_ilog2().map_or(1, |log| log as usize + 1);
    if i >= len {
        return None;
    }
    Some(x >> (len - 1 - i) & 1 == 1)
}

/// `log2` of a power of two, computed in floating point.
///
/// Returns `None` for zero.
pub fn log2_float(x: u64) -> Option<u32> {
    if x == 0 {
        return None;
    }
    Some((x as f64).log2() as u32)
}

/// `log2` of a power of two, computed exactly.
///
/// Returns `None` for zero.
pub fn log2_exact(x: u64) -> Option<u32> {
    x.checked_ilog2()
}

pub fn sqrt_std(x: f64) -> f64 {
    x.sqrt()
}

pub fn sqrt_powf(x: f64) -> f64 {
    x.powf(0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_at_candidates_agree() {
        for x in (0..1024).chain([u64::MAX, 1 << 63]) {
            for i in 0..66 {
                assert_eq!(bit_at_string(x, i), bit_at_shift(x, i), "x={x:b}, i={i}");
            }
        }
    }

    #[test]
    fn bit_at_zero() {
        assert_eq!(bit_at_shift(0, 0), Some(false));
        assert_eq!(bit_at_shift(0, 1), None);
    }

    #[test]
    fn log2_powers_of_two() {
        for k in 0..64 {
            assert_eq!(log2_float(1 << k), Some(k));
            assert_eq!(log2_exact(1 << k), Some(k));
        }
        assert_eq!(log2_float(0), None);
        assert_eq!(log2_exact(0), None);
    }

    #[test]
    fn sqrt_candidates_agree() {
        for x in [0.0, 1.0, 2.0, 4.0, 20.0, 1e10] {
            assert!((sqrt_std(x) - sqrt_powf(x)).abs() <= 1e-12 * sqrt_std(x).max(1.0));
        }
        assert_eq!(sqrt_std(16.0), 4.0);
    }
}

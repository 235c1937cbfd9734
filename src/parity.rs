//! Candidate implementations of the GF(2) linear function `l(x) = x1 + x2 + x4 + x5 (mod 2)`,
//! where `x5 x4 x3 x2 x1 x0` are the low six bits of `x`.
//!
//! All candidates only look at the low six bits and agree on every input.

/// The bits of `x` that `l` depends on, as single-bit masks.
pub const MASKS: [u32; 4] = [0b10_0000, 0b01_0000, 0b00_0100, 0b00_0010];
/// The coefficients of `l`, most significant bit first.
pub const COEFFICIENTS: [u8; 6] = [1, 1, 0, 1, 1, 0];
/// The coefficients of `l` packed into an integer.
pub const MASK: u32 = 0b11_0110;

/// Fold XOR over whether each bit in [`MASKS`] is set.
pub fn f2_linear_bitwise(x: u32) -> bool {
    MASKS
        .iter()
        .map(|&mask| x & mask == mask)
        .fold(false, |acc, bit| acc ^ bit)
}

/// Expand the low six bits into a vector and take its dot product with [`COEFFICIENTS`].
pub fn f2_linear_matrix(x: u32) -> bool {
    let vector: [u8; 6] = std::array::from_fn(|i| ((x >> (5 - i)) & 1) as u8);
    let dot: u32 = vector
        .iter()
        .zip(COEFFICIENTS)
        .map(|(&v, c)| u32::from(v * c))
        .sum();
    dot % 2 == 1
}

/// Clear the lowest set bit of `x & MASK` until nothing is left, toggling the parity each time.
pub fn f2_linear_kernighan(x: u32) -> bool {
    let mut prod = x & MASK;
    let mut parity = false;
    while prod != 0 {
        prod &= prod - 1;
        parity ^= true;
    }
    parity
}

pub fn f2_linear_popcount(x: u32) -> bool {
    (x & MASK).count_ones() % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        for f in [
            f2_linear_bitwise,
            f2_linear_matrix,
            f2_linear_kernighan,
            f2_linear_popcount,
        ] {
            assert!(!f(0b00_0000));
            assert!(f(0b00_0010));
            assert!(!f(0b00_0001));
            assert!(!f(0b00_1000));
            assert!(!f(0b11_0000));
            assert!(f(0b11_0100));
            assert!(!f(0b11_0110));
            assert!(!f(0b11_1111));
        }
    }

    #[test]
    fn candidates_agree() {
        for x in 0..=0xffff {
            let expected = f2_linear_popcount(x);
            assert_eq!(f2_linear_bitwise(x), expected, "x={x:b}");
            assert_eq!(f2_linear_matrix(x), expected, "x={x:b}");
            assert_eq!(f2_linear_kernighan(x), expected, "x={x:b}");
        }
    }

    #[test]
    fn ignores_high_bits() {
        assert_eq!(f2_linear_popcount(u32::MAX), f2_linear_popcount(0b11_1111));
        assert_eq!(f2_linear_matrix(0b100_0010), f2_linear_matrix(0b10));
    }
}

//! Candidates for working with the phases of Pauli operators, `{1, -1, i, -i}`.

use num_complex::Complex;

pub const PAULI_PHASES: [Complex<f64>; 4] = [
    Complex::new(1.0, 0.0),
    Complex::new(-1.0, 0.0),
    Complex::new(0.0, 1.0),
    Complex::new(0.0, -1.0),
];

/// Whether `z` is exactly one of [`PAULI_PHASES`], by searching the list.
pub fn is_pauli_phase_list(z: Complex<f64>) -> bool {
    PAULI_PHASES.contains(&z)
}

/// Whether `z` is exactly one of [`PAULI_PHASES`], by matching on the components.
pub fn is_pauli_phase_match(z: Complex<f64>) -> bool {
    matches!(
        (z.re, z.im),
        (1.0, 0.0) | (-1.0, 0.0) | (0.0, 1.0) | (0.0, -1.0)
    )
}

/// Whether `z` is exactly one of [`PAULI_PHASES`], by a chain of comparisons.
pub fn is_pauli_phase_or(z: Complex<f64>) -> bool {
    z == Complex::ONE || z == -Complex::ONE || z == Complex::I || z == -Complex::I
}

/// `i^b` for a single bit, as `1 + (i - 1) * b`.
pub fn imaginary_part_linear(b: bool) -> Complex<f64> {
    let one = Complex::<f64>::ONE;
    one + (Complex::<f64>::I - one) * f64::from(u8::from(b))
}

/// `i^k`.
pub fn imaginary_part_power(k: u32) -> Complex<f64> {
    Complex::I.powu(k)
}

use std::{
    hint::black_box,
    time::{Duration, Instant},
};

use num_complex::Complex;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::{
    bits,
    matrix::BinaryMatrix,
    parity, phase,
    rref::{rref_binary, rref_binary_bytes},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    /// The number of calls to average over.
    pub reps: usize,
    /// The number of rows of the random input matrices.
    pub rows: usize,
    /// The number of columns of the random input matrices.
    pub cols: usize,
    pub seed: u64,
}
impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            reps: 10_000,
            rows: 20,
            cols: 20,
            seed: 123,
        }
    }
}

/// The average time of a single call to the candidate called `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timing {
    pub name: &'static str,
    pub average: Duration,
}

/// Compute the average time of calling `f` on `reps` inputs produced by `generate`.
///
/// Only the calls to `f` are timed, not the calls to `generate`.
pub fn time_candidate<I, O>(
    reps: usize,
    rng: &mut SmallRng,
    mut generate: impl FnMut(&mut SmallRng) -> I,
    f: impl Fn(&I) -> O,
) -> Duration {
    if reps == 0 {
        return Duration::ZERO;
    }

    let mut total = Duration::ZERO;
    for _ in 0..reps {
        let input = generate(rng);
        let start = Instant::now();
        black_box(f(black_box(&input)));
        total += start.elapsed();
    }
    total.div_f64(reps as f64)
}

/// Time each of the row reduction implementations on random matrices of the configured shape.
pub fn rref_timings(config: &TimingConfig) -> Vec<Timing> {
    let &TimingConfig {
        reps,
        rows,
        cols,
        seed,
    } = config;
    log::debug!("Timing row reduction of {rows}x{cols} matrices over {reps} reps");

    let mut rng = SmallRng::seed_from_u64(seed);
    let packed = time_candidate(
        reps,
        &mut rng,
        |rng| BinaryMatrix::random_with_rng(rows, cols, rng),
        rref_binary,
    );
    let bytes = time_candidate(
        reps,
        &mut rng,
        |rng| BinaryMatrix::random_with_rng(rows, cols, rng).to_rows(),
        |m| rref_binary_bytes(m),
    );

    vec![
        Timing {
            name: "rref_binary",
            average: packed,
        },
        Timing {
            name: "rref_binary_bytes",
            average: bytes,
        },
    ]
}

/// Time each of the scalar primitives on random inputs.
pub fn primitive_timings(config: &TimingConfig) -> Vec<Timing> {
    let reps = config.reps;
    log::debug!("Timing scalar primitives over {reps} reps");

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut timings = Vec::new();

    let parity_candidates: [(&'static str, fn(u32) -> bool); 4] = [
        ("f2_linear_bitwise", parity::f2_linear_bitwise),
        ("f2_linear_matrix", parity::f2_linear_matrix),
        ("f2_linear_kernighan", parity::f2_linear_kernighan),
        ("f2_linear_popcount", parity::f2_linear_popcount),
    ];
    for (name, f) in parity_candidates {
        let average = time_candidate(reps, &mut rng, |rng| rng.random_range(0..64), |&x| f(x));
        timings.push(Timing { name, average });
    }

    let phase_candidates: [(&'static str, fn(Complex<f64>) -> bool); 3] = [
        ("is_pauli_phase_list", phase::is_pauli_phase_list),
        ("is_pauli_phase_match", phase::is_pauli_phase_match),
        ("is_pauli_phase_or", phase::is_pauli_phase_or),
    ];
    for (name, f) in phase_candidates {
        let average = time_candidate(
            reps,
            &mut rng,
            |rng| phase::PAULI_PHASES[rng.random_range(0..4)],
            |&z| f(z),
        );
        timings.push(Timing { name, average });
    }

    timings.push(Timing {
        name: "imaginary_part_linear",
        average: time_candidate(reps, &mut rng, |rng| rng.random::<bool>(), |&b| {
            phase::imaginary_part_linear(b)
        }),
    });
    timings.push(Timing {
        name: "imaginary_part_power",
        average: time_candidate(reps, &mut rng, |rng| rng.random_range(0..=1), |&k| {
            phase::imaginary_part_power(k)
        }),
    });

    let power_of_two = |rng: &mut SmallRng| 1u64 << rng.random_range(0..64u32);
    timings.push(Timing {
        name: "log2_float",
        average: time_candidate(reps, &mut rng, power_of_two, |&x| bits::log2_float(x)),
    });
    timings.push(Timing {
        name: "log2_exact",
        average: time_candidate(reps, &mut rng, power_of_two, |&x| bits::log2_exact(x)),
    });

    let digit_query = |rng: &mut SmallRng| {
        (rng.random::<u64>() | 1 << 63, rng.random_range(0..64usize))
    };
    timings.push(Timing {
        name: "bit_at_string",
        average: time_candidate(reps, &mut rng, digit_query, |&(x, i)| {
            bits::bit_at_string(x, i)
        }),
    });
    timings.push(Timing {
        name: "bit_at_shift",
        average: time_candidate(reps, &mut rng, digit_query, |&(x, i)| {
            bits::bit_at_shift(x, i)
        }),
    });

    let positive = |rng: &mut SmallRng| rng.random_range(0.0..1e6);
    timings.push(Timing {
        name: "sqrt_std",
        average: time_candidate(reps, &mut rng, positive, |&x| bits::sqrt_std(x)),
    });
    timings.push(Timing {
        name: "sqrt_powf",
        average: time_candidate(reps, &mut rng, positive, |&x| bits::sqrt_powf(x)),
    });

    timings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn zero_reps() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut generated = 0;
        let average = time_candidate(
            0,
            &mut rng,
            |_| {
                generated += 1;
            },
            |_| (),
        );
        assert_eq!(average, Duration::ZERO);
        assert_eq!(generated, 0);
    }

    #[test_log::test]
    fn generates_once_per_rep() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut generated = 0;
        time_candidate(
            17,
            &mut rng,
            |_| {
                generated += 1;
            },
            |_| (),
        );
        assert_eq!(generated, 17);
    }

    #[test_log::test]
    fn average_of_slow_candidate() {
        let mut rng = SmallRng::seed_from_u64(0);
        let average = time_candidate(
            4,
            &mut rng,
            |_| (),
            |_| std::thread::sleep(Duration::from_millis(2)),
        );
        assert!(average >= Duration::from_millis(2), "average={average:?}");
        assert!(average < Duration::from_secs(1), "average={average:?}");
    }

    #[test_log::test]
    fn all_candidates_timed() {
        let config = TimingConfig {
            reps: 10,
            ..Default::default()
        };
        let names: Vec<_> = rref_timings(&config)
            .into_iter()
            .chain(primitive_timings(&config))
            .map(|t| t.name)
            .collect();
        assert_eq!(names.len(), 17);
        assert!(names.contains(&"rref_binary"));
        assert!(names.contains(&"rref_binary_bytes"));
        assert!(names.contains(&"f2_linear_kernighan"));
        assert!(names.contains(&"sqrt_powf"));
    }
}

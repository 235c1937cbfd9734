use std::error::Error;

use gf2rref::timing::{primitive_timings, rref_timings, TimingConfig};

/// Print the average time per call of every candidate.
///
/// The number of repetitions can be given as the first argument.
fn main() -> Result<(), Box<dyn Error>> {
    let mut config = TimingConfig::default();
    if let Some(reps) = std::env::args().nth(1) {
        config.reps = reps.parse()?;
    }

    for timing in rref_timings(&config)
        .into_iter()
        .chain(primitive_timings(&config))
    {
        println!("{}: {}", timing.name, timing.average.as_secs_f64());
    }
    Ok(())
}

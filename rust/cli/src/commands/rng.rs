//! Random number generator sample command.
//!
//! Prints the first values of the xorshift stream that shuffles every deck,
//! so a seed can be checked against another implementation by eye.

use crate::error::CliError;
use koikoi_engine::random::XorShift32;
use rand::RngCore;
use std::io::Write;

const SAMPLE_SIZE: usize = 5;

/// Handle the rng command.
///
/// # Arguments
///
/// * `seed` - Optional seed value for the RNG (uses random seed if None)
/// * `out` - Output stream for RNG sample values
pub fn handle_rng_command(seed: Option<u32>, out: &mut dyn Write) -> Result<(), CliError> {
    let s = seed.unwrap_or_else(rand::random);
    let mut rng = XorShift32::new(s);
    let vals: Vec<u32> = (0..SAMPLE_SIZE).map(|_| rng.next_u32()).collect();
    writeln!(out, "Seed: {}", s)?;
    writeln!(out, "RNG sample: {:?}", vals)?;
    Ok(())
}

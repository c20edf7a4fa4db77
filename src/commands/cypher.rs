//! Cypher Command Handler
//!
//! Handles the `cypher` subcommand: print the scrambling keystream for a seed.

use rust_dvd::cypher::{generate_cypher, LFSR_MASK};
use rust_dvd::utils::{hex_dump, parse_u16};
use rust_dvd::{Result, RustDvdError};
use tracing::debug;

pub async fn execute(seed: String, length: usize) -> Result<()> {
    let seed = parse_u16(&seed)?;
    if seed > LFSR_MASK {
        return Err(RustDvdError::parameter_validation(format!(
            "seed 0x{:04X} does not fit in 15 bits",
            seed
        )));
    }
    debug!("Generating {} keystream bytes for seed 0x{:04X}", length, seed);

    print!("{}", hex_dump(&generate_cypher(seed, length)));
    Ok(())
}

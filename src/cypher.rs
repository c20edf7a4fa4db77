//! DVD scrambling keystream
//!
//! Raw DVD sector payloads are XORed with the output of a 15-bit linear
//! feedback shift register (taps at bits 14 and 10). Each output byte is built
//! from 8 consecutive register bits, most significant bit first.

/// Register width mask
pub const LFSR_MASK: u16 = 0x7FFF;

/// Generate `length` keystream bytes starting from `seed` (masked to 15 bits)
pub fn generate_cypher(seed: u16, length: usize) -> Vec<u8> {
    let mut lfsr = seed & LFSR_MASK;
    let mut cypher = vec![0u8; length];

    for byte in cypher.iter_mut() {
        for _ in 0..8 {
            let bit = ((lfsr >> 14) & 1) as u8;
            *byte = (*byte << 1) | bit;

            let feedback = ((lfsr >> 14) ^ (lfsr >> 10)) & 1;
            lfsr = ((lfsr << 1) | feedback) & LFSR_MASK;
        }
    }

    cypher
}

/// XOR `data` in place with the keystream for `seed`
pub fn apply_cypher(seed: u16, data: &mut [u8]) {
    let cypher = generate_cypher(seed, data.len());
    for (b, k) in data.iter_mut().zip(cypher) {
        *b ^= k;
    }
}

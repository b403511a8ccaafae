//! The 16-bit LFSR pseudo-random generator from the AV1 film grain
//! algorithm.

/// LFSR state, seeded once per plane and advanced once per draw.
///
/// Feedback taps are bits 0, 1, 3 and 12. The bit sequence for a given
/// seed is a conformance requirement: every consumer of the grain tables
/// (software or hardware) must see identical noise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomState(u32);

impl RandomState {
    pub fn new(seed: u32) -> Self {
        // The register is 16 bits wide; anything above that would bleed
        // into later draws through the shift-in.
        Self(seed & 0xffff)
    }

    /// Advance the register once and return its top `bits` bits (1..=16).
    #[inline(always)]
    pub fn next_bits(&mut self, bits: u8) -> u32 {
        let r = self.0;
        let bit = (r ^ (r >> 1) ^ (r >> 3) ^ (r >> 12)) & 1;
        self.0 = (r >> 1) | bit << 15;
        self.0 >> (16 - bits) & ((1 << bits) - 1)
    }
}

//! Deterministic, seedable pseudo-randomness.
//!
//! Every random decision in the pipeline draws from a [`SeededRng`] built
//! from the input text and level, so identical inputs always produce
//! identical output. The generator is Mulberry32 seeded with a 32-bit
//! FNV-1a hash; all arithmetic is `u32` with wraparound, which keeps the
//! stream bit-for-bit identical across platforms.

const FNV_OFFSET: u32 = 0x811C_9DC5;
const FNV_PRIME: u32 = 0x0100_0193;
const MULBERRY_INCREMENT: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// FNV-1a over the UTF-16 code units of `s`.
///
/// Hashing UTF-16 units (not UTF-8 bytes) keeps seeds compatible with
/// streams produced by UTF-16 string hosts.
pub fn fnv1a32(s: &str) -> u32 {
    s.encode_utf16().fold(FNV_OFFSET, |h, unit| {
        (h ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// Mulberry32 stream of floats in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seed from arbitrary text via [`fnv1a32`].
    pub fn from_seed_material(material: &str) -> Self {
        Self::new(fnv1a32(material))
    }

    /// Stream used by the mislead and base translation passes.
    pub fn for_source(level: u8, text: &str) -> Self {
        Self::from_seed_material(&format!("{level}::{text}"))
    }

    /// Independent stream used by the stylizers.
    pub fn for_output(level: u8, text: &str) -> Self {
        Self::from_seed_material(&format!("{level}::{text}::out"))
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY_INCREMENT);
        let mut x = self.state;
        x = (x ^ (x >> 15)).wrapping_mul(x | 1);
        x ^= x.wrapping_add((x ^ (x >> 7)).wrapping_mul(x | 61));
        x ^ (x >> 14)
    }

    /// Next float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }

    /// `true` with probability `p`. Always consumes one draw.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform pick by index. Always consumes one draw, even for an empty
    /// slice (which yields `None`).
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let idx = (self.next_f64() * items.len() as f64).floor() as usize;
        items.get(idx).or_else(|| items.first())
    }
}

//! RNG module - seedable piece generation
//!
//! The board never touches global randomness: it draws every new piece from a
//! [`PieceSource`] handed to it at construction. Implementations:
//!
//! - [`SimpleRng`]: deterministic LCG; draws uniformly among the seven kinds.
//! - [`SevenBag`]: shuffled bags of all seven kinds, drawn until empty.
//! - [`Randomizer`]: runtime choice between the two (used by the binary).
//! - Any `FnMut() -> ShapeKind` closure, handy for scripted sequences in tests.

use crate::types::ShapeKind;

/// Supplies the kind of each newly generated piece
pub trait PieceSource {
    fn next_kind(&mut self) -> ShapeKind;
}

impl<F> PieceSource for F
where
    F: FnMut() -> ShapeKind,
{
    fn next_kind(&mut self) -> ShapeKind {
        self()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Fair coin flip
    pub fn next_bool(&mut self) -> bool {
        self.next_u32() & 0x8000_0000 != 0
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state (reseeding with it continues the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl PieceSource for SimpleRng {
    fn next_kind(&mut self) -> ShapeKind {
        ShapeKind::from_index(self.next_range(ShapeKind::COUNT as u32) as usize)
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct SevenBag {
    /// Current bag of pieces
    bag: [ShapeKind; 7],
    /// Index into current bag
    bag_index: usize,
    /// RNG for shuffling
    rng: SimpleRng,
}

impl SevenBag {
    pub fn new(seed: u32) -> Self {
        let mut bag = Self {
            bag: ShapeKind::ALL,
            bag_index: 0,
            rng: SimpleRng::new(seed),
        };
        bag.refill();
        bag
    }

    fn refill(&mut self) {
        self.bag = ShapeKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Pieces left in the current bag
    pub fn remaining(&self) -> &[ShapeKind] {
        &self.bag[self.bag_index..]
    }
}

impl PieceSource for SevenBag {
    fn next_kind(&mut self) -> ShapeKind {
        if self.bag_index >= self.bag.len() {
            self.refill();
        }
        let kind = self.bag[self.bag_index];
        self.bag_index += 1;
        kind
    }
}

/// Which generator a session uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomizerKind {
    #[default]
    Uniform,
    Bag,
}

impl RandomizerKind {
    /// Parse from a config string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "uniform" => Some(RandomizerKind::Uniform),
            "bag" | "7bag" | "7-bag" => Some(RandomizerKind::Bag),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RandomizerKind::Uniform => "uniform",
            RandomizerKind::Bag => "bag",
        }
    }
}

/// Runtime-selected piece source
#[derive(Debug, Clone)]
pub enum Randomizer {
    Uniform(SimpleRng),
    Bag(SevenBag),
}

impl Randomizer {
    pub fn new(kind: RandomizerKind, seed: u32) -> Self {
        match kind {
            RandomizerKind::Uniform => Randomizer::Uniform(SimpleRng::new(seed)),
            RandomizerKind::Bag => Randomizer::Bag(SevenBag::new(seed)),
        }
    }
}

impl PieceSource for Randomizer {
    fn next_kind(&mut self) -> ShapeKind {
        match self {
            Randomizer::Uniform(rng) => rng.next_kind(),
            Randomizer::Bag(bag) => bag.next_kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_remapped() {
        assert_eq!(SimpleRng::new(0).state(), 1);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_uniform_source_hits_every_kind() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; ShapeKind::COUNT];
        for _ in 0..500 {
            seen[rng.next_kind().index()] = true;
        }
        assert!(seen.iter().all(|&s| s), "missing kinds: {:?}", seen);
    }

    #[test]
    fn test_bag_draws_all_seven() {
        let mut bag = SevenBag::new(1);
        assert_eq!(bag.remaining().len(), 7);

        let mut drawn: Vec<ShapeKind> = (0..7).map(|_| bag.next_kind()).collect();
        drawn.sort();
        assert_eq!(drawn, ShapeKind::ALL.to_vec());

        // Eighth draw refills without panicking.
        let _ = bag.next_kind();
        assert_eq!(bag.remaining().len(), 6);
    }

    #[test]
    fn test_closure_source() {
        let mut script = [ShapeKind::O, ShapeKind::I].into_iter().cycle();
        let mut source = move || script.next().unwrap_or(ShapeKind::T);
        assert_eq!(source.next_kind(), ShapeKind::O);
        assert_eq!(source.next_kind(), ShapeKind::I);
        assert_eq!(source.next_kind(), ShapeKind::O);
    }

    #[test]
    fn test_randomizer_kind_parse() {
        assert_eq!(RandomizerKind::from_str("Bag"), Some(RandomizerKind::Bag));
        assert_eq!(RandomizerKind::from_str(" uniform "), Some(RandomizerKind::Uniform));
        assert_eq!(RandomizerKind::from_str("weighted"), None);
    }
}

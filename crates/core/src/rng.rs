//! RNG module - uniform random piece generation.
//!
//! Pieces are drawn uniformly at random, with replacement, independently on
//! every call. The generator is a simple seeded LCG so identical seeds
//! reproduce identical games.

use blockfall_types::PieceKind;

use crate::pieces::Piece;

/// Simple LCG (Linear Congruential Generator) RNG.
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Produces fresh, independently-mutable pieces from the catalog.
#[derive(Debug, Clone)]
pub struct PieceFactory {
    rng: SimpleRng,
}

impl PieceFactory {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw one piece, uniformly over the 7 catalog kinds.
    pub fn next_piece(&mut self) -> Piece {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        Piece::new(PieceKind::ALL[idx])
    }

    /// Current RNG state (usable as a seed to replay from here).
    pub fn state(&self) -> u32 {
        self.rng.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_is_deterministic_per_seed() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn zero_seed_is_remapped() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), SimpleRng::new(0).state);
    }

    #[test]
    fn factory_sequences_replay_per_seed() {
        let mut a = PieceFactory::new(7);
        let mut b = PieceFactory::new(7);
        for _ in 0..50 {
            assert_eq!(a.next_piece().kind, b.next_piece().kind);
        }
    }

    #[test]
    fn factory_eventually_draws_every_kind() {
        // With replacement there is no bag guarantee, but 500 uniform draws
        // missing one of 7 kinds would indicate a broken selection.
        let mut factory = PieceFactory::new(99);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let kind = factory.next_piece().kind;
            let idx = PieceKind::ALL.iter().position(|&k| k == kind).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn factory_pieces_are_independent_copies() {
        use crate::pieces::catalog_shape;

        let mut factory = PieceFactory::new(1);
        let mut piece = factory.next_piece();
        piece.shape = piece.shape.rotated();

        // A later draw of the same kind is unaffected by the mutation.
        loop {
            let fresh = factory.next_piece();
            if fresh.kind == piece.kind {
                assert_eq!(fresh.shape, catalog_shape(piece.kind));
                break;
            }
        }
    }
}

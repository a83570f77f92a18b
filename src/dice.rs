use rand::Rng;

/// A uniform random draw.
///
/// The fetch routine takes its randomness through this trait so tests can
/// inject a deterministic source instead of relying on process-wide state.
pub trait Dice {
    /// Returns a uniformly distributed value in `0..upper`.
    ///
    /// `upper` must be non-zero.
    fn roll(&mut self, upper: usize) -> usize;
}

/// Dice backed by the thread-local generator.
pub struct ThreadDice;

impl Dice for ThreadDice {
    fn roll(&mut self, upper: usize) -> usize {
        rand::rng().random_range(0..upper)
    }
}

#[cfg(test)]
mod tests {
    use super::{Dice, ThreadDice};

    #[test]
    fn roll_stays_in_range() {
        let mut dice = ThreadDice;
        for upper in 1..20 {
            for _ in 0..100 {
                assert!(dice.roll(upper) < upper);
            }
        }
    }
}

//! Cosmetic stages played after a draw.
//!
//! The stages only pace presentation. The draw result is already stored in
//! the session before the first stage starts, so nothing here gates a data
//! mutation.

use std::time::Duration;

/// One step of the reveal animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStage {
    /// The closed box shakes while the oracle "charges"
    Charging,
    /// A flash announces the winner's rarity
    Flash,
    /// The winner is shown and the flash fades
    Revealed,
}

/// Stages in order with the delay that precedes each of them.
pub const REVEAL_SEQUENCE: [(RevealStage, Duration); 3] = [
    (RevealStage::Charging, Duration::ZERO),
    (RevealStage::Flash, Duration::from_millis(1500)),
    (RevealStage::Revealed, Duration::from_millis(100)),
];

/// How long the flash lingers after the reveal.
pub const FLASH_FADE: Duration = Duration::from_millis(500);

/// Upper bound for a single scaled delay.
pub const MAX_DELAY: Duration = Duration::from_secs(60);

/// `delay` scaled by `factor`, capped at [`MAX_DELAY`]. A factor of zero
/// (or below) disables it.
pub fn scaled(delay: Duration, factor: f64) -> Duration {
    if delay.is_zero() || factor.is_nan() || factor <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(delay.as_secs_f64() * factor)
        .map_or(MAX_DELAY, |scaled| scaled.min(MAX_DELAY))
}

impl RevealStage {
    /// The delays of [`REVEAL_SEQUENCE`] scaled by `factor`.
    pub fn scaled_sequence(factor: f64) -> Vec<(RevealStage, Duration)> {
        REVEAL_SEQUENCE
            .iter()
            .map(|&(stage, delay)| (stage, scaled(delay, factor)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_sequence() {
        let half = RevealStage::scaled_sequence(0.5);
        assert_eq!(half[1], (RevealStage::Flash, Duration::from_millis(750)));

        let none = RevealStage::scaled_sequence(0.0);
        assert!(none.iter().all(|(_, d)| d.is_zero()));
        assert_eq!(none.len(), 3);

        assert_eq!(scaled(FLASH_FADE, 2.0), Duration::from_millis(1000));
        assert_eq!(scaled(FLASH_FADE, f64::NAN), Duration::ZERO);
        assert_eq!(scaled(FLASH_FADE, -1.0), Duration::ZERO);
    }

    #[test]
    fn test_huge_factors_are_capped() {
        let slow = RevealStage::scaled_sequence(1e300);
        assert_eq!(slow[0].1, Duration::ZERO);
        assert_eq!(slow[1].1, MAX_DELAY);
        assert_eq!(slow[2].1, MAX_DELAY);

        assert_eq!(scaled(FLASH_FADE, f64::INFINITY), MAX_DELAY);
        assert_eq!(scaled(FLASH_FADE, 1e6), MAX_DELAY);
        assert_eq!(scaled(FLASH_FADE, 100.0), Duration::from_secs(50));
    }
}

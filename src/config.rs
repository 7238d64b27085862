//! Runtime settings for a game session and its front end.

use std::time::Duration;

use crate::constants::DEFAULT_DELAY_MS;

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Pause before the computer replies to a human move, in milliseconds.
    /// Only the interactive front end sleeps; the engine never does.
    pub delay_ms: u64,

    /// Seed for the random fallback. `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Let the computer make the opening move.
    pub computer_first: bool,

    /// Number cells 1-9 instead of 0-8 at the prompt.
    pub one_based: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            seed: None,
            computer_first: false,
            one_based: false,
        }
    }
}

impl Config {
    /// Create a config with a fixed seed and no delay, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            delay_ms: 0,
            ..Default::default()
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }

    /// Generator for a simulated opponent. Seeded runs derive a different
    /// seed so it does not replay the session's own stream.
    pub fn opponent_rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed ^ OPPONENT_SEED_MASK),
            None => fastrand::Rng::new(),
        }
    }
}

const OPPONENT_SEED_MASK: u64 = 0x9e37_79b9_7f4a_7c15;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_streams_repeat() {
        let config = Config::seeded(11);
        let (mut first, mut second) = (config.rng(), config.rng());
        let a: Vec<u64> = (0..8).map(|_| first.u64(..)).collect();
        let b: Vec<u64> = (0..8).map(|_| second.u64(..)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_opponent_stream_differs_from_session() {
        let config = Config::seeded(11);
        let mut session = config.rng();
        let mut opponent = config.opponent_rng();
        let mine: Vec<u64> = (0..8).map(|_| session.u64(..)).collect();
        let theirs: Vec<u64> = (0..8).map(|_| opponent.u64(..)).collect();
        assert_ne!(mine, theirs);

        let mut again = config.opponent_rng();
        let replay: Vec<u64> = (0..8).map(|_| again.u64(..)).collect();
        assert_eq!(theirs, replay);
    }

    #[test]
    fn test_default_delay() {
        let config = Config::default();
        assert_eq!(config.delay().as_millis(), DEFAULT_DELAY_MS as u128);
        assert_eq!(Config::seeded(3).delay_ms, 0);
    }
}

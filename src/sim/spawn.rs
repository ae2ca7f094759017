//! Enemy spawn pacing
//!
//! Spawning is a self-perpetuating chain: each fire draws the next delay
//! uniformly from [0, rate) seconds, so the mean gap is half the rate.
//! Folded into the fixed tick as a countdown: when it expires one enemy
//! spawns and the next delay is drawn. A zero delay fires on the next tick,
//! not the same one, so a zero rate yields exactly one spawn per tick and
//! can never loop within a tick.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Countdown to the next enemy spawn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnScheduler {
    /// Upper bound of the delay draw, seconds
    rate: f32,
    /// Seconds until the next spawn fires
    delay: f32,
}

impl SpawnScheduler {
    pub fn new(rate: f32, rng: &mut Pcg32) -> Self {
        let mut scheduler = Self {
            rate: rate.max(0.0),
            delay: 0.0,
        };
        scheduler.delay = scheduler.draw_delay(rng);
        scheduler
    }

    /// Count down by `dt`; returns true when a spawn fires this tick.
    pub fn advance(&mut self, dt: f32, rng: &mut Pcg32) -> bool {
        self.delay -= dt.max(0.0);
        if self.delay <= 0.0 {
            self.delay = self.draw_delay(rng);
            true
        } else {
            false
        }
    }

    /// Seconds until the next fire
    pub fn next_delay(&self) -> f32 {
        self.delay
    }

    /// Uniform draw from [0, rate); zero when the rate is zero
    fn draw_delay(&self, rng: &mut Pcg32) -> f32 {
        if self.rate > 0.0 {
            rng.random_range(0.0..self.rate)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_delays_stay_in_range() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut scheduler = SpawnScheduler::new(3.0, &mut rng);

        for _ in 0..1000 {
            let delay = scheduler.next_delay();
            assert!((0.0..3.0).contains(&delay));
            // Burn through the pending delay to force a redraw
            while !scheduler.advance(0.5, &mut rng) {}
        }
    }

    #[test]
    fn test_zero_rate_fires_every_tick() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut scheduler = SpawnScheduler::new(0.0, &mut rng);
        assert_eq!(scheduler.next_delay(), 0.0);

        for _ in 0..100 {
            assert!(scheduler.advance(0.03, &mut rng));
            assert_eq!(scheduler.next_delay(), 0.0);
        }
    }

    #[test]
    fn test_negative_rate_treated_as_zero() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut scheduler = SpawnScheduler::new(-5.0, &mut rng);

        assert_eq!(scheduler.next_delay(), 0.0);
        assert!(scheduler.advance(0.03, &mut rng));
        assert_eq!(scheduler.next_delay(), 0.0);
    }

    #[test]
    fn test_negative_dt_does_not_rewind() {
        let mut rng = Pcg32::seed_from_u64(123);
        let mut scheduler = SpawnScheduler::new(10.0, &mut rng);
        let before = scheduler.next_delay();

        let fired = scheduler.advance(-1.0, &mut rng);
        if before > 0.0 {
            assert!(!fired);
            assert_eq!(scheduler.next_delay(), before);
        }
    }
}

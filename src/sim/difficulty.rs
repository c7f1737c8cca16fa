//! Dodge-mode difficulty progression
//!
//! Every `level_interval` seconds of survival the curve levels up once and
//! tightens the spawner: shorter spawn interval (down to a floor) and a
//! faster speed range (up to absolute caps). Past the caps the curve is flat
//! apart from the level counter.

use serde::{Deserialize, Serialize};

use super::spawner::EntitySpawner;
use crate::tuning::DifficultyTuning;

/// Transient level-up notification for the HUD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    pub text: String,
    /// Seconds left on screen
    pub remaining: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyCurve {
    tuning: DifficultyTuning,
    level: u32,
    next_level_at: f64,
    toast: Option<Toast>,
}

impl DifficultyCurve {
    pub fn new(tuning: &DifficultyTuning) -> Self {
        Self {
            tuning: *tuning,
            level: 1,
            next_level_at: f64::from(tuning.level_interval),
            toast: None,
        }
    }

    /// Check the level-up threshold against total survival time.
    /// At most one level is gained per call.
    pub fn advance(&mut self, elapsed: f64, spawner: &mut EntitySpawner) -> bool {
        if elapsed < self.next_level_at {
            return false;
        }
        self.level += 1;
        self.next_level_at += f64::from(self.tuning.level_interval);

        let t = &self.tuning;
        let interval = (spawner.interval() * t.interval_factor).max(t.interval_floor);
        let (lo, hi) = spawner.speed_range();
        let lo = (lo + t.speed_min_step).min(t.speed_min_cap);
        let hi = (hi + t.speed_max_step).min(t.speed_max_cap);
        spawner.set_interval(interval);
        spawner.set_speed_range(lo, hi);

        self.toast = Some(Toast {
            text: format!("Level up! Lv.{}", self.level),
            remaining: t.toast_seconds,
        });
        log::debug!(
            "Level {} at {:.2}s: interval={:.3}, speed=({}, {})",
            self.level,
            elapsed,
            interval,
            lo,
            hi
        );
        true
    }

    /// Count down the toast; it disappears when the timer runs out
    pub fn tick_toast(&mut self, dt: f32) {
        if let Some(toast) = &mut self.toast {
            toast.remaining = (toast.remaining - dt).max(0.0);
            if toast.remaining <= 0.0 {
                self.toast = None;
            }
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn next_level_at(&self) -> f64 {
        self.next_level_at
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Back to level 1 with no toast
    pub fn reset(&mut self) {
        *self = Self::new(&self.tuning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::{SpawnerTuning, WorldTuning};
    use proptest::prelude::*;

    fn setup() -> (DifficultyCurve, EntitySpawner) {
        let curve = DifficultyCurve::new(&DifficultyTuning::default());
        let spawner = EntitySpawner::new(&SpawnerTuning::hazards(), &WorldTuning::default(), 7);
        (curve, spawner)
    }

    #[test]
    fn test_no_level_before_threshold() {
        let (mut curve, mut spawner) = setup();
        assert!(!curve.advance(9.99, &mut spawner));
        assert_eq!(curve.level(), 1);
        assert_eq!(spawner.interval(), 0.7);
    }

    #[test]
    fn test_first_level_up() {
        let (mut curve, mut spawner) = setup();
        assert!(curve.advance(10.0, &mut spawner));
        assert_eq!(curve.level(), 2);
        assert_eq!(curve.next_level_at(), 20.0);
        assert!((spawner.interval() - 0.595).abs() < 1e-6);
        assert_eq!(spawner.speed_range(), (355.0, 760.0));
        let toast = curve.toast().unwrap();
        assert_eq!(toast.text, "Level up! Lv.2");
        assert_eq!(toast.remaining, 1.5);
    }

    #[test]
    fn test_one_level_per_call() {
        let (mut curve, mut spawner) = setup();
        // Far past several thresholds; still only one step
        assert!(curve.advance(35.0, &mut spawner));
        assert_eq!(curve.level(), 2);
        assert!(curve.advance(35.0, &mut spawner));
        assert!(curve.advance(35.0, &mut spawner));
        assert!(!curve.advance(35.0, &mut spawner));
        assert_eq!(curve.level(), 4);
    }

    #[test]
    fn test_caps_flatten_curve() {
        let (mut curve, mut spawner) = setup();
        for i in 1..=60u32 {
            curve.advance(f64::from(i) * 10.0, &mut spawner);
        }
        assert_eq!(curve.level(), 61);
        assert_eq!(spawner.interval(), 0.25);
        assert_eq!(spawner.speed_range(), (1000.0, 1400.0));
    }

    #[test]
    fn test_toast_expires() {
        let (mut curve, mut spawner) = setup();
        curve.advance(10.0, &mut spawner);
        curve.tick_toast(1.0);
        assert_eq!(curve.toast().unwrap().remaining, 0.5);
        curve.tick_toast(0.5);
        assert!(curve.toast().is_none());
    }

    #[test]
    fn test_reset() {
        let (mut curve, mut spawner) = setup();
        curve.advance(10.0, &mut spawner);
        curve.reset();
        assert_eq!(curve, DifficultyCurve::new(&DifficultyTuning::default()));
    }

    proptest! {
        #[test]
        fn prop_curve_is_monotonic(steps in prop::collection::vec(0.0f32..4.0, 1..300)) {
            let (mut curve, mut spawner) = setup();
            let mut elapsed = 0.0f64;
            for dt in steps {
                let level = curve.level();
                let interval = spawner.interval();
                let (lo, hi) = spawner.speed_range();

                elapsed += f64::from(dt);
                curve.advance(elapsed, &mut spawner);

                let (new_lo, new_hi) = spawner.speed_range();
                prop_assert!(curve.level() >= level);
                prop_assert!(spawner.interval() <= interval);
                prop_assert!(spawner.interval() >= 0.25);
                prop_assert!(new_lo >= lo && new_hi >= hi);
                prop_assert!(new_lo <= 1000.0 && new_hi <= 1400.0);
                prop_assert!(new_lo < new_hi);
            }
        }
    }
}

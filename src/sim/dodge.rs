//! Dodge mode: survive a rain of poisonous potatoes
//!
//! A single hit ends the run. Every hazard that falls off the bottom counts
//! as avoided, and the difficulty curve tightens with survival time.

use super::difficulty::{DifficultyCurve, Toast};
use super::mover::{MoveInput, Mover};
use super::spawner::EntitySpawner;
use super::state::{GameMode, Hud, TickOutcome};
use crate::consts::MAX_MOTION_DT;
use crate::scene::SceneId;
use crate::tuning::{DodgeTuning, Tuning};

#[derive(Debug, Clone)]
pub struct DodgeMode {
    tuning: DodgeTuning,
    player: Mover,
    hazards: EntitySpawner,
    curve: DifficultyCurve,
    avoided: u64,
    /// Survival time in seconds (uncapped frame time). Summed in f64 so the
    /// level thresholds land on time regardless of frame rate.
    elapsed: f64,
}

impl DodgeMode {
    pub fn new(tuning: &Tuning, seed: u64) -> Self {
        let dodge = tuning.dodge;
        let mut hazards = EntitySpawner::new(&dodge.hazards, &tuning.world, seed);
        hazards.spawn_batch(dodge.hazards.initial_count);
        Self {
            tuning: dodge,
            player: Mover::new(&dodge.player, tuning.world.width),
            hazards,
            curve: DifficultyCurve::new(&dodge.difficulty),
            avoided: 0,
            elapsed: 0.0,
        }
    }

    pub fn level(&self) -> u32 {
        self.curve.level()
    }

    pub fn avoided(&self) -> u64 {
        self.avoided
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn curve(&self) -> &DifficultyCurve {
        &self.curve
    }

    #[cfg(test)]
    pub(crate) fn hazards_mut(&mut self) -> &mut EntitySpawner {
        &mut self.hazards
    }
}

impl GameMode for DodgeMode {
    fn scene_id(&self) -> SceneId {
        SceneId::Dodge
    }

    fn tick(&mut self, dt: f32, input: MoveInput) -> TickOutcome {
        self.curve.tick_toast(dt);

        let motion_dt = dt.min(MAX_MOTION_DT);
        self.player.update(motion_dt, input);
        self.hazards.advance(motion_dt);

        // Hit test runs before culling and before the level check, so a hit
        // on the level-up tick ends the run without leveling up
        if self.hazards.any_overlap(&self.player.bounds()) {
            self.hazards.clear();
            log::info!(
                "Dodge run over: level {}, avoided {}, survived {:.2}s",
                self.curve.level(),
                self.avoided,
                self.elapsed
            );
            return TickOutcome::GameOver;
        }

        self.avoided += self.hazards.cull() as u64;
        self.elapsed += f64::from(dt);
        self.curve.advance(self.elapsed, &mut self.hazards);
        TickOutcome::Continue
    }

    fn reset(&mut self) {
        self.avoided = 0;
        self.elapsed = 0.0;
        self.curve.reset();
        self.hazards.reset(&self.tuning.hazards);
        self.hazards.spawn_batch(self.tuning.hazards.initial_count);
        self.player.reset_to(self.tuning.player.start);
    }

    fn hud(&self) -> Hud {
        Hud::Dodge {
            level: self.curve.level(),
            avoided: self.avoided,
            elapsed: self.elapsed,
        }
    }

    fn actor(&self) -> &Mover {
        &self.player
    }

    fn spawner(&self) -> &EntitySpawner {
        &self.hazards
    }

    fn toast(&self) -> Option<&Toast> {
        self.curve.toast()
    }
}

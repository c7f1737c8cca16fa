//! Catch mode: collect falling potatoes in a bucket
//!
//! Every potato in the bucket scores a point. Every potato that reaches the
//! floor costs a life, and the run ends when the lives run out.

use super::mover::{MoveInput, Mover};
use super::spawner::EntitySpawner;
use super::state::{GameMode, Hud, TickOutcome};
use crate::consts::MAX_MOTION_DT;
use crate::scene::SceneId;
use crate::tuning::{CatchTuning, Tuning};

#[derive(Debug, Clone)]
pub struct CatchMode {
    tuning: CatchTuning,
    bucket: Mover,
    items: EntitySpawner,
    score: u64,
    lives: u32,
    missed_total: u64,
    /// Play time in seconds (uncapped frame time)
    elapsed: f64,
}

impl CatchMode {
    pub fn new(tuning: &Tuning, seed: u64) -> Self {
        let catch = tuning.catch;
        let mut items = EntitySpawner::new(&catch.items, &tuning.world, seed);
        items.spawn_batch(catch.items.initial_count);
        Self {
            tuning: catch,
            bucket: Mover::new(&catch.bucket, tuning.world.width),
            items,
            score: 0,
            lives: catch.lives,
            missed_total: 0,
            elapsed: 0.0,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn missed_total(&self) -> u64 {
        self.missed_total
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    #[cfg(test)]
    pub(crate) fn items_mut(&mut self) -> &mut EntitySpawner {
        &mut self.items
    }
}

impl GameMode for CatchMode {
    fn scene_id(&self) -> SceneId {
        SceneId::Catch
    }

    fn tick(&mut self, dt: f32, input: MoveInput) -> TickOutcome {
        let motion_dt = dt.min(MAX_MOTION_DT);
        self.bucket.update(motion_dt, input);
        let missed = self.items.update(motion_dt) as u32;

        // Dying takes priority: no catches are scored on the fatal tick
        if missed >= self.lives {
            self.items.clear();
            self.lives = 0;
            log::info!(
                "Catch run over: caught {}, missed {}, played {:.2}s",
                self.score,
                self.missed_total + missed as u64,
                self.elapsed
            );
            return TickOutcome::GameOver;
        }

        if missed > 0 {
            self.lives -= missed;
            self.missed_total += missed as u64;
            log::debug!("Missed {} potatoes, {} lives left", missed, self.lives);
        }

        self.score += self.items.consume_overlapping(&self.bucket.bounds()) as u64;
        self.elapsed += f64::from(dt);
        TickOutcome::Continue
    }

    fn reset(&mut self) {
        self.score = 0;
        self.lives = self.tuning.lives;
        self.missed_total = 0;
        self.elapsed = 0.0;
        self.items.reset(&self.tuning.items);
        self.items.spawn_batch(self.tuning.items.initial_count);
        self.bucket.reset_to(self.tuning.bucket.start);
    }

    fn hud(&self) -> Hud {
        Hud::Catch {
            score: self.score,
            lives: self.lives,
            max_lives: self.tuning.lives,
            missed: self.missed_total,
            elapsed: self.elapsed,
        }
    }

    fn actor(&self) -> &Mover {
        &self.bucket
    }

    fn spawner(&self) -> &EntitySpawner {
        &self.items
    }
}

//! Time-accumulator batch spawner
//!
//! The spawner owns every live entity of a scene. Each update it:
//! 1. Fires as many spawn batches as the accumulated time allows
//! 2. Moves every entity down by `speed * dt`
//! 3. Culls entities that fell past the bottom and reports how many
//!
//! What a cull *means* (an avoided hazard or a missed catch) is up to the
//! game mode; the spawner only counts.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{Aabb, overlaps};
use super::entity::Entity;
use crate::consts::SPAWN_TOP_Y;
use crate::tuning::{SpawnerTuning, WorldTuning};

#[derive(Debug, Clone)]
pub struct EntitySpawner {
    rng: Pcg32,
    world: Vec2,
    entity_size: Vec2,
    interval: f32,
    speed_min: f32,
    speed_max: f32,
    batch_size: u32,
    max_population: usize,
    /// Time accumulated toward the next batch
    timer: f32,
    entities: Vec<Entity>,
    next_id: u32,
}

impl EntitySpawner {
    pub fn new(tuning: &SpawnerTuning, world: &WorldTuning, seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            world: Vec2::new(world.width, world.height),
            entity_size: tuning.entity_size,
            interval: tuning.interval,
            speed_min: tuning.speed_min,
            speed_max: tuning.speed_max,
            batch_size: tuning.batch_size,
            max_population: tuning.max_population as usize,
            timer: 0.0,
            entities: Vec::with_capacity(tuning.max_population as usize),
            next_id: 1,
        }
    }

    /// Advance by `dt` (already clamped by the caller). Returns the number of
    /// entities culled at the bottom edge this step.
    pub fn update(&mut self, dt: f32) -> usize {
        self.advance(dt);
        self.cull()
    }

    /// Spawn and move without culling. Dodge mode uses this to test hits
    /// before fallen hazards are removed.
    pub fn advance(&mut self, dt: f32) {
        self.timer += dt;
        let mut batches = 0u32;
        while self.timer >= self.interval {
            self.spawn_batch(self.batch_size);
            self.timer -= self.interval;
            batches += 1;
        }
        if batches > 1 {
            log::debug!("Spawner caught up {} batches in one step", batches);
        }

        for entity in &mut self.entities {
            entity.advance(dt);
        }
    }

    /// Spawn up to `count` entities, stopping silently at the population cap
    pub fn spawn_batch(&mut self, count: u32) {
        for _ in 0..count {
            if !self.spawn() {
                break;
            }
        }
    }

    /// Spawn one entity above the visible area. Returns false at the cap.
    pub fn spawn(&mut self) -> bool {
        if self.entities.len() >= self.max_population {
            return false;
        }
        let half_w = self.entity_size.x * 0.5;
        let x = self.rng.random_range(half_w..=self.world.x - half_w);
        let speed = self.rng.random_range(self.speed_min..=self.speed_max);
        let id = self.next_id;
        self.next_id += 1;
        self.entities
            .push(Entity::from_top(id, x, SPAWN_TOP_Y, speed, self.entity_size));
        true
    }

    /// Remove entities that fell past the bottom edge, returning the count
    pub fn cull(&mut self) -> usize {
        let before = self.entities.len();
        let floor = self.world.y;
        self.entities.retain(|e| !e.is_out(floor));
        before - self.entities.len()
    }

    /// Does any live entity overlap `actor`?
    pub fn any_overlap(&self, actor: &Aabb) -> bool {
        self.entities.iter().any(|e| overlaps(actor, &e.bounds()))
    }

    /// Remove every entity overlapping `actor`, returning how many were removed
    pub fn consume_overlapping(&mut self, actor: &Aabb) -> usize {
        let before = self.entities.len();
        self.entities.retain(|e| !overlaps(actor, &e.bounds()));
        before - self.entities.len()
    }

    /// Drop all entities and the pending spawn time
    pub fn clear(&mut self) {
        self.entities.clear();
        self.timer = 0.0;
    }

    /// Clear, then restore cadence and speed range from tuning.
    /// The RNG stream continues so a restart doesn't replay the same potatoes.
    pub fn reset(&mut self, tuning: &SpawnerTuning) {
        self.clear();
        self.interval = tuning.interval;
        self.speed_min = tuning.speed_min;
        self.speed_max = tuning.speed_max;
        self.batch_size = tuning.batch_size;
        self.max_population = tuning.max_population as usize;
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn max_population(&self) -> usize {
        self.max_population
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn set_interval(&mut self, interval: f32) {
        self.interval = interval;
    }

    /// Current fall speed range `(min, max)`
    pub fn speed_range(&self) -> (f32, f32) {
        (self.speed_min, self.speed_max)
    }

    pub fn set_speed_range(&mut self, min: f32, max: f32) {
        self.speed_min = min;
        self.speed_max = max;
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Direct access for tests that need hand-placed entities
    #[cfg(test)]
    pub(crate) fn entities_mut(&mut self) -> &mut Vec<Entity> {
        &mut self.entities
    }
}

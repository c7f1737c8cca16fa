//! Owns the current scene and swaps it on request
//!
//! Per frame the platform loop should:
//! 1. Forward input through [`SceneDirector::handle_input`]
//! 2. Call [`SceneDirector::frame`] with the raw frame time
//! 3. Stop as soon as either returns [`Flow::Quit`]

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{InputEvent, MenuScene, RenderTarget, Scene, SceneCommand, SceneController, SceneId};
use crate::tuning::Tuning;

/// Whether the platform loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct SceneDirector {
    tuning: Tuning,
    /// Source of per-scene seeds, so a whole session replays from one seed
    seeds: Pcg32,
    current: Box<dyn Scene>,
    quit: bool,
}

impl SceneDirector {
    /// Start at the main menu
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self::starting_at(tuning, seed, SceneId::Menu)
    }

    pub fn starting_at(tuning: Tuning, seed: u64, id: SceneId) -> Self {
        let mut seeds = Pcg32::seed_from_u64(seed);
        let current = build_scene(&tuning, &mut seeds, id);
        log::info!("Starting at {} (session seed {})", id, seed);
        Self {
            tuning,
            seeds,
            current,
            quit: false,
        }
    }

    pub fn current(&self) -> SceneId {
        self.current.id()
    }

    pub fn is_quit(&self) -> bool {
        self.quit
    }

    /// Forward one input event. A quit event ends the session from any state.
    pub fn handle_input(&mut self, event: &InputEvent) -> Flow {
        if self.quit {
            return Flow::Quit;
        }
        if *event == InputEvent::Quit {
            log::info!("Quit requested in {}", self.current.id());
            self.quit = true;
            return Flow::Quit;
        }
        self.current.handle_input(event);
        Flow::Continue
    }

    /// Update, draw, then apply any transition the scene asked for
    pub fn frame(&mut self, dt: f32, target: &mut dyn RenderTarget) -> Flow {
        if self.quit {
            return Flow::Quit;
        }

        let command = self.current.update(dt);
        self.current.draw(target);

        match command {
            Some(SceneCommand::Switch(id)) => {
                log::info!("Scene {} -> {}", self.current.id(), id);
                self.current = build_scene(&self.tuning, &mut self.seeds, id);
                Flow::Continue
            }
            Some(SceneCommand::Quit) => {
                log::info!("Quit from {}", self.current.id());
                self.quit = true;
                Flow::Quit
            }
            None => Flow::Continue,
        }
    }
}

fn build_scene(tuning: &Tuning, seeds: &mut Pcg32, id: SceneId) -> Box<dyn Scene> {
    match id {
        SceneId::Menu => Box::new(MenuScene::new(&tuning.world)),
        SceneId::Dodge => Box::new(SceneController::dodge(tuning, seeds.random())),
        SceneId::Catch => Box::new(SceneController::catch(tuning, seeds.random())),
    }
}

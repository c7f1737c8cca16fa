//! Play scene state machine shared by both game modes
//!
//! ```text
//! Playing --(hit / out of lives)--> GameOver --(summary drawn)--> AwaitingChoice
//! AwaitingChoice --(Restart)--> Playing      (next tick runs with dt = 0)
//! any phase      --(Menu)-----> scene exits to the menu
//! ```
//!
//! The game-over modal is just a phase: while it is up nothing in the mode
//! mutates, and the only thing input can change is the pending request.

use super::{FrameView, GameOverSummary, InputEvent, Key, RenderTarget, Scene, SceneCommand, SceneId};
use crate::sim::{CatchMode, DodgeMode, GameMode, GamePhase, MoveInput, TickOutcome};
use crate::tuning::Tuning;

pub type DodgeScene = SceneController<DodgeMode>;
pub type CatchScene = SceneController<CatchMode>;

/// Request queued by input and applied on the next update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Restart,
    Menu,
}

pub struct SceneController<M: GameMode> {
    mode: M,
    phase: GamePhase,
    pending: Option<Pending>,
    held: MoveInput,
    /// Set by restart so time spent on the game-over card isn't simulated
    ignore_next_dt: bool,
}

impl SceneController<DodgeMode> {
    pub fn dodge(tuning: &Tuning, seed: u64) -> Self {
        Self::new(DodgeMode::new(tuning, seed))
    }
}

impl SceneController<CatchMode> {
    pub fn catch(tuning: &Tuning, seed: u64) -> Self {
        Self::new(CatchMode::new(tuning, seed))
    }
}

impl<M: GameMode> SceneController<M> {
    pub fn new(mode: M) -> Self {
        Self {
            mode,
            phase: GamePhase::Playing,
            pending: None,
            held: MoveInput::default(),
            ignore_next_dt: false,
        }
    }

    pub fn mode(&self) -> &M {
        &self.mode
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Reinitialize the run. The following tick is simulated with `dt = 0`.
    pub fn restart(&mut self) {
        self.mode.reset();
        self.phase = GamePhase::Playing;
        self.pending = None;
        self.ignore_next_dt = true;
        log::info!("Restarted {}", self.mode.scene_id());
    }

    #[cfg(test)]
    pub(crate) fn mode_mut(&mut self) -> &mut M {
        &mut self.mode
    }
}

impl<M: GameMode> Scene for SceneController<M> {
    fn id(&self) -> SceneId {
        self.mode.scene_id()
    }

    fn handle_input(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Pressed(Key::Left) => self.held.left = true,
            InputEvent::Released(Key::Left) => self.held.left = false,
            InputEvent::Pressed(Key::Right) => self.held.right = true,
            InputEvent::Released(Key::Right) => self.held.right = false,
            InputEvent::Pressed(Key::Menu) => self.pending = Some(Pending::Menu),
            // Restart is only offered once the summary is on screen
            InputEvent::Pressed(Key::Restart) if self.phase == GamePhase::AwaitingChoice => {
                self.pending = Some(Pending::Restart);
            }
            _ => {}
        }
    }

    fn update(&mut self, dt: f32) -> Option<SceneCommand> {
        match self.pending.take() {
            Some(Pending::Menu) => return Some(SceneCommand::Switch(SceneId::Menu)),
            Some(Pending::Restart) => self.restart(),
            None => {}
        }

        if self.phase.is_terminal() {
            return None;
        }

        let dt = if std::mem::take(&mut self.ignore_next_dt) {
            0.0
        } else {
            dt
        };
        if self.mode.tick(dt, self.held) == TickOutcome::GameOver {
            self.phase = GamePhase::GameOver;
        }
        None
    }

    fn draw(&mut self, target: &mut dyn RenderTarget) {
        let actor = self.mode.actor();
        target.draw_frame(&FrameView {
            scene: self.mode.scene_id(),
            entities: self.mode.spawner().entities(),
            actor: actor.bounds(),
            facing: actor.facing,
            hud: self.mode.hud(),
            toast: self.mode.toast(),
            game_over: self.phase.is_terminal(),
        });

        if self.phase == GamePhase::GameOver {
            target.draw_game_over(&GameOverSummary {
                scene: self.mode.scene_id(),
                hud: self.mode.hud(),
            });
            self.phase = GamePhase::AwaitingChoice;
        }
    }
}

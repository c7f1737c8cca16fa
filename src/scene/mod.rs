//! Scenes and the contract with the presentation layer
//!
//! A scene consumes input events, advances once per frame, and describes
//! itself to a [`RenderTarget`]. Scene changes are requested by returning a
//! [`SceneCommand`] from `update`; the [`SceneDirector`] performs them.

use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use thiserror::Error;

use crate::sim::{Aabb, Entity, Facing, Hud, Toast};

pub mod director;
pub mod menu;
pub mod play;

pub use director::{Flow, SceneDirector};
pub use menu::{MenuButton, MenuScene};
pub use play::{CatchScene, DodgeScene, SceneController};

/// Scene identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    Menu,
    Dodge,
    Catch,
}

impl SceneId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SceneId::Menu => "menu",
            SceneId::Dodge => "dodge",
            SceneId::Catch => "catch",
        }
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown scene '{0}' (expected menu, dodge or catch)")]
pub struct UnknownScene(pub String);

impl FromStr for SceneId {
    type Err = UnknownScene;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "menu" => Ok(SceneId::Menu),
            "dodge" => Ok(SceneId::Dodge),
            "catch" => Ok(SceneId::Catch),
            _ => Err(UnknownScene(s.to_string())),
        }
    }
}

/// Transition requested by a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    Switch(SceneId),
    /// Leave the game entirely
    Quit,
}

/// Logical keys the core understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Restart,
    Menu,
}

/// Input delivered by the platform layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Pressed(Key),
    Released(Key),
    /// Pointer click at a playfield position
    Click(Vec2),
    /// Window closed / global quit. Honored from any state.
    Quit,
}

/// Everything a play scene shows in one frame
#[derive(Debug)]
pub struct FrameView<'a> {
    pub scene: SceneId,
    pub entities: &'a [Entity],
    pub actor: Aabb,
    pub facing: Facing,
    pub hud: Hud,
    pub toast: Option<&'a Toast>,
    /// True once the run has ended (gameplay frozen)
    pub game_over: bool,
}

/// Final numbers for the game-over card. Sent once per game over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameOverSummary {
    pub scene: SceneId,
    pub hud: Hud,
}

#[derive(Debug)]
pub struct MenuView<'a> {
    pub title: &'a str,
    pub buttons: &'a [MenuButton],
}

/// Implemented by the presentation layer, which owns fonts, sprites and
/// the actual drawing
pub trait RenderTarget {
    fn draw_frame(&mut self, frame: &FrameView<'_>);

    fn draw_game_over(&mut self, summary: &GameOverSummary);

    fn draw_menu(&mut self, menu: &MenuView<'_>);
}

/// A screen of the game
pub trait Scene {
    fn id(&self) -> SceneId;

    fn handle_input(&mut self, event: &InputEvent);

    /// Advance one frame. `dt` is raw frame time in seconds.
    fn update(&mut self, dt: f32) -> Option<SceneCommand>;

    fn draw(&mut self, target: &mut dyn RenderTarget);
}

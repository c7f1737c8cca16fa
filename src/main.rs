//! Potato Drop headless runner
//!
//! Plays a session through the real scene director with the autopilot on
//! the keys: clicks the mode's menu button, plays until game over, restarts
//! a few times, then returns to the menu and quits. Useful for soak-testing
//! tuning files and for reproducing runs from a seed.

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;

use potato_drop::scene::{FrameView, GameOverSummary, MenuView};
use potato_drop::sim::autopilot::{catch_input, dodge_input};
use potato_drop::sim::{Hud, MoveInput};
use potato_drop::{Flow, InputEvent, Key, RenderTarget, SceneCommand, SceneDirector, SceneId, Tuning};

#[derive(Debug, Parser)]
#[command(name = "potato-drop", about = "Run a headless Potato Drop session")]
struct Args {
    /// Game mode to play: dodge or catch
    #[arg(long, default_value = "dodge")]
    mode: SceneId,
    /// Session seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Frames per second to simulate
    #[arg(long, default_value_t = 60)]
    fps: u32,
    /// Give up after this many simulated seconds
    #[arg(long, default_value_t = 600.0)]
    seconds: f32,
    /// How many times to restart after a game over
    #[arg(long, default_value_t = 2)]
    restarts: u32,
    /// JSON tuning file (defaults are used when omitted)
    #[arg(long)]
    tuning: Option<PathBuf>,
}

/// Render target that feeds the autopilot and records results
struct Headless {
    mode: SceneId,
    world_width: f32,
    held: MoveInput,
    events: Vec<InputEvent>,
    launched: bool,
    /// A menu click is already queued or in flight
    menu_clicked: bool,
    game_overs: Vec<GameOverSummary>,
}

impl Headless {
    fn new(mode: SceneId, world_width: f32) -> Self {
        Self {
            mode,
            world_width,
            held: MoveInput::default(),
            events: Vec::new(),
            launched: false,
            menu_clicked: false,
            game_overs: Vec::new(),
        }
    }

    /// Turn a desired key state into press/release edges
    fn hold(&mut self, want: MoveInput) {
        for (key, was, now) in [
            (Key::Left, self.held.left, want.left),
            (Key::Right, self.held.right, want.right),
        ] {
            if now && !was {
                self.events.push(InputEvent::Pressed(key));
            } else if was && !now {
                self.events.push(InputEvent::Released(key));
            }
        }
        self.held = want;
    }

    fn tap(&mut self, key: Key) {
        self.events.push(InputEvent::Pressed(key));
        self.events.push(InputEvent::Released(key));
    }
}

impl RenderTarget for Headless {
    fn draw_frame(&mut self, frame: &FrameView<'_>) {
        self.menu_clicked = false;
        if frame.game_over {
            self.hold(MoveInput::default());
            return;
        }
        let want = match frame.scene {
            SceneId::Catch => catch_input(&frame.actor, frame.entities),
            _ => dodge_input(&frame.actor, frame.entities, self.world_width),
        };
        self.hold(want);
        if let Some(toast) = frame.toast {
            log::debug!("{} ({:.1}s)", toast.text, toast.remaining);
        }
    }

    fn draw_game_over(&mut self, summary: &GameOverSummary) {
        match summary.hud {
            Hud::Dodge { level, avoided, elapsed } => log::info!(
                "GAME OVER - level {}, avoided {}, survived {:.2}s",
                level,
                avoided,
                elapsed
            ),
            Hud::Catch { score, missed, elapsed, .. } => log::info!(
                "GAME OVER - caught {}, missed {}, played {:.2}s",
                score,
                missed,
                elapsed
            ),
        }
        self.game_overs.push(*summary);
    }

    fn draw_menu(&mut self, menu: &MenuView<'_>) {
        if self.menu_clicked {
            return;
        }
        let wanted = if self.launched {
            SceneCommand::Quit
        } else {
            SceneCommand::Switch(self.mode)
        };
        if let Some(button) = menu.buttons.iter().find(|b| b.action == wanted) {
            self.events.push(InputEvent::Click(button.rect.center()));
            self.launched = true;
            self.menu_clicked = true;
        }
    }
}

fn main() -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if args.mode == SceneId::Menu {
        bail!("--mode must be dodge or catch");
    }
    if args.fps == 0 {
        bail!("--fps must be at least 1");
    }

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Potato Drop (headless) mode={} seed={}", args.mode, seed);

    let dt = 1.0 / args.fps as f32;
    let max_frames = (args.seconds * args.fps as f32).ceil() as u64;

    let mut director = SceneDirector::new(tuning, seed);
    let mut target = Headless::new(args.mode, tuning.world.width);
    let mut restarts_left = args.restarts;
    let mut handled_game_overs = 0;

    for _ in 0..max_frames {
        for event in std::mem::take(&mut target.events) {
            if director.handle_input(&event) == Flow::Quit {
                break;
            }
        }
        if director.frame(dt, &mut target) == Flow::Quit {
            break;
        }

        if target.game_overs.len() > handled_game_overs {
            handled_game_overs = target.game_overs.len();
            if restarts_left > 0 {
                restarts_left -= 1;
                target.tap(Key::Restart);
            } else {
                target.tap(Key::Menu);
            }
        }
    }

    if !director.is_quit() {
        log::warn!("Stopped after {:.0}s of simulated time", args.seconds);
    }
    log::info!(
        "Session finished: {} game(s) over in {}",
        target.game_overs.len(),
        director.current()
    );
    Ok(())
}

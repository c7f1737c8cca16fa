//! Main menu: three buttons, picked by pointer click

use glam::Vec2;

use super::{InputEvent, MenuView, RenderTarget, Scene, SceneCommand, SceneId};
use crate::sim::Aabb;
use crate::tuning::WorldTuning;

const TITLE: &str = "Potato Game";
const BUTTON_SIZE: Vec2 = Vec2::new(240.0, 80.0);
/// Top edge of the first button; later buttons stack below it
const FIRST_BUTTON_TOP: f32 = 350.0;
const BUTTON_STRIDE: f32 = 120.0;

#[derive(Debug, Clone, PartialEq)]
pub struct MenuButton {
    pub label: &'static str,
    pub rect: Aabb,
    pub action: SceneCommand,
}

pub struct MenuScene {
    buttons: Vec<MenuButton>,
    pending: Option<SceneCommand>,
}

impl MenuScene {
    pub fn new(world: &WorldTuning) -> Self {
        let entries = [
            ("Dodge Potatoes", SceneCommand::Switch(SceneId::Dodge)),
            ("Catch Potatoes", SceneCommand::Switch(SceneId::Catch)),
            ("Quit", SceneCommand::Quit),
        ];
        let left = world.width / 2.0 - BUTTON_SIZE.x / 2.0;
        let buttons = entries
            .into_iter()
            .enumerate()
            .map(|(i, (label, action))| MenuButton {
                label,
                rect: Aabb::from_corner(
                    Vec2::new(left, FIRST_BUTTON_TOP + i as f32 * BUTTON_STRIDE),
                    BUTTON_SIZE,
                ),
                action,
            })
            .collect();
        Self {
            buttons,
            pending: None,
        }
    }

    pub fn buttons(&self) -> &[MenuButton] {
        &self.buttons
    }

    /// Button under `pos`, if any
    pub fn hit(&self, pos: Vec2) -> Option<&MenuButton> {
        self.buttons.iter().find(|b| b.rect.contains_point(pos))
    }
}

impl Scene for MenuScene {
    fn id(&self) -> SceneId {
        SceneId::Menu
    }

    fn handle_input(&mut self, event: &InputEvent) {
        if let InputEvent::Click(pos) = *event {
            if let Some(button) = self.hit(pos) {
                log::info!("Menu: {}", button.label);
                self.pending = Some(button.action);
            }
        }
    }

    fn update(&mut self, _dt: f32) -> Option<SceneCommand> {
        self.pending.take()
    }

    fn draw(&mut self, target: &mut dyn RenderTarget) {
        target.draw_menu(&MenuView {
            title: TITLE,
            buttons: &self.buttons,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> MenuScene {
        MenuScene::new(&WorldTuning::default())
    }

    #[test]
    fn test_button_layout() {
        let m = menu();
        let rects: Vec<_> = m.buttons().iter().map(|b| (b.rect.left(), b.rect.top())).collect();
        assert_eq!(rects, vec![(180.0, 350.0), (180.0, 470.0), (180.0, 590.0)]);
    }

    #[test]
    fn test_click_selects_mode() {
        let mut m = menu();
        m.handle_input(&InputEvent::Click(Vec2::new(300.0, 390.0)));
        assert_eq!(m.update(0.0), Some(SceneCommand::Switch(SceneId::Dodge)));
        // Consumed
        assert_eq!(m.update(0.0), None);

        m.handle_input(&InputEvent::Click(Vec2::new(200.0, 500.0)));
        assert_eq!(m.update(0.0), Some(SceneCommand::Switch(SceneId::Catch)));

        m.handle_input(&InputEvent::Click(Vec2::new(400.0, 650.0)));
        assert_eq!(m.update(0.0), Some(SceneCommand::Quit));
    }

    #[test]
    fn test_click_outside_buttons_ignored() {
        let mut m = menu();
        m.handle_input(&InputEvent::Click(Vec2::new(10.0, 10.0)));
        m.handle_input(&InputEvent::Click(Vec2::new(300.0, 445.0)));
        assert_eq!(m.update(0.0), None);
    }
}

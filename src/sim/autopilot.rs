//! Demo/idle player
//!
//! Picks held keys from what the HUD layer can see (actor box and entity
//! boxes), so it can drive either mode through the normal input path.

use super::collision::Aabb;
use super::entity::Entity;
use super::mover::MoveInput;

/// Horizontal slack added around the player when deciding what's a threat
const THREAT_MARGIN: f32 = 20.0;
/// Hazards further than this many seconds away are ignored
const THREAT_HORIZON: f32 = 0.6;
/// Close enough to the target column to stop steering
const CATCH_DEADZONE: f32 = 6.0;

fn steer(dir: f32) -> MoveInput {
    MoveInput {
        left: dir < 0.0,
        right: dir > 0.0,
    }
}

/// Step away from the hazard that will reach the player soonest
pub fn dodge_input(player: &Aabb, hazards: &[Entity], world_width: f32) -> MoveInput {
    let center = player.center().x;
    let half_w = player.size().x * 0.5;

    let threat = hazards
        .iter()
        .filter(|e| {
            let reach = half_w + e.half_extents.x + THREAT_MARGIN;
            (e.pos.x - center).abs() < reach && e.bounds().top() < player.bottom()
        })
        .map(|e| {
            let gap = (player.top() - e.bounds().bottom()).max(0.0);
            (gap / e.speed, e)
        })
        .filter(|(eta, _)| *eta < THREAT_HORIZON)
        .min_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let Some((_, hazard)) = threat else {
        return MoveInput::default();
    };

    // Away from the hazard, unless that means pushing into a wall
    let mut dir = if hazard.pos.x <= center { 1.0 } else { -1.0 };
    if (dir > 0.0 && player.right() >= world_width - 1.0) || (dir < 0.0 && player.left() <= 1.0) {
        dir = -dir;
    }
    steer(dir)
}

/// Chase the item closest to landing that can still be caught
pub fn catch_input(bucket: &Aabb, items: &[Entity]) -> MoveInput {
    let center = bucket.center().x;
    let target = items
        .iter()
        .filter(|e| e.bounds().bottom() <= bucket.bottom())
        .map(|e| ((bucket.top() - e.bounds().bottom()).max(0.0) / e.speed, e))
        .min_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    match target {
        Some((_, item)) if (item.pos.x - center).abs() > CATCH_DEADZONE => steer(item.pos.x - center),
        _ => MoveInput::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn player() -> Aabb {
        Aabb::from_center(Vec2::new(300.0, 670.0), Vec2::new(22.5, 35.0))
    }

    fn hazard(x: f32, top: f32) -> Entity {
        Entity::from_top(1, x, top, 500.0, Vec2::new(30.0, 23.0))
    }

    #[test]
    fn test_idle_without_threats() {
        assert_eq!(dodge_input(&player(), &[], 600.0), MoveInput::default());
        // Far to the side
        assert_eq!(dodge_input(&player(), &[hazard(50.0, 500.0)], 600.0), MoveInput::default());
        // Directly above but far away in time
        assert_eq!(dodge_input(&player(), &[hazard(300.0, -60.0)], 600.0), MoveInput::default());
    }

    #[test]
    fn test_steps_away_from_incoming() {
        let input = dodge_input(&player(), &[hazard(290.0, 500.0)], 600.0);
        assert!(input.right && !input.left);
        let input = dodge_input(&player(), &[hazard(310.0, 500.0)], 600.0);
        assert!(input.left && !input.right);
    }

    #[test]
    fn test_turns_back_at_wall() {
        let cornered = Aabb::from_center(Vec2::new(577.5, 670.0), Vec2::new(22.5, 35.0));
        let input = dodge_input(&cornered, &[hazard(560.0, 500.0)], 600.0);
        assert!(input.left);
    }

    #[test]
    fn test_catch_chases_lowest_item() {
        let bucket = Aabb::from_center(Vec2::new(300.0, 680.0), Vec2::new(35.0, 24.0));
        let items = [hazard(100.0, 100.0), hazard(500.0, 400.0)];
        let input = catch_input(&bucket, &items);
        assert!(input.right);
        // Lined up: hold still
        let input = catch_input(&bucket, &[hazard(302.0, 400.0)]);
        assert_eq!(input, MoveInput::default());
    }
}

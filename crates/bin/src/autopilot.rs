//! Scripted input source for the headless runner.
//!
//! Steers toward the nearest protein and away from any bacteria that gets
//! close, by pressing and releasing the same keys a player would.

use game::ai::chase_direction;
use game::entity::Sprite;
use game::{Direction, KeyEvent, Rect, World};
use glam::Vec2;
use rand::Rng;

/// Bacteria closer than this (center to center) are fled from.
const DANGER_DISTANCE: f32 = 80.0;

#[derive(Debug, Default)]
pub struct Autopilot {
    held: Option<String>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick a direction for a cell at `cell`.
    pub fn decide(cell: Rect, proteins: &[Rect], bacteria: &[Rect]) -> Direction {
        let center = cell.center();
        let nearest = |rects: &[Rect]| -> Option<(Vec2, f32)> {
            rects
                .iter()
                .map(|r| (r.center(), r.center().distance(center)))
                .min_by(|a, b| a.1.total_cmp(&b.1))
        };

        if let Some((threat, distance)) = nearest(bacteria) {
            if distance < DANGER_DISTANCE {
                return chase_direction(center, threat).opposite();
            }
        }
        match nearest(proteins) {
            Some((protein, _)) => chase_direction(center, protein),
            None => Direction::Stationary,
        }
    }

    /// Key events that move the world's cell in the chosen direction.
    pub fn steer<R: Rng>(&mut self, world: &World<R>) -> Vec<KeyEvent> {
        let proteins: Vec<Rect> = world.proteins().iter().map(|p| p.rect()).collect();
        let bacteria: Vec<Rect> = world.bacteria().iter().map(|b| b.rect()).collect();
        let direction = Self::decide(world.cell().rect(), &proteins, &bacteria);
        let key = Self::key_for(world, direction);
        if key == self.held {
            return Vec::new();
        }

        let mut events = Vec::with_capacity(2);
        if let Some(released) = self.held.take() {
            events.push(KeyEvent::Up(released));
        }
        if let Some(pressed) = key {
            events.push(KeyEvent::Down(pressed.clone()));
            self.held = Some(pressed);
        }
        events
    }

    /// Forget the held key (the world was restarted).
    pub fn reset(&mut self) {
        self.held = None;
    }

    fn key_for<R: Rng>(world: &World<R>, direction: Direction) -> Option<String> {
        let input = &world.config().input;
        let keys = match direction {
            Direction::Stationary => return None,
            Direction::Left => &input.left,
            Direction::Up => &input.up,
            Direction::Right => &input.right,
            Direction::Down => &input.down,
        };
        keys.first().cloned()
    }
}

//! Player-controlled cell.

use super::sprite::{Body, Sprite, SpriteKind};
use glam::Vec2;

/// The cell the player steers around the arena.
#[derive(Debug, Clone)]
pub struct PlayerCell {
    body: Body,
    /// Accumulates fractional damage; displayed rounded.
    pub health: f64,
    pub max_health: f64,
    /// Never decreases within a session.
    pub score: u32,
}

impl PlayerCell {
    pub fn new(position: Vec2, size: f32, velocity: f32, max_health: f64) -> Self {
        Self {
            body: Body::new(position, Vec2::splat(size), velocity),
            health: max_health,
            max_health,
            score: 0,
        }
    }

    /// Consume a protein: heal up to the cap and bank the nutrition as score.
    pub fn eat(&mut self, nutrition: u32) {
        self.health = (self.health + f64::from(nutrition)).min(self.max_health);
        self.score = self.score.saturating_add(nutrition);
    }

    /// Take one contact's worth of damage. Health floors at zero.
    pub fn apply_damage(&mut self, attack: f64) {
        self.health = (self.health - attack).max(0.0);
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// Health as shown to the player.
    #[inline]
    pub fn display_health(&self) -> u32 {
        self.health.round() as u32
    }
}

impl Sprite for PlayerCell {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn kind(&self) -> SpriteKind {
        SpriteKind::Cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell() -> PlayerCell {
        PlayerCell::new(Vec2::ZERO, 50.0, 5.0, 100.0)
    }

    #[test]
    fn test_eat_caps_health_and_adds_score() {
        for start in [0.0, 42.5, 96.0, 100.0] {
            for nutrition in [0, 1, 5, 250] {
                let mut c = cell();
                c.health = start;
                c.score = 7;
                c.eat(nutrition);
                assert_eq!(c.health, (start + f64::from(nutrition)).min(100.0));
                assert_eq!(c.score, 7 + nutrition);
            }
        }
    }

    #[test]
    fn test_damage_floors_at_zero() {
        let mut c = cell();
        c.health = 0.5;
        for _ in 0..10 {
            c.apply_damage(1.0);
            assert!(c.health >= 0.0);
        }
        assert_eq!(c.health, 0.0);
        assert!(c.is_dead());
    }

    #[test]
    fn test_display_health_rounds() {
        let mut c = cell();
        c.apply_damage(0.4);
        assert_eq!(c.display_health(), 100);
        c.apply_damage(0.2);
        assert_eq!(c.display_health(), 99);
    }
}

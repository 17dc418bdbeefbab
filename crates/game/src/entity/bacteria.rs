//! Roaming bacteria and their variant constants.

use super::sprite::{BacteriaKind, Body, Sprite, SpriteKind};
use glam::Vec2;

/// Per-variant constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BacteriaStats {
    pub size: f32,
    pub velocity: f32,
    /// Damage dealt per tick of contact.
    pub attack: f64,
    /// Probability of chasing the cell instead of wandering.
    pub iq: f64,
}

impl BacteriaKind {
    /// Built-in constant table. Config may override individual values.
    pub const fn stats(self) -> BacteriaStats {
        match self {
            BacteriaKind::Standard => BacteriaStats {
                size: 40.0,
                velocity: 3.0,
                attack: 0.1,
                iq: 0.6,
            },
            BacteriaKind::Bomb => BacteriaStats {
                size: 30.0,
                velocity: 2.0,
                attack: 1.0,
                iq: 0.3,
            },
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            BacteriaKind::Standard => "bacteria",
            BacteriaKind::Bomb => "bomb bacteria",
        }
    }
}

/// A bacteria that hunts or wanders each tick.
#[derive(Debug, Clone)]
pub struct Bacteria {
    body: Body,
    pub variant: BacteriaKind,
    pub attack: f64,
    pub iq: f64,
}

impl Bacteria {
    pub fn new(variant: BacteriaKind, position: Vec2, stats: BacteriaStats) -> Self {
        Self {
            body: Body::new(position, Vec2::splat(stats.size), stats.velocity),
            variant,
            attack: stats.attack,
            iq: stats.iq,
        }
    }
}

impl Sprite for Bacteria {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn kind(&self) -> SpriteKind {
        SpriteKind::Bacteria(self.variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bomb_is_stronger_and_dumber() {
        let standard = BacteriaKind::Standard.stats();
        let bomb = BacteriaKind::Bomb.stats();
        assert!(bomb.attack > standard.attack);
        assert!(bomb.iq < standard.iq);
        assert_ne!(bomb.size, standard.size);
        assert_ne!(bomb.velocity, standard.velocity);
    }

    #[test]
    fn test_new_uses_stats() {
        let b = Bacteria::new(BacteriaKind::Bomb, Vec2::new(3.0, 4.0), BacteriaKind::Bomb.stats());
        assert_eq!(b.rect().width(), 30.0);
        assert_eq!(b.body().velocity, 2.0);
        assert_eq!(b.attack, 1.0);
        assert_eq!(b.kind(), SpriteKind::Bacteria(BacteriaKind::Bomb));
    }
}

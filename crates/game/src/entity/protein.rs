//! Protein pickup.

use super::sprite::{Body, Sprite, SpriteKind};
use glam::Vec2;

/// A stationary pickup the cell consumes on contact.
#[derive(Debug, Clone)]
pub struct Protein {
    body: Body,
    pub nutrition: u32,
}

impl Protein {
    pub fn new(position: Vec2, size: f32, nutrition: u32) -> Self {
        Self {
            body: Body::new(position, Vec2::splat(size), 0.0),
            nutrition,
        }
    }
}

impl Sprite for Protein {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn kind(&self) -> SpriteKind {
        SpriteKind::Protein
    }
}

//! Shared body of every sprite and single-axis movement.

use crate::geometry::{Bounds, Rect};
use glam::Vec2;

/// Single-axis movement intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Stationary,
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// Every direction a wandering bacteria may pick, including a pause.
    pub const WANDER: [Direction; 5] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Stationary,
    ];

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Stationary => Direction::Stationary,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
        }
    }
}

/// Which entity a sprite is. Used for AI dispatch, lessons and drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Cell,
    Protein,
    Bacteria(BacteriaKind),
}

/// Bacteria variant tag. Variant constants live in [`BacteriaKind::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BacteriaKind {
    Standard,
    Bomb,
}

/// Rectangle plus movement state, shared by all sprites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub rect: Rect,
    /// Distance travelled per tick.
    pub velocity: f32,
    pub direction: Direction,
}

impl Body {
    pub fn new(position: Vec2, size: Vec2, velocity: f32) -> Self {
        Self {
            rect: Rect {
                origin: position,
                size,
            },
            velocity,
            direction: Direction::Stationary,
        }
    }

    /// Advance one tick along `direction`, snapping flush against the wall
    /// when the step would leave the arena.
    ///
    /// The advancing side uses a strict `<` and the retreating side `>=`.
    pub fn step(&mut self, bounds: &Bounds) {
        let v = self.velocity;
        let r = &mut self.rect;
        match self.direction {
            Direction::Stationary => {}
            Direction::Right => {
                if r.right() + v < bounds.right {
                    r.origin.x += v;
                } else {
                    r.origin.x = bounds.right - r.width();
                }
            }
            Direction::Left => {
                if r.x() - v >= bounds.left {
                    r.origin.x -= v;
                } else {
                    r.origin.x = bounds.left;
                }
            }
            Direction::Down => {
                if r.bottom() + v < bounds.bottom {
                    r.origin.y += v;
                } else {
                    r.origin.y = bounds.bottom - r.height();
                }
            }
            Direction::Up => {
                if r.y() - v >= bounds.top {
                    r.origin.y -= v;
                } else {
                    r.origin.y = bounds.top;
                }
            }
        }
    }
}

/// Common access to a sprite's body.
pub trait Sprite {
    fn body(&self) -> &Body;

    fn body_mut(&mut self) -> &mut Body;

    fn kind(&self) -> SpriteKind;

    #[inline]
    fn rect(&self) -> Rect {
        self.body().rect
    }

    #[inline]
    fn direction(&self) -> Direction {
        self.body().direction
    }

    #[inline]
    fn set_direction(&mut self, direction: Direction) {
        self.body_mut().direction = direction;
    }

    /// Move one tick inside `bounds`.
    #[inline]
    fn step(&mut self, bounds: &Bounds) {
        self.body_mut().step(bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(x: f32, y: f32, velocity: f32, direction: Direction) -> Body {
        let mut body = Body::new(Vec2::new(x, y), Vec2::splat(50.0), velocity);
        body.direction = direction;
        body
    }

    #[test]
    fn test_single_step_right() {
        let bounds = Bounds::new(600.0, 400.0);
        let mut body = body_at(5.0, 7.0, 10.0, Direction::Right);
        body.step(&bounds);
        assert_eq!(body.rect.x(), 15.0);
        assert_eq!(body.rect.y(), 7.0);
    }

    #[test]
    fn test_direction_defaults_and_opposites() {
        assert_eq!(Direction::default(), Direction::Stationary);
        for direction in Direction::WANDER {
            assert_eq!(direction.opposite().opposite(), direction);
        }
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Up.opposite(), Direction::Down);
    }

    #[test]
    fn test_stationary_does_not_move() {
        let bounds = Bounds::new(600.0, 400.0);
        let mut body = body_at(100.0, 100.0, 10.0, Direction::Stationary);
        body.step(&bounds);
        assert_eq!(body.rect.origin, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_repeated_right_rests_flush_against_wall() {
        let bounds = Bounds::new(600.0, 400.0);
        let mut body = body_at(5.0, 7.0, 7.0, Direction::Right);
        for _ in 0..200 {
            body.step(&bounds);
            assert!(body.rect.x() <= bounds.right - body.rect.width());
        }
        assert_eq!(body.rect.x(), 550.0);
    }

    #[test]
    fn test_advancing_side_snaps_on_exact_fit() {
        // right + v == bounds.right fails the strict check and snaps, which
        // lands on the same coordinate.
        let bounds = Bounds::new(600.0, 400.0);
        let mut body = body_at(540.0, 0.0, 10.0, Direction::Right);
        body.step(&bounds);
        assert_eq!(body.rect.x(), 550.0);
    }

    #[test]
    fn test_retreating_side_allows_exact_fit() {
        let bounds = Bounds::new(600.0, 400.0);
        let mut body = body_at(10.0, 10.0, 10.0, Direction::Left);
        body.step(&bounds);
        assert_eq!(body.rect.x(), 0.0);

        body.direction = Direction::Up;
        body.step(&bounds);
        assert_eq!(body.rect.y(), 0.0);
        body.step(&bounds);
        assert_eq!(body.rect.y(), 0.0);
    }

    #[test]
    fn test_left_snaps_to_wall() {
        let bounds = Bounds::new(600.0, 400.0);
        let mut body = body_at(3.0, 0.0, 5.0, Direction::Left);
        body.step(&bounds);
        assert_eq!(body.rect.x(), 0.0);
    }

    #[test]
    fn test_down_clamps_to_bottom() {
        let bounds = Bounds::new(600.0, 400.0);
        let mut body = body_at(0.0, 340.0, 20.0, Direction::Down);
        body.step(&bounds);
        assert_eq!(body.rect.y(), 350.0);
        assert!(body.rect.is_within(&bounds));
    }

    #[test]
    fn test_every_direction_stays_in_bounds() {
        let bounds = Bounds::new(120.0, 90.0);
        for direction in Direction::WANDER {
            let mut body = body_at(30.0, 20.0, 13.0, direction);
            for _ in 0..50 {
                body.step(&bounds);
                assert!(body.rect.is_within(&bounds), "{direction:?} left arena");
            }
        }
    }
}

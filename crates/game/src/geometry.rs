//! Axis-aligned rectangle math.
//!
//! Every sprite in the arena is an axis-aligned box with its origin at the
//! top-left corner. Contact between two sprites is an inclusive overlap test:
//! boxes that merely touch along an edge count as intersecting.

use glam::Vec2;

/// An axis-aligned rectangle (origin top-left, non-negative size).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    /// `x + width`
    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.x
    }

    /// `y + height`
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.y
    }

    /// Center point, used by the autopilot and renderers.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.origin + self.size / 2.0
    }

    /// Inclusive AABB overlap test. Touching edges count as contact.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.bottom().min(other.bottom()) >= self.top().max(other.top())
            && self.right().min(other.right()) >= self.left().max(other.left())
    }

    /// Whether this rectangle lies fully inside `bounds`.
    #[inline]
    pub fn is_within(&self, bounds: &Bounds) -> bool {
        self.left() >= bounds.left
            && self.top() >= bounds.top
            && self.right() <= bounds.right
            && self.bottom() <= bounds.bottom
    }
}

/// Arena bounds, fixed per session from the configured width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    /// Bounds of an arena anchored at the origin.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            right: width,
            bottom: height,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Top-left position that centers a box of `size` inside the arena.
    #[inline]
    pub fn centered(&self, size: Vec2) -> Vec2 {
        Vec2::new(
            self.left + (self.width() - size.x) / 2.0,
            self.top + (self.height() - size.y) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(5.0, 7.0, 50.0, 50.0);
        assert_eq!(r.left(), 5.0);
        assert_eq!(r.top(), 7.0);
        assert_eq!(r.right(), 55.0);
        assert_eq!(r.bottom(), 57.0);
    }

    #[test]
    fn test_overlap() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(30.0, 20.0, 40.0, 40.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_count_as_contact() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let right_neighbour = Rect::new(50.0, 10.0, 10.0, 10.0);
        let corner = Rect::new(50.0, 50.0, 10.0, 10.0);
        assert!(a.intersects(&right_neighbour));
        assert!(a.intersects(&corner));
    }

    #[test]
    fn test_no_overlap() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(50.5, 0.0, 10.0, 10.0);
        let c = Rect::new(0.0, 51.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_intersects_is_symmetric() {
        let rects = [
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(10.0, 0.0, 5.0, 5.0),
            Rect::new(3.0, 3.0, 2.0, 2.0),
            Rect::new(-5.0, 8.0, 30.0, 1.0),
            Rect::new(100.0, 100.0, 1.0, 1.0),
            Rect::new(0.0, 10.0, 0.0, 0.0),
        ];
        for a in &rects {
            for b in &rects {
                assert_eq!(a.intersects(b), b.intersects(a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_containment_contains_intersection() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(outer.intersects(&inner));
        assert!(inner.is_within(&Bounds::new(100.0, 100.0)));
    }

    #[test]
    fn test_centered() {
        let bounds = Bounds::new(600.0, 400.0);
        let pos = bounds.centered(Vec2::splat(50.0));
        assert_eq!(pos, Vec2::new(275.0, 175.0));
    }
}

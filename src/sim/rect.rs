//! Axis-aligned rectangle geometry for bodies and platforms
//!
//! Screen space: origin at the viewport top-left, y grows downward.
//! A rectangle is defined by:
//! - x, y: top-left corner
//! - w, h: extent

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Build from a top-left position and a size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.center_y())
    }

    /// Inclusive overlap test: touching edges count as overlapping
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    /// Same rectangle moved vertically
    pub fn shifted_y(&self, dy: f32) -> Self {
        Self { y: self.y + dy, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center_y(), 40.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_overlap_is_inclusive() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares only the bottom edge
        let touching = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(a.overlaps(&touching));
        assert!(touching.overlaps(&a));

        let apart = Rect::new(0.0, 10.5, 10.0, 10.0);
        assert!(!a.overlaps(&apart));

        let beside = Rect::new(11.0, 0.0, 5.0, 5.0);
        assert!(!a.overlaps(&beside));
    }

    #[test]
    fn test_contained_rect_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_shifted_y() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0).shifted_y(-2.5);
        assert_eq!(r, Rect::new(1.0, -0.5, 3.0, 4.0));
    }
}

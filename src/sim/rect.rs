//! Axis-aligned rectangle geometry
//!
//! Every entity occupies a top-left anchored rectangle. The overlap test is
//! open-interval: rectangles that merely touch along an edge do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A top-left anchored rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Horizontal center of the rectangle
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// The same rectangle shifted by `delta`
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            pos: self.pos + delta,
            size: self.size,
        }
    }

    /// Open-interval AABB overlap. Shared edges and corners do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right() > other.left()
            && self.left() < other.right()
            && self.bottom() > other.top()
            && self.top() < other.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_rects() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        // Shares the x=10 edge
        let right = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&right));
        // Shares the y=10 edge
        let below = Rect::new(Vec2::new(0.0, 10.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&below));
        // Corner contact only
        let corner = Rect::new(Vec2::new(10.0, 10.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&corner));
    }

    #[test]
    fn test_contained_rect_overlaps() {
        let outer = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0));
        let inner = Rect::new(Vec2::new(40.0, 40.0), Vec2::new(10.0, 10.0));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_separated_rects_do_not_overlap() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(50.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&b));
        // Diagonal separation
        let c = Rect::new(Vec2::new(20.0, 20.0), Vec2::new(5.0, 5.0));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(Vec2::new(5.0, 6.0), Vec2::new(10.0, 12.0));
        assert_eq!(r.left(), 5.0);
        assert_eq!(r.right(), 15.0);
        assert_eq!(r.top(), 6.0);
        assert_eq!(r.bottom(), 18.0);
        assert_eq!(r.center_x(), 10.0);
    }

    #[test]
    fn test_translated_keeps_size() {
        let r = Rect::new(Vec2::new(5.0, 6.0), Vec2::new(10.0, 12.0));
        let t = r.translated(Vec2::new(3.0, -2.0));
        assert_eq!(t.pos, Vec2::new(8.0, 4.0));
        assert_eq!(t.size, r.size);
    }

    proptest! {
        #[test]
        fn overlap_is_commutative(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..100.0, ah in 1.0f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 1.0f32..100.0, bh in 1.0f32..100.0,
        ) {
            let a = Rect::new(Vec2::new(ax, ay), Vec2::new(aw, ah));
            let b = Rect::new(Vec2::new(bx, by), Vec2::new(bw, bh));
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn rect_overlaps_itself(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 1.0f32..100.0, h in 1.0f32..100.0,
        ) {
            let r = Rect::new(Vec2::new(x, y), Vec2::new(w, h));
            prop_assert!(r.overlaps(&r));
        }
    }
}

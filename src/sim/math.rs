//! Vector and rectangle primitives
//!
//! Vectors are `glam::Vec2` values: `a + b` is componentwise addition and
//! `v * s` is scalar multiplication. Rectangles are axis-aligned boxes in
//! screen space (y grows downward).

use glam::Vec2;

/// 2D vector used for positions, velocities and sizes
pub type Vec2D = Vec2;

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build a rectangle from its top-left corner and size
    #[inline]
    pub fn from_pos_size(pos: Vec2D, size: Vec2D) -> Self {
        Self {
            left: pos.x,
            top: pos.y,
            right: pos.x + size.x,
            bottom: pos.y + size.y,
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

    /// Overlap test. Rectangles that only share an edge still intersect.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.right < other.left
            || other.right < self.left
            || self.bottom < other.top
            || other.bottom < self.top)
    }
}

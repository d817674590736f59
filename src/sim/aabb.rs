//! Axis-aligned bounding boxes
//!
//! Screen convention: x grows right, y grows down, ground sits at the
//! bottom of the world (y = world height).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its min (top-left) and max (bottom-right) corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from its top-left corner and size
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    /// Box standing on `bottom_center` (feet position)
    pub fn from_bottom_center(bottom_center: Vec2, size: Vec2) -> Self {
        let min = Vec2::new(bottom_center.x - size.x / 2.0, bottom_center.y - size.y);
        Self::from_min_size(min, size)
    }

    /// Box whose top-right corner is `top_right`
    pub fn from_top_right(top_right: Vec2, size: Vec2) -> Self {
        Self::from_min_size(Vec2::new(top_right.x - size.x, top_right.y), size)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Midpoint of the right edge
    #[inline]
    pub fn right_center(&self) -> Vec2 {
        Vec2::new(self.max.x, (self.min.y + self.max.y) * 0.5)
    }

    /// Strict overlap on both axes; boxes that only share an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

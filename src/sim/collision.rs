//! Collision detection between the round player and square enemies
//!
//! Enemies are axis-aligned squares, the player is a circle. The test finds
//! the point of the rectangle closest to the circle center by clamping per
//! axis, which covers the inside, edge and corner cases with one formula.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::clamp;

/// Axis-aligned rectangle (min corner + extent)
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

    /// Square of edge `size` centered on `center`
    pub fn centered_square(center: Vec2, size: f32) -> Self {
        let half = size / 2.0;
        Self::new(center.x - half, center.y - half, size, size)
    }

    /// Point of the rectangle closest to `p` (p itself when inside)
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            clamp(p.x, self.x, self.x + self.w),
            clamp(p.y, self.y, self.y + self.h),
        )
    }

    /// Mirror the rectangle through `pivot`
    pub fn reflected_about(&self, pivot: Vec2) -> Self {
        Self::new(
            2.0 * pivot.x - (self.x + self.w),
            2.0 * pivot.y - (self.y + self.h),
            self.w,
            self.h,
        )
    }
}

/// Check whether a circle overlaps a rectangle
///
/// Strict comparison: a circle exactly tangent to an edge does not collide.
#[inline]
pub fn circle_intersects_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    let d = center - closest;
    d.x * d.x + d.y * d.y < radius * radius
}

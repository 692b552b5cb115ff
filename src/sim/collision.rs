//! Axis-aligned bounding boxes for overlap tests
//!
//! Every entity reduces to an AABB for collision purposes: the player is a
//! rectangle, coins and enemies use the square inscribing their base circle.
//! Cosmetic values (spin, pulsating render radius) never feed into these.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in screen coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from a top-left position and a size
    pub fn from_rect(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Square inscribing a circle: (cx - r, cy - r) to (cx + r, cy + r)
    pub fn from_circle(center: Vec2, radius: f32) -> Self {
        let half = Vec2::splat(radius);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap test: boxes that merely share an edge do not intersect
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

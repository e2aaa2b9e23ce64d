//! Collision detection and response for axis-aligned boxes
//!
//! The ball is round on screen but every test here treats it as its square
//! bounding box.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Integer axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle anchored at a top-left position
    pub fn at(pos: IVec2, w: i32, h: i32) -> Self {
        Self::new(pos.x, pos.y, w, h)
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Velocity component to negate after a collision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectAxis {
    Horizontal,
    Vertical,
}

/// Pick the reflection axis for a ball striking a brick
///
/// A ball whose inner right pixel is at or before the brick's left edge, or
/// whose inner left pixel is at or after the brick's right edge, struck a
/// side face. Anything else is treated as a top/bottom hit.
pub fn brick_reflect_axis(ball: &Rect, brick: &Rect) -> ReflectAxis {
    if ball.x + ball.w - 1 <= brick.x || ball.x + 1 >= brick.right() {
        ReflectAxis::Horizontal
    } else {
        ReflectAxis::Vertical
    }
}

/// Negate the velocity component on the given axis
#[inline]
pub fn reflect(vel: IVec2, axis: ReflectAxis) -> IVec2 {
    match axis {
        ReflectAxis::Horizontal => IVec2::new(-vel.x, vel.y),
        ReflectAxis::Vertical => IVec2::new(vel.x, -vel.y),
    }
}

//! Collision detection and response for axis-aligned geometry
//!
//! Balls are circles, cells and the arena are rectangles. Response is an
//! axis flip, never a true surface-normal reflection.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Velocity component flipped by a bounce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

/// Axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Which arena walls a ball touched this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHit {
    pub x: bool,
    pub y: bool,
}

impl WallHit {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Check whether a circle overlaps a rectangle
///
/// Clamps the center onto the rectangle and compares the squared distance
/// to the closest point against radius². A ball whose center lies inside
/// the rectangle always collides.
#[inline]
pub fn ball_rect_collision(ball_pos: Vec2, ball_radius: f32, rect: &Rect) -> bool {
    let closest = ball_pos.clamp(rect.min(), rect.max());
    ball_pos.distance_squared(closest) < ball_radius * ball_radius
}

/// Pick the bounce axis for a ball hitting a cell
///
/// Flips X only when the horizontal offset from the cell center is strictly
/// larger; exact ties flip Y.
#[inline]
pub fn bounce_axis(ball_pos: Vec2, cell_center: Vec2) -> Axis {
    let offset = ball_pos - cell_center;
    if offset.x.abs() > offset.y.abs() {
        Axis::X
    } else {
        Axis::Y
    }
}

/// Negate one velocity component
#[inline]
pub fn reflect(vel: Vec2, axis: Axis) -> Vec2 {
    match axis {
        Axis::X => Vec2::new(-vel.x, vel.y),
        Axis::Y => Vec2::new(vel.x, -vel.y),
    }
}

/// Bounce a ball off the arena walls
///
/// Each axis is handled independently: when the leading edge reaches a
/// wall the velocity component is negated and the center clamped back to
/// `[radius, extent - radius]`.
pub fn reflect_off_walls(
    pos: &mut Vec2,
    vel: &mut Vec2,
    radius: f32,
    arena_width: f32,
    arena_height: f32,
) -> WallHit {
    let mut hit = WallHit::default();

    if pos.x - radius <= 0.0 || pos.x + radius >= arena_width {
        vel.x = -vel.x;
        pos.x = pos.x.clamp(radius, arena_width - radius);
        hit.x = true;
    }

    if pos.y - radius <= 0.0 || pos.y + radius >= arena_height {
        vel.y = -vel.y;
        pos.y = pos.y.clamp(radius, arena_height - radius);
        hit.y = true;
    }

    hit
}

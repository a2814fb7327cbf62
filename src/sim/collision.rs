//! Collision primitives for axis-aligned and circular entities
//!
//! Everything here works in canvas coordinates: x grows right, y grows down,
//! a rect's position is its top-left corner.

use glam::Vec2;

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
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

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict AABB overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Horizontal-extent overlap with the caller's extent shrunk by `inset`
    /// on each side. Used by the landing test so a player hanging on by a
    /// sub-pixel sliver does not count as standing on a platform.
    pub fn overlaps_x(&self, other: &Rect, inset: f32) -> bool {
        self.left() + inset < other.right() && self.right() - inset > other.left()
    }
}

/// Swept landing test for a falling rect against a platform top.
///
/// The vertical window is sized by the current fall speed: the mover's bottom
/// edge must lie in `[top, top + height + vy]` while `vy >= 0`, which catches
/// a mover that would cross the surface within this tick. Returns the y the
/// mover's top edge should snap to so it rests exactly on the platform.
///
/// The window is only as deep as one tick of travel; at extreme fall speeds a
/// mover can still cross platform and window in a single step. That matches
/// the documented behavior and is not warranted tunnel-proof.
pub fn swept_landing(mover: &Rect, vy: f32, platform: &Rect, inset: f32) -> Option<f32> {
    if vy < 0.0 {
        return None;
    }
    if !mover.overlaps_x(platform, inset) {
        return None;
    }
    let bottom = mover.bottom();
    if bottom >= platform.top() && bottom <= platform.top() + platform.size.y + vy {
        Some(platform.top() - mover.size.y)
    } else {
        None
    }
}

/// Circle/circle overlap
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance_squared(b) < (a_radius + b_radius) * (a_radius + b_radius)
}

/// Point-to-point proximity check (pickup radius, bullet hits)
#[inline]
pub fn within_radius(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance_squared(b) < radius * radius
}

/// Whether a point sits on the band of a ring: within `band` of the ring's
/// current radius
#[inline]
pub fn on_ring_band(point: Vec2, center: Vec2, ring_radius: f32, band: f32) -> bool {
    (point.distance(center) - ring_radius).abs() < band
}

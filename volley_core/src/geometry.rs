use glam::Vec2;

/// Axis-aligned rectangle with the origin at the bottom-left corner (y up).
#[derive(Debug, Clone, Copy, PartialEq)]
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

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y + self.h
    }

    /// Strict interior test (points on the boundary are not contained).
    pub fn contains(&self, p: Vec2) -> bool {
        p.x > self.x && p.x < self.right() && p.y > self.y && p.y < self.top()
    }
}

/// Check whether a move from `from` to `to` crosses one of the rectangle's
/// vertical faces.
///
/// The face nearest to the pre-move x is tested. A point already strictly
/// inside the rectangle reports no crossing, so an embedded ball cannot
/// re-trigger a bounce every tick. The hit condition is that the post-move y
/// falls strictly within the rectangle's vertical span and the face x is
/// straddled by the move; starting exactly on the face and moving off it
/// counts as a hit.
pub fn crosses_face(rect: &Rect, from: Vec2, to: Vec2) -> bool {
    if rect.contains(from) {
        return false;
    }
    if to.y <= rect.y || to.y >= rect.top() {
        return false;
    }

    let face = if (rect.x - from.x).abs() < (rect.right() - from.x).abs() {
        rect.x
    } else {
        rect.right()
    };

    let d_from = face - from.x;
    let d_to = face - to.x;
    d_from * d_to < 0.0 || (d_from == 0.0 && d_to != 0.0)
}

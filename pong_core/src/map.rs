use glam::Vec2;

use crate::{Side, SimError};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Inclusive overlap test: touching edges count as a hit.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x >= other.min.x
            && self.min.x <= other.max.x
            && self.max.y >= other.min.y
            && self.min.y <= other.max.y
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn bottom(&self) -> f32 {
        self.min.y
    }

    pub fn top(&self) -> f32 {
        self.max.y
    }
}

/// The rectangle the match is played in. Origin is bottom-left, y grows up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Result<Self, SimError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(SimError::InvalidConfiguration(format!(
                "field width must be > 0, got {width}"
            )));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(SimError::InvalidConfiguration(format!(
                "field height must be > 0, got {height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Spawn position for a paddle: flush against its own side wall, vertically centred.
    pub fn paddle_spawn(&self, side: Side, paddle_width: f32) -> Vec2 {
        let x = match side {
            Side::Left => paddle_width / 2.0,
            Side::Right => self.width - paddle_width / 2.0,
        };
        Vec2::new(x, self.height / 2.0)
    }

    /// Clamp a centre y so an object of `half_height` stays inside the field.
    pub fn clamp_y(&self, y: f32, half_height: f32) -> f32 {
        if half_height * 2.0 >= self.height {
            return self.height / 2.0;
        }
        y.clamp(half_height, self.height - half_height)
    }

    /// Which side's drag zone (outer thirds of the width) contains `x`.
    ///
    /// Both tests are independent so a degenerate field may report both.
    pub fn drag_zones(&self, x: f32) -> impl Iterator<Item = Side> {
        let third = self.width / 3.0;
        let left = (x < third).then_some(Side::Left);
        let right = (x > self.width - third).then_some(Side::Right);
        left.into_iter().chain(right)
    }

    /// Strictly inside the central third-by-third cell.
    pub fn in_center_cell(&self, x: f32, y: f32) -> bool {
        let w3 = self.width / 3.0;
        let h3 = self.height / 3.0;
        x > w3 && x < w3 * 2.0 && y > h3 && y < h3 * 2.0
    }
}

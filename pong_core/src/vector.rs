//! Small vector helpers on top of `glam::Vec2`.
//!
//! Addition and uniform scaling are the plain `+` and `*` operators; the two
//! operations below are the ones bounce responses need.

use glam::Vec2;

pub trait Vec2Ext {
    /// Flip the horizontal component.
    fn negate_x(self) -> Self;

    /// Shift the vertical component by `dy`.
    fn with_y_offset(self, dy: f32) -> Self;
}

impl Vec2Ext for Vec2 {
    #[inline]
    fn negate_x(self) -> Self {
        Vec2::new(-self.x, self.y)
    }

    #[inline]
    fn with_y_offset(self, dy: f32) -> Self {
        Vec2::new(self.x, self.y + dy)
    }
}

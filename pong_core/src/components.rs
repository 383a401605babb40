use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::map::Aabb;
use crate::params::Params;
use crate::vector::Vec2Ext;
use crate::SimError;

/// Which player an input, paddle or score belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl TryFrom<u8> for Side {
    type Error = SimError;

    /// 0 = left, 1 = right
    fn try_from(player_id: u8) -> Result<Self, Self::Error> {
        match player_id {
            0 => Ok(Side::Left),
            1 => Ok(Side::Right),
            other => Err(SimError::InvalidSide(other)),
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // centre
    pub width: f32,
    pub height: f32,
    pub score: u32,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            side,
            pos,
            width,
            height,
            score: 0,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::new(self.width, self.height))
    }

    /// Bounce the ball if it overlaps this paddle.
    ///
    /// The horizontal velocity is reflected, the whole velocity is scaled by
    /// `speed_up`, and the normalized hit height (`-1` at the bottom edge,
    /// `1` at the top, unbounded beyond) is added to the vertical component.
    /// Only the ball is mutated. Returns whether a bounce happened.
    pub fn bounce_ball(&self, ball: &mut Ball, speed_up: f32) -> bool {
        if !self.bounds().overlaps(&ball.bounds()) {
            return false;
        }

        let half_height = self.height.max(Params::MIN_PADDLE_HEIGHT) / 2.0;
        let offset = (ball.pos.y - self.pos.y) / half_height;
        ball.vel = (ball.vel.negate_x() * speed_up).with_y_offset(offset);
        true
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // centre
    pub vel: Vec2, // units per tick
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(self.size))
    }

    /// Advance one tick. Velocity is already in distance-per-tick.
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Place the ball at `center` and give it a fresh velocity
    pub fn serve(&mut self, center: Vec2, vel: Vec2) {
        self.pos = center;
        self.vel = vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle_at(y: f32) -> Paddle {
        Paddle::new(Side::Left, Vec2::new(12.5, y), 25.0, 200.0)
    }

    #[test]
    fn test_side_try_from() {
        assert_eq!(Side::try_from(0u8), Ok(Side::Left));
        assert_eq!(Side::try_from(1u8), Ok(Side::Right));
        assert_eq!(Side::try_from(2u8), Err(SimError::InvalidSide(2)));
    }

    #[test]
    fn test_bounce_reverses_and_speeds_up() {
        let paddle = paddle_at(300.0);
        let mut ball = Ball::new(Vec2::new(20.0, 300.0), Vec2::new(-4.0, 1.0), 50.0);

        assert!(paddle.bounce_ball(&mut ball, 1.1), "Overlapping ball should bounce");
        assert!((ball.vel.x - 4.4).abs() < 1e-5, "vx should be -(-4) * 1.1");
        assert!((ball.vel.y - 1.1).abs() < 1e-5, "Centre hit adds no offset");
    }

    #[test]
    fn test_bounce_offset_from_hit_height() {
        let paddle = paddle_at(300.0);
        // Top edge of the paddle: offset = 100 / 100 = 1
        let mut ball = Ball::new(Vec2::new(20.0, 400.0), Vec2::new(-4.0, 0.0), 50.0);
        paddle.bounce_ball(&mut ball, 1.1);
        assert!((ball.vel.y - 1.0).abs() < 1e-5);

        // Below centre deflects downward
        let mut ball = Ball::new(Vec2::new(20.0, 250.0), Vec2::new(-4.0, 0.0), 50.0);
        paddle.bounce_ball(&mut ball, 1.1);
        assert!((ball.vel.y + 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_offset_unbounded_past_paddle_edge() {
        let paddle = paddle_at(300.0);
        // Ball box reaches down to the paddle top while its centre is above it
        let mut ball = Ball::new(Vec2::new(20.0, 420.0), Vec2::new(-4.0, 0.0), 50.0);
        assert!(paddle.bounce_ball(&mut ball, 1.1));
        assert!(ball.vel.y > 1.0, "Offset is not clamped to [-1, 1]");
    }

    #[test]
    fn test_no_bounce_without_overlap() {
        let paddle = paddle_at(300.0);
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), Vec2::new(-4.0, 0.0), 50.0);
        assert!(!paddle.bounce_ball(&mut ball, 1.1));
        assert_eq!(ball.vel, Vec2::new(-4.0, 0.0), "Velocity untouched on miss");
    }

    #[test]
    fn test_bounce_leaves_paddle_alone() {
        let paddle = paddle_at(300.0);
        let before = paddle;
        let mut ball = Ball::new(Vec2::new(20.0, 300.0), Vec2::new(-4.0, 0.0), 50.0);
        paddle.bounce_ball(&mut ball, 1.1);
        assert_eq!(paddle, before);
    }

    #[test]
    fn test_zero_height_paddle_does_not_divide_by_zero() {
        let paddle = Paddle::new(Side::Left, Vec2::new(12.5, 300.0), 25.0, 0.0);
        let mut ball = Ball::new(Vec2::new(20.0, 310.0), Vec2::new(-4.0, 0.0), 50.0);
        assert!(paddle.bounce_ball(&mut ball, 1.1));
        assert!(ball.vel.y.is_finite());
    }

    #[test]
    fn test_integrate_is_one_step() {
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), Vec2::new(4.0, -2.0), 50.0);
        ball.integrate();
        ball.integrate();
        assert_eq!(ball.pos, Vec2::new(408.0, 296.0));
        assert_eq!(ball.vel, Vec2::new(4.0, -2.0), "Motion never changes velocity");
    }
}

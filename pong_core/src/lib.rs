pub mod components;
pub mod config;
pub mod error;
pub mod map;
pub mod params;
pub mod resources;
pub mod simulation;
pub mod systems;
pub mod vector;

pub use components::*;
pub use config::*;
pub use error::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use simulation::*;
pub use vector::*;

use glam::Vec2;
use hecs::World;

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, pos: Vec2, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(
        side,
        pos,
        config.paddle_width,
        config.paddle_height,
    ),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2, size: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, size),))
}

use crate::{Ball, Config, Events, Paddle, Playfield};
use hecs::World;

/// Bounce the ball off any paddle it overlaps.
///
/// Runs regardless of pause state, so a paused ball resting against a paddle
/// still has its velocity transformed every tick.
pub fn check_paddle_bounces(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding a borrow across the ball query
    let mut paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();
    paddles.sort_by_key(|p| p.side as u8);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if paddle.bounce_ball(ball, config.speed_up) {
                tracing::trace!(side = ?paddle.side, vel = ?ball.vel, "Paddle bounce");
                events.ball_hit_paddle = true;
            }
        }
    }
}

/// Reflect the vertical velocity when the ball pokes past the bottom or top edge
pub fn check_wall_bounce(world: &mut World, field: &Playfield, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let bounds = ball.bounds();
        if bounds.bottom() < 0.0 || bounds.top() > field.height {
            ball.vel.y = -ball.vel.y;
            tracing::trace!(pos = ?ball.pos, vel = ?ball.vel, "Wall bounce");
            events.ball_hit_wall = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Side};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Playfield, Events) {
        let config = Config::new();
        let field = Playfield::new(config.field_width, config.field_height).unwrap();
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, field.paddle_spawn(Side::Left, 25.0), &config);
        create_paddle(&mut world, Side::Right, field.paddle_spawn(Side::Right, 25.0), &config);
        (world, config, field, Events::new())
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, _config, field, mut events) = setup_world();
        let ball = create_ball(&mut world, Vec2::new(400.0, 580.0), Vec2::new(4.0, 3.0), 50.0);

        check_wall_bounce(&mut world, &field, &mut events);

        let ball = *world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.vel, Vec2::new(4.0, -3.0), "vy flips, vx unchanged");
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, _config, field, mut events) = setup_world();
        let ball = create_ball(&mut world, Vec2::new(400.0, 20.0), Vec2::new(-4.0, -3.0), 50.0);

        check_wall_bounce(&mut world, &field, &mut events);

        assert_eq!(world.get::<&Ball>(ball).unwrap().vel, Vec2::new(-4.0, 3.0));
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_no_wall_bounce_inside_field() {
        let (mut world, _config, field, mut events) = setup_world();
        // Edges exactly on the boundary do not count
        let ball = create_ball(&mut world, Vec2::new(400.0, 25.0), Vec2::new(4.0, -3.0), 50.0);

        check_wall_bounce(&mut world, &field, &mut events);

        assert_eq!(world.get::<&Ball>(ball).unwrap().vel, Vec2::new(4.0, -3.0));
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (mut world, config, _field, mut events) = setup_world();
        let ball = create_ball(&mut world, Vec2::new(40.0, 300.0), Vec2::new(-4.0, 0.0), 50.0);

        check_paddle_bounces(&mut world, &config, &mut events);

        let ball = *world.get::<&Ball>(ball).unwrap();
        assert!((ball.vel.x - 4.4).abs() < 1e-5, "Reflected and sped up");
        assert!(ball.vel.y.abs() < 1e-5);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_collides_with_right_paddle_off_centre() {
        let (mut world, config, _field, mut events) = setup_world();
        let ball = create_ball(&mut world, Vec2::new(770.0, 350.0), Vec2::new(4.0, 1.0), 50.0);

        check_paddle_bounces(&mut world, &config, &mut events);

        let ball = *world.get::<&Ball>(ball).unwrap();
        assert!((ball.vel.x + 4.4).abs() < 1e-5);
        assert!((ball.vel.y - 1.6).abs() < 1e-5, "1.0 * 1.1 + 50/100");
    }

    #[test]
    fn test_no_paddle_hit_in_open_field() {
        let (mut world, config, _field, mut events) = setup_world();
        let ball = create_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(4.0, 0.0), 50.0);

        check_paddle_bounces(&mut world, &config, &mut events);

        assert_eq!(world.get::<&Ball>(ball).unwrap().vel, Vec2::new(4.0, 0.0));
        assert!(!events.ball_hit_paddle);
    }
}

use crate::{Ball, Config, Events, Paddle, Playfield, Side};
use glam::Vec2;
use hecs::World;

/// Award a point when the ball leaves through a side, then re-serve.
///
/// Both exits are tested every tick. Returns the sides that scored.
pub fn check_scoring(
    world: &mut World,
    field: &Playfield,
    config: &Config,
    events: &mut Events,
) -> Vec<Side> {
    let mut scorers = Vec::new();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.bounds().left() < 0.0 {
            // Right player scores, serve toward the right
            scorers.push(Side::Right);
            ball.serve(field.center(), Vec2::new(config.base_speed, 0.0));
        }
        if ball.bounds().right() > field.width {
            // Left player scores, serve toward the left
            scorers.push(Side::Left);
            ball.serve(field.center(), Vec2::new(-config.base_speed, 0.0));
        }
    }

    for &side in &scorers {
        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.score += 1;
                tracing::debug!(?side, score = paddle.score, "Point scored");
            }
        }
        events.scored(side);
    }

    scorers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};

    fn setup_world() -> (World, Config, Playfield, Events) {
        let config = Config::new();
        let field = Playfield::new(config.field_width, config.field_height).unwrap();
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, field.paddle_spawn(Side::Left, 25.0), &config);
        create_paddle(&mut world, Side::Right, field.paddle_spawn(Side::Right, 25.0), &config);
        (world, config, field, Events::new())
    }

    fn score(world: &World, side: Side) -> u32 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_, p)| p.side == side)
            .map(|(_, p)| p.score)
            .unwrap()
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, field, mut events) = setup_world();
        let ball = create_ball(&mut world, Vec2::new(20.0, 500.0), Vec2::new(-6.0, 2.0), 50.0);

        let scorers = check_scoring(&mut world, &field, &config, &mut events);

        assert_eq!(scorers, vec![Side::Right]);
        assert_eq!(score(&world, Side::Right), 1, "Right player should score");
        assert_eq!(score(&world, Side::Left), 0, "Left player should not score");
        assert!(events.right_scored, "Should trigger right_scored event");

        let ball = *world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0), "Ball resets to centre");
        assert_eq!(ball.vel, Vec2::new(4.0, 0.0), "Serve goes right");
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, field, mut events) = setup_world();
        let ball = create_ball(&mut world, Vec2::new(790.0, 100.0), Vec2::new(6.0, 0.0), 50.0);

        check_scoring(&mut world, &field, &config, &mut events);

        assert_eq!(score(&world, Side::Left), 1);
        assert_eq!(score(&world, Side::Right), 0);
        assert!(events.left_scored);
        let ball = *world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.vel, Vec2::new(-4.0, 0.0), "Serve goes left");
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, field, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(25.0, 300.0), Vec2::new(-4.0, 0.0), 50.0);

        let scorers = check_scoring(&mut world, &field, &config, &mut events);

        assert!(scorers.is_empty(), "Left edge exactly at 0 is still in play");
        assert_eq!(events, Events::default(), "No scoring events");
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, field, mut events) = setup_world();
        let ball = create_ball(&mut world, Vec2::new(-10.0, 300.0), Vec2::new(-4.0, 0.0), 50.0);

        check_scoring(&mut world, &field, &config, &mut events);
        world.get::<&mut Ball>(ball).unwrap().pos.x = -10.0;
        check_scoring(&mut world, &field, &config, &mut events);

        assert_eq!(score(&world, Side::Right), 2, "Scores should accumulate");
        assert_eq!(score(&world, Side::Left), 0);
    }
}

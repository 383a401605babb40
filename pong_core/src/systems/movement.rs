use crate::{Ball, Config, Paddle, PauseState, Playfield, Side};
use hecs::World;

/// Advance the ball one tick unless paused. Returns whether it moved.
pub fn move_ball(world: &mut World, pause: PauseState) -> bool {
    if pause.is_paused() {
        return false;
    }
    let mut moved = false;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.integrate();
        moved = true;
    }
    moved
}

/// Shift a paddle's centre vertically by `dy`
pub fn shift_paddle(world: &mut World, side: Side, dy: f32, field: &Playfield, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == side {
            let y = paddle.pos.y + dy;
            paddle.pos.y = constrain_y(y, paddle, field, config);
        }
    }
}

/// Set a paddle's centre y directly (pointer drag)
pub fn set_paddle_y(world: &mut World, side: Side, y: f32, field: &Playfield, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == side {
            paddle.pos.y = constrain_y(y, paddle, field, config);
        }
    }
}

fn constrain_y(y: f32, paddle: &Paddle, field: &Playfield, config: &Config) -> f32 {
    if config.clamp_paddles {
        field.clamp_y(y, paddle.height / 2.0)
    } else {
        y
    }
}

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 25.0;
    pub const PADDLE_HEIGHT: f32 = 200.0;
    pub const PADDLE_STEP: f32 = 20.0; // units per key press
    pub const MIN_PADDLE_HEIGHT: f32 = 1.0; // guards the bounce offset divisor

    // Ball
    pub const BALL_SIZE: f32 = 50.0;
    pub const BASE_SPEED: f32 = 4.0; // units per tick
    pub const SPEED_UP: f32 = 1.1; // multiply velocity on paddle hit

    // Timing
    pub const TICK_RATE_HZ: f32 = 60.0;
    pub const FIXED_DT: f32 = 1.0 / Self::TICK_RATE_HZ;
}

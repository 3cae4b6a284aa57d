//! Pong simulation engine
//!
//! Core modules:
//! - `sim`: Simulation (entities, controllers, collisions, scoring)
//! - `settings`: Match configuration loaded from JSON

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};
pub use sim::{Game, GameError, PaddleController, PaddleInput};

/// Game configuration constants
pub mod consts {
    /// Ball radius (balls are drawn and collided as a 2r x 2r square)
    pub const BALL_RADIUS: f32 = 8.0;
    /// Minimum speed on each axis for a freshly served ball
    pub const BALL_MIN_AXIS_SPEED: f32 = 100.0;
    /// Random spread added on top of the minimum axis speed
    pub const BALL_AXIS_SPEED_SPREAD: f32 = 200.0;

    /// Paddle vertical speed (units per second)
    pub const PADDLE_SPEED: f32 = 300.0;
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 60.0;
    /// Horizontal distance from each side wall to its paddle's left edge
    pub const PADDLE_INSET: f32 = 40.0;

    /// Number of players in a match
    pub const PLAYER_COUNT: usize = 2;
    pub const DEFAULT_WINNING_SCORE: u32 = 10;
}

//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Caller-supplied elapsed time only
//! - Seeded RNG only, owned by one `Game`
//! - Stable iteration order (players left to right, balls by index)

pub mod collision;
pub mod controller;
pub mod error;
pub mod math;
pub mod state;
pub mod tick;

pub use collision::{Exit, bounce_off_paddle, bounce_off_walls, scoring_exit};
pub use controller::{
    AiController, ControlContext, InertController, KeyboardController, PaddleController,
    PaddleInput,
};
pub use error::GameError;
pub use math::{Rect, Vec2D};
pub use state::{Ball, Events, Game, GameSnapshot, Paddle, Player};

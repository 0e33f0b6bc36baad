pub mod app;
pub mod config;
pub mod game;
pub mod input;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use app::PongApp;
pub use config::{GameConfig, PaddleControls};
pub use game::{Ball, GameState, Paddle, Score, Side};
pub use input::InputState;

/// Logical screen width in pixels for the desktop frontend.
pub const SCREEN_WIDTH: usize = 320;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 240;
/// Default integer scaling factor for the SDL2 frontend.
pub const SCREEN_SCALE: u32 = 3;

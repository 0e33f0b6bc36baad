pub mod app;
pub mod color;
pub mod key;
pub mod render;

pub use app::App;
pub use color::Color;
pub use key::Key;
pub use render::{FrameBuffer, Renderer};

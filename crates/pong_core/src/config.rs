use typed_builder::TypedBuilder;

/// Key pair steering one paddle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddleControls {
    pub up_key: String,
    pub down_key: String,
}

impl PaddleControls {
    pub fn new(up_key: impl Into<String>, down_key: impl Into<String>) -> Self {
        Self {
            up_key: up_key.into(),
            down_key: down_key.into(),
        }
    }
}

/// Tunables for a match. All distances are in normalized device coordinates
/// and all velocities are per tick.
#[derive(Debug, Clone, TypedBuilder)]
pub struct GameConfig {
    #[builder(default = 0.02)]
    pub paddle_speed: f32,
    /// Horizontal position of the right paddle; the left one is mirrored.
    #[builder(default = 0.9)]
    pub paddle_x: f32,
    #[builder(default = 0.02)]
    pub paddle_width: f32,
    #[builder(default = 0.3)]
    pub paddle_height: f32,
    #[builder(default = 0.02)]
    pub ball_size: f32,
    #[builder(default = 0.01)]
    pub ball_dx: f32,
    #[builder(default = 0.01)]
    pub ball_dy: f32,
    #[builder(default = PaddleControls::new("w", "s"))]
    pub left_controls: PaddleControls,
    #[builder(default = PaddleControls::new("ArrowUp", "ArrowDown"))]
    pub right_controls: PaddleControls,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

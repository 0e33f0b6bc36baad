use crate::render::Renderer;

/// A game driven by one of the frontend loops.
///
/// The host calls `update` then `draw` once per display frame and forwards
/// key transitions in between, all on the same thread.
pub trait App {
    fn init(&mut self);
    fn update(&mut self);
    fn draw(&mut self, renderer: &mut dyn Renderer);
    fn handle_key_event(&mut self, key: &str, is_down: bool);
    /// The window stopped receiving keyboard input; key-ups may be lost.
    fn focus_lost(&mut self);
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn scale(&self) -> u32;
    fn title(&self) -> String;
}

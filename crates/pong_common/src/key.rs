/// Physical keys the desktop frontend knows how to translate.
///
/// Input state is keyed by the browser `KeyboardEvent.key` names, so each
/// variant maps onto the identifier a web page would receive for the same key.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    W,
    S,
    A,
    D,
    Up,
    Down,
    Left,
    Right,
    Space,
    Escape,
    None,
}

impl Key {
    pub fn name(self) -> Option<&'static str> {
        match self {
            Key::W => Some("w"),
            Key::S => Some("s"),
            Key::A => Some("a"),
            Key::D => Some("d"),
            Key::Up => Some("ArrowUp"),
            Key::Down => Some("ArrowDown"),
            Key::Left => Some("ArrowLeft"),
            Key::Right => Some("ArrowRight"),
            Key::Space => Some(" "),
            Key::Escape => Some("Escape"),
            Key::None => None,
        }
    }
}

use crate::layout::Coord;

/// Input delivered to a control, in control-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    MouseDown {
        x: Coord,
        y: Coord,
        button: MouseButton,
        clicks: u8,
    },
    MouseMove { x: Coord, y: Coord },
    MouseUp {
        x: Coord,
        y: Coord,
        button: MouseButton,
    },
    /// Capture was taken away by the system or another control.
    MouseCaptureLost,
    KeyDown { key: Key },
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

impl InputEvent {
    /// Translate a terminal mouse or key event, offsetting mouse cells by `origin`
    /// so the result is local to the control at that position.
    pub fn from_crossterm(event: &crossterm::event::Event, origin: (Coord, Coord)) -> Option<Self> {
        use crossterm::event::{Event as CtEvent, KeyEventKind, MouseEventKind};

        match event {
            CtEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Self::KeyDown {
                key: key.code.into(),
            }),
            CtEvent::Mouse(mouse) => {
                let x = mouse.column as Coord - origin.0;
                let y = mouse.row as Coord - origin.1;
                match mouse.kind {
                    MouseEventKind::Down(button) => Some(Self::MouseDown {
                        x,
                        y,
                        button: button.into(),
                        clicks: 1,
                    }),
                    MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                        Some(Self::MouseMove { x, y })
                    }
                    MouseEventKind::Up(button) => Some(Self::MouseUp {
                        x,
                        y,
                        button: button.into(),
                    }),
                    _ => None,
                }
            }
            CtEvent::FocusLost => Some(Self::MouseCaptureLost),
            _ => None,
        }
    }

    /// The same event with mouse coordinates shifted by (`-dx`, `-dy`),
    /// i.e. moved into a child whose origin is at (`dx`, `dy`).
    pub fn offset(self, dx: Coord, dy: Coord) -> Self {
        match self {
            Self::MouseDown {
                x,
                y,
                button,
                clicks,
            } => Self::MouseDown {
                x: x - dx,
                y: y - dy,
                button,
                clicks,
            },
            Self::MouseMove { x, y } => Self::MouseMove {
                x: x - dx,
                y: y - dy,
            },
            Self::MouseUp { x, y, button } => Self::MouseUp {
                x: x - dx,
                y: y - dy,
                button,
            },
            other => other,
        }
    }

    /// Mouse position carried by the event, if any.
    pub fn position(&self) -> Option<(Coord, Coord)> {
        match *self {
            Self::MouseDown { x, y, .. }
            | Self::MouseMove { x, y }
            | Self::MouseUp { x, y, .. } => Some((x, y)),
            _ => None,
        }
    }
}

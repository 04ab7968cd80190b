use crate::layout::Coord;

/// Padding or margin around a control.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Thickness {
    pub top: Coord,
    pub right: Coord,
    pub bottom: Coord,
    pub left: Coord,
}

impl Thickness {
    pub const EMPTY: Self = Self::all(0.0);

    pub const fn new(top: Coord, right: Coord, bottom: Coord, left: Coord) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(value: Coord) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub const fn symmetric(vertical: Coord, horizontal: Coord) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn horizontal(&self) -> Coord {
        self.left + self.right
    }

    pub fn vertical(&self) -> Coord {
        self.top + self.bottom
    }
}

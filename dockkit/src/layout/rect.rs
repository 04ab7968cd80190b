/// Device-independent coordinate.
pub type Coord = f64;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointD {
    pub x: Coord,
    pub y: Coord,
}

impl PointD {
    pub const EMPTY: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeD {
    pub width: Coord,
    pub height: Coord,
}

impl SizeD {
    pub const fn new(width: Coord, height: Coord) -> Self {
        Self { width, height }
    }

    /// Scale a pixel size down to device-independent units.
    pub fn from_pixels(width: i32, height: i32, scale_factor: Coord) -> Self {
        let scale = if scale_factor > 0.0 { scale_factor } else { 1.0 };
        Self {
            width: width as Coord / scale,
            height: height as Coord / scale,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectD {
    pub x: Coord,
    pub y: Coord,
    pub width: Coord,
    pub height: Coord,
}

impl RectD {
    pub const EMPTY: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(x: Coord, y: Coord, width: Coord, height: Coord) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(size: SizeD) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    pub const fn size(&self) -> SizeD {
        SizeD::new(self.width, self.height)
    }

    pub const fn location(&self) -> PointD {
        PointD::new(self.x, self.y)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub const fn left(&self) -> Coord {
        self.x
    }

    pub fn right(&self) -> Coord {
        self.x + self.width
    }

    pub const fn top(&self) -> Coord {
        self.y
    }

    pub fn bottom(&self) -> Coord {
        self.y + self.height
    }

    /// Move the right edge, keeping the left edge in place.
    pub fn set_right(&mut self, right: Coord) {
        self.width = right - self.x;
    }

    /// Move the bottom edge, keeping the top edge in place.
    pub fn set_bottom(&mut self, bottom: Coord) {
        self.height = bottom - self.y;
    }

    pub fn shrink(self, top: Coord, right: Coord, bottom: Coord, left: Coord) -> Self {
        Self {
            x: self.x + left,
            y: self.y + top,
            width: (self.width - left - right).max(0.0),
            height: (self.height - top - bottom).max(0.0),
        }
    }

    pub fn contains(&self, x: Coord, y: Coord) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn center(&self) -> PointD {
        PointD::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Snap to whole pixels.
    pub fn to_rect_i(&self) -> RectI {
        RectI::new(
            self.x.round() as i32,
            self.y.round() as i32,
            self.width.round() as i32,
            self.height.round() as i32,
        )
    }
}

/// Pixel-snapped rectangle, used to decide whether a bounds change is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RectI {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl RectI {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

use crate::layout::{Coord, SizeD};

/// Pixel sizes used to lay out a non-system scrollbar.
///
/// All values are physical pixels; the `*_size` queries divide by the
/// control's scale factor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsInfo {
    /// Width of a vertical scrollbar (and of its arrow buttons).
    pub v_scroll_arrow_width: i32,
    /// Height of an arrow button on a vertical scrollbar.
    pub v_scroll_arrow_height: i32,
    /// Width of an arrow button on a horizontal scrollbar.
    pub h_scroll_arrow_width: i32,
    /// Height of a horizontal scrollbar (and of its arrow buttons).
    pub h_scroll_arrow_height: i32,
    /// Length of the thumb on a vertical scrollbar.
    pub v_thumb_height: i32,
    /// Length of the thumb on a horizontal scrollbar.
    pub h_thumb_width: i32,
    /// Side of the square arrow glyph drawn inside an arrow button.
    pub arrow_bitmap_size: i32,
}

impl Default for MetricsInfo {
    fn default() -> Self {
        Self {
            v_scroll_arrow_width: 17,
            v_scroll_arrow_height: 17,
            h_scroll_arrow_width: 17,
            h_scroll_arrow_height: 17,
            v_thumb_height: 17,
            h_thumb_width: 17,
            arrow_bitmap_size: 16,
        }
    }
}

impl MetricsInfo {
    /// Thickness across the bar and room for both arrows along it.
    pub fn preferred_size(&self, is_vertical: bool, scale_factor: Coord) -> SizeD {
        if is_vertical {
            SizeD::from_pixels(
                self.v_scroll_arrow_width,
                self.v_scroll_arrow_height * 2,
                scale_factor,
            )
        } else {
            SizeD::from_pixels(
                self.h_scroll_arrow_width * 2,
                self.h_scroll_arrow_height,
                scale_factor,
            )
        }
    }

    pub fn arrow_bitmap_size(&self, _is_vertical: bool, scale_factor: Coord) -> SizeD {
        SizeD::from_pixels(self.arrow_bitmap_size, self.arrow_bitmap_size, scale_factor)
    }

    /// Thumb fills the bar across and has a fixed length along it.
    pub fn thumb_size(&self, is_vertical: bool, client_size: SizeD, scale_factor: Coord) -> SizeD {
        if is_vertical {
            let length = SizeD::from_pixels(0, self.v_thumb_height, scale_factor).height;
            SizeD::new(client_size.width, length)
        } else {
            let length = SizeD::from_pixels(self.h_thumb_width, 0, scale_factor).width;
            SizeD::new(length, client_size.height)
        }
    }
}

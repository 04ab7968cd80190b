mod dock;
mod rect;

pub use dock::{dock_child, layout_docked};
pub use rect::{Coord, PointD, RectD, RectI, SizeD};

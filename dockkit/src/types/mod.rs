mod color;
mod edges;
mod enums;

pub use color::{is_dark_background, Color, Rgb};
pub use edges::Thickness;
pub use enums::{
    DockStyle, LayoutFlags, ScrollBarOrientation, ScrollEventType, SplitCursor,
    SplitPanelPosition, SplitterTargetMode, VisualState,
};

pub mod config;
pub mod control;
pub mod event;
pub mod layout;
pub mod position;
pub mod scrollbar;
pub mod splitted_panel;
pub mod splitter;
pub mod types;

pub use config::ToolkitConfig;
pub use control::{Control, ControlHost, ControlId, ControlTree, TreeError};
pub use event::{InputEvent, Key, MouseButton};
pub use layout::{layout_docked, Coord, PointD, RectD, RectI, SizeD};
pub use position::{PositionRange, RangeChange, ScrollBarInfo};
pub use scrollbar::{
    HeadlessScrollBar, KnownTheme, MetricsInfo, ScrollBar, ScrollBarEvent, ScrollBarPeer,
    ScrollEventArgs, ThemeMetrics,
};
pub use splitted_panel::SplittedPanel;
pub use splitter::{
    DefaultSplitterPolicy, DrawSplitBarKind, SplitBarPainter, SplitData, Splitter,
    SplitterEvent, SplitterEventArgs, SplitterPolicy,
};
pub use types::*;

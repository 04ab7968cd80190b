use bitflags::bitflags;

/// Edge of the parent a control is attached to during dock layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DockStyle {
    #[default]
    None,
    Left,
    Top,
    Right,
    Bottom,
    Fill,
}

impl DockStyle {
    pub const fn is_left_or_right(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    pub const fn is_top_or_bottom(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// True for the four edges a splitter may be attached to.
    pub const fn is_edge(self) -> bool {
        self.is_left_or_right() || self.is_top_or_bottom()
    }
}

/// How a splitter locates the control it resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitterTargetMode {
    /// Follow the parent's dock iteration order.
    #[default]
    Auto,
    NextVisibleSibling,
    PreviousVisibleSibling,
}

bitflags! {
    /// Flags that change how a container lays out its children.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LayoutFlags: u32 {
        /// Dock children first-to-last instead of last-to-first.
        const ITERATE_BACKWARD = 1 << 0;
    }
}

/// Kind of user interaction that produced a scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollEventType {
    SmallDecrement,
    SmallIncrement,
    LargeDecrement,
    LargeIncrement,
    ThumbPosition,
    #[default]
    ThumbTrack,
    First,
    Last,
    EndScroll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBarOrientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Mouse cursor shown over a splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitCursor {
    /// Resizes vertically (top/bottom splitters).
    HSplit,
    /// Resizes horizontally (left/right splitters).
    VSplit,
}

/// Visual state used to pick theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualState {
    Normal,
    Hovered,
    Disabled,
    Pressed,
}

impl VisualState {
    pub const ALL: [VisualState; 4] = [
        VisualState::Normal,
        VisualState::Hovered,
        VisualState::Disabled,
        VisualState::Pressed,
    ];

    pub const fn index(self) -> usize {
        match self {
            Self::Normal => 0,
            Self::Hovered => 1,
            Self::Disabled => 2,
            Self::Pressed => 3,
        }
    }
}

/// Slot of a [`SplittedPanel`](crate::SplittedPanel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitPanelPosition {
    Left,
    Top,
    Right,
    Bottom,
    Center,
}

use crate::control::{ControlHost, ControlId};
use crate::layout::{Coord, PointD, RectD};
use crate::types::{DockStyle, LayoutFlags, SplitterTargetMode};

/// Space taken by the docked siblings of a splitter's target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitData {
    /// Summed width of the other visible Left/Right docked children.
    pub dock_width: Coord,
    /// Summed height of the other visible Top/Bottom docked children.
    pub dock_height: Coord,
    pub target: Option<ControlId>,
    /// Largest size the target may grow to.
    pub max_size: Coord,
}

impl Default for SplitData {
    fn default() -> Self {
        Self {
            dock_width: -1.0,
            dock_height: -1.0,
            target: None,
            max_size: 0.0,
        }
    }
}

/// Size of `id` on the axis a splitter docked at `dock` resizes.
pub fn size_on_axis(host: &dyn ControlHost, id: ControlId, dock: DockStyle) -> Coord {
    let bounds = host.bounds(id);
    if dock.is_top_or_bottom() {
        bounds.height
    } else {
        bounds.width
    }
}

/// The sibling a splitter resizes.
///
/// `Auto` follows dock order: with the default last-to-first iteration the
/// target is docked before the splitter, which makes it the next sibling.
pub fn find_target(
    host: &dyn ControlHost,
    splitter: ControlId,
    mode: SplitterTargetMode,
) -> Option<ControlId> {
    let parent = host.parent(splitter)?;
    match mode {
        SplitterTargetMode::NextVisibleSibling => host.next_visible_sibling(splitter),
        SplitterTargetMode::PreviousVisibleSibling => host.previous_visible_sibling(splitter),
        SplitterTargetMode::Auto => {
            if host
                .layout_flags(parent)
                .contains(LayoutFlags::ITERATE_BACKWARD)
            {
                host.previous_visible_sibling(splitter)
            } else {
                host.next_visible_sibling(splitter)
            }
        }
    }
}

/// Split data for `splitter` resizing `target`, which is normally the
/// result of [`find_target`].
pub fn calc_split_bounds(
    host: &dyn ControlHost,
    splitter: ControlId,
    target: Option<ControlId>,
    dock: DockStyle,
    min_extra: Coord,
) -> SplitData {
    let mut data = SplitData::default();
    let Some(target) = target else {
        return data;
    };
    let Some(parent) = host.parent(splitter) else {
        return data;
    };
    data.target = Some(target);

    let mut docked_width = 0.0;
    let mut docked_height = 0.0;
    for child in host.visible_children(parent) {
        if child == target || host.ignores_layout(child) {
            continue;
        }
        let bounds = host.bounds(child);
        match host.dock(child) {
            DockStyle::Left | DockStyle::Right => docked_width += bounds.width,
            DockStyle::Top | DockStyle::Bottom => docked_height += bounds.height,
            _ => {}
        }
    }

    let client = host.client_size(parent);
    let padding = host.padding(parent);
    data.max_size = if dock.is_left_or_right() {
        client.width - docked_width - min_extra - padding.horizontal()
    } else {
        client.height - docked_height - min_extra - padding.vertical()
    };
    data.dock_width = docked_width;
    data.dock_height = docked_height;
    data
}

/// Candidate target size for a pointer at (`x`, `y`) dragged from `anchor`.
///
/// The result is clamped to `max_size` first and `min_size` last, so the
/// minimum wins when the two cross.
#[allow(clippy::too_many_arguments)]
pub fn split_size(
    host: &dyn ControlHost,
    target: ControlId,
    dock: DockStyle,
    x: Coord,
    y: Coord,
    anchor: PointD,
    max_size: Coord,
    min_size: Coord,
) -> Coord {
    let delta = if dock.is_left_or_right() {
        x - anchor.x
    } else {
        y - anchor.y
    };
    let current = size_on_axis(host, target, dock);
    let size = match dock {
        DockStyle::Top | DockStyle::Left => current + delta,
        DockStyle::Bottom | DockStyle::Right => current - delta,
        _ => current,
    };
    size.min(max_size).max(min_size)
}

/// Rectangle of the drag indicator for a target of `split_size`.
///
/// Across the resize axis the line is as thick as the splitter, but never
/// thinner than `min_weight`.
pub fn split_line(
    splitter: RectD,
    target: RectD,
    dock: DockStyle,
    split_size: Coord,
    min_weight: Coord,
) -> RectD {
    let mut line = splitter;
    match dock {
        DockStyle::Top => {
            line.height = line.height.max(min_weight);
            line.y = target.y + split_size;
        }
        DockStyle::Bottom => {
            line.height = line.height.max(min_weight);
            line.y = target.y + target.height - split_size - line.height;
        }
        DockStyle::Left => {
            line.width = line.width.max(min_weight);
            line.x = target.x + split_size;
        }
        DockStyle::Right => {
            line.width = line.width.max(min_weight);
            line.x = target.x + target.width - split_size - line.width;
        }
        _ => {}
    }
    line
}

/// Overridable pieces of splitter geometry.
///
/// Every method defaults to the free function of the same name;
/// `calc_split_bounds` looks the target up through `find_target`.
pub trait SplitterPolicy {
    fn find_target(
        &self,
        host: &dyn ControlHost,
        splitter: ControlId,
        mode: SplitterTargetMode,
    ) -> Option<ControlId> {
        find_target(host, splitter, mode)
    }

    fn calc_split_bounds(
        &self,
        host: &dyn ControlHost,
        splitter: ControlId,
        dock: DockStyle,
        mode: SplitterTargetMode,
        min_extra: Coord,
    ) -> SplitData {
        let target = self.find_target(host, splitter, mode);
        calc_split_bounds(host, splitter, target, dock, min_extra)
    }

    #[allow(clippy::too_many_arguments)]
    fn split_size(
        &self,
        host: &dyn ControlHost,
        target: ControlId,
        dock: DockStyle,
        x: Coord,
        y: Coord,
        anchor: PointD,
        max_size: Coord,
        min_size: Coord,
    ) -> Coord {
        split_size(host, target, dock, x, y, anchor, max_size, min_size)
    }

    fn split_line(
        &self,
        splitter: RectD,
        target: RectD,
        dock: DockStyle,
        split_size: Coord,
        min_weight: Coord,
    ) -> RectD {
        split_line(splitter, target, dock, split_size, min_weight)
    }
}

/// Policy that uses the stock geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSplitterPolicy;

impl SplitterPolicy for DefaultSplitterPolicy {}

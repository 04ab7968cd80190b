//! Splitter that resizes a docked sibling by mouse drag.
//!
//! The splitter is docked next to its target. Dragging it changes the
//! target's width (left/right docks) or height (top/bottom docks) and lets
//! dock layout move everything else.

mod colors;
mod geometry;

pub use colors::{
    center_line_horz, center_line_vert, resolve_splitter_colors, FillRect, SplitterAppearance,
    SplitterColors, EXPLORER_SPLITTER_DARK, EXPLORER_SPLITTER_LIGHT,
};
pub use geometry::{
    calc_split_bounds, find_target, size_on_axis, split_line, split_size, DefaultSplitterPolicy,
    SplitData, SplitterPolicy,
};

use crate::config::ToolkitConfig;
use crate::control::{ControlHost, ControlId};
use crate::event::{InputEvent, Key, MouseButton};
use crate::layout::{Coord, PointD, RectD};
use crate::types::{Color, DockStyle, SplitCursor, SplitterTargetMode};

/// Stage of the drag indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawSplitBarKind {
    Start,
    Move,
    End,
}

/// Draws (and, drawn again at the same size, erases) the drag indicator.
pub trait SplitBarPainter {
    fn draw_split(&mut self, split_size: Coord);
}

impl<F: FnMut(Coord)> SplitBarPainter for F {
    fn draw_split(&mut self, split_size: Coord) {
        self(split_size)
    }
}

/// Payload of splitter events.
///
/// `left`/`top` are the pointer in parent coordinates; `split_x`/`split_y`
/// the top-left corner of the split line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitterEventArgs {
    pub left: Coord,
    pub top: Coord,
    pub split_x: Coord,
    pub split_y: Coord,
}

impl SplitterEventArgs {
    pub const fn new(left: Coord, top: Coord, split_x: Coord, split_y: Coord) -> Self {
        Self {
            left,
            top,
            split_x,
            split_y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitterEvent {
    /// Pointer moved during a drag.
    Moving(SplitterEventArgs),
    /// The target was resized.
    Moved(SplitterEventArgs),
}

pub struct Splitter {
    id: ControlId,
    dock: DockStyle,
    min_size: Coord,
    min_extra: Coord,
    size_delta: i32,
    target_mode: SplitterTargetMode,
    thickness: Coord,
    default_width: Coord,
    cursor: Option<SplitCursor>,
    appearance: SplitterAppearance,

    split_target: Option<ControlId>,
    anchor: PointD,
    split_size: Coord,
    max_size: Coord,
    init_target_size: Coord,
    last_draw_split: Coord,

    policy: Box<dyn SplitterPolicy>,
    painter: Option<Box<dyn SplitBarPainter>>,
    events: Vec<SplitterEvent>,
}

impl Splitter {
    /// Turn control `id` into a left-docked splitter of the configured width.
    pub fn new<H: ControlHost>(host: &mut H, id: ControlId, config: &ToolkitConfig) -> Self {
        let mut splitter = Self {
            id,
            dock: DockStyle::Left,
            min_size: config.splitter_min_size.max(0.0),
            min_extra: config.splitter_min_extra.max(0.0),
            size_delta: config.splitter_size_delta,
            target_mode: SplitterTargetMode::Auto,
            thickness: config.splitter_width,
            default_width: config.splitter_width,
            cursor: None,
            appearance: SplitterAppearance::new(),
            split_target: None,
            anchor: PointD::EMPTY,
            split_size: -1.0,
            max_size: 0.0,
            init_target_size: 0.0,
            last_draw_split: -1.0,
            policy: Box::new(DefaultSplitterPolicy),
            painter: None,
            events: Vec::new(),
        };
        let mut bounds = host.bounds(id);
        bounds.width = splitter.thickness;
        bounds.height = splitter.thickness;
        host.set_bounds(id, bounds);
        splitter.set_dock(host, DockStyle::Left);
        splitter
    }

    /// Replace the geometry policy.
    pub fn with_policy(mut self, policy: impl SplitterPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    pub fn with_painter(mut self, painter: impl SplitBarPainter + 'static) -> Self {
        self.painter = Some(Box::new(painter));
        self
    }

    pub fn id(&self) -> ControlId {
        self.id
    }

    pub fn dock(&self) -> DockStyle {
        self.dock
    }

    /// Dock the splitter to an edge. Anything but the four edges becomes `Left`.
    pub fn set_dock<H: ControlHost + ?Sized>(&mut self, host: &mut H, dock: DockStyle) {
        let dock = if dock.is_edge() {
            dock
        } else {
            log::debug!("splitter {:?}: {:?} is not an edge, docking left", self.id, dock);
            DockStyle::Left
        };
        self.dock = dock;
        host.set_dock(self.id, dock);

        if self.thickness != -1.0 {
            let mut bounds = host.bounds(self.id);
            if dock.is_top_or_bottom() {
                bounds.height = self.thickness;
            } else {
                bounds.width = self.thickness;
            }
            host.set_bounds(self.id, bounds);
        }
    }

    /// True when the splitter resizes widths.
    pub fn is_horizontal(&self) -> bool {
        self.dock.is_left_or_right()
    }

    pub fn min_size(&self) -> Coord {
        self.min_size
    }

    /// Smallest size of the target. Negative values are stored as 0.
    pub fn set_min_size(&mut self, min_size: Coord) {
        self.min_size = min_size.max(0.0);
    }

    pub fn min_extra(&self) -> Coord {
        self.min_extra
    }

    /// Space left for the rest of the parent. Negative values are stored as 0.
    pub fn set_min_extra(&mut self, min_extra: Coord) {
        self.min_extra = min_extra.max(0.0);
    }

    pub fn size_delta(&self) -> i32 {
        self.size_delta
    }

    pub fn set_size_delta(&mut self, size_delta: i32) {
        self.size_delta = size_delta;
    }

    pub fn target_mode(&self) -> SplitterTargetMode {
        self.target_mode
    }

    pub fn set_target_mode(&mut self, mode: SplitterTargetMode) {
        self.target_mode = mode;
    }

    pub fn thickness(&self) -> Coord {
        self.thickness
    }

    pub fn appearance(&self) -> &SplitterAppearance {
        &self.appearance
    }

    pub fn appearance_mut(&mut self) -> &mut SplitterAppearance {
        &mut self.appearance
    }

    /// Replace the normal colors and schedule a repaint.
    pub fn set_normal_colors<H: ControlHost + ?Sized>(
        &mut self,
        host: &mut H,
        colors: Option<SplitterColors>,
    ) {
        if self.appearance.normal == colors {
            return;
        }
        self.appearance.normal = colors;
        host.invalidate(self.id);
    }

    /// Cursor shown over the splitter: the override, else one matching the dock.
    pub fn default_cursor(&self) -> SplitCursor {
        self.cursor.unwrap_or(if self.dock.is_top_or_bottom() {
            SplitCursor::HSplit
        } else {
            SplitCursor::VSplit
        })
    }

    pub fn set_default_cursor(&mut self, cursor: Option<SplitCursor>) {
        self.cursor = cursor;
    }

    pub fn is_dragging(&self) -> bool {
        self.split_target.is_some()
    }

    /// Control being resized by the current drag.
    pub fn split_target(&self) -> Option<ControlId> {
        self.split_target
    }

    /// Upper size limit found by the last split-bounds computation.
    pub fn max_size(&self) -> Coord {
        self.max_size
    }

    /// Drain events raised since the last call.
    pub fn take_events(&mut self) -> Vec<SplitterEvent> {
        std::mem::take(&mut self.events)
    }

    /// Move the splitter control, keeping it inside the parent's padded
    /// client area. The extent across the dock becomes the new thickness.
    pub fn set_bounds<H: ControlHost + ?Sized>(&mut self, host: &mut H, mut bounds: RectD) {
        if self.is_horizontal() {
            if bounds.width < 1.0 {
                bounds.width = self.default_width;
            }
            self.thickness = bounds.width;
        } else {
            if bounds.height < 1.0 {
                bounds.height = self.default_width;
            }
            self.thickness = bounds.height;
        }

        let Some(parent) = host.parent(self.id) else {
            host.set_bounds(self.id, bounds);
            return;
        };

        let padding = host.padding(parent);
        let margin = host.margin(self.id);
        let client = host.client_size(parent);
        bounds.x = bounds.x.max(padding.left + margin.left);
        bounds.y = bounds.y.max(padding.top + margin.top);
        bounds.set_right(
            bounds
                .right()
                .min(client.width - padding.right - margin.right),
        );
        bounds.set_bottom(
            bounds
                .bottom()
                .min(client.height - padding.bottom - margin.bottom),
        );
        host.set_bounds(self.id, bounds);
    }

    /// Current target size; read from the target when no drag size is recorded.
    pub fn split_position<H: ControlHost>(&self, host: &H) -> Coord {
        if self.split_size == -1.0 {
            return self.calc_split_size(host);
        }
        self.split_size
    }

    /// Resize the target to `value`, clamped to `[min_size, max_size]`.
    pub fn set_split_position<H: ControlHost>(&mut self, host: &mut H, value: Coord) {
        let data = self.calc_split_bounds(&*host);
        let value = apply_min_max(value, self.min_size, self.max_size);
        self.split_size = value;
        self.draw_split_bar(DrawSplitBarKind::End);

        let (Some(target), Some(parent)) = (data.target, host.parent(self.id)) else {
            self.split_size = -1.0;
            return;
        };

        let old_bounds = host.bounds(target);
        let mut bounds = old_bounds;
        match self.dock {
            DockStyle::Top => bounds.height = value,
            DockStyle::Bottom => {
                bounds.y += bounds.height - value;
                bounds.height = value;
            }
            DockStyle::Left => {
                let max_width = host.client_rectangle(parent).width
                    - host.padding(parent).right
                    - host.margin(self.id).right
                    - host.bounds(self.id).width
                    - self.min_extra;
                bounds.width = value.min(max_width);
            }
            DockStyle::Right => {
                bounds.x += bounds.width - value;
                bounds.width = value;
            }
            _ => {}
        }

        if bounds.to_rect_i() == old_bounds.to_rect_i() {
            return;
        }

        host.do_inside_update(parent, |host| host.set_bounds(target, bounds));
        host.refresh(parent);

        let own = host.bounds(self.id);
        self.events.push(SplitterEvent::Moved(SplitterEventArgs::new(
            own.x,
            own.y,
            own.x + bounds.width / 2.0,
            own.y + bounds.height / 2.0,
        )));
    }

    /// Start a drag at (`x`, `y`) in splitter coordinates.
    ///
    /// Does nothing without a target, when the target cannot grow past
    /// `min_size`, or while a drag is already running.
    pub fn split_begin<H: ControlHost>(&mut self, host: &mut H, x: Coord, y: Coord) {
        if self.split_target.is_some() {
            log::debug!("splitter {:?}: already dragging", self.id);
            return;
        }
        let data = self.calc_split_bounds(&*host);
        let Some(target) = data.target else {
            return;
        };
        if self.min_size >= self.max_size {
            log::debug!(
                "splitter {:?}: no room to drag ({} >= {})",
                self.id,
                self.min_size,
                self.max_size
            );
            return;
        }

        self.anchor = PointD::new(x, y);
        self.split_target = Some(target);
        self.init_target_size = size_on_axis(&*host, target, self.dock);
        self.split_size = self.calc_drag_size(&*host, x, y);
        host.capture_mouse(self.id);
        self.draw_split_bar(DrawSplitBarKind::Start);
        log::trace!("splitter {:?}: drag started at {}", self.id, self.split_size);
    }

    /// Track a split line at (`x`, `y`) in parent coordinates.
    /// Returns true when the size moved by at least `size_delta`.
    pub fn split_move<H: ControlHost>(&mut self, host: &H, x: Coord, y: Coord) -> bool {
        let own = host.bounds(self.id);
        let size = self.calc_drag_size(host, x - own.x + self.anchor.x, y - own.y + self.anchor.y);
        if (self.split_size - size).abs() < self.size_delta as Coord {
            return false;
        }
        self.split_size = size;
        self.draw_split_bar(DrawSplitBarKind::Move);
        true
    }

    /// Finish a drag. Without `accept` the target gets its size from before the drag.
    pub fn split_end<H: ControlHost>(&mut self, host: &mut H, accept: bool) {
        self.draw_split_bar(DrawSplitBarKind::End);
        self.split_target = None;
        host.release_mouse_capture(self.id);

        if !accept && self.split_size != self.init_target_size {
            self.set_split_position(host, self.init_target_size);
        }
        self.anchor = PointD::EMPTY;
    }

    /// Route an input event in splitter coordinates. Returns true if handled.
    pub fn handle_input<H: ControlHost>(&mut self, host: &mut H, event: InputEvent) -> bool {
        match event {
            InputEvent::MouseDown {
                x,
                y,
                button: MouseButton::Left,
                clicks: 1,
            } => {
                self.split_begin(host, x, y);
                self.is_dragging()
            }
            InputEvent::MouseMove { x, y } => self.mouse_move(host, x, y),
            InputEvent::MouseUp { .. } | InputEvent::MouseCaptureLost if self.is_dragging() => {
                self.split_end(host, true);
                true
            }
            InputEvent::KeyDown { key: Key::Escape } if self.is_dragging() => {
                self.split_end(host, false);
                true
            }
            _ => false,
        }
    }

    /// Indicator rectangle for a target of `split_size`, empty when not dragging.
    pub fn split_line<H: ControlHost>(
        &self,
        host: &H,
        split_size: Coord,
        min_weight: Coord,
    ) -> RectD {
        let Some(target) = self.split_target else {
            return RectD::EMPTY;
        };
        self.policy.split_line(
            host.bounds(self.id),
            host.bounds(target),
            self.dock,
            split_size,
            min_weight,
        )
    }

    /// Update the drag indicator. Each indicator is drawn twice: once to
    /// show it and once, at the same size, to erase it.
    pub fn draw_split_bar(&mut self, kind: DrawSplitBarKind) {
        if kind != DrawSplitBarKind::Start {
            if self.last_draw_split == -1.0 {
                return;
            }
            let last = self.last_draw_split;
            self.draw_split(last);
            self.last_draw_split = -1.0;
        }
        if kind != DrawSplitBarKind::End {
            self.draw_split(self.split_size);
            self.last_draw_split = self.split_size;
        }
    }

    /// Rectangles to fill when painting the splitter: the background, then
    /// a center line across the resize axis.
    pub fn paint<H: ControlHost>(
        &self,
        host: &H,
        is_dark: bool,
        real_background: Color,
    ) -> Vec<FillRect> {
        let colors = self.appearance.resolve(is_dark, real_background);
        let rect = host.client_rectangle(self.id);
        let mut fills = Vec::new();
        if self.appearance.background_painted {
            if let Some(color) = colors.background {
                fills.push(FillRect { rect, color });
            }
        }
        if self.appearance.foreground_painted {
            if let Some(color) = colors.foreground {
                let rect = if self.is_horizontal() {
                    center_line_vert(rect)
                } else {
                    center_line_horz(rect)
                };
                fills.push(FillRect { rect, color });
            }
        }
        fills
    }

    fn mouse_move<H: ControlHost>(&mut self, host: &mut H, x: Coord, y: Coord) -> bool {
        if self.split_target.is_none() {
            return false;
        }
        let own = host.bounds(self.id);
        let size = self.calc_drag_size(&*host, x, y);
        let line = self.split_line(&*host, size, 0.0);
        self.events.push(SplitterEvent::Moving(SplitterEventArgs::new(
            x + own.x,
            y + own.y,
            line.x,
            line.y,
        )));

        if self.split_move(&*host, line.x, line.y) {
            let size = self.split_size;
            self.set_split_position(host, size);
        }
        true
    }

    fn calc_split_bounds(&mut self, host: &dyn ControlHost) -> SplitData {
        let data = self.policy.calc_split_bounds(
            host,
            self.id,
            self.dock,
            self.target_mode,
            self.min_extra,
        );
        if data.target.is_some() {
            self.max_size = data.max_size;
        }
        data
    }

    fn calc_split_size(&self, host: &dyn ControlHost) -> Coord {
        match self.policy.find_target(host, self.id, self.target_mode) {
            Some(target) => size_on_axis(host, target, self.dock),
            None => -1.0,
        }
    }

    fn calc_drag_size(&self, host: &dyn ControlHost, x: Coord, y: Coord) -> Coord {
        let Some(target) = self.split_target else {
            return 0.0;
        };
        self.policy.split_size(
            host,
            target,
            self.dock,
            x,
            y,
            self.anchor,
            self.max_size,
            self.min_size,
        )
    }

    fn draw_split(&mut self, split_size: Coord) {
        if let Some(painter) = self.painter.as_mut() {
            painter.draw_split(split_size);
        }
    }
}

/// Clamp to `[min, max]`; when the bounds cross, `max` wins.
fn apply_min_max(value: Coord, min: Coord, max: Coord) -> Coord {
    value.max(min).min(max)
}

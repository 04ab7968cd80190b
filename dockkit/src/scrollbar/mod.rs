//! Scrollbar control model.
//!
//! A [`ScrollBar`] keeps a [`PositionRange`] in abstract units and mirrors it
//! to a [`ScrollBarPeer`] in scroll units. Model changes flow to the peer
//! through [`ScrollBar::update_scroll_info`]; user interaction on the peer
//! flows back through [`ScrollBar::raise_scroll`].

mod metrics;
mod theme;

use std::fmt;
use std::sync::Arc;

pub use metrics::MetricsInfo;
pub use theme::{KnownTheme, StateValues, ThemeMetrics};

use crate::config::ToolkitConfig;
use crate::control::{ControlHost, ControlId};
use crate::layout::SizeD;
use crate::position::{PositionRange, RangeChange, ScrollBarInfo};
use crate::types::{ScrollBarOrientation, ScrollEventType};

/// The native (or emulated) widget that draws a scrollbar.
pub trait ScrollBarPeer {
    fn is_vertical(&self) -> bool;

    fn set_vertical(&mut self, vertical: bool);

    /// Update the peer in scroll units. `None` leaves a value unchanged.
    fn set_scrollbar(
        &mut self,
        position: Option<i32>,
        range: Option<i32>,
        page_size: Option<i32>,
        refresh: bool,
    );

    /// Current thumb position in scroll units.
    fn thumb_position(&self) -> i32;

    fn range(&self) -> i32;

    fn page_size(&self) -> i32;
}

/// Peer without any UI; stores what it is told and lets the thumb be moved by hand.
#[derive(Debug, Clone, Default)]
pub struct HeadlessScrollBar {
    vertical: bool,
    position: i32,
    range: i32,
    page_size: i32,
    updates: u32,
}

impl HeadlessScrollBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the thumb as a user drag would.
    pub fn move_thumb(&mut self, position: i32) {
        self.position = position;
    }

    /// Number of `set_scrollbar` calls received.
    pub fn updates(&self) -> u32 {
        self.updates
    }
}

impl ScrollBarPeer for HeadlessScrollBar {
    fn is_vertical(&self) -> bool {
        self.vertical
    }

    fn set_vertical(&mut self, vertical: bool) {
        self.vertical = vertical;
    }

    fn set_scrollbar(
        &mut self,
        position: Option<i32>,
        range: Option<i32>,
        page_size: Option<i32>,
        _refresh: bool,
    ) {
        if let Some(position) = position {
            self.position = position;
        }
        if let Some(range) = range {
            self.range = range;
        }
        if let Some(page_size) = page_size {
            self.page_size = page_size;
        }
        self.updates += 1;
    }

    fn thumb_position(&self) -> i32 {
        self.position
    }

    fn range(&self) -> i32 {
        self.range
    }

    fn page_size(&self) -> i32 {
        self.page_size
    }
}

/// Payload of [`ScrollBarEvent::Scroll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollEventArgs {
    pub event_type: ScrollEventType,
    pub old_value: i32,
    pub new_value: i32,
    pub orientation: ScrollBarOrientation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBarEvent {
    /// `value` changed, by scrolling or programmatically.
    ValueChanged,
    IsVerticalChanged,
    Scroll(ScrollEventArgs),
}

pub struct ScrollBar<P: ScrollBarPeer = HeadlessScrollBar> {
    id: ControlId,
    pos: PositionRange,
    peer: P,
    metrics: Option<MetricsInfo>,
    config: Arc<ToolkitConfig>,
    events: Vec<ScrollBarEvent>,
}

impl<P: ScrollBarPeer> ScrollBar<P> {
    /// Create a scrollbar for control `id` and push the initial range to `peer`.
    pub fn new(id: ControlId, peer: P, config: Arc<ToolkitConfig>) -> Self {
        let mut scrollbar = Self {
            id,
            pos: PositionRange::new(),
            peer,
            metrics: None,
            config,
            events: Vec::new(),
        };
        scrollbar.update_scroll_info();
        scrollbar
    }

    pub fn id(&self) -> ControlId {
        self.id
    }

    pub fn peer(&self) -> &P {
        &self.peer
    }

    pub fn peer_mut(&mut self) -> &mut P {
        &mut self.peer
    }

    /// The underlying range.
    pub fn position_range(&self) -> &PositionRange {
        &self.pos
    }

    pub fn minimum(&self) -> i32 {
        self.pos.minimum()
    }

    pub fn set_minimum(&mut self, minimum: i32) {
        let change = self.pos.set_minimum(minimum);
        self.on_position_changed(change);
    }

    pub fn maximum(&self) -> i32 {
        self.pos.maximum()
    }

    pub fn set_maximum(&mut self, maximum: i32) {
        let change = self.pos.set_maximum(maximum);
        self.on_position_changed(change);
    }

    pub fn value(&self) -> i32 {
        self.pos.value()
    }

    pub fn set_value(&mut self, value: i32) {
        let change = self.pos.set_value(value);
        self.on_position_changed(change);
    }

    pub fn small_change(&self) -> i32 {
        self.pos.small_change()
    }

    pub fn set_small_change(&mut self, small_change: i32) {
        let change = self.pos.set_small_change(small_change);
        self.on_position_changed(change);
    }

    pub fn large_change(&self) -> i32 {
        self.pos.large_change()
    }

    pub fn set_large_change(&mut self, large_change: i32) {
        let change = self.pos.set_large_change(large_change);
        self.on_position_changed(change);
    }

    pub fn is_vertical(&self) -> bool {
        self.peer.is_vertical()
    }

    pub fn set_vertical(&mut self, vertical: bool) {
        if self.is_vertical() == vertical {
            return;
        }
        self.peer.set_vertical(vertical);
        self.events.push(ScrollBarEvent::IsVerticalChanged);
        self.update_scroll_info();
    }

    pub fn orientation(&self) -> ScrollBarOrientation {
        if self.is_vertical() {
            ScrollBarOrientation::Vertical
        } else {
            ScrollBarOrientation::Horizontal
        }
    }

    pub fn metrics(&self) -> Option<&MetricsInfo> {
        self.metrics.as_ref()
    }

    pub fn set_metrics(&mut self, metrics: Option<MetricsInfo>) {
        self.metrics = metrics;
    }

    /// Position in scroll units.
    pub fn pos_info(&self) -> ScrollBarInfo {
        self.pos.to_snapshot()
    }

    /// Replace the range from a scroll-unit snapshot.
    pub fn set_pos_info(&mut self, info: ScrollBarInfo) {
        if self.pos.assign(info) {
            self.on_position_changed(Some(RangeChange::Value));
        }
    }

    /// Snapshot for the requested orientation; empty when it is not ours.
    pub fn scrollbar_info_for(&self, is_vertical: bool) -> ScrollBarInfo {
        if is_vertical == self.is_vertical() {
            self.pos_info()
        } else {
            ScrollBarInfo::default()
        }
    }

    /// Push the current position, range and page size to the peer.
    pub fn update_scroll_info(&mut self) {
        let info = self.pos.to_snapshot();
        self.peer.set_scrollbar(
            Some(info.position),
            Some(info.range),
            Some(info.page_size),
            true,
        );
    }

    /// Read the thumb position from the peer and apply it.
    pub fn raise_scroll(&mut self, event_type: ScrollEventType) -> bool {
        let position = self.peer.thumb_position();
        self.raise_handler_scroll(event_type, position)
    }

    /// Apply a peer thumb position given in scroll units.
    /// Returns true if the value changed.
    pub fn raise_handler_scroll(&mut self, event_type: ScrollEventType, position: i32) -> bool {
        let small = self.small_change().max(1);
        let old_value = self.value();
        let new_value = (position.div_euclid(small).saturating_add(self.minimum()))
            .clamp(self.minimum(), self.maximum());
        if new_value == old_value {
            return false;
        }
        if self.pos.set_value(new_value).is_some() {
            self.update_scroll_info();
        }
        self.events.push(ScrollBarEvent::Scroll(ScrollEventArgs {
            event_type,
            old_value,
            new_value,
            orientation: self.orientation(),
        }));
        self.raise_value_changed();
        true
    }

    pub fn raise_value_changed(&mut self) {
        self.events.push(ScrollBarEvent::ValueChanged);
    }

    /// Drain events raised since the last call.
    pub fn take_events(&mut self) -> Vec<ScrollBarEvent> {
        std::mem::take(&mut self.events)
    }

    /// Metrics in effect: our own, or the config default.
    pub fn real_metrics(&self) -> &MetricsInfo {
        self.metrics
            .as_ref()
            .unwrap_or_else(|| self.config.scrollbar_metrics())
    }

    pub fn size_from_metrics(&self, host: &dyn ControlHost) -> SizeD {
        self.real_metrics()
            .preferred_size(self.is_vertical(), host.scale_factor(self.id))
    }

    pub fn arrow_bitmap_size_from_metrics(&self, host: &dyn ControlHost) -> SizeD {
        self.real_metrics()
            .arrow_bitmap_size(self.is_vertical(), host.scale_factor(self.id))
    }

    pub fn thumb_size_from_metrics(&self, host: &dyn ControlHost) -> SizeD {
        self.real_metrics().thumb_size(
            self.is_vertical(),
            host.client_size(self.id),
            host.scale_factor(self.id),
        )
    }

    /// Colors for the configured theme.
    pub fn theme_metrics(&self, theme: KnownTheme, is_dark: bool) -> &'static ThemeMetrics {
        ThemeMetrics::for_theme(theme, is_dark, self.config.current_system_theme())
    }

    /// Log the model and what the peer currently shows.
    pub fn log_info(&self) {
        log::info!("{self}");
        log::info!(
            "Native: Position: {}, Range: {}, PageSize: {}",
            self.peer.thumb_position(),
            self.peer.range(),
            self.peer.page_size()
        );
    }

    fn on_position_changed(&mut self, change: Option<RangeChange>) {
        let Some(change) = change else {
            return;
        };
        self.update_scroll_info();
        if change == RangeChange::Value {
            self.raise_value_changed();
        }
    }
}

impl<P: ScrollBarPeer> fmt::Display for ScrollBar<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ScrollBar {:?}, Minimum: {}, Maximum: {}, Value: {}",
            self.id,
            self.minimum(),
            self.maximum(),
            self.value()
        )
    }
}

//! Container with a center panel and four resizable side panels.

use std::collections::HashSet;

use crate::config::ToolkitConfig;
use crate::control::{Control, ControlHost, ControlId, ControlTree, TreeError};
use crate::event::InputEvent;
use crate::layout::Coord;
use crate::splitter::{Splitter, SplitterEvent};
use crate::types::{DockStyle, SplitPanelPosition, Thickness};

/// Initial side panel sizes: left/right widths, top/bottom heights.
pub const DEFAULT_PANEL_SIZE: Thickness = Thickness::new(30.0, 50.0, 30.0, 50.0);

const SIDES: [SplitPanelPosition; 4] = [
    SplitPanelPosition::Left,
    SplitPanelPosition::Top,
    SplitPanelPosition::Right,
    SplitPanelPosition::Bottom,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Axis {
    Width,
    Height,
}

pub struct SplittedPanel {
    container: ControlId,
    fill: ControlId,
    left: (ControlId, Splitter),
    top: (ControlId, Splitter),
    right: (ControlId, Splitter),
    bottom: (ControlId, Splitter),
    at_least_called: HashSet<(SplitPanelPosition, Axis)>,
}

impl SplittedPanel {
    /// Build the panel as a fill-docked child of `parent`.
    pub fn new(
        tree: &mut ControlTree,
        parent: ControlId,
        config: &ToolkitConfig,
    ) -> Result<Self, TreeError> {
        let container = tree.add(
            parent,
            Control::panel().name("splitted-panel").dock(DockStyle::Fill),
        )?;
        tree.suspend_layout(container);

        // Dock layout runs last-to-first, so each panel must follow its splitter.
        let fill = tree.add(container, Control::panel().dock(DockStyle::Fill))?;
        let right = Self::add_side(tree, container, DockStyle::Right, config)?;
        let left = Self::add_side(tree, container, DockStyle::Left, config)?;
        let top = Self::add_side(tree, container, DockStyle::Top, config)?;
        let bottom = Self::add_side(tree, container, DockStyle::Bottom, config)?;

        tree.resume_layout(container);
        log::debug!("splitted panel {:?} created under {:?}", container, parent);

        Ok(Self {
            container,
            fill,
            left,
            top,
            right,
            bottom,
            at_least_called: HashSet::new(),
        })
    }

    fn add_side(
        tree: &mut ControlTree,
        container: ControlId,
        dock: DockStyle,
        config: &ToolkitConfig,
    ) -> Result<(ControlId, Splitter), TreeError> {
        let splitter_id = tree.add(container, Control::splitter())?;
        let mut splitter = Splitter::new(tree, splitter_id, config);
        splitter.set_dock(tree, dock);

        let size = DEFAULT_PANEL_SIZE;
        let panel = match dock {
            DockStyle::Left => Control::panel().width(size.left),
            DockStyle::Right => Control::panel().width(size.right),
            DockStyle::Top => Control::panel().height(size.top),
            _ => Control::panel().height(size.bottom),
        };
        let panel = tree.add(container, panel.dock(dock))?;
        Ok((panel, splitter))
    }

    /// The control hosting all panels and splitters.
    pub fn container(&self) -> ControlId {
        self.container
    }

    pub fn panel(&self, position: SplitPanelPosition) -> ControlId {
        match position {
            SplitPanelPosition::Left => self.left.0,
            SplitPanelPosition::Top => self.top.0,
            SplitPanelPosition::Right => self.right.0,
            SplitPanelPosition::Bottom => self.bottom.0,
            SplitPanelPosition::Center => self.fill,
        }
    }

    /// Splitter of a side panel; the center has none.
    pub fn splitter(&self, position: SplitPanelPosition) -> Option<&Splitter> {
        match position {
            SplitPanelPosition::Left => Some(&self.left.1),
            SplitPanelPosition::Top => Some(&self.top.1),
            SplitPanelPosition::Right => Some(&self.right.1),
            SplitPanelPosition::Bottom => Some(&self.bottom.1),
            SplitPanelPosition::Center => None,
        }
    }

    pub fn splitter_mut(&mut self, position: SplitPanelPosition) -> Option<&mut Splitter> {
        match position {
            SplitPanelPosition::Left => Some(&mut self.left.1),
            SplitPanelPosition::Top => Some(&mut self.top.1),
            SplitPanelPosition::Right => Some(&mut self.right.1),
            SplitPanelPosition::Bottom => Some(&mut self.bottom.1),
            SplitPanelPosition::Center => None,
        }
    }

    pub fn panel_visible(&self, tree: &ControlTree, position: SplitPanelPosition) -> bool {
        tree.is_visible(self.panel(position))
    }

    /// Show or hide a panel together with its splitter.
    pub fn set_panel_visible(
        &self,
        tree: &mut ControlTree,
        position: SplitPanelPosition,
        visible: bool,
    ) {
        tree.set_visible(self.panel(position), visible);
        if let Some(splitter) = self.splitter(position) {
            tree.set_visible(splitter.id(), visible);
        }
        tree.perform_layout(self.container);
    }

    pub fn panel_width(&self, tree: &ControlTree, position: SplitPanelPosition) -> Coord {
        tree.bounds(self.panel(position)).width
    }

    pub fn panel_height(&self, tree: &ControlTree, position: SplitPanelPosition) -> Coord {
        tree.bounds(self.panel(position)).height
    }

    /// Set the width of the left or right panel. Returns false for other positions.
    pub fn set_panel_width(
        &self,
        tree: &mut ControlTree,
        position: SplitPanelPosition,
        width: Coord,
    ) -> bool {
        match position {
            SplitPanelPosition::Left | SplitPanelPosition::Right => {
                tree.set_width(self.panel(position), width);
                tree.perform_layout(self.container);
                true
            }
            _ => false,
        }
    }

    /// Set the height of the top or bottom panel. Returns false for other positions.
    pub fn set_panel_height(
        &self,
        tree: &mut ControlTree,
        position: SplitPanelPosition,
        height: Coord,
    ) -> bool {
        match position {
            SplitPanelPosition::Top | SplitPanelPosition::Bottom => {
                tree.set_height(self.panel(position), height);
                tree.perform_layout(self.container);
                true
            }
            _ => false,
        }
    }

    /// Grow the panel to `width` if it is narrower. With `only_once` only the
    /// first call for this panel has any effect.
    pub fn set_panel_width_at_least(
        &mut self,
        tree: &mut ControlTree,
        position: SplitPanelPosition,
        width: Coord,
        only_once: bool,
    ) -> bool {
        if !self.mark_at_least(position, Axis::Width, only_once) {
            return false;
        }
        self.panel_width(tree, position) < width && self.set_panel_width(tree, position, width)
    }

    pub fn set_panel_height_at_least(
        &mut self,
        tree: &mut ControlTree,
        position: SplitPanelPosition,
        height: Coord,
        only_once: bool,
    ) -> bool {
        if !self.mark_at_least(position, Axis::Height, only_once) {
            return false;
        }
        self.panel_height(tree, position) < height && self.set_panel_height(tree, position, height)
    }

    fn mark_at_least(&mut self, position: SplitPanelPosition, axis: Axis, only_once: bool) -> bool {
        let first = self.at_least_called.insert((position, axis));
        first || !only_once
    }

    /// Route an event given in container coordinates to the splitter that
    /// owns it: the dragging one, else the visible one under the pointer.
    pub fn handle_input(&mut self, tree: &mut ControlTree, event: InputEvent) -> bool {
        let position = SIDES.into_iter().find(|&side| {
            self.splitter(side).is_some_and(|s| s.is_dragging())
        });
        let position = position.or_else(|| {
            let (x, y) = event.position()?;
            SIDES.into_iter().find(|&side| {
                self.splitter(side).is_some_and(|s| {
                    tree.is_visible(s.id()) && tree.bounds(s.id()).contains(x, y)
                })
            })
        });
        let Some(position) = position else {
            return false;
        };
        let Some(splitter) = self.splitter_mut(position) else {
            return false;
        };
        let origin = tree.bounds(splitter.id());
        splitter.handle_input(tree, event.offset(origin.x, origin.y))
    }

    /// Drain splitter events, tagged with the panel each splitter resizes.
    pub fn take_events(&mut self) -> Vec<(SplitPanelPosition, SplitterEvent)> {
        let mut events = Vec::new();
        for side in SIDES {
            if let Some(splitter) = self.splitter_mut(side) {
                events.extend(splitter.take_events().into_iter().map(|e| (side, e)));
            }
        }
        events
    }
}

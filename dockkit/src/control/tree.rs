use std::sync::atomic::{AtomicU64, Ordering};

use super::{ControlHost, ControlId, TreeError};
use crate::layout::{layout_docked, Coord, RectD};
use crate::types::{DockStyle, LayoutFlags, Thickness};

static NEXT_NAME: AtomicU64 = AtomicU64::new(0);

fn generate_name(prefix: &str) -> String {
    let n = NEXT_NAME.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{n}")
}

/// A node of the in-memory control tree.
#[derive(Debug, Clone)]
pub struct Control {
    pub name: String,
    pub bounds: RectD,
    pub dock: DockStyle,
    pub padding: Thickness,
    pub margin: Thickness,
    pub visible: bool,
    pub ignore_layout: bool,
    pub layout_flags: LayoutFlags,
    pub scale_factor: Coord,
}

impl Default for Control {
    fn default() -> Self {
        Self {
            name: generate_name("control"),
            bounds: RectD::EMPTY,
            dock: DockStyle::None,
            padding: Thickness::EMPTY,
            margin: Thickness::EMPTY,
            visible: true,
            ignore_layout: false,
            layout_flags: LayoutFlags::empty(),
            scale_factor: 1.0,
        }
    }
}

impl Control {
    pub fn panel() -> Self {
        Self {
            name: generate_name("panel"),
            ..Default::default()
        }
    }

    pub fn splitter() -> Self {
        Self {
            name: generate_name("splitter"),
            ..Default::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn bounds(mut self, bounds: RectD) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn width(mut self, width: Coord) -> Self {
        self.bounds.width = width;
        self
    }

    pub fn height(mut self, height: Coord) -> Self {
        self.bounds.height = height;
        self
    }

    pub fn dock(mut self, dock: DockStyle) -> Self {
        self.dock = dock;
        self
    }

    pub fn padding(mut self, padding: Thickness) -> Self {
        self.padding = padding;
        self
    }

    pub fn margin(mut self, margin: Thickness) -> Self {
        self.margin = margin;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn ignore_layout(mut self, ignore: bool) -> Self {
        self.ignore_layout = ignore;
        self
    }

    pub fn layout_flags(mut self, flags: LayoutFlags) -> Self {
        self.layout_flags = flags;
        self
    }

    pub fn scale_factor(mut self, scale: Coord) -> Self {
        self.scale_factor = scale;
        self
    }
}

#[derive(Debug, Default)]
struct Node {
    control: Control,
    parent: Option<ControlId>,
    children: Vec<ControlId>,
    suspend_depth: u32,
    suspend_total: u32,
    refresh_count: u32,
    invalidate_count: u32,
    layout_count: u32,
}

/// Arena-backed control tree implementing [`ControlHost`].
///
/// Controls are never removed; a [`ControlId`] stays valid for the tree's lifetime.
#[derive(Debug, Default)]
pub struct ControlTree {
    nodes: Vec<Node>,
    captured: Option<ControlId>,
}

impl ControlTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a control without a parent.
    pub fn add_root(&mut self, control: Control) -> ControlId {
        let id = ControlId(self.nodes.len());
        self.nodes.push(Node {
            control,
            ..Default::default()
        });
        id
    }

    /// Add `control` as the last (topmost) child of `parent`.
    pub fn add(&mut self, parent: ControlId, control: Control) -> Result<ControlId, TreeError> {
        if self.node(parent).is_none() {
            return Err(TreeError::UnknownControl(parent));
        }
        let id = self.add_root(control);
        self.nodes[id.0].parent = Some(parent);
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    /// Move `child` to the end of `parent`'s children.
    pub fn set_parent(&mut self, child: ControlId, parent: ControlId) -> Result<(), TreeError> {
        if self.node(child).is_none() {
            return Err(TreeError::UnknownControl(child));
        }
        if self.node(parent).is_none() {
            return Err(TreeError::UnknownControl(parent));
        }
        if child == parent || self.is_ancestor(child, parent) {
            return Err(TreeError::CyclicParent { child, parent });
        }
        if let Some(old) = self.nodes[child.0].parent.take() {
            self.nodes[old.0].children.retain(|&c| c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    fn is_ancestor(&self, ancestor: ControlId, mut id: ControlId) -> bool {
        while let Some(parent) = self.parent(id) {
            if parent == ancestor {
                return true;
            }
            id = parent;
        }
        false
    }

    pub fn get(&self, id: ControlId) -> Option<&Control> {
        self.node(id).map(|n| &n.control)
    }

    pub fn get_mut(&mut self, id: ControlId) -> Option<&mut Control> {
        self.nodes.get_mut(id.0).map(|n| &mut n.control)
    }

    /// Find a control by name.
    pub fn find(&self, name: &str) -> Option<ControlId> {
        self.nodes
            .iter()
            .position(|n| n.control.name == name)
            .map(ControlId)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn set_visible(&mut self, id: ControlId, visible: bool) {
        if let Some(control) = self.get_mut(id) {
            control.visible = visible;
        }
    }

    pub fn set_width(&mut self, id: ControlId, width: Coord) {
        if let Some(control) = self.get_mut(id) {
            control.bounds.width = width;
        }
    }

    pub fn set_height(&mut self, id: ControlId, height: Coord) {
        if let Some(control) = self.get_mut(id) {
            control.bounds.height = height;
        }
    }

    /// The control currently holding mouse capture.
    pub fn captured(&self) -> Option<ControlId> {
        self.captured
    }

    pub fn is_layout_suspended(&self, id: ControlId) -> bool {
        self.node(id).is_some_and(|n| n.suspend_depth > 0)
    }

    /// How many times layout of `id` was ever suspended.
    pub fn suspend_count(&self, id: ControlId) -> u32 {
        self.node(id).map_or(0, |n| n.suspend_total)
    }

    pub fn refresh_count(&self, id: ControlId) -> u32 {
        self.node(id).map_or(0, |n| n.refresh_count)
    }

    pub fn invalidate_count(&self, id: ControlId) -> u32 {
        self.node(id).map_or(0, |n| n.invalidate_count)
    }

    /// How many dock layout passes ran for `id`.
    pub fn layout_count(&self, id: ControlId) -> u32 {
        self.node(id).map_or(0, |n| n.layout_count)
    }

    /// Dock the children of `id`, then lay out each child in turn.
    /// Suspended controls are skipped together with their subtree.
    pub fn perform_layout(&mut self, id: ControlId) {
        if self.node(id).is_none() || self.is_layout_suspended(id) {
            return;
        }
        let docked = layout_docked(self, id);
        self.nodes[id.0].layout_count += 1;
        log::trace!("layout {:?}: {docked} docked children", id);

        for child in self.children(id) {
            self.perform_layout(child);
        }
    }

    fn node(&self, id: ControlId) -> Option<&Node> {
        self.nodes.get(id.0)
    }
}

impl ControlHost for ControlTree {
    fn parent(&self, id: ControlId) -> Option<ControlId> {
        self.node(id)?.parent
    }

    fn children(&self, id: ControlId) -> Vec<ControlId> {
        self.node(id).map(|n| n.children.clone()).unwrap_or_default()
    }

    fn bounds(&self, id: ControlId) -> RectD {
        self.get(id).map(|c| c.bounds).unwrap_or_default()
    }

    fn set_bounds(&mut self, id: ControlId, bounds: RectD) {
        if let Some(control) = self.get_mut(id) {
            control.bounds = bounds;
        }
    }

    fn dock(&self, id: ControlId) -> DockStyle {
        self.get(id).map(|c| c.dock).unwrap_or_default()
    }

    fn set_dock(&mut self, id: ControlId, dock: DockStyle) {
        if let Some(control) = self.get_mut(id) {
            control.dock = dock;
        }
    }

    fn padding(&self, id: ControlId) -> Thickness {
        self.get(id).map(|c| c.padding).unwrap_or_default()
    }

    fn margin(&self, id: ControlId) -> Thickness {
        self.get(id).map(|c| c.margin).unwrap_or_default()
    }

    fn is_visible(&self, id: ControlId) -> bool {
        self.get(id).is_some_and(|c| c.visible)
    }

    fn ignores_layout(&self, id: ControlId) -> bool {
        self.get(id).is_some_and(|c| c.ignore_layout)
    }

    fn layout_flags(&self, id: ControlId) -> LayoutFlags {
        self.get(id).map(|c| c.layout_flags).unwrap_or_default()
    }

    fn scale_factor(&self, id: ControlId) -> Coord {
        self.get(id).map_or(1.0, |c| c.scale_factor)
    }

    fn capture_mouse(&mut self, id: ControlId) {
        if let Some(previous) = self.captured.replace(id) {
            if previous != id {
                log::debug!("mouse capture moved from {:?} to {:?}", previous, id);
            }
        }
    }

    fn release_mouse_capture(&mut self, id: ControlId) {
        if self.captured == Some(id) {
            self.captured = None;
        }
    }

    fn suspend_layout(&mut self, id: ControlId) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.suspend_depth += 1;
            node.suspend_total += 1;
        }
    }

    fn resume_layout(&mut self, id: ControlId) {
        let Some(node) = self.nodes.get_mut(id.0) else {
            return;
        };
        if node.suspend_depth == 0 {
            log::warn!("resume_layout on {:?} without matching suspend", id);
            return;
        }
        node.suspend_depth -= 1;
        if node.suspend_depth == 0 {
            self.perform_layout(id);
        }
    }

    fn refresh(&mut self, id: ControlId) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.refresh_count += 1;
        }
    }

    fn invalidate(&mut self, id: ControlId) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.invalidate_count += 1;
        }
    }
}

use std::panic::{self, AssertUnwindSafe};

use super::ControlId;
use crate::layout::{Coord, RectD, SizeD};
use crate::types::{DockStyle, LayoutFlags, Thickness};

/// What the splitter and scrollbar need from the toolkit's control tree.
///
/// Queries are total: an unknown id reads as an empty, invisible, parentless
/// control. Mutations on unknown ids are ignored.
pub trait ControlHost {
    fn parent(&self, id: ControlId) -> Option<ControlId>;

    /// All children in z-order (first child is lowest).
    fn children(&self, id: ControlId) -> Vec<ControlId>;

    fn bounds(&self, id: ControlId) -> RectD;

    fn set_bounds(&mut self, id: ControlId, bounds: RectD);

    fn dock(&self, id: ControlId) -> DockStyle;

    fn set_dock(&mut self, id: ControlId, dock: DockStyle);

    fn padding(&self, id: ControlId) -> Thickness;

    fn margin(&self, id: ControlId) -> Thickness;

    fn is_visible(&self, id: ControlId) -> bool;

    /// Children that ignore layout are neither positioned nor counted.
    fn ignores_layout(&self, id: ControlId) -> bool;

    fn layout_flags(&self, id: ControlId) -> LayoutFlags;

    fn capture_mouse(&mut self, id: ControlId);

    fn release_mouse_capture(&mut self, id: ControlId);

    fn suspend_layout(&mut self, id: ControlId);

    /// Resume layout; the outermost resume lays the control out again.
    fn resume_layout(&mut self, id: ControlId);

    /// Repaint the control and its children now.
    fn refresh(&mut self, id: ControlId);

    /// Schedule a repaint.
    fn invalidate(&mut self, id: ControlId);

    fn scale_factor(&self, _id: ControlId) -> Coord {
        1.0
    }

    fn client_size(&self, id: ControlId) -> SizeD {
        self.bounds(id).size()
    }

    fn client_rectangle(&self, id: ControlId) -> RectD {
        RectD::from_size(self.client_size(id))
    }

    fn visible_children(&self, id: ControlId) -> Vec<ControlId> {
        self.children(id)
            .into_iter()
            .filter(|&child| self.is_visible(child))
            .collect()
    }

    fn next_visible_sibling(&self, id: ControlId) -> Option<ControlId> {
        let siblings = self.children(self.parent(id)?);
        let index = siblings.iter().position(|&s| s == id)?;
        siblings[index + 1..]
            .iter()
            .copied()
            .find(|&s| self.is_visible(s))
    }

    fn previous_visible_sibling(&self, id: ControlId) -> Option<ControlId> {
        let siblings = self.children(self.parent(id)?);
        let index = siblings.iter().position(|&s| s == id)?;
        siblings[..index]
            .iter()
            .rev()
            .copied()
            .find(|&s| self.is_visible(s))
    }

    /// Run `update` with layout of `id` suspended, then resume it.
    /// Layout is resumed even when `update` panics; the panic is then re-raised.
    fn do_inside_update<F>(&mut self, id: ControlId, update: F)
    where
        Self: Sized,
        F: FnOnce(&mut Self),
    {
        self.suspend_layout(id);
        let result = panic::catch_unwind(AssertUnwindSafe(|| update(&mut *self)));
        self.resume_layout(id);
        if let Err(payload) = result {
            panic::resume_unwind(payload);
        }
    }
}

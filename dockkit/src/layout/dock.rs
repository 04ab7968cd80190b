use super::RectD;
use crate::control::{ControlHost, ControlId};
use crate::types::{DockStyle, LayoutFlags};

/// Position the docked children of `container` and return how many were docked.
///
/// By default children are docked last-to-first, so the lowest child in
/// z-order ends up closest to the edge. `LayoutFlags::ITERATE_BACKWARD`
/// reverses that.
pub fn layout_docked<H: ControlHost + ?Sized>(host: &mut H, container: ControlId) -> usize {
    let padding = host.padding(container);
    let mut space = host
        .client_rectangle(container)
        .shrink(padding.top, padding.right, padding.bottom, padding.left);

    let mut children = host.visible_children(container);
    if !host
        .layout_flags(container)
        .contains(LayoutFlags::ITERATE_BACKWARD)
    {
        children.reverse();
    }

    let mut docked = 0;
    for child in children {
        let dock = host.dock(child);
        if dock == DockStyle::None || host.ignores_layout(child) {
            continue;
        }
        docked += 1;
        dock_child(host, child, dock, &mut space);
    }
    docked
}

/// Place one child against `dock` and take its size out of `space`.
pub fn dock_child<H: ControlHost + ?Sized>(
    host: &mut H,
    child: ControlId,
    dock: DockStyle,
    space: &mut RectD,
) {
    let size = host.bounds(child).size();

    match dock {
        DockStyle::Left => {
            host.set_bounds(child, RectD::new(space.x, space.y, size.width, space.height));
            space.x += size.width;
            space.width -= size.width;
        }
        DockStyle::Top => {
            host.set_bounds(child, RectD::new(space.x, space.y, space.width, size.height));
            space.y += size.height;
            space.height -= size.height;
        }
        DockStyle::Right => {
            host.set_bounds(
                child,
                RectD::new(space.right() - size.width, space.y, size.width, space.height),
            );
            space.width -= size.width;
        }
        DockStyle::Bottom => {
            host.set_bounds(
                child,
                RectD::new(space.x, space.bottom() - size.height, space.width, size.height),
            );
            space.height -= size.height;
        }
        DockStyle::Fill => {
            host.set_bounds(child, *space);
        }
        DockStyle::None => {}
    }
}

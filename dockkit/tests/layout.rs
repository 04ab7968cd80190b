use std::panic::{self, AssertUnwindSafe};

use dockkit::{
    layout_docked, Control, ControlHost, ControlTree, DockStyle, LayoutFlags, RectD, Thickness,
    TreeError,
};

fn root(width: f64, height: f64) -> (ControlTree, dockkit::ControlId) {
    let mut tree = ControlTree::new();
    let root = tree.add_root(Control::panel().bounds(RectD::new(0.0, 0.0, width, height)));
    (tree, root)
}

// ============================================================================
// Dock layout
// ============================================================================

#[test]
fn test_dock_last_child_closest_to_edge() {
    let (mut tree, root) = root(100.0, 50.0);
    let outer = tree
        .add(root, Control::panel().dock(DockStyle::Left).width(10.0))
        .unwrap();
    let inner = tree
        .add(root, Control::panel().dock(DockStyle::Left).width(20.0))
        .unwrap();

    assert_eq!(layout_docked(&mut tree, root), 2);
    assert_eq!(tree.bounds(inner), RectD::new(0.0, 0.0, 20.0, 50.0));
    assert_eq!(tree.bounds(outer), RectD::new(20.0, 0.0, 10.0, 50.0));
}

#[test]
fn test_iterate_backward_reverses_order() {
    let (mut tree, root) = root(100.0, 50.0);
    tree.get_mut(root).unwrap().layout_flags = LayoutFlags::ITERATE_BACKWARD;
    let first = tree
        .add(root, Control::panel().dock(DockStyle::Left).width(10.0))
        .unwrap();
    let second = tree
        .add(root, Control::panel().dock(DockStyle::Left).width(20.0))
        .unwrap();

    layout_docked(&mut tree, root);
    assert_eq!(tree.bounds(first).x, 0.0);
    assert_eq!(tree.bounds(second).x, 10.0);
}

#[test]
fn test_all_edges_and_fill() {
    let (mut tree, root) = root(100.0, 80.0);
    let fill = tree
        .add(root, Control::panel().dock(DockStyle::Fill))
        .unwrap();
    let right = tree
        .add(root, Control::panel().dock(DockStyle::Right).width(15.0))
        .unwrap();
    let left = tree
        .add(root, Control::panel().dock(DockStyle::Left).width(10.0))
        .unwrap();
    let bottom = tree
        .add(root, Control::panel().dock(DockStyle::Bottom).height(20.0))
        .unwrap();
    let top = tree
        .add(root, Control::panel().dock(DockStyle::Top).height(5.0))
        .unwrap();

    layout_docked(&mut tree, root);
    assert_eq!(tree.bounds(top), RectD::new(0.0, 0.0, 100.0, 5.0));
    assert_eq!(tree.bounds(bottom), RectD::new(0.0, 60.0, 100.0, 20.0));
    assert_eq!(tree.bounds(left), RectD::new(0.0, 5.0, 10.0, 55.0));
    assert_eq!(tree.bounds(right), RectD::new(85.0, 5.0, 15.0, 55.0));
    assert_eq!(tree.bounds(fill), RectD::new(10.0, 5.0, 75.0, 55.0));
}

#[test]
fn test_padding_shrinks_space() {
    let (mut tree, root) = root(100.0, 50.0);
    tree.get_mut(root).unwrap().padding = Thickness::new(1.0, 2.0, 3.0, 4.0);
    let fill = tree
        .add(root, Control::panel().dock(DockStyle::Fill))
        .unwrap();

    layout_docked(&mut tree, root);
    assert_eq!(tree.bounds(fill), RectD::new(4.0, 1.0, 94.0, 46.0));
}

#[test]
fn test_hidden_undocked_and_ignored_children_skipped() {
    let (mut tree, root) = root(100.0, 50.0);
    let floating = tree
        .add(
            root,
            Control::panel().bounds(RectD::new(7.0, 7.0, 3.0, 3.0)),
        )
        .unwrap();
    tree.add(
        root,
        Control::panel()
            .dock(DockStyle::Left)
            .width(30.0)
            .visible(false),
    )
    .unwrap();
    tree.add(
        root,
        Control::panel()
            .dock(DockStyle::Left)
            .width(30.0)
            .ignore_layout(true),
    )
    .unwrap();
    let fill = tree
        .add(root, Control::panel().dock(DockStyle::Fill))
        .unwrap();

    assert_eq!(layout_docked(&mut tree, root), 1);
    assert_eq!(tree.bounds(fill), RectD::new(0.0, 0.0, 100.0, 50.0));
    assert_eq!(tree.bounds(floating), RectD::new(7.0, 7.0, 3.0, 3.0));
}

// ============================================================================
// Control tree
// ============================================================================

#[test]
fn test_add_to_unknown_parent_fails() {
    let (mut tree, _) = root(10.0, 10.0);
    let missing = dockkit::ControlId(42);
    assert_eq!(
        tree.add(missing, Control::panel()),
        Err(TreeError::UnknownControl(missing))
    );
}

#[test]
fn test_reparent_into_descendant_fails() {
    let (mut tree, root) = root(10.0, 10.0);
    let child = tree.add(root, Control::panel()).unwrap();
    let grandchild = tree.add(child, Control::panel()).unwrap();

    assert_eq!(
        tree.set_parent(root, grandchild),
        Err(TreeError::CyclicParent {
            child: root,
            parent: grandchild,
        })
    );
    assert!(tree.set_parent(grandchild, root).is_ok());
    assert_eq!(tree.children(root), vec![child, grandchild]);
    assert!(tree.children(child).is_empty());
}

#[test]
fn test_find_by_name_and_siblings() {
    let (mut tree, root) = root(10.0, 10.0);
    let a = tree.add(root, Control::panel().name("a")).unwrap();
    let b = tree.add(root, Control::panel().name("b").visible(false)).unwrap();
    let c = tree.add(root, Control::panel().name("c")).unwrap();

    assert_eq!(tree.find("b"), Some(b));
    assert_eq!(tree.find("nope"), None);
    assert_eq!(tree.next_visible_sibling(a), Some(c));
    assert_eq!(tree.previous_visible_sibling(c), Some(a));
    assert_eq!(tree.next_visible_sibling(c), None);
    assert_eq!(tree.next_visible_sibling(root), None);
}

#[test]
fn test_unknown_ids_read_as_defaults() {
    let tree = ControlTree::new();
    let missing = dockkit::ControlId(3);
    assert_eq!(tree.bounds(missing), RectD::EMPTY);
    assert!(!tree.is_visible(missing));
    assert_eq!(tree.parent(missing), None);
    assert!(tree.children(missing).is_empty());
}

#[test]
fn test_nested_suspension_lays_out_once() {
    let (mut tree, root) = root(100.0, 50.0);
    let fill = tree
        .add(root, Control::panel().dock(DockStyle::Fill))
        .unwrap();

    tree.suspend_layout(root);
    tree.suspend_layout(root);
    tree.resume_layout(root);
    assert!(tree.is_layout_suspended(root));
    assert_eq!(tree.layout_count(root), 0);

    tree.resume_layout(root);
    assert!(!tree.is_layout_suspended(root));
    assert_eq!(tree.layout_count(root), 1);
    assert_eq!(tree.bounds(fill).width, 100.0);
}

#[test]
fn test_do_inside_update() {
    let (mut tree, root) = root(100.0, 50.0);
    let left = tree
        .add(root, Control::panel().dock(DockStyle::Left).width(10.0))
        .unwrap();

    tree.do_inside_update(root, |tree| {
        tree.set_width(left, 40.0);
        assert!(tree.is_layout_suspended(root));
    });
    assert_eq!(tree.suspend_count(root), 1);
    assert_eq!(tree.bounds(left), RectD::new(0.0, 0.0, 40.0, 50.0));
}

#[test]
fn test_do_inside_update_resumes_after_panic() {
    let (mut tree, root) = root(100.0, 50.0);
    let left = tree
        .add(root, Control::panel().dock(DockStyle::Left).width(10.0))
        .unwrap();

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        tree.do_inside_update(root, |tree| {
            tree.set_width(left, 40.0);
            panic!("update failed");
        })
    }));
    assert!(result.is_err());
    assert!(!tree.is_layout_suspended(root));
    assert_eq!(tree.layout_count(root), 1);
    assert_eq!(tree.bounds(left), RectD::new(0.0, 0.0, 40.0, 50.0));
}

#[test]
fn test_perform_layout_recurses() {
    let (mut tree, root) = root(100.0, 50.0);
    let panel = tree
        .add(root, Control::panel().dock(DockStyle::Fill))
        .unwrap();
    let inner = tree
        .add(panel, Control::panel().dock(DockStyle::Top).height(10.0))
        .unwrap();

    tree.perform_layout(root);
    assert_eq!(tree.bounds(inner), RectD::new(0.0, 0.0, 100.0, 10.0));
    assert_eq!(tree.layout_count(panel), 1);
}

#[test]
fn test_mouse_capture() {
    let (mut tree, root) = root(10.0, 10.0);
    let a = tree.add(root, Control::panel()).unwrap();
    let b = tree.add(root, Control::panel()).unwrap();

    tree.capture_mouse(a);
    tree.capture_mouse(b);
    assert_eq!(tree.captured(), Some(b));

    tree.release_mouse_capture(a);
    assert_eq!(tree.captured(), Some(b));
    tree.release_mouse_capture(b);
    assert_eq!(tree.captured(), None);
}

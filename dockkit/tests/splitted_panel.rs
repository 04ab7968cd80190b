use dockkit::{
    Control, ControlHost, ControlId, ControlTree, InputEvent, Key, MouseButton, RectD,
    SplitPanelPosition, SplittedPanel, SplitterEvent, ToolkitConfig,
};

fn setup() -> (ControlTree, ControlId, SplittedPanel) {
    let mut tree = ControlTree::new();
    let root = tree.add_root(Control::panel().bounds(RectD::new(0.0, 0.0, 400.0, 300.0)));
    let panel = SplittedPanel::new(&mut tree, root, &ToolkitConfig::new()).unwrap();
    tree.perform_layout(root);
    (tree, root, panel)
}

fn bounds(tree: &ControlTree, panel: &SplittedPanel, position: SplitPanelPosition) -> RectD {
    tree.bounds(panel.panel(position))
}

fn splitter_bounds(
    tree: &ControlTree,
    panel: &SplittedPanel,
    position: SplitPanelPosition,
) -> RectD {
    tree.bounds(panel.splitter(position).unwrap().id())
}

fn mouse_down(x: f64, y: f64) -> InputEvent {
    InputEvent::MouseDown {
        x,
        y,
        button: MouseButton::Left,
        clicks: 1,
    }
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_default_layout() {
    let (tree, _, panel) = setup();
    use SplitPanelPosition::*;

    assert_eq!(bounds(&tree, &panel, Top), RectD::new(0.0, 0.0, 400.0, 30.0));
    assert_eq!(splitter_bounds(&tree, &panel, Top), RectD::new(0.0, 30.0, 400.0, 5.0));
    assert_eq!(bounds(&tree, &panel, Bottom), RectD::new(0.0, 270.0, 400.0, 30.0));
    assert_eq!(splitter_bounds(&tree, &panel, Bottom), RectD::new(0.0, 265.0, 400.0, 5.0));
    assert_eq!(bounds(&tree, &panel, Left), RectD::new(0.0, 35.0, 50.0, 230.0));
    assert_eq!(splitter_bounds(&tree, &panel, Left), RectD::new(50.0, 35.0, 5.0, 230.0));
    assert_eq!(bounds(&tree, &panel, Right), RectD::new(350.0, 35.0, 50.0, 230.0));
    assert_eq!(splitter_bounds(&tree, &panel, Right), RectD::new(345.0, 35.0, 5.0, 230.0));
    assert_eq!(bounds(&tree, &panel, Center), RectD::new(55.0, 35.0, 290.0, 230.0));
}

#[test]
fn test_container_fills_parent() {
    let (tree, root, panel) = setup();
    assert_eq!(tree.parent(panel.container()), Some(root));
    assert_eq!(tree.bounds(panel.container()), RectD::new(0.0, 0.0, 400.0, 300.0));
    assert_eq!(tree.children(panel.container()).len(), 9);
}

#[test]
fn test_center_has_no_splitter() {
    let (_, _, mut panel) = setup();
    assert!(panel.splitter(SplitPanelPosition::Center).is_none());
    assert!(panel.splitter_mut(SplitPanelPosition::Center).is_none());
    assert!(panel.splitter(SplitPanelPosition::Left).is_some());
}

// ============================================================================
// Visibility
// ============================================================================

#[test]
fn test_hiding_panel_hides_splitter() {
    let (mut tree, _, panel) = setup();
    panel.set_panel_visible(&mut tree, SplitPanelPosition::Left, false);

    assert!(!panel.panel_visible(&tree, SplitPanelPosition::Left));
    let splitter = panel.splitter(SplitPanelPosition::Left).unwrap().id();
    assert!(!tree.is_visible(splitter));
    assert_eq!(
        bounds(&tree, &panel, SplitPanelPosition::Center),
        RectD::new(0.0, 35.0, 345.0, 230.0)
    );

    panel.set_panel_visible(&mut tree, SplitPanelPosition::Left, true);
    assert!(panel.panel_visible(&tree, SplitPanelPosition::Left));
    assert_eq!(bounds(&tree, &panel, SplitPanelPosition::Center).x, 55.0);
}

// ============================================================================
// Sizes
// ============================================================================

#[test]
fn test_width_only_for_left_and_right() {
    let (mut tree, _, panel) = setup();
    assert!(!panel.set_panel_width(&mut tree, SplitPanelPosition::Top, 80.0));
    assert!(!panel.set_panel_width(&mut tree, SplitPanelPosition::Center, 80.0));

    assert!(panel.set_panel_width(&mut tree, SplitPanelPosition::Right, 80.0));
    assert_eq!(panel.panel_width(&tree, SplitPanelPosition::Right), 80.0);
    assert_eq!(bounds(&tree, &panel, SplitPanelPosition::Right).x, 320.0);
}

#[test]
fn test_height_only_for_top_and_bottom() {
    let (mut tree, _, panel) = setup();
    assert!(!panel.set_panel_height(&mut tree, SplitPanelPosition::Left, 80.0));

    assert!(panel.set_panel_height(&mut tree, SplitPanelPosition::Top, 60.0));
    assert_eq!(panel.panel_height(&tree, SplitPanelPosition::Top), 60.0);
    assert_eq!(bounds(&tree, &panel, SplitPanelPosition::Left).y, 65.0);
}

#[test]
fn test_at_least_only_grows() {
    let (mut tree, _, mut panel) = setup();
    assert!(!panel.set_panel_width_at_least(&mut tree, SplitPanelPosition::Left, 40.0, false));
    assert!(panel.set_panel_width_at_least(&mut tree, SplitPanelPosition::Left, 70.0, false));
    assert_eq!(panel.panel_width(&tree, SplitPanelPosition::Left), 70.0);
}

#[test]
fn test_at_least_only_once() {
    let (mut tree, _, mut panel) = setup();
    assert!(panel.set_panel_height_at_least(&mut tree, SplitPanelPosition::Bottom, 50.0, true));
    assert!(!panel.set_panel_height_at_least(&mut tree, SplitPanelPosition::Bottom, 90.0, true));
    assert_eq!(panel.panel_height(&tree, SplitPanelPosition::Bottom), 50.0);

    assert!(panel.set_panel_height_at_least(&mut tree, SplitPanelPosition::Bottom, 90.0, false));
    assert_eq!(panel.panel_height(&tree, SplitPanelPosition::Bottom), 90.0);
}

// ============================================================================
// Input routing
// ============================================================================

#[test]
fn test_drag_left_splitter() {
    let (mut tree, _, mut panel) = setup();

    assert!(panel.handle_input(&mut tree, mouse_down(52.0, 100.0)));
    assert!(panel.handle_input(&mut tree, InputEvent::MouseMove { x: 102.0, y: 100.0 }));
    assert_eq!(panel.panel_width(&tree, SplitPanelPosition::Left), 100.0);
    assert_eq!(splitter_bounds(&tree, &panel, SplitPanelPosition::Left).x, 100.0);

    assert!(panel.handle_input(&mut tree, InputEvent::MouseMove { x: 122.0, y: 100.0 }));
    assert_eq!(panel.panel_width(&tree, SplitPanelPosition::Left), 120.0);

    assert!(panel.handle_input(
        &mut tree,
        InputEvent::MouseUp {
            x: 122.0,
            y: 100.0,
            button: MouseButton::Left,
        }
    ));
    assert_eq!(tree.captured(), None);
    assert_eq!(bounds(&tree, &panel, SplitPanelPosition::Center).x, 125.0);

    let events = panel.take_events();
    assert!(!events.is_empty());
    assert!(events
        .iter()
        .all(|(side, _)| *side == SplitPanelPosition::Left));
    assert!(matches!(events.last(), Some((_, SplitterEvent::Moved(_)))));
}

#[test]
fn test_drag_bottom_splitter_and_cancel() {
    let (mut tree, _, mut panel) = setup();

    assert!(panel.handle_input(&mut tree, mouse_down(200.0, 267.0)));
    panel.handle_input(&mut tree, InputEvent::MouseMove { x: 200.0, y: 217.0 });
    assert_eq!(panel.panel_height(&tree, SplitPanelPosition::Bottom), 80.0);

    assert!(panel.handle_input(&mut tree, InputEvent::KeyDown { key: Key::Escape }));
    assert_eq!(panel.panel_height(&tree, SplitPanelPosition::Bottom), 30.0);
}

#[test]
fn test_events_outside_splitters_not_handled() {
    let (mut tree, _, mut panel) = setup();
    assert!(!panel.handle_input(&mut tree, mouse_down(200.0, 100.0)));
    assert!(!panel.handle_input(&mut tree, InputEvent::KeyDown { key: Key::Escape }));
    assert!(panel.take_events().is_empty());
}

#[test]
fn test_hidden_splitter_not_hit() {
    let (mut tree, _, mut panel) = setup();
    panel.set_panel_visible(&mut tree, SplitPanelPosition::Left, false);
    assert!(!panel.handle_input(&mut tree, mouse_down(52.0, 100.0)));
}

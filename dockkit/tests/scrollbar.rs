use std::sync::Arc;

use dockkit::{
    Control, ControlId, ControlTree, HeadlessScrollBar, KnownTheme, MetricsInfo, RectD, ScrollBar,
    ScrollBarEvent, ScrollBarInfo, ScrollBarOrientation, ScrollBarPeer, ScrollEventArgs,
    ScrollEventType, SizeD, ThemeMetrics, ToolkitConfig,
};

fn scrollbar() -> ScrollBar {
    ScrollBar::new(
        ControlId(0),
        HeadlessScrollBar::new(),
        Arc::new(ToolkitConfig::new()),
    )
}

// ============================================================================
// Peer synchronization
// ============================================================================

#[test]
fn test_new_pushes_initial_range() {
    let sb = scrollbar();
    assert_eq!(sb.peer().updates(), 1);
    assert_eq!(sb.peer().range(), 100);
    assert_eq!(sb.peer().page_size(), 10);
    assert_eq!(sb.peer().thumb_position(), 0);
}

#[test]
fn test_range_change_updates_peer_without_value_event() {
    let mut sb = scrollbar();
    sb.set_maximum(50);
    assert_eq!(sb.peer().range(), 50);
    assert!(sb.take_events().is_empty());
}

#[test]
fn test_value_change_updates_peer_and_raises_event() {
    let mut sb = scrollbar();
    sb.set_value(30);
    assert_eq!(sb.peer().thumb_position(), 30);
    assert_eq!(sb.take_events(), vec![ScrollBarEvent::ValueChanged]);
}

#[test]
fn test_rejected_value_changes_nothing() {
    let mut sb = scrollbar();
    let updates = sb.peer().updates();
    sb.set_value(500);
    assert_eq!(sb.value(), 0);
    assert_eq!(sb.peer().updates(), updates);
    assert!(sb.take_events().is_empty());
}

#[test]
fn test_extreme_minimum_saturates_peer_range() {
    let mut sb = scrollbar();
    sb.set_minimum(i32::MIN);
    assert_eq!(sb.minimum(), i32::MIN);
    assert_eq!(sb.peer().range(), i32::MAX);
    assert_eq!(sb.peer().thumb_position(), i32::MAX);
}

// ============================================================================
// Orientation
// ============================================================================

#[test]
fn test_set_vertical_raises_once() {
    let mut sb = scrollbar();
    assert_eq!(sb.orientation(), ScrollBarOrientation::Horizontal);

    sb.set_vertical(true);
    sb.set_vertical(true);
    assert!(sb.is_vertical());
    assert_eq!(sb.orientation(), ScrollBarOrientation::Vertical);
    assert_eq!(sb.take_events(), vec![ScrollBarEvent::IsVerticalChanged]);
}

#[test]
fn test_scrollbar_info_for_other_orientation_is_empty() {
    let mut sb = scrollbar();
    sb.set_value(7);
    assert_eq!(sb.scrollbar_info_for(false), sb.pos_info());
    assert_eq!(sb.scrollbar_info_for(true), ScrollBarInfo::default());
}

// ============================================================================
// Scrolling from the peer
// ============================================================================

#[test]
fn test_raise_scroll_applies_thumb_position() {
    let mut sb = scrollbar();
    sb.set_maximum(50);
    sb.take_events();

    sb.peer_mut().move_thumb(20);
    assert!(sb.raise_scroll(ScrollEventType::ThumbTrack));
    assert_eq!(sb.value(), 20);
    assert_eq!(
        sb.take_events(),
        vec![
            ScrollBarEvent::Scroll(ScrollEventArgs {
                event_type: ScrollEventType::ThumbTrack,
                old_value: 0,
                new_value: 20,
                orientation: ScrollBarOrientation::Horizontal,
            }),
            ScrollBarEvent::ValueChanged,
        ]
    );
}

#[test]
fn test_scroll_position_divided_by_small_change() {
    let mut sb = scrollbar();
    sb.set_minimum(10);
    sb.set_small_change(3);
    sb.take_events();

    // floor(14 / 3) + 10
    assert!(sb.raise_handler_scroll(ScrollEventType::ThumbPosition, 14));
    assert_eq!(sb.value(), 14);
}

#[test]
fn test_scroll_clamped_to_maximum() {
    let mut sb = scrollbar();
    sb.set_maximum(40);
    assert!(sb.raise_handler_scroll(ScrollEventType::Last, 1000));
    assert_eq!(sb.value(), 40);
}

#[test]
fn test_scroll_to_same_value_is_ignored() {
    let mut sb = scrollbar();
    sb.set_value(5);
    sb.take_events();
    assert!(!sb.raise_handler_scroll(ScrollEventType::ThumbTrack, 5));
    assert!(sb.take_events().is_empty());
}

#[test]
fn test_zero_small_change_does_not_divide_by_zero() {
    let mut sb = scrollbar();
    sb.set_small_change(0);
    assert!(sb.raise_handler_scroll(ScrollEventType::ThumbTrack, 12));
    assert_eq!(sb.value(), 12);
}

#[test]
fn test_pos_info_assignment() {
    let mut sb = scrollbar();
    sb.set_pos_info(ScrollBarInfo::new(4, 20, 5));
    assert_eq!(sb.minimum(), 0);
    assert_eq!(sb.maximum(), 20);
    assert_eq!(sb.value(), 4);
    assert_eq!(sb.large_change(), 5);
    assert_eq!(sb.take_events(), vec![ScrollBarEvent::ValueChanged]);
}

// ============================================================================
// Metrics
// ============================================================================

#[test]
fn test_size_from_default_metrics() {
    let mut tree = ControlTree::new();
    let id = tree.add_root(Control::panel().bounds(RectD::new(0.0, 0.0, 17.0, 200.0)));
    let mut sb = ScrollBar::new(id, HeadlessScrollBar::new(), Arc::new(ToolkitConfig::new()));
    sb.set_vertical(true);

    assert_eq!(sb.size_from_metrics(&tree), SizeD::new(17.0, 34.0));
    assert_eq!(sb.arrow_bitmap_size_from_metrics(&tree), SizeD::new(16.0, 16.0));
    assert_eq!(sb.thumb_size_from_metrics(&tree), SizeD::new(17.0, 17.0));
}

#[test]
fn test_metrics_scaled_and_overridden() {
    let mut tree = ControlTree::new();
    let id = tree.add_root(
        Control::panel()
            .bounds(RectD::new(0.0, 0.0, 300.0, 10.0))
            .scale_factor(2.0),
    );
    let mut sb = ScrollBar::new(id, HeadlessScrollBar::new(), Arc::new(ToolkitConfig::new()));
    sb.set_metrics(Some(MetricsInfo {
        h_scroll_arrow_width: 40,
        h_scroll_arrow_height: 20,
        h_thumb_width: 30,
        ..MetricsInfo::default()
    }));

    assert_eq!(sb.size_from_metrics(&tree), SizeD::new(40.0, 10.0));
    assert_eq!(sb.thumb_size_from_metrics(&tree), SizeD::new(15.0, 10.0));
}

#[test]
fn test_config_default_metrics_used() {
    let config = ToolkitConfig::new().default_metrics(MetricsInfo {
        arrow_bitmap_size: 8,
        ..MetricsInfo::default()
    });
    let tree = ControlTree::new();
    let sb = ScrollBar::new(ControlId(0), HeadlessScrollBar::new(), Arc::new(config));
    assert_eq!(sb.real_metrics().arrow_bitmap_size, 8);
    assert_eq!(sb.arrow_bitmap_size_from_metrics(&tree), SizeD::new(8.0, 8.0));
}

// ============================================================================
// Themes
// ============================================================================

#[test]
fn test_system_theme_follows_config() {
    let config = ToolkitConfig::new().system_theme(KnownTheme::VisualStudioAuto);
    let sb = ScrollBar::new(ControlId(0), HeadlessScrollBar::new(), Arc::new(config));
    assert_eq!(
        sb.theme_metrics(KnownTheme::System, true),
        ThemeMetrics::visual_studio_dark()
    );
    assert_eq!(
        sb.theme_metrics(KnownTheme::System, false),
        ThemeMetrics::visual_studio_light()
    );
}

#[test]
fn test_display() {
    let mut sb = scrollbar();
    sb.set_value(3);
    assert_eq!(
        sb.to_string(),
        "ScrollBar ControlId(0), Minimum: 0, Maximum: 100, Value: 3"
    );
}

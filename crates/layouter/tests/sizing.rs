mod common;

use std::rc::Rc;

use common::{FixedLeaf, ImageBackground, TextLeaf, init_logging, node, size_of};
use layouter::{Content, Payload, Size};

#[test]
fn percentages_floor_against_the_parent_box() {
    init_logging();
    let mut root = node("root", r#"{"width": 401, "height": 300}"#)
        .with_content(node("half", r#"{"width": "50%", "height": "25%"}"#));
    root.resize(800.0, 600.0);
    assert_eq!(size_of(&root, "half"), (200.0, 75.0));
}

#[test]
fn parent_padding_shrinks_every_dimension() {
    init_logging();
    let mut root = node("root", r#"{"width": 400, "height": 300, "padding": 10}"#)
        .with_content(node("half", r#"{"width": "50%", "height": 40}"#))
        .with_content(node("fixed", r#"{"width": 100, "height": 40}"#));
    root.resize(800.0, 600.0);
    assert_eq!(size_of(&root, "half"), (180.0, 20.0));
    assert_eq!(size_of(&root, "fixed"), (80.0, 20.0));
}

#[test]
fn auto_without_content_takes_the_parent_size() {
    init_logging();
    let mut root = node("root", "{}");
    root.resize(640.0, 480.0);
    assert_eq!((root.rect().width, root.rect().height), (640.0, 480.0));

    let mut root = node("root", r#"{"width": 400, "height": 300, "padding": 20}"#).with_content(node("fill", "{}"));
    root.resize(800.0, 600.0);
    assert_eq!(size_of(&root, "fill"), (360.0, 260.0));
}

#[test]
fn zero_area_nodes_are_hidden_with_their_subtree() {
    init_logging();
    let inner = node("inner", r#"{"width": 10, "height": 10}"#);
    let mut root = node("root", r#"{"width": 400, "height": 300}"#)
        .with_content(node("flat", r#"{"height": 0}"#).with_content(inner));
    root.resize(800.0, 600.0);

    let flat = root.get_by_id("flat").and_then(|content| content.as_layout()).unwrap();
    assert!(!flat.is_visible());
    let inner = root.get_by_id_mut("inner").and_then(|content| content.as_layout_mut()).unwrap();
    assert!(!inner.update_layout(), "a hidden parent never lays its content out");
}

#[test]
fn max_width_shrinks_both_axes_uniformly() {
    init_logging();
    let mut root = node("root", r#"{"width": 400, "height": 300}"#)
        .with_content(node("wide", r#"{"width": 300, "height": 100, "maxWidth": 150}"#));
    root.resize(800.0, 600.0);

    let wide = root.get_by_id("wide").and_then(|content| content.as_layout()).unwrap().rect();
    assert_eq!((wide.width, wide.height), (300.0, 100.0));
    assert_eq!((wide.scale_x, wide.scale_y), (0.5, 0.5));
    assert_eq!(size_of(&root, "wide"), (150.0, 50.0));
}

#[test]
fn min_width_raises_the_size() {
    init_logging();
    let mut root = node("root", r#"{"width": 400, "height": 300}"#)
        .with_content(node("narrow", r#"{"width": 10, "height": 10, "minWidth": 50, "minHeight": "10%"}"#));
    root.resize(800.0, 600.0);
    assert_eq!(size_of(&root, "narrow"), (50.0, 30.0));
}

#[test]
fn sole_text_sizes_its_wrapper() {
    init_logging();
    let mut root = node("root", r#"{"width": 400, "height": 300}"#)
        .with_content(node("label", r#"{"padding": 5}"#).with_content(Payload::named("text", TextLeaf::new("0123456789"))));
    root.resize(800.0, 600.0);
    assert_eq!(size_of(&root, "label"), (90.0, 26.0));
}

#[test]
fn overflowing_text_wraps_at_the_parent_width() {
    init_logging();
    let text = TextLeaf::new(&"x".repeat(60));
    let state = Rc::clone(&text.state);
    let mut root = node("root", r#"{"width": 400, "height": 300}"#)
        .with_content(node("label", r#"{"padding": 5}"#).with_content(Payload::named("text", text)));
    root.resize(800.0, 600.0);

    assert_eq!(state.borrow().wrap_width, Some(390.0));
    assert_eq!(size_of(&root, "label"), (400.0, 42.0));
}

#[test]
fn scaled_wrappers_leave_leaf_scale_to_the_host() {
    init_logging();
    let text = TextLeaf::new("0123456789");
    let state = Rc::clone(&text.state);
    let mut root = node("root", r#"{"width": 400, "height": 300}"#)
        .with_content(node("label", r#"{"scale": 2}"#).with_content(Payload::named("text", text)));
    root.resize(800.0, 600.0);

    assert_eq!(size_of(&root, "label"), (160.0, 32.0));
    assert_eq!(size_of(&root, "text"), (80.0, 16.0));
    assert!(state.borrow().scale.is_none());
}

#[test]
fn background_supplies_an_intrinsic_size() {
    init_logging();
    let mut root = node("root", r#"{"width": 400, "height": 300}"#)
        .with_content(node("icon", "{}").with_background(ImageBackground(Size::new(64.0, 32.0))));
    root.resize(800.0, 600.0);
    assert_eq!(size_of(&root, "icon"), (64.0, 32.0));
}

#[test]
fn content_size_wraps_a_sole_child_plus_padding() {
    init_logging();
    let mut root = node("root", r#"{"width": 400, "height": 300}"#)
        .with_content(node("box", r#"{"padding": 10}"#).with_content(Payload::named("a", FixedLeaf::new(30.0, 20.0))));
    root.resize(800.0, 600.0);
    assert_eq!(size_of(&root, "box"), (50.0, 40.0));
    assert_eq!(common::position_of(&root, "a"), (10.0, 10.0));

    let leaf = root.get_by_id("a").and_then(Content::as_leaf).unwrap();
    assert!(!leaf.is_text());
}

#[test]
fn several_children_take_the_parent_size() {
    init_logging();
    let mut root = node("root", "{}")
        .with_content(Payload::named("a", FixedLeaf::new(60.0, 20.0)))
        .with_content(Payload::named("b", FixedLeaf::new(60.0, 20.0)))
        .with_content(Payload::named("c", FixedLeaf::new(60.0, 20.0)));
    root.resize(150.0, 100.0);
    assert_eq!((root.rect().width, root.rect().height), (150.0, 100.0));
    assert_eq!(common::position_of(&root, "c"), (0.0, 20.0));
}

#[test]
fn empty_sole_leaf_falls_back_to_the_parent_size() {
    init_logging();
    let mut root = node("root", r#"{"width": 400, "height": 300}"#)
        .with_content(node("box", "{}").with_content(Payload::named("dot", FixedLeaf::new(0.0, 12.0))));
    root.resize(800.0, 600.0);
    assert_eq!(size_of(&root, "box"), (400.0, 300.0));
}

#[test]
fn content_size_measures_nested_layouts() {
    init_logging();
    let mut root = node("root", r#"{"width": 400, "height": 300}"#).with_content(
        node("outer", r#"{"height": 50}"#).with_content(node("inner", r#"{"width": 120, "height": 30, "marginLeft": 8}"#)),
    );
    root.resize(800.0, 600.0);
    assert_eq!(size_of(&root, "outer"), (128.0, 50.0));
}

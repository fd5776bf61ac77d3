use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use layouter::{LayoutNode, Leaf, Payload};
use style_engine::{GlobalStyles, Style};

#[derive(Debug)]
struct Tile {
    x: f32,
    y: f32,
}

impl Leaf for Tile {
    fn width(&self) -> f32 {
        24.0
    }

    fn height(&self) -> f32 {
        24.0
    }

    fn x(&self) -> f32 {
        self.x
    }

    fn y(&self) -> f32 {
        self.y
    }

    fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }
}

fn style(source: &str) -> Style {
    Style::from_json(source).unwrap()
}

/// A grid of cards, each a wrapping flex row of tiles, under a global table
/// with width breakpoints.
fn build_scene() -> LayoutNode {
    let globals = GlobalStyles::from_json(
        r#"{"card": {"width": "30%", "padding": 6, "max": {"width": {"800": {"width": "45%"}}}}}"#,
    )
    .unwrap();
    let mut root = LayoutNode::new("root", style(r#"{"padding": 12}"#)).with_global_styles(globals);
    for card in 0..20 {
        let mut row = LayoutNode::new(
            "card",
            style(r#"{"display": "flex", "flexWrap": "wrap", "justifyContent": "space-between"}"#),
        );
        let tiles = (0..12).map(|_| Payload::leaf(Tile { x: 0.0, y: 0.0 })).collect::<Vec<_>>();
        row.add_content(tiles);
        root.add_content(Payload::Node(LayoutNode::new(format!("slot-{card}"), Style::default()).with_content(row)));
    }
    root
}

fn bench_resize(criterion: &mut Criterion) {
    let mut scene = build_scene();
    criterion.bench_function("resize_scene_landscape", |bencher| {
        bencher.iter(|| {
            scene.resize(black_box(1280.0), black_box(720.0));
            black_box(scene.rect());
        })
    });
    criterion.bench_function("resize_scene_alternating", |bencher| {
        let mut wide = false;
        bencher.iter(|| {
            wide = !wide;
            let (width, height) = if wide { (1280.0, 720.0) } else { (720.0, 1280.0) };
            scene.resize(width, height);
            black_box(scene.rect());
        })
    });
}

criterion_group!(resize_benches, bench_resize);
criterion_main!(resize_benches);

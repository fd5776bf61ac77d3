#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use layouter::{Background, LayoutNode, Leaf, Size};
use style_engine::{Style, TextStyle};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn style(source: &str) -> Style {
    Style::from_json(source).unwrap()
}

pub fn node(id: &str, source: &str) -> LayoutNode {
    LayoutNode::new(id, style(source))
}

/// A sprite-like leaf with a fixed extent.
#[derive(Debug, Default)]
pub struct FixedLeaf {
    width: f32,
    height: f32,
    x: f32,
    y: f32,
}

impl FixedLeaf {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, ..Self::default() }
    }
}

impl Leaf for FixedLeaf {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
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

/// A fixed leaf that counts how often layout places it.
#[derive(Debug)]
pub struct CountingLeaf {
    size: f32,
    x: f32,
    y: f32,
    pub placements: Rc<Cell<usize>>,
}

impl CountingLeaf {
    pub fn new(size: f32) -> Self {
        Self { size, x: 0.0, y: 0.0, placements: Rc::default() }
    }
}

impl Leaf for CountingLeaf {
    fn width(&self) -> f32 {
        self.size
    }

    fn height(&self) -> f32 {
        self.size
    }

    fn x(&self) -> f32 {
        self.x
    }

    fn y(&self) -> f32 {
        self.y
    }

    fn set_position(&mut self, x: f32, y: f32) {
        self.placements.set(self.placements.get() + 1);
        self.x = x;
        self.y = y;
    }
}

/// What a [`TextLeaf`] was told by the layouter.
#[derive(Debug, Default)]
pub struct TextState {
    pub wrap_width: Option<f32>,
    pub anchor: (f32, f32),
    pub style: Option<TextStyle>,
    pub scale: Option<(f32, f32)>,
}

/// Monospaced text: every glyph is `glyph_width` wide, lines are `line_height` tall.
#[derive(Debug)]
pub struct TextLeaf {
    glyphs: usize,
    glyph_width: f32,
    line_height: f32,
    x: f32,
    y: f32,
    pub state: Rc<RefCell<TextState>>,
}

impl TextLeaf {
    pub fn new(text: &str) -> Self {
        Self {
            glyphs: text.chars().count(),
            glyph_width: 8.0,
            line_height: 16.0,
            x: 0.0,
            y: 0.0,
            state: Rc::default(),
        }
    }

    fn natural_width(&self) -> f32 {
        self.glyphs as f32 * self.glyph_width
    }
}

impl Leaf for TextLeaf {
    fn width(&self) -> f32 {
        let natural = self.natural_width();
        self.state.borrow().wrap_width.map_or(natural, |wrap| natural.min(wrap))
    }

    fn height(&self) -> f32 {
        let lines = match self.state.borrow().wrap_width {
            Some(wrap) if wrap > 0.0 => (self.natural_width() / wrap).ceil().max(1.0),
            _ => 1.0,
        };
        lines * self.line_height
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

    fn is_text(&self) -> bool {
        true
    }

    fn set_wrap_width(&mut self, width: Option<f32>) {
        self.state.borrow_mut().wrap_width = width;
    }

    fn set_anchor(&mut self, anchor_x: f32, anchor_y: f32) {
        self.state.borrow_mut().anchor = (anchor_x, anchor_y);
    }

    fn apply_text_style(&mut self, style: &TextStyle) {
        self.state.borrow_mut().style = Some(style.clone());
    }

    fn set_scale(&mut self, scale_x: f32, scale_y: f32) {
        self.state.borrow_mut().scale = Some((scale_x, scale_y));
    }
}

#[derive(Debug)]
pub struct ImageBackground(pub Size);

impl Background for ImageBackground {
    fn intrinsic_size(&self) -> Option<Size> {
        Some(self.0)
    }
}

/// Position of a direct or nested child, whatever its kind.
pub fn position_of(root: &LayoutNode, id: &str) -> (f32, f32) {
    let content = root.get_by_id(id).unwrap();
    (content.x(), content.y())
}

pub fn size_of(root: &LayoutNode, id: &str) -> (f32, f32) {
    let content = root.get_by_id(id).unwrap();
    (content.width(), content.height())
}

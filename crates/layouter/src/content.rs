//! Children of a layout node and the host-facing leaf seams.
//!
//! A node's content is an ordered, id-keyed table. Entries are either nested
//! [`LayoutNode`]s or host-provided [`Leaf`] objects (text, sprites, ...). The
//! layouter only reads a leaf's extent and writes its position, plus the few
//! text hooks below.

use std::fmt;

use indexmap::IndexMap;
use log::warn;
use style_engine::{Display, Edges, TextStyle};

use crate::layout::Size;
use crate::node::LayoutNode;

/// A host-provided display object placed by the layouter.
///
/// `width`/`height` are the on-screen extent, scale included.
pub trait Leaf: fmt::Debug {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn x(&self) -> f32;
    fn y(&self) -> f32;
    fn set_position(&mut self, x: f32, y: f32);

    /// Whether this leaf is a text display object.
    fn is_text(&self) -> bool {
        false
    }

    /// Wrap text at `width`, or stop wrapping with `None`. Only called on text leaves.
    fn set_wrap_width(&mut self, _width: Option<f32>) {}

    /// Anchor used when placing a sole text leaf inside its wrapper.
    fn set_anchor(&mut self, _anchor_x: f32, _anchor_y: f32) {}

    /// Receives the wrapper's resolved text fields before the leaf is measured.
    fn apply_text_style(&mut self, _style: &TextStyle) {}

    /// Host-side scale. Layout never rescales leaves; their size is read as reported.
    fn set_scale(&mut self, _scale_x: f32, _scale_y: f32) {}
}

/// A node background that can report a natural size.
pub trait Background: fmt::Debug {
    /// `None` when the background has no intrinsic size (plain fills).
    fn intrinsic_size(&self) -> Option<Size>;
}

/// One entry of a node's content table.
#[derive(Debug)]
pub enum Content {
    Layout(Box<LayoutNode>),
    Leaf(Box<dyn Leaf>),
}

impl Content {
    /// On-screen width.
    pub fn width(&self) -> f32 {
        match self {
            Self::Layout(node) => node.rect().scaled_width(),
            Self::Leaf(leaf) => leaf.width(),
        }
    }

    /// On-screen height.
    pub fn height(&self) -> f32 {
        match self {
            Self::Layout(node) => node.rect().scaled_height(),
            Self::Leaf(leaf) => leaf.height(),
        }
    }

    pub fn x(&self) -> f32 {
        match self {
            Self::Layout(node) => node.rect().x,
            Self::Leaf(leaf) => leaf.x(),
        }
    }

    pub fn y(&self) -> f32 {
        match self {
            Self::Layout(node) => node.rect().y,
            Self::Leaf(leaf) => leaf.y(),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Leaf(leaf) if leaf.is_text())
    }

    pub fn as_layout(&self) -> Option<&LayoutNode> {
        match self {
            Self::Layout(node) => Some(node),
            Self::Leaf(_) => None,
        }
    }

    pub fn as_layout_mut(&mut self) -> Option<&mut LayoutNode> {
        match self {
            Self::Layout(node) => Some(node),
            Self::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&dyn Leaf> {
        match self {
            Self::Layout(_) => None,
            Self::Leaf(leaf) => Some(leaf.as_ref()),
        }
    }

    pub(crate) fn set_position(&mut self, x: f32, y: f32) {
        match self {
            Self::Layout(node) => node.set_position(x, y),
            Self::Leaf(leaf) => leaf.set_position(x, y),
        }
    }

    pub(crate) fn margin(&self) -> Edges {
        match self {
            Self::Layout(node) => node.used_values().margin,
            Self::Leaf(_) => Edges::ZERO,
        }
    }

    pub(crate) fn display(&self) -> Display {
        match self {
            Self::Layout(node) => node.used_values().display,
            Self::Leaf(_) => Display::InlineBlock,
        }
    }

    /// Hidden nodes and nodes carrying a `position` keyword are left out of flow and flex.
    pub(crate) fn takes_flow_space(&self) -> bool {
        match self {
            Self::Layout(node) => node.is_visible() && node.used_values().position.is_none(),
            Self::Leaf(_) => true,
        }
    }

    /// Outer size: on-screen extent plus margins.
    pub(crate) fn outer_size(&self) -> Size {
        let margin = self.margin();
        Size::new(self.width() + margin.horizontal(), self.height() + margin.vertical())
    }
}

/// Ordered id-keyed content of one layout node.
#[derive(Debug, Default)]
pub struct ContentTree {
    entries: IndexMap<String, Content>,
}

impl ContentTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Insert under `id`. An existing entry with that id is replaced in place.
    pub(crate) fn insert(&mut self, id: String, content: Content) -> Option<Content> {
        if self.entries.contains_key(&id) {
            warn!("content `{id}` already present, replacing it");
        }
        self.entries.insert(id, content)
    }

    pub(crate) fn remove(&mut self, id: &str) -> Option<Content> {
        self.entries.shift_remove(id)
    }

    /// Direct child lookup.
    pub fn get(&self, id: &str) -> Option<&Content> {
        self.entries.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Content> {
        self.entries.get_mut(id)
    }

    /// Depth-first lookup through nested layout nodes, direct children first.
    pub fn find(&self, id: &str) -> Option<&Content> {
        if let Some(content) = self.entries.get(id) {
            return Some(content);
        }
        self.entries
            .values()
            .filter_map(Content::as_layout)
            .find_map(|node| node.content().find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Content> {
        if self.entries.contains_key(id) {
            return self.entries.get_mut(id);
        }
        self.entries
            .values_mut()
            .filter_map(Content::as_layout_mut)
            .find_map(|node| node.content_mut().find_mut(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Content)> {
        self.entries.iter().map(|(id, content)| (id.as_str(), content))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &Content> {
        self.entries.values()
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut Content> {
        self.entries.values_mut()
    }

    /// True when the only entry is a text leaf.
    pub fn is_text_wrapper(&self) -> bool {
        self.entries.len() == 1 && self.entries.values().all(Content::is_text)
    }

    pub(crate) fn sole_text_mut(&mut self) -> Option<&mut dyn Leaf> {
        if self.entries.len() != 1 {
            return None;
        }
        match self.entries.values_mut().next() {
            Some(Content::Leaf(leaf)) if leaf.is_text() => {
                let leaf: &mut dyn Leaf = leaf.as_mut();
                Some(leaf)
            }
            _ => None,
        }
    }
}

/// What [`LayoutNode::add_content`] accepts.
///
/// Leaves without an id get one generated from the owning node's id.
#[derive(Debug)]
pub enum Payload {
    Node(LayoutNode),
    Leaf(Box<dyn Leaf>),
    Named { id: String, leaf: Box<dyn Leaf> },
    List(Vec<Payload>),
}

impl Payload {
    pub fn named(id: impl Into<String>, leaf: impl Leaf + 'static) -> Self {
        Self::Named { id: id.into(), leaf: Box::new(leaf) }
    }

    pub fn leaf(leaf: impl Leaf + 'static) -> Self {
        Self::Leaf(Box::new(leaf))
    }
}

impl From<LayoutNode> for Payload {
    fn from(node: LayoutNode) -> Self {
        Self::Node(node)
    }
}

impl From<Box<dyn Leaf>> for Payload {
    fn from(leaf: Box<dyn Leaf>) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<Vec<Self>> for Payload {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

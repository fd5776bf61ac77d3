//! Layout nodes: styled containers and the host-facing tree API.

use std::rc::Rc;

use log::{debug, warn};
use style_engine::{Edges, GlobalStyles, Overflow, Style, UsedValues};

use crate::content::{Background, Content, ContentTree, Payload};
use crate::error::LayoutError;
use crate::layout::{LayoutRect, Size};
use crate::resize::ResizePhase;

/// What a child remembers about the layout node that owns it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ParentLink {
    pub padding: Edges,
}

/// A styled container that sizes itself and arranges its content.
///
/// Nodes form a tree through their [`ContentTree`]. Each resize pass runs top
/// down: a node sizes itself against its parent, resizes its layout children
/// against its own box, positions itself, then aligns its children.
#[derive(Debug)]
pub struct LayoutNode {
    id: String,
    /// Declared style, as given by the host and patched by `set_styles`.
    style: Style,
    /// Style after global and conditional resolution in the last pass.
    pub(crate) resolved: Style,
    pub(crate) used: UsedValues,
    pub(crate) rect: LayoutRect,
    pub(crate) visible: bool,
    pub(crate) content: ContentTree,
    pub(crate) parent: Option<ParentLink>,
    pub(crate) background: Option<Box<dyn Background>>,
    /// Table this node contributes to its own subtree.
    pub(crate) global_styles: Option<GlobalStyles>,
    /// Table in effect above this node, captured on the last pass.
    pub(crate) inherited_styles: Rc<GlobalStyles>,
    pub(crate) last_parent_size: Option<Size>,
    pub(crate) phase: ResizePhase,
    pub(crate) alignment_error: Option<LayoutError>,
    /// Children were already resized while sizing this node in the current pass.
    pub(crate) measured_in_sizing: bool,
    generated_ids: usize,
}

impl LayoutNode {
    pub fn new(id: impl Into<String>, style: Style) -> Self {
        Self {
            id: id.into(),
            style,
            resolved: Style::default(),
            used: UsedValues::default(),
            rect: LayoutRect::default(),
            visible: true,
            content: ContentTree::new(),
            parent: None,
            background: None,
            global_styles: None,
            inherited_styles: Rc::default(),
            last_parent_size: None,
            phase: ResizePhase::Idle,
            alignment_error: None,
            measured_in_sizing: false,
            generated_ids: 0,
        }
    }

    #[must_use]
    pub fn with_content(mut self, payload: impl Into<Payload>) -> Self {
        self.insert_payload(payload.into());
        self
    }

    #[must_use]
    pub fn with_background(mut self, background: impl Background + 'static) -> Self {
        self.background = Some(Box::new(background));
        self
    }

    /// Attach an id-keyed style table that applies to this node and its descendants.
    #[must_use]
    pub fn with_global_styles(mut self, styles: GlobalStyles) -> Self {
        self.global_styles = Some(styles);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn resolved_style(&self) -> &Style {
        &self.resolved
    }

    pub fn used_values(&self) -> &UsedValues {
        &self.used
    }

    pub fn rect(&self) -> LayoutRect {
        self.rect
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn phase(&self) -> ResizePhase {
        self.phase
    }

    /// The error raised by the latest child alignment, if it failed.
    pub fn alignment_error(&self) -> Option<&LayoutError> {
        self.alignment_error.as_ref()
    }

    /// Hosts mask this node's box when the resolved overflow is `hidden`.
    pub fn clips_content(&self) -> bool {
        self.used.overflow == Overflow::Hidden
    }

    pub fn z_index(&self) -> i32 {
        self.used.z_index
    }

    pub fn content(&self) -> &ContentTree {
        &self.content
    }

    pub(crate) fn content_mut(&mut self) -> &mut ContentTree {
        &mut self.content
    }

    /// Whether this node currently sits in another layout node's content.
    pub fn has_layout_parent(&self) -> bool {
        self.parent.is_some()
    }

    pub fn set_background(&mut self, background: Option<Box<dyn Background>>) {
        self.background = background;
        self.update_layout();
    }

    /// Overlay `patch` onto the declared style and lay out again.
    ///
    /// Fields absent from the patch keep their previous values.
    pub fn set_styles(&mut self, patch: &Style) {
        self.style.apply(patch);
        self.update_layout();
    }

    /// Add children and lay out again.
    ///
    /// Layout nodes keep their own id; leaves passed without one get
    /// `"{node id}-{n}"`. Reusing an id replaces the previous entry in place.
    pub fn add_content(&mut self, payload: impl Into<Payload>) {
        self.insert_payload(payload.into());
        self.update_layout();
    }

    /// Remove a direct child and lay out again.
    pub fn remove_child_by_id(&mut self, id: &str) -> Option<Content> {
        let mut removed = self.content.remove(id);
        match removed.as_mut() {
            Some(Content::Layout(child)) => child.parent = None,
            Some(Content::Leaf(_)) => {}
            None => {
                debug!("{}: no child `{id}` to remove", self.id);
                return None;
            }
        }
        self.update_layout();
        removed
    }

    /// Find a descendant by id, searching direct children first.
    pub fn get_by_id(&self, id: &str) -> Option<&Content> {
        self.content.find(id)
    }

    /// Mutable lookup. Changes made through it take effect on the next pass.
    pub fn get_by_id_mut(&mut self, id: &str) -> Option<&mut Content> {
        self.content.find_mut(id)
    }

    pub(crate) fn parent_link(&self) -> ParentLink {
        ParentLink { padding: self.used.padding }
    }

    pub(crate) fn set_position(&mut self, x: f32, y: f32) {
        self.rect.x = x;
        self.rect.y = y;
    }

    fn insert_payload(&mut self, payload: Payload) {
        match payload {
            Payload::Node(mut node) => {
                if node.id == self.id {
                    warn!("layout node `{}` added to itself", node.id);
                }
                node.parent = Some(self.parent_link());
                let id = node.id.clone();
                self.content.insert(id, Content::Layout(Box::new(node)));
            }
            Payload::Leaf(leaf) => {
                let id = self.generate_id();
                self.content.insert(id, Content::Leaf(leaf));
            }
            Payload::Named { id, leaf } => {
                self.content.insert(id, Content::Leaf(leaf));
            }
            Payload::List(items) => {
                for item in items {
                    self.insert_payload(item);
                }
            }
        }
    }

    fn generate_id(&mut self) -> String {
        loop {
            let id = format!("{}-{}", self.id, self.generated_ids);
            self.generated_ids += 1;
            if !self.content.contains(&id) {
                return id;
            }
        }
    }
}

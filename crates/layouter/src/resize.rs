//! The two-phase resize pass.
//!
//! A pass first fixes the node's own size and, through it, the sizes of its
//! layout children (top down). It then fixes the node's own position and
//! places its children inside the box.

use std::rc::Rc;

use log::{error, trace};
use style_engine::{GlobalStyles, UsedValuesContext, resolve_style, resolve_used_values};
use tracing::debug_span;

use crate::content::Content;
use crate::layout::{Size, align_children, compute_size, position_self};
use crate::node::LayoutNode;

/// Where a node is within its current resize pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizePhase {
    #[default]
    Idle,
    SelfSizing,
    ContentMeasure,
    SelfPositioning,
    ChildAlignment,
}

impl ResizePhase {
    const fn successor(self) -> Self {
        match self {
            Self::Idle => Self::SelfSizing,
            Self::SelfSizing => Self::ContentMeasure,
            Self::ContentMeasure => Self::SelfPositioning,
            Self::SelfPositioning => Self::ChildAlignment,
            Self::ChildAlignment => Self::Idle,
        }
    }
}

impl LayoutNode {
    /// Lay this node and its subtree out inside a parent box of the given size.
    ///
    /// Also the root entry point: hosts call it with the viewport size.
    pub fn resize(&mut self, parent_width: f32, parent_height: f32) {
        let inherited = Rc::clone(&self.inherited_styles);
        self.resize_within(parent_width, parent_height, inherited);
    }

    /// Run the pass again with the parent size of the previous one.
    ///
    /// Returns `false` (and does nothing) if the node was never resized.
    pub fn update_layout(&mut self) -> bool {
        let Some(size) = self.last_parent_size else {
            trace!("{}: layout update before first resize, skipped", self.id());
            return false;
        };
        self.resize(size.width, size.height);
        true
    }

    pub(crate) fn resize_within(&mut self, parent_width: f32, parent_height: f32, inherited: Rc<GlobalStyles>) {
        let span = debug_span!("resize", id = self.id(), parent_width, parent_height);
        let _entered = span.enter();

        self.last_parent_size = Some(Size::new(parent_width, parent_height));
        self.inherited_styles = inherited;
        let scoped = self.scoped_styles();

        self.advance(ResizePhase::SelfSizing);
        self.measured_in_sizing = false;
        self.resolved = resolve_style(self.style(), scoped.get(self.id()), parent_width, parent_height);
        self.used = resolve_used_values(&self.resolved, &UsedValuesContext { parent_width, parent_height });
        self.forward_text_style();
        let Some(size) = compute_size(self, parent_width, parent_height, &scoped) else {
            trace!("{}: hidden, pass ends after sizing", self.id());
            self.advance(ResizePhase::Idle);
            return;
        };
        self.visible = true;
        self.rect.width = size.width;
        self.rect.height = size.height;

        self.advance(ResizePhase::ContentMeasure);
        if self.measured_in_sizing {
            self.reposition_content();
        } else {
            self.measure_content(&scoped);
        }

        self.advance(ResizePhase::SelfPositioning);
        position_self(self, parent_width, parent_height);

        self.advance(ResizePhase::ChildAlignment);
        self.alignment_error = align_children(self).err();
        if let Some(err) = &self.alignment_error {
            error!("{}: child alignment failed: {err}", self.id());
        }

        self.advance(ResizePhase::Idle);
        trace!("{}: laid out at {:?}", self.id(), self.rect);
    }

    /// Re-anchor positioned layout children to the final box without resizing them.
    fn reposition_content(&mut self) {
        let Size { width, height } = self.rect.size();
        for content in self.content.values_mut() {
            if let Content::Layout(child) = content
                && child.is_visible()
            {
                position_self(child, width, height);
            }
        }
    }

    /// Resize every layout child against this node's current box.
    pub(crate) fn measure_content(&mut self, scoped: &Rc<GlobalStyles>) {
        let link = self.parent_link();
        let Size { width, height } = self.rect.size();
        for content in self.content.values_mut() {
            if let Content::Layout(child) = content {
                child.parent = Some(link);
                child.resize_within(width, height, Rc::clone(scoped));
            }
        }
    }

    fn scoped_styles(&self) -> Rc<GlobalStyles> {
        match &self.global_styles {
            Some(own) => Rc::new(self.inherited_styles.merged_with(own)),
            None => Rc::clone(&self.inherited_styles),
        }
    }

    fn forward_text_style(&mut self) {
        let text = &self.used.text;
        for content in self.content.values_mut() {
            if let Content::Leaf(leaf) = content
                && leaf.is_text()
            {
                leaf.apply_text_style(text);
            }
        }
    }

    fn advance(&mut self, next: ResizePhase) {
        debug_assert!(
            next == self.phase.successor() || next == ResizePhase::Idle,
            "{}: illegal phase change {:?} -> {next:?}",
            self.id(),
            self.phase
        );
        self.phase = next;
    }
}

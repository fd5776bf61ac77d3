//! Per-node layout steps run by the resize pass.

mod flex;
mod flow;
mod geometry;
mod position;
mod size;

use log::debug;
use style_engine::Display;

pub use geometry::{LayoutRect, Point, Size};
pub(crate) use position::position_self;
pub(crate) use size::compute_size;

use crate::error::LayoutError;
use crate::node::LayoutNode;

/// Place the node's children inside its box according to its display mode.
pub(crate) fn align_children(node: &mut LayoutNode) -> Result<(), LayoutError> {
    match node.used.display {
        Display::Flex => flex::align_flex(node),
        Display::Grid => {
            debug!("{}: grid display leaves children in place", node.id());
            Ok(())
        }
        Display::Block | Display::Inline | Display::InlineBlock => {
            flow::align_flow(node);
            Ok(())
        }
    }
}

//! Scene-graph layout driven by declarative styles.
//!
//! A [`LayoutNode`] owns an ordered table of content: nested layout nodes and
//! host-provided [`Leaf`] objects. Calling [`LayoutNode::resize`] with the
//! viewport size resolves every node's style (globals, orientation and size
//! thresholds), sizes nodes top down, and positions them either by anchor
//! keyword or by the parent's normal or flex flow.

mod content;
mod error;
mod layout;
mod node;
mod printing;
mod resize;

pub use content::{Background, Content, ContentTree, Leaf, Payload};
pub use error::LayoutError;
pub use layout::{LayoutRect, Point, Size};
pub use node::LayoutNode;
pub use resize::ResizePhase;

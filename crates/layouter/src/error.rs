use thiserror::Error;

/// Failures surfaced by child alignment.
///
/// Alignment errors never abort a resize: the pass logs them and keeps the
/// latest one on the node, see [`crate::LayoutNode::alignment_error`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("invalid flex direction `{0}`")]
    InvalidFlexDirection(String),
}

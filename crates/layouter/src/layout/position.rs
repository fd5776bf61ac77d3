//! Anchored self positioning for nodes with a `position` keyword.

use log::trace;
use style_engine::Position;

use crate::node::LayoutNode;

/// Placement of a node along one axis of its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    Start,
    Center,
    End,
}

impl Placement {
    /// Fraction of the axis where the reference point sits; also the default anchor.
    const fn fraction(self) -> f32 {
        match self {
            Self::Start => 0.0,
            Self::Center => 0.5,
            Self::End => 1.0,
        }
    }
}

/// Horizontal and vertical placement for a keyword.
pub(crate) const fn placements(position: Position) -> (Placement, Placement) {
    use Placement::{Center, End, Start};
    match position {
        Position::TopLeft | Position::Top | Position::Left => (Start, Start),
        Position::TopRight | Position::Right => (End, Start),
        Position::BottomLeft | Position::Bottom => (Start, End),
        Position::BottomRight => (End, End),
        Position::Center => (Center, Center),
        Position::CenterTop => (Center, Start),
        Position::CenterBottom => (Center, End),
        Position::CenterLeft => (Start, Center),
        Position::CenterRight => (End, Center),
    }
}

/// Offset of a box of `extent` inside `available` along one axis.
///
/// The point at `anchor` of the box lands on the placement's reference point.
pub(crate) fn place_on_axis(
    placement: Placement,
    available: f32,
    extent: f32,
    anchor: Option<f32>,
    margin_start: f32,
    margin_end: f32,
) -> f32 {
    let anchor = anchor.unwrap_or_else(|| placement.fraction());
    let margin = match placement {
        Placement::Start => margin_start,
        Placement::Center => margin_start - margin_end,
        Placement::End => -margin_end,
    };
    available * placement.fraction() - extent * anchor + margin
}

/// Place the node inside its parent when it carries a `position` keyword.
///
/// Unpositioned nodes are left for the parent's flow.
pub(crate) fn position_self(node: &mut LayoutNode, parent_width: f32, parent_height: f32) {
    let used = &node.used;
    let Some(position) = used.position else {
        return;
    };
    let (horizontal, vertical) = placements(position);
    let x = place_on_axis(
        horizontal,
        parent_width,
        node.rect.scaled_width(),
        used.anchor_x,
        used.margin.left,
        used.margin.right,
    );
    let y = place_on_axis(
        vertical,
        parent_height,
        node.rect.scaled_height(),
        used.anchor_y,
        used.margin.top,
        used.margin.bottom,
    );
    trace!("{}: anchored {position} at ({x}, {y})", node.id());
    node.set_position(x, y);
}

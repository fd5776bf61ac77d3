//! Self sizing: declared dimensions, `auto` strategies, limits and max shrink.

use std::rc::Rc;

use log::debug;
use style_engine::{Edges, GlobalStyles};

use super::{Size, align_children};
use crate::content::Content;
use crate::node::LayoutNode;

/// Where an `auto` dimension comes from, in priority order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum AutoSize {
    /// The sole child is a text leaf.
    InnerText,
    /// The background reports a nonzero natural size.
    Background(Size),
    /// Extent of the content after a provisional layout.
    ContentSize,
    ParentSize,
}

impl AutoSize {
    pub(crate) fn select(node: &LayoutNode) -> Self {
        if node.content.is_text_wrapper() {
            return Self::InnerText;
        }
        let intrinsic = node
            .background
            .as_ref()
            .and_then(|background| background.intrinsic_size())
            .filter(|size| !size.is_empty());
        if let Some(size) = intrinsic {
            return Self::Background(size);
        }
        if node.content.len() == 1 && node.content.values().all(has_intrinsic_size) {
            Self::ContentSize
        } else {
            Self::ParentSize
        }
    }
}

/// A lone non-text child that can give its wrapper a size.
///
/// Layout children only know their size once measured, so they qualify here and
/// fall back to the parent size when they measure empty.
fn has_intrinsic_size(content: &Content) -> bool {
    match content {
        Content::Layout(_) => true,
        Content::Leaf(leaf) => !leaf.is_text() && !Size::new(leaf.width(), leaf.height()).is_empty(),
    }
}

/// Compute the node's unscaled size and its effective scale.
///
/// Returns `None`, leaving the node hidden, when the size collapses to zero
/// or the style turns the node off.
pub(crate) fn compute_size(
    node: &mut LayoutNode,
    parent_width: f32,
    parent_height: f32,
    scoped: &Rc<GlobalStyles>,
) -> Option<Size> {
    let used = &node.used;
    if !used.visible || used.width.is_zero() || used.height.is_zero() {
        debug!("{}: hidden by style", node.id());
        node.visible = false;
        return None;
    }
    let (width_spec, height_spec) = (used.width, used.height);
    let (min_width, min_height) = (used.min_width, used.min_height);
    let (max_width, max_height) = (used.max_width, used.max_height);
    let (scale_x, scale_y) = (used.scale_x, used.scale_y);
    let (padding, margin) = (used.padding, used.margin);

    // Computed dimensions exclude a layout parent's padding.
    let correction = node
        .parent
        .map_or(Size::ZERO, |link| Size::new(link.padding.horizontal(), link.padding.vertical()));
    let available = Size::new(parent_width - correction.width, parent_height - correction.height);
    let declared_width = width_spec.resolve(parent_width);
    let declared_height = height_spec.resolve(parent_height);

    let strategy = AutoSize::select(node);
    let text = (strategy == AutoSize::InnerText).then(|| {
        let limit = declared_width.map_or(available.width, |width| width - correction.width);
        fit_text(node, limit, padding)
    });

    let (width, height) = match (declared_width, declared_height) {
        (Some(width), Some(height)) => (width, height),
        (auto_width, auto_height) => {
            debug!("{}: auto size from {strategy:?}", node.id());
            let parent = Size::new(parent_width, parent_height);
            let fallback = match strategy {
                AutoSize::InnerText => text.unwrap_or(parent),
                AutoSize::Background(size) => size,
                AutoSize::ContentSize => {
                    let offered = Size::new(
                        auto_width.map_or(available.width, |width| width - correction.width),
                        auto_height.map_or(available.height, |height| height - correction.height),
                    );
                    content_extent(node, offered, scoped, parent)
                }
                AutoSize::ParentSize => parent,
            };
            (auto_width.unwrap_or(fallback.width), auto_height.unwrap_or(fallback.height))
        }
    };
    let (width, height) = (width - correction.width, height - correction.height);

    let width = min_width.map_or(width, |min| width.max(min)).max(0.0);
    let height = min_height.map_or(height, |min| height.max(min)).max(0.0);
    if width == 0.0 || height == 0.0 {
        debug!("{}: collapsed to {width}x{height}, hidden", node.id());
        node.visible = false;
        return None;
    }

    let size = Size::new(width, height);
    let ratio = shrink_ratio(size, scale_x, scale_y, margin, max_width, max_height);
    node.rect.scale_x = scale_x * ratio;
    node.rect.scale_y = scale_y * ratio;
    Some(size)
}

/// Measure the sole text leaf, wrapping it when it is wider than `limit` minus padding.
fn fit_text(node: &mut LayoutNode, limit: f32, padding: Edges) -> Size {
    let Some(text) = node.content.sole_text_mut() else {
        return Size::ZERO;
    };
    let wrap_at = limit - padding.horizontal();
    text.set_wrap_width(None);
    if text.width() > wrap_at {
        text.set_wrap_width(Some(wrap_at.max(0.0)));
    }
    Size::new(text.width() + padding.horizontal(), text.height() + padding.vertical())
}

/// Lay the content out inside `offered` and measure its extent.
///
/// The children stay measured for the rest of the pass. Axes with no
/// measurable extent fall back to `parent`.
fn content_extent(node: &mut LayoutNode, offered: Size, scoped: &Rc<GlobalStyles>, parent: Size) -> Size {
    node.rect.width = offered.width;
    node.rect.height = offered.height;
    node.measure_content(scoped);
    node.measured_in_sizing = true;
    if let Err(err) = align_children(node) {
        debug!("{}: provisional alignment failed: {err}", node.id());
    }

    let padding = node.used.padding;
    let mut extent = Size::ZERO;
    for content in node.content.values().filter(|content| content.takes_flow_space()) {
        let margin = content.margin();
        extent.width = extent.width.max(content.x() + content.width() + margin.right);
        extent.height = extent.height.max(content.y() + content.height() + margin.bottom);
    }
    Size::new(
        if extent.width > 0.0 { extent.width + padding.right } else { parent.width },
        if extent.height > 0.0 { extent.height + padding.bottom } else { parent.height },
    )
}

/// Uniform factor that fits the on-screen outer size under the limits; never above 1.
pub(crate) fn shrink_ratio(
    size: Size,
    scale_x: f32,
    scale_y: f32,
    margin: Edges,
    max_width: Option<f32>,
    max_height: Option<f32>,
) -> f32 {
    let fit = |limit: Option<f32>, outer: f32| match limit {
        Some(limit) if outer > limit && outer > 0.0 => (limit / outer).max(0.0),
        _ => 1.0,
    };
    let horizontal = fit(max_width, size.width * scale_x + margin.horizontal());
    let vertical = fit(max_height, size.height * scale_y + margin.vertical());
    horizontal.min(vertical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrink_applies_the_tighter_axis_uniformly() {
        let size = Size::new(300.0, 100.0);
        assert_eq!(shrink_ratio(size, 1.0, 1.0, Edges::ZERO, Some(150.0), None), 0.5);
        assert_eq!(shrink_ratio(size, 1.0, 1.0, Edges::ZERO, Some(150.0), Some(25.0)), 0.25);
    }

    #[test]
    fn shrink_never_upscales() {
        let size = Size::new(100.0, 100.0);
        assert_eq!(shrink_ratio(size, 1.0, 1.0, Edges::ZERO, Some(500.0), Some(500.0)), 1.0);
    }

    #[test]
    fn shrink_counts_margins_and_declared_scale() {
        let size = Size::new(50.0, 10.0);
        let margin = Edges::uniform(25.0);
        // 50 * 2 + 50 = 150 on screen against a limit of 75.
        assert_eq!(shrink_ratio(size, 2.0, 1.0, margin, Some(75.0), None), 0.5);
    }
}

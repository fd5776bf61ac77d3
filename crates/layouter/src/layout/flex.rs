//! Flex flow: columns, single-line rows with justification, and wrapped rows.

use log::debug;
use style_engine::{Edges, FlexDirection, FlexWrap, JustifyContent, Keyword};

use super::{Point, Size};
use crate::content::Content;
use crate::error::LayoutError;
use crate::node::LayoutNode;

/// Line start/end indices for items included in the line: `[start, end)`.
pub(crate) type LineRange = (usize, usize);

/// Outer box of one flex item as seen by the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FlexItem {
    pub outer: Size,
    pub margin: Edges,
}

impl FlexItem {
    fn of(content: &Content) -> Self {
        Self { outer: content.outer_size(), margin: content.margin() }
    }
}

/// The container-side inputs to item placement.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FlexContainer {
    pub size: Size,
    pub padding: Edges,
    pub wrap: FlexWrap,
    pub justify: JustifyContent,
}

impl FlexContainer {
    fn inner_width(&self) -> f32 {
        self.size.width - self.padding.horizontal()
    }
}

/// Arrange in-flow children along the node's flex direction.
pub(crate) fn align_flex(node: &mut LayoutNode) -> Result<(), LayoutError> {
    let direction = match &node.used.flex_direction {
        Keyword::Known(direction) => *direction,
        Keyword::Unrecognized(token) => return Err(LayoutError::InvalidFlexDirection(token.clone())),
    };
    let container = FlexContainer {
        size: node.rect.size(),
        padding: node.used.padding,
        wrap: node.used.flex_wrap,
        justify: node.used.justify_content,
    };
    if container.justify == JustifyContent::Stretch {
        debug!("{}: justify-content stretch lays out as flex-start", node.id());
    }

    let mut items: Vec<&mut Content> = node
        .content
        .values_mut()
        .filter(|content| content.takes_flow_space())
        .collect();
    if matches!(direction, FlexDirection::RowReverse | FlexDirection::ColumnReverse) {
        items.reverse();
    }
    let metrics: Vec<FlexItem> = items.iter().map(|content| FlexItem::of(content)).collect();

    let positions = match (direction, container.wrap) {
        (FlexDirection::Column | FlexDirection::ColumnReverse, _) => stack_column(&metrics, &container),
        (FlexDirection::Row | FlexDirection::RowReverse, FlexWrap::NoWrap) => {
            place_line(&metrics, &container, container.padding.top).0
        }
        (FlexDirection::Row | FlexDirection::RowReverse, FlexWrap::Wrap) => place_wrapped(&metrics, &container, false),
        (FlexDirection::Row | FlexDirection::RowReverse, FlexWrap::WrapReverse) => {
            place_wrapped(&metrics, &container, true)
        }
    };
    for (content, point) in items.into_iter().zip(positions) {
        content.set_position(point.x, point.y);
    }
    Ok(())
}

/// Compute justify-content start offset and between-spacing.
///
/// Negative slack (overflowing content) distributes nothing.
pub(crate) fn justify_params(
    justify: JustifyContent,
    container_main: f32,
    content_total: f32,
    item_count: usize,
) -> (f32, f32) {
    let remaining = (container_main - content_total).max(0.0);
    match (justify, item_count) {
        (JustifyContent::FlexEnd, _) => (remaining, 0.0),
        (JustifyContent::Center, _) => (remaining * 0.5, 0.0),
        (JustifyContent::SpaceBetween, count) if count > 1 => (0.0, remaining / (count as f32 - 1.0)),
        (JustifyContent::SpaceAround, count) if count > 0 => {
            (remaining / (count as f32 * 2.0), remaining / count as f32)
        }
        (JustifyContent::SpaceEvenly, count) if count > 0 => {
            let slots = count as f32 + 1.0;
            (remaining / slots, remaining / slots)
        }
        // FlexStart, Stretch and degenerate counts
        _ => (0.0, 0.0),
    }
}

/// Break items into lines by accumulating outer widths until exceeding
/// `container_main_size`. A line always takes at least one item.
pub(crate) fn break_into_lines(container_main_size: f32, items: &[FlexItem]) -> Vec<LineRange> {
    let mut line_ranges: Vec<LineRange> = Vec::new();
    let mut start = 0_usize;
    let mut cursor = 0.0_f32;
    for (idx, item) in items.iter().enumerate() {
        let next = cursor + item.outer.width;
        if next <= container_main_size || idx == start {
            cursor = next;
        } else {
            line_ranges.push((start, idx));
            start = idx;
            cursor = item.outer.width;
        }
    }
    if start < items.len() {
        line_ranges.push((start, items.len()));
    }
    line_ranges
}

fn stack_column(items: &[FlexItem], container: &FlexContainer) -> Vec<Point> {
    let mut cursor = container.padding.top;
    items
        .iter()
        .map(|item| {
            let point = Point::new(container.padding.left + item.margin.left, cursor + item.margin.top);
            cursor += item.outer.height;
            point
        })
        .collect()
}

/// Place one justified row with its top at `top`; returns positions and line height.
fn place_line(items: &[FlexItem], container: &FlexContainer, top: f32) -> (Vec<Point>, f32) {
    let total: f32 = items.iter().map(|item| item.outer.width).sum();
    let (start, between) = justify_params(container.justify, container.inner_width(), total, items.len());
    let mut cursor = container.padding.left + start;
    let points = items
        .iter()
        .map(|item| {
            let point = Point::new(cursor + item.margin.left, top + item.margin.top);
            cursor += item.outer.width + between;
            point
        })
        .collect();
    let height = items.iter().map(|item| item.outer.height).fold(0.0, f32::max);
    (points, height)
}

fn place_wrapped(items: &[FlexItem], container: &FlexContainer, reverse: bool) -> Vec<Point> {
    let mut points = Vec::with_capacity(items.len());
    let mut stacked = 0.0_f32;
    for (start, end) in break_into_lines(container.inner_width(), items) {
        let line = &items[start..end];
        let line_height = line.iter().map(|item| item.outer.height).fold(0.0, f32::max);
        let top = if reverse {
            container.size.height - container.padding.bottom - stacked - line_height
        } else {
            container.padding.top + stacked
        };
        let (line_points, _) = place_line(line, container, top);
        points.extend(line_points);
        stacked += line_height;
    }
    points
}

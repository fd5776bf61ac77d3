//! Normal flow: inline packing with wrapping, block lines, and sole-text alignment.

use style_engine::{Display, TextAlign, VerticalAlign};

use super::Point;
use crate::node::LayoutNode;

/// Arrange children left to right, top to bottom inside the padding box.
pub(crate) fn align_flow(node: &mut LayoutNode) {
    if node.content.is_text_wrapper() {
        place_sole_text(node);
        return;
    }

    let padding = node.used.padding;
    let line_end = node.rect.width - padding.right;
    let mut cursor = Point::new(padding.left, padding.top);
    let mut line_height = 0.0_f32;
    let mut line_has_items = false;

    for content in node.content.values_mut() {
        if !content.takes_flow_space() || content.width() <= 0.0 || content.height() <= 0.0 {
            continue;
        }
        let outer = content.outer_size();
        let margin = content.margin();
        let fits = cursor.x + outer.width <= line_end;
        let display = match content.display() {
            Display::Block if fits => Display::InlineBlock,
            other => other,
        };

        if matches!(display, Display::Inline | Display::InlineBlock) {
            if !fits && line_has_items {
                cursor.y += line_height;
                cursor.x = padding.left;
                line_height = 0.0;
            }
            content.set_position(cursor.x + margin.left, cursor.y + margin.top);
            cursor.x += outer.width;
            line_height = line_height.max(outer.height);
            line_has_items = true;
        } else {
            cursor.y += line_height;
            cursor.x = padding.left;
            content.set_position(cursor.x + margin.left, cursor.y + margin.top);
            cursor.y += outer.height;
            line_height = 0.0;
            line_has_items = false;
        }
    }
}

/// A lone text leaf is aligned inside the padding box instead of flowing.
fn place_sole_text(node: &mut LayoutNode) {
    let padding = node.used.padding;
    let inner_width = node.rect.width - padding.horizontal();
    let inner_height = node.rect.height - padding.vertical();
    let anchor_x = match node.used.text_align {
        TextAlign::Left => 0.0,
        TextAlign::Center => 0.5,
        TextAlign::Right => 1.0,
    };
    let anchor_y = match node.used.vertical_align {
        VerticalAlign::Top => 0.0,
        VerticalAlign::Middle => 0.5,
        VerticalAlign::Bottom => 1.0,
    };
    if let Some(text) = node.content.sole_text_mut() {
        text.set_anchor(anchor_x, anchor_y);
        text.set_position(padding.left + inner_width * anchor_x, padding.top + inner_height * anchor_y);
    }
}

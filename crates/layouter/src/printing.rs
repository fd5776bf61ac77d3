//! Indented text dump of a layout subtree.

use std::fmt;

use crate::content::Content;
use crate::node::LayoutNode;

fn write_indent(formatter: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        formatter.write_str("  ")?;
    }
    Ok(())
}

fn fmt_node(node: &LayoutNode, formatter: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    let rect = node.rect();
    write_indent(formatter, depth)?;
    write!(
        formatter,
        "<{} {}> at ({}, {}) size {}x{}",
        node.id(),
        node.used_values().display,
        rect.x,
        rect.y,
        rect.width,
        rect.height
    )?;
    if rect.scale_x != 1.0 || rect.scale_y != 1.0 {
        write!(formatter, " scale {}x{}", rect.scale_x, rect.scale_y)?;
    }
    if !node.is_visible() {
        formatter.write_str(" hidden")?;
    }
    if let Some(err) = node.alignment_error() {
        write!(formatter, " error: {err}")?;
    }
    writeln!(formatter)?;

    for (id, content) in node.content().iter() {
        match content {
            Content::Layout(child) => fmt_node(child, formatter, depth + 1)?,
            Content::Leaf(leaf) => {
                write_indent(formatter, depth + 1)?;
                let kind = if leaf.is_text() { "text" } else { "leaf" };
                writeln!(
                    formatter,
                    "{kind} {id:?} at ({}, {}) size {}x{}",
                    leaf.x(),
                    leaf.y(),
                    leaf.width(),
                    leaf.height()
                )?;
            }
        }
    }
    Ok(())
}

/// Indented dump of the subtree, one line per node or leaf.
impl fmt::Display for LayoutNode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_node(self, formatter, 0)
    }
}

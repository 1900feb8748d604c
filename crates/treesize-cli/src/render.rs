//! Tree renderer — connector-drawn text with optional colour.
//!
//! Pure presentation: children are printed in the order the scanner ranked
//! them, with no filtering or reordering here.

use console::Style;
use std::io::{self, Write};
use treesize_core::model::size::{format_size, GIB};
use treesize_core::Node;

const BRANCH: &str = "├──";
const LAST_BRANCH: &str = "└──";
const PIPE_INDENT: &str = "│   ";
const BLANK_INDENT: &str = "    ";

/// Formats a finished tree, one entry per line.
#[derive(Debug, Clone, Copy)]
pub struct TreeRenderer {
    colored: bool,
}

impl TreeRenderer {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    /// Write the tree rooted at `root`. The root is drawn as a last sibling.
    pub fn write_tree<W: Write>(&self, out: &mut W, root: &Node) -> io::Result<()> {
        self.write_node(out, root, "", true)
    }

    /// Render the tree into a string.
    pub fn render(&self, root: &Node) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_tree(&mut buf, root);
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn write_node<W: Write>(
        &self,
        out: &mut W,
        node: &Node,
        prefix: &str,
        is_last: bool,
    ) -> io::Result<()> {
        let (connector, indent) = if is_last {
            (LAST_BRANCH, BLANK_INDENT)
        } else {
            (BRANCH, PIPE_INDENT)
        };

        writeln!(
            out,
            "{prefix}{connector} {} ({})",
            self.paint(self.name_style(node), &node.name),
            self.paint(self.size_style(node.size), format_size(node.size)),
        )?;

        let child_prefix = format!("{prefix}{indent}");
        let last = node.children.len().saturating_sub(1);
        for (i, child) in node.children.iter().enumerate() {
            self.write_node(out, child, &child_prefix, i == last)?;
        }
        Ok(())
    }

    fn name_style(&self, node: &Node) -> Style {
        if node.is_dir {
            Style::new().blue().bold()
        } else {
            Style::new().white()
        }
    }

    /// Sizes of a gibibyte or more stand out in red.
    fn size_style(&self, size: u64) -> Style {
        if size >= GIB {
            Style::new().red()
        } else {
            Style::new().yellow()
        }
    }

    fn paint<D: std::fmt::Display>(&self, style: Style, value: D) -> String {
        if self.colored {
            style.force_styling(true).apply_to(value).to_string()
        } else {
            value.to_string()
        }
    }
}

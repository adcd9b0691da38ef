//! Result presentation
//!
//! Renders the winning path as numbered human-readable steps and writes
//! the same report to an optional file. Step 0 is the start article, the
//! last step is the target; a title is the final path segment of the
//! article URL with underscores replaced by spaces.

use crate::crawler::Node;
use crate::url::article_title;
use std::io;
use std::path::Path;

/// One rendered step of the final path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep {
    /// Position on the path; 0 is the start article
    pub index: usize,

    /// Human-readable article title
    pub title: String,
}

/// Converts the node chain into (step index, title) pairs
pub fn path_steps(path: &[Node]) -> Vec<PathStep> {
    path.iter()
        .enumerate()
        .map(|(index, node)| PathStep {
            index,
            title: display_title(&node.url),
        })
        .collect()
}

/// Renders the full report, one line per step
pub fn render_path(steps: &[PathStep]) -> String {
    let hops = steps.len().saturating_sub(1);
    let mut out = format!("Path found! {} step(s):\n", hops);
    for step in steps {
        out.push_str(&format!("{}. {}\n", step.index, step.title));
    }
    out
}

/// Writes the rendered report to a file
pub fn write_path_file(path: &Path, report: &str) -> io::Result<()> {
    std::fs::write(path, report)
}

/// Final path segment with word separators replaced by spaces
fn display_title(url: &str) -> String {
    article_title(url).replace('_', " ")
}

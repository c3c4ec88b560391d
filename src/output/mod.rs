//! Tree formatting and document output
//!
//! - `tree` - renders a `TreeNode` into connector-prefixed lines
//! - `document` - wraps the lines in a fenced section and writes the file

mod document;
mod tree;

pub use document::{WriteOutcome, render_document, write_document};
pub use tree::TreeFormatter;

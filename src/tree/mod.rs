//! Directory tree walking
//!
//! `TreeWalker` reads a project directory into an in-memory `TreeNode`,
//! leaving out every entry whose name is in the `ExclusionSet`. Rendering the
//! result is the job of `crate::output`.

mod config;
mod filter;
mod node;
mod walker;

pub use config::WalkerConfig;
pub use filter::{DEFAULT_EXCLUDED, ExclusionSet};
pub use node::TreeNode;
pub use walker::TreeWalker;

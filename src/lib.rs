pub mod cli;
pub mod core;
pub mod error;
pub mod fs;
pub mod models;
pub mod server;

use std::path::Path;

pub use crate::core::{RenderOptions, Rendered, render, render_with_options};
pub use crate::error::RenderError;

use crate::fs::RealFileSystem;

/// Render the directory at `path` on the real filesystem, starting at depth 0.
pub async fn render_path(path: &Path, options: &RenderOptions) -> error::Result<Rendered> {
    render_with_options(&RealFileSystem, path, 0, options).await
}

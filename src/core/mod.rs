pub mod glyph;
mod render;
mod walk;

pub use render::write_tree;
pub use walk::{RenderOptions, walk_dir};

use std::io;
use std::path::Path;

use crate::error::{RenderError, Result};
use crate::fs::FileSystem;

/// Output of one render: the full text plus the totals of its summary line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rendered {
    pub text: String,
    pub nfiles: u64,
    pub ndirectories: u64,
}

/// Render the subtree at `path` as if it were nested `depth` levels deep.
/// Top-level callers pass 0.
pub async fn render<F: FileSystem>(fs: &F, path: &Path, depth: usize) -> Result<Rendered> {
    render_with_options(fs, path, depth, &RenderOptions::default()).await
}

pub async fn render_with_options<F: FileSystem>(
    fs: &F,
    path: &Path,
    depth: usize,
    options: &RenderOptions,
) -> Result<Rendered> {
    let tree = walk_dir(fs, path, depth, options).await?;

    let mut out = Vec::new();
    write_tree(&mut out, &tree, depth).map_err(|err| RenderError::from_io(path, err))?;
    let text = String::from_utf8(out).map_err(|err| {
        RenderError::from_io(path, io::Error::new(io::ErrorKind::InvalidData, err))
    })?;

    Ok(Rendered {
        text,
        nfiles: tree.nfiles,
        ndirectories: tree.ndirectories,
    })
}

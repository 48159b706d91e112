use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use tracing::debug;

use crate::error::{RenderError, Result};
use crate::fs::FileSystem;
use crate::models::{DirTree, FsEntry, TreeNode};

/// Configuration options for a render.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Deepest recursion level allowed (None means unlimited). Reaching past
    /// it fails the whole render instead of truncating the tree.
    pub max_depth: Option<usize>,
}

/// Walk the directory at `dir`, which sits at recursion level `depth`.
///
/// Children are sorted case-insensitively; entries whose names differ only in
/// case keep their listing order. The first listing failure anywhere in the
/// subtree is returned and nothing else.
pub async fn walk_dir<F: FileSystem>(
    fs: &F,
    dir: &Path,
    depth: usize,
    options: &RenderOptions,
) -> Result<DirTree> {
    walk_dir_internal(fs, dir, depth, options).await
}

type WalkFuture<'a> = Pin<Box<dyn Future<Output = Result<DirTree>> + Send + 'a>>;

fn walk_dir_internal<'a, F: FileSystem>(
    fs: &'a F,
    dir: &'a Path,
    depth: usize,
    options: &'a RenderOptions,
) -> WalkFuture<'a> {
    Box::pin(async move {
        let mut entries = fs.read_dir(dir).await?;
        debug!(dir = %dir.display(), depth, entries = entries.len(), "listed directory");

        sort_entries(&mut entries);

        let mut tree = DirTree {
            children: Vec::with_capacity(entries.len()),
            ..DirTree::default()
        };

        for entry in entries {
            if !entry.is_dir() {
                tree.nfiles += 1;
                tree.children.push(TreeNode {
                    name: entry.name,
                    kind: entry.kind,
                    subtree: None,
                });
                continue;
            }

            if let Some(limit) = options.max_depth
                && depth + 1 > limit
            {
                return Err(RenderError::DepthLimitExceeded {
                    path: entry.path,
                    limit,
                });
            }

            let subtree = walk_dir_internal(fs, &entry.path, depth + 1, options).await?;
            tree.nfiles += subtree.nfiles;
            tree.ndirectories += 1 + subtree.ndirectories;
            tree.children.push(TreeNode {
                name: entry.name,
                kind: entry.kind,
                subtree: Some(subtree),
            });
        }

        Ok(tree)
    })
}

fn sort_entries(entries: &mut [FsEntry]) {
    entries.sort_by_cached_key(|entry| entry.name.to_lowercase());
}

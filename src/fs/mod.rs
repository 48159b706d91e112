mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::{MockFileSystem, entry};

use async_trait::async_trait;
use std::path::Path;

use crate::error::Result;
use crate::models::FsEntry;

/// Lists the immediate children of a directory, in storage order.
///
/// Entries are classified by what they resolve to, so a link to a directory
/// is a `Directory` and a dangling link is a `File`. Any other failure, while
/// listing `dir` or resolving an entry, is returned as the matching
/// `RenderError` kind.
#[async_trait]
pub trait FileSystem: Send + Sync {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>>;
}

use async_trait::async_trait;
use std::fs::{self, DirEntry};
use std::io;
use std::path::Path;
use tokio::task;

use crate::error::{RenderError, Result};
use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let dir = dir.to_path_buf();
        let join_dir = dir.clone();
        task::spawn_blocking(move || list(&dir))
            .await
            .map_err(|err| RenderError::Io {
                path: join_dir,
                source: io::Error::other(err),
            })?
    }
}

fn list(dir: &Path) -> Result<Vec<FsEntry>> {
    let read_dir = fs::read_dir(dir).map_err(|err| RenderError::from_io(dir, err))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|err| RenderError::from_io(dir, err))?;
        let kind = classify(&entry).map_err(|err| RenderError::from_io(&entry.path(), err))?;
        entries.push(FsEntry {
            path: entry.path(),
            name: entry.file_name().to_string_lossy().into_owned(),
            kind,
        });
    }
    Ok(entries)
}

fn classify(entry: &DirEntry) -> io::Result<EntryKind> {
    let file_type = entry.file_type()?;
    let is_dir = if file_type.is_symlink() {
        // Dangling links are drawn as files; any other lookup failure aborts.
        match fs::metadata(entry.path()) {
            Ok(meta) => meta.is_dir(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => false,
            Err(err) => return Err(err),
        }
    } else {
        file_type.is_dir()
    };

    Ok(if is_dir {
        EntryKind::Directory
    } else {
        EntryKind::File
    })
}

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;
use tokio::task;
use tracing::debug;

use crate::models::{EntryKind, FsEntry, FsMetadata};

use super::FileSystem;

#[derive(Clone, Copy, Debug, Default)]
pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || {
            let mut entries = Vec::new();
            for entry in std::fs::read_dir(&dir)? {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        debug!(
                            path = %dir.display(),
                            error = %err,
                            "skipping unreadable listing entry"
                        );
                        continue;
                    }
                };
                let file_type = match entry.file_type() {
                    Ok(file_type) => file_type,
                    Err(err) => {
                        debug!(
                            path = %entry.path().display(),
                            error = %err,
                            "skipping unreadable entry type"
                        );
                        continue;
                    }
                };

                entries.push(FsEntry {
                    path: entry.path(),
                    name: entry.file_name().to_string_lossy().into_owned(),
                    kind: EntryKind::from_file_type(file_type),
                });
            }
            entries.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(entries)
        })
        .await?
    }

    async fn metadata(&self, path: &Path) -> Result<FsMetadata> {
        let metadata = tokio::fs::symlink_metadata(path).await?;
        Ok(FsMetadata {
            kind: EntryKind::from_file_type(metadata.file_type()),
            len: metadata.len(),
        })
    }
}

use std::path::Path;

use tracing::debug;

use crate::fs::FileSystem;
use crate::models::EntryKind;

/// Total size of everything reachable under `path`.
///
/// Directories contribute nothing themselves; every other entry contributes
/// its own (non-followed) length. Any entry that cannot be listed or stated
/// counts as zero and the walk moves on to its siblings, so this never fails.
pub async fn aggregate_size<F: FileSystem>(fs: &F, path: &Path) -> u64 {
    match fs.metadata(path).await {
        Ok(metadata) if metadata.kind == EntryKind::Directory => directory_size(fs, path).await,
        Ok(metadata) => metadata.len,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "skipping unreadable path");
            0
        }
    }
}

/// Same walk as [`aggregate_size`] for a path already known to be a directory.
pub async fn directory_size<F: FileSystem>(fs: &F, dir: &Path) -> u64 {
    let entries = match fs.read_dir(dir).await {
        Ok(entries) => entries,
        Err(err) => {
            debug!(path = %dir.display(), error = %err, "skipping unreadable directory");
            return 0;
        }
    };

    let mut total = 0u64;
    for entry in entries {
        let size = match entry.kind {
            EntryKind::Directory => Box::pin(directory_size(fs, &entry.path)).await,
            EntryKind::File | EntryKind::Symlink | EntryKind::Other => {
                entry_len(fs, &entry.path).await
            }
        };
        total = total.saturating_add(size);
    }

    total
}

pub async fn entry_len<F: FileSystem>(fs: &F, path: &Path) -> u64 {
    match fs.metadata(path).await {
        Ok(metadata) => metadata.len,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "skipping unreadable entry");
            0
        }
    }
}

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::child_path;
use crate::core::rank::rank;
use crate::core::render::write_report;
use crate::core::size::{directory_size, entry_len};
use crate::fs::FileSystem;
use crate::models::{DirectoryEntity, EntryKind};

/// Root first, then one entity per child. Only listing `root` can fail.
pub async fn build_report<F: FileSystem>(
    fs: &F,
    root: &Path,
) -> anyhow::Result<Vec<DirectoryEntity>> {
    let entries = fs
        .read_dir(root)
        .await
        .with_context(|| format!("error reading directory {}", root.display()))?;

    let mut entities = Vec::with_capacity(entries.len() + 1);
    // `root` may be a symlink; it lists as a directory, so size it as one.
    entities.push(DirectoryEntity::new(root, directory_size(fs, root).await));

    for entry in entries {
        let bytes = match entry.kind {
            EntryKind::Directory => directory_size(fs, &entry.path).await,
            EntryKind::File | EntryKind::Symlink | EntryKind::Other => {
                entry_len(fs, &entry.path).await
            }
        };
        debug!(path = %entry.path.display(), bytes, "sized entry");
        entities.push(DirectoryEntity::new(child_path(root, &entry.name), bytes));
    }

    Ok(entities)
}

pub async fn run<F: FileSystem, W: Write>(
    fs: &F,
    root: &Path,
    writer: &mut W,
) -> anyhow::Result<()> {
    let mut entities = build_report(fs, root).await?;
    rank(&mut entities);
    write_report(writer, &entities).context("error writing report")?;
    Ok(())
}

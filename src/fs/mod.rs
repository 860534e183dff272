mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::models::{FsEntry, FsMetadata};

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Immediate entries of `dir`, sorted by name.
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>>;

    /// Stat `path` without following symlinks.
    async fn metadata(&self, path: &Path) -> Result<FsMetadata>;
}

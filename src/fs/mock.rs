use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::{EntryKind, FsEntry, FsMetadata};

use super::FileSystem;

#[derive(Clone, Debug)]
enum Response<T> {
    Ok(T),
    Err(String),
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    listings: HashMap<PathBuf, Response<Vec<FsEntry>>>,
    metadata: HashMap<PathBuf, Response<FsMetadata>>,
    calls: Vec<PathBuf>,
}

impl MockFileSystem {
    /// Registers `dir` as a directory listing `entries` in the given order.
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        let dir = dir.into();
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.metadata.insert(
            dir.clone(),
            Response::Ok(FsMetadata {
                kind: EntryKind::Directory,
                len: 4096,
            }),
        );
        inner.listings.insert(dir, Response::Ok(entries));
    }

    pub fn set_file(&self, path: impl Into<PathBuf>, len: u64) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.metadata.insert(
            path.into(),
            Response::Ok(FsMetadata {
                kind: EntryKind::File,
                len,
            }),
        );
    }

    pub fn set_error(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .listings
            .insert(dir.into(), Response::Err(message.into()));
    }

    pub fn set_metadata_error(&self, path: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .metadata
            .insert(path.into(), Response::Err(message.into()));
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(dir.to_path_buf());

        match inner.listings.get(dir) {
            Some(Response::Ok(entries)) => Ok(entries.clone()),
            Some(Response::Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!("no mock listing for {}", dir.display())),
        }
    }

    async fn metadata(&self, path: &Path) -> Result<FsMetadata> {
        let inner = self.inner.lock().expect("mock fs lock");

        match inner.metadata.get(path) {
            Some(Response::Ok(metadata)) => Ok(*metadata),
            Some(Response::Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!("no mock metadata for {}", path.display())),
        }
    }
}

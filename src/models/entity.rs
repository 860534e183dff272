use std::path::PathBuf;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirectoryEntity {
    pub path: PathBuf,
    pub bytes: u64,
}

impl DirectoryEntity {
    pub fn new(path: impl Into<PathBuf>, bytes: u64) -> Self {
        Self {
            path: path.into(),
            bytes,
        }
    }
}

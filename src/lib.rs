pub mod core;
pub mod fs;
pub mod models;

use std::path::{Path, PathBuf};

/// Children of `.` are shown by bare name (`a.txt`, not `./a.txt`).
pub fn child_path(root: &Path, name: &str) -> PathBuf {
    if root == Path::new(".") {
        return PathBuf::from(name);
    }

    root.join(name)
}

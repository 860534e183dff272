mod entity;
mod entry;

pub use entity::DirectoryEntity;
pub use entry::{EntryKind, FsEntry, FsMetadata};

use crate::models::DirectoryEntity;

// Stable: ties keep discovery order.
pub fn rank(entities: &mut [DirectoryEntity]) {
    entities.sort_by(|a, b| b.bytes.cmp(&a.bytes));
}

pub mod rank;
pub mod render;
pub mod report;
pub mod size;

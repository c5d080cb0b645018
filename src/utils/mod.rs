pub mod ambient;
pub mod format;

pub mod codec;
pub mod error;
pub mod migrations;
pub mod repository;

pub use repository::{KvStore, MemoryStore, SqliteStore};

pub mod file_persistence;

pub use file_persistence::FileLocalePersistence;

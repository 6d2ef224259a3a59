// Utils compartidos

pub mod constants;
pub mod format;
pub mod storage;
pub mod validate;

pub use constants::*;
pub use storage::{LocalStorage, MemoryStorage, StoragePort};

//! Database access: the connection manager shared by every request.

pub mod storage;

pub use storage::Storage;

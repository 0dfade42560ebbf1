//! Storage abstractions for service layer
//!
//! The whole dataset lives in one JSON document. `DatasetStore` is the seam
//! the rest of the crate depends on; `JsonFileStore` is the file-backed
//! implementation used by the server.

pub mod dataset_store;
pub mod json_file_store;

pub use dataset_store::DatasetStore;
pub use json_file_store::JsonFileStore;

#![forbid(unsafe_code)]

pub mod fs;
pub mod repository;

pub use fs::FsImageCatalog;
pub use repository::{ImageCatalog, ImageKind, InMemoryCatalog, StorageError};

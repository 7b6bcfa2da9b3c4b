pub mod catalog;
pub mod config;
pub mod delivery;
pub mod error;
pub mod viewer;

pub use catalog::{Catalog, Category, DocumentRecord};
pub use config::LibraryConfig;
pub use error::{LibraryError, Result};

mod builtin;
mod by_category;
mod category;
mod find_by_filename;
mod load_from_path;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{LibraryError, Result};

pub use category::Category;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: String,
    pub title: String,
    /// File stem without the `.pdf` extension.
    pub filename: String,
    pub category: Category,
}

/// Immutable set of known documents. Built once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<DocumentRecord>,
}

impl Catalog {
    pub fn new(records: Vec<DocumentRecord>) -> Result<Self> {
        let mut ids = HashSet::new();
        let mut filenames = HashSet::new();

        for record in &records {
            if record.filename.is_empty() {
                return Err(LibraryError::Config(format!(
                    "document '{}' has an empty filename",
                    record.id
                )));
            }
            if record.filename.to_lowercase().ends_with(".pdf") {
                return Err(LibraryError::Config(format!(
                    "filename '{}' must not include the extension",
                    record.filename
                )));
            }
            if !ids.insert(record.id.as_str()) {
                return Err(LibraryError::Config(format!("duplicate document id '{}'", record.id)));
            }
            if !filenames.insert(record.filename.as_str()) {
                return Err(LibraryError::Config(format!(
                    "duplicate filename '{}'",
                    record.filename
                )));
            }
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[DocumentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

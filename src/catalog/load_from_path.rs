use std::{fs, path::Path};

use serde::Deserialize;

use crate::error::Result;

use super::{Catalog, DocumentRecord};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    documents: Vec<DocumentRecord>,
}

impl Catalog {
    /// Load a catalog from a YAML file with a top-level `documents` list.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_yaml::from_str(content)?;
        Self::new(file.documents)
    }
}

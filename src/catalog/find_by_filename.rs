use super::{Catalog, Category, DocumentRecord};

impl Catalog {
    pub fn find_by_filename(&self, filename: &str) -> Option<&DocumentRecord> {
        self.records.iter().find(|doc| doc.filename == filename)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&DocumentRecord> {
        self.records.iter().find(|doc| doc.id == id)
    }

    /// Display title for a filename taken from a navigation path.
    /// Unknown filenames fall back to the filename itself.
    pub fn title_for_filename<'a>(&'a self, filename: &'a str) -> &'a str {
        self.find_by_filename(filename)
            .map(|doc| doc.title.as_str())
            .unwrap_or(filename)
    }

    /// Record for a filename taken from a navigation path. Unknown filenames
    /// get a synthetic record served from the default directory.
    pub fn record_for_navigation(&self, filename: &str) -> DocumentRecord {
        self.find_by_filename(filename)
            .cloned()
            .unwrap_or_else(|| DocumentRecord {
                id: filename.to_string(),
                title: filename.to_string(),
                filename: filename.to_string(),
                category: Category::Additional,
            })
    }
}

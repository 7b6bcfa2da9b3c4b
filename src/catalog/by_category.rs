use super::{Catalog, Category, DocumentRecord};

impl Catalog {
    /// Records of one category, in catalog order.
    pub fn by_category(&self, category: Category) -> Vec<&DocumentRecord> {
        self.records
            .iter()
            .filter(|doc| doc.category == category)
            .collect()
    }

    pub fn count_in(&self, category: Category) -> usize {
        self.records.iter().filter(|doc| doc.category == category).count()
    }
}

use pdf_library::{Catalog, Category};

/// One line of the overview list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Section(Category),
    /// Index into `Catalog::records`.
    Document(usize),
}

/// Collapsible sections and the cursor over the overview list.
#[derive(Debug)]
pub struct CatalogView {
    sections: Vec<(Category, bool)>,
    selected: usize,
}

impl CatalogView {
    pub fn new() -> Self {
        let sections = Category::display_order()
            .into_iter()
            .map(|category| (category, !category.is_collapsible()))
            .collect();

        Self { sections, selected: 0 }
    }

    pub fn is_expanded(&self, category: Category) -> bool {
        self.sections
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, expanded)| *expanded)
            .unwrap_or(false)
    }

    pub fn rows(&self, catalog: &Catalog) -> Vec<Row> {
        let mut rows = Vec::new();
        for (category, expanded) in &self.sections {
            if catalog.count_in(*category) == 0 {
                continue;
            }
            rows.push(Row::Section(*category));
            if *expanded {
                rows.extend(
                    catalog
                        .records()
                        .iter()
                        .enumerate()
                        .filter(|(_, doc)| doc.category == *category)
                        .map(|(i, _)| Row::Document(i)),
                );
            }
        }
        rows
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_row(&self, catalog: &Catalog) -> Option<Row> {
        self.rows(catalog).get(self.selected).copied()
    }

    pub fn next(&mut self, catalog: &Catalog) {
        let count = self.rows(catalog).len();
        if count > 0 {
            self.selected = (self.selected + 1).min(count - 1);
        }
    }

    pub fn prev(&mut self, catalog: &Catalog) {
        self.selected = self.selected.saturating_sub(1);
        let count = self.rows(catalog).len();
        if count > 0 && self.selected >= count {
            self.selected = count - 1;
        }
    }

    /// Expand or collapse a section. The cursor stays on the section header.
    pub fn toggle(&mut self, category: Category, catalog: &Catalog) {
        if !category.is_collapsible() {
            return;
        }
        if let Some(section) = self.sections.iter_mut().find(|(c, _)| *c == category) {
            section.1 = !section.1;
        }
        if let Some(pos) = self
            .rows(catalog)
            .iter()
            .position(|row| *row == Row::Section(category))
        {
            self.selected = pos;
        }
    }
}

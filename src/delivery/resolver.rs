use crate::catalog::{Catalog, Category};

pub const PPVE_DIR: &str = "/PPVE";
pub const DEFAULT_DIR: &str = "/PDF";
pub const EXTENSION: &str = "pdf";

/// Public directory a category is served from.
pub fn base_dir(category: Category) -> &'static str {
    match category {
        Category::Ppve => PPVE_DIR,
        _ => DEFAULT_DIR,
    }
}

/// Canonical delivery path for a document. Never fails, even when the
/// file does not exist on the host.
pub fn resolve(filename: &str, category: Category) -> String {
    format!("{}/{}.{}", base_dir(category), filename, EXTENSION)
}

/// Paths to try when locating a document: the canonical one first, then the
/// same file under the other public directory.
pub fn candidate_paths(filename: &str, category: Category) -> Vec<String> {
    let canonical = base_dir(category);
    let mut paths = vec![resolve(filename, category)];
    for dir in [DEFAULT_DIR, PPVE_DIR] {
        if dir != canonical {
            paths.push(format!("{}/{}.{}", dir, filename, EXTENSION));
        }
    }
    paths
}

/// Join the host base URL and a resolved path.
pub fn absolute_url(host: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}/{}", host.trim_end_matches('/'), path.trim_start_matches('/'))
}

impl Catalog {
    /// Path for a filename coming from navigation. Filenames missing from
    /// the catalog are served from the default directory.
    pub fn url_for_filename(&self, filename: &str) -> String {
        let category = self
            .find_by_filename(filename)
            .map(|doc| doc.category)
            .unwrap_or(Category::Additional);
        resolve(filename, category)
    }
}

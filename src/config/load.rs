use std::{fs, path::Path};

use crate::catalog::Catalog;
use crate::error::{LibraryError, Result};

use super::{LibraryConfig, DEFAULT_CONFIG_FILE};

impl LibraryConfig {
    /// Load config from `path`, or from `./library.yml` when it exists,
    /// falling back to defaults. Environment overrides apply last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from_path(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load_from_path(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate().map_err(|errors| {
            let joined = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            LibraryError::Config(joined)
        })?;

        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: LibraryConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub(super) fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("PDF_LIBRARY_HOST") {
            self.host = host;
        }
        if let Some(embedded) = lookup("PDF_LIBRARY_EMBEDDED") {
            self.embedded = embedded == "1" || embedded.eq_ignore_ascii_case("true");
        }
    }

    /// Catalog named by the config, or the built-in one.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::load_from_path(path),
            None => Ok(Catalog::builtin()),
        }
    }
}

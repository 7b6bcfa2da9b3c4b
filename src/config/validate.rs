use std::fmt;

use super::LibraryConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub error: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

impl std::error::Error for ValidationError {}

impl LibraryConfig {
    /// Check every field and report all problems at once.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        match reqwest::Url::parse(&self.host) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(ValidationError {
                field: "host".to_string(),
                error: format!("unsupported scheme '{}'", url.scheme()),
            }),
            Err(e) => errors.push(ValidationError {
                field: "host".to_string(),
                error: format!("invalid URL: {}", e),
            }),
        }

        if self.probe_timeout_ms == 0 {
            errors.push(ValidationError {
                field: "probe_timeout_ms".to_string(),
                error: "must be greater than 0".to_string(),
            });
        }

        if self.watchdog_secs == 0 {
            errors.push(ValidationError {
                field: "watchdog_secs".to_string(),
                error: "must be greater than 0".to_string(),
            });
        }

        if self.download_timeout_secs == 0 {
            errors.push(ValidationError {
                field: "download_timeout_secs".to_string(),
                error: "must be greater than 0".to_string(),
            });
        }

        if self.restricted_hosts.iter().any(|h| h.trim().is_empty()) {
            errors.push(ValidationError {
                field: "restricted_hosts".to_string(),
                error: "contains an empty host name".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(LibraryConfig::default().validate().is_ok());
    }

    #[test]
    fn test_reports_every_problem() {
        let config = LibraryConfig {
            host: "ftp://files.local".to_string(),
            probe_timeout_ms: 0,
            watchdog_secs: 0,
            download_timeout_secs: 0,
            restricted_hosts: vec![" ".to_string()],
            ..LibraryConfig::default()
        };

        let errors = config.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec![
                "host",
                "probe_timeout_ms",
                "watchdog_secs",
                "download_timeout_secs",
                "restricted_hosts",
            ]);
    }
}

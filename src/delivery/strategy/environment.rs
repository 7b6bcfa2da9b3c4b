use crate::config::LibraryConfig;

/// Signals about where the library is running. Pure input to the selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// Running inside another frame / host application.
    pub embedded: bool,
    /// Host name the documents are served from.
    pub hostname: String,
    /// Hosts known to block inline viewing.
    pub restricted_hosts: Vec<String>,
    /// No graphical session to open a browser in.
    pub headless: bool,
}

impl Environment {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            ..Self::default()
        }
    }

    pub fn with_embedded(mut self, embedded: bool) -> Self {
        self.embedded = embedded;
        self
    }

    pub fn with_restricted_hosts(mut self, hosts: Vec<String>) -> Self {
        self.restricted_hosts = hosts;
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    fn host_is_restricted(&self) -> bool {
        let host = self.hostname.to_lowercase();
        self.restricted_hosts.iter().any(|restricted| {
            let restricted = restricted.to_lowercase();
            host == restricted || host.ends_with(&format!(".{}", restricted))
        })
    }

    /// Reason the viewer strategies are blocked, if any.
    pub fn restriction(&self) -> Option<String> {
        if self.embedded {
            Some("running embedded in another frame".to_string())
        } else if self.host_is_restricted() {
            Some(format!("host {} blocks inline viewing", self.hostname))
        } else if self.headless {
            Some("no graphical session available".to_string())
        } else {
            None
        }
    }

    pub fn is_restrictive(&self) -> bool {
        self.restriction().is_some()
    }

    /// Build the environment from config and the process environment.
    pub fn detect(config: &LibraryConfig) -> Self {
        let hostname = reqwest::Url::parse(&config.host)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_default();

        let embedded = config.embedded
            || std::env::var("PDF_LIBRARY_EMBEDDED")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false);

        let headless = cfg!(target_os = "linux")
            && std::env::var_os("DISPLAY").is_none()
            && std::env::var_os("WAYLAND_DISPLAY").is_none();

        Self {
            embedded,
            hostname,
            restricted_hosts: config.restricted_hosts.clone(),
            headless,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_environment_is_not_restrictive() {
        assert_eq!(Environment::new("docs.local").restriction(), None);
    }

    #[test]
    fn test_restricted_host_matches_subdomains() {
        let env = Environment::new("www.example-host.fr")
            .with_restricted_hosts(vec!["example-host.fr".to_string()]);
        assert!(env.is_restrictive());

        let other = Environment::new("notexample-host.fr")
            .with_restricted_hosts(vec!["example-host.fr".to_string()]);
        assert!(!other.is_restrictive());
    }

    #[test]
    fn test_embedded_wins_over_other_reasons() {
        let env = Environment::new("h").with_embedded(true).with_headless(true);
        assert_eq!(env.restriction().as_deref(), Some("running embedded in another frame"));
    }
}

use thiserror::Error;

use crate::delivery::strategy::DeliveryStrategy;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Document not reachable at {url} (status {})", status.map(|s| s.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    ResourceUnreachable { url: String, status: Option<u16> },

    #[error("{strategy} viewer blocked: {reason}")]
    RenderBlocked { strategy: DeliveryStrategy, reason: String },

    #[error("Viewing restricted by environment: {0}")]
    EnvironmentRestricted(String),

    #[error("Unknown document: {0}")]
    UnknownDocument(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Coarse classification used to pick the recovery path in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ResourceUnreachable,
    RenderBlocked,
    EnvironmentRestricted,
    Other,
}

/// Manual action offered to the user alongside an error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryAction {
    Download,
    OpenExternally,
    Retry,
}

impl RecoveryAction {
    pub fn label(&self) -> &'static str {
        match self {
            RecoveryAction::Download => "Download",
            RecoveryAction::OpenExternally => "Open externally",
            RecoveryAction::Retry => "Retry",
        }
    }

    pub fn key_hint(&self) -> char {
        match self {
            RecoveryAction::Download => 'd',
            RecoveryAction::OpenExternally => 'o',
            RecoveryAction::Retry => 'r',
        }
    }
}

impl LibraryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LibraryError::ResourceUnreachable { .. } => ErrorKind::ResourceUnreachable,
            LibraryError::RenderBlocked { .. } => ErrorKind::RenderBlocked,
            LibraryError::EnvironmentRestricted(_) => ErrorKind::EnvironmentRestricted,
            _ => ErrorKind::Other,
        }
    }

    /// Actions the user can still take after this error.
    pub fn recovery_actions(&self) -> Vec<RecoveryAction> {
        match self.kind() {
            ErrorKind::ResourceUnreachable => {
                vec![RecoveryAction::Download, RecoveryAction::OpenExternally]
            }
            // The selector falls back on its own; retry restarts the chain.
            ErrorKind::RenderBlocked => vec![
                RecoveryAction::Retry,
                RecoveryAction::OpenExternally,
                RecoveryAction::Download,
            ],
            ErrorKind::EnvironmentRestricted => {
                vec![RecoveryAction::Download, RecoveryAction::OpenExternally]
            }
            ErrorKind::Other => vec![RecoveryAction::Retry],
        }
    }
}

pub type Result<T> = std::result::Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_message_carries_url_and_status() {
        let err = LibraryError::ResourceUnreachable {
            url: "/PPVE/ENEDIS.pdf".to_string(),
            status: Some(404),
        };
        let text = err.to_string();
        assert!(text.contains("/PPVE/ENEDIS.pdf"));
        assert!(text.contains("404"));
        assert_eq!(err.kind(), ErrorKind::ResourceUnreachable);
        assert!(err.recovery_actions().contains(&RecoveryAction::Download));
    }

    #[test]
    fn test_every_error_offers_a_recovery_action() {
        let errors = vec![
            LibraryError::RenderBlocked {
                strategy: DeliveryStrategy::Inline,
                reason: "frame refused".to_string(),
            },
            LibraryError::EnvironmentRestricted("embedded".to_string()),
            LibraryError::UnknownDocument("nope".to_string()),
        ];

        for err in errors {
            assert!(!err.recovery_actions().is_empty(), "{err} has no recovery");
        }
    }
}

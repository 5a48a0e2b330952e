//! Error types for the registry crate.
//!
//! Loading fails in one of two ways: the index could not be fetched
//! (transport errors) or what was fetched is not a JSON object (parse
//! errors). [`RegistryError::is_transport`] and [`RegistryError::is_parse`]
//! tell the two apart.

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while loading or querying repository data.
#[derive(Error, Diagnostic, Debug)]
pub enum RegistryError {
    #[error("Failed to fetch {url}: {source}")]
    #[diagnostic(
        code(impact_registry::transport),
        help("Check your network connection and the repository URL")
    )]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("HTTP {status}: {url}")]
    #[diagnostic(
        code(impact_registry::http_status),
        help("Verify the repository URL is correct and accessible")
    )]
    HttpStatus { url: String, status: u16 },

    #[error("Invalid JSON from {url}: {source}")]
    #[diagnostic(
        code(impact_registry::parse),
        help("The repository index may be corrupted or in an invalid format")
    )]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a JSON object from {url}, found {found}")]
    #[diagnostic(
        code(impact_registry::not_an_object),
        help("A repository index must be a JSON object keyed by library name")
    )]
    NotAnObject { url: String, found: &'static str },

    #[error("Library not found: {0}")]
    #[diagnostic(
        code(impact_registry::library_not_found),
        help("Use `impact search` to list matching libraries")
    )]
    LibraryNotFound(String),
}

impl RegistryError {
    pub fn transport(url: impl Into<String>, err: ureq::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source: Box::new(err),
        }
    }

    /// Whether the index could not be fetched.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::HttpStatus { .. })
    }

    /// Whether the index was fetched but could not be used as a mapping.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::NotAnObject { .. })
    }

    /// The index URL this error is about, if any.
    pub fn index_url(&self) -> Option<&str> {
        match self {
            Self::Transport { url, .. }
            | Self::HttpStatus { url, .. }
            | Self::Parse { url, .. }
            | Self::NotAnObject { url, .. } => Some(url),
            Self::LibraryNotFound(_) => None,
        }
    }
}

/// A specialized Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RegistryError::HttpStatus {
            url: "https://example.com/index.json".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "HTTP 404: https://example.com/index.json");

        let err = RegistryError::NotAnObject {
            url: "https://example.com/index.json".to_string(),
            found: "array",
        };
        assert_eq!(
            err.to_string(),
            "Expected a JSON object from https://example.com/index.json, found array"
        );

        let err = RegistryError::LibraryNotFound("Buildings".to_string());
        assert_eq!(err.to_string(), "Library not found: Buildings");
    }

    #[test]
    fn test_error_kinds() {
        let err = RegistryError::transport("A", ureq::Error::ConnectionFailed);
        assert!(err.is_transport());
        assert!(!err.is_parse());
        assert_eq!(err.index_url(), Some("A"));

        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = RegistryError::Parse {
            url: "B".to_string(),
            source,
        };
        assert!(err.is_parse());
        assert!(!err.is_transport());
        assert_eq!(err.index_url(), Some("B"));

        let err = RegistryError::LibraryNotFound("x".to_string());
        assert!(!err.is_parse() && !err.is_transport());
        assert_eq!(err.index_url(), None);
    }

    #[test]
    fn test_error_source_chain() {
        let err = RegistryError::transport("A", ureq::Error::ConnectionFailed);
        assert!(std::error::Error::source(&err).is_some());
    }
}

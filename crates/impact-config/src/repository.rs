use documented::{Documented, DocumentedFields};
use serde::{Deserialize, Serialize};

/// Defines a remote index that provides library metadata.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Documented, DocumentedFields)]
pub struct Repository {
    /// Unique name of the repository.
    pub name: String,

    /// URL to the repository's JSON index.
    pub url: String,

    /// Whether the repository is enabled.
    /// Default: true
    pub enabled: Option<bool>,
}

impl Repository {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            enabled: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_by_default() {
        let repo = Repository::new("main", "https://example.com/index.json");
        assert!(repo.is_enabled());

        let repo = Repository {
            enabled: Some(false),
            ..repo
        };
        assert!(!repo.is_enabled());
    }

    #[test]
    fn test_deserialize_without_enabled() {
        let repo: Repository =
            toml::from_str("name = \"main\"\nurl = \"https://example.com/index.json\"").unwrap();
        assert_eq!(repo.enabled, None);
        assert!(repo.is_enabled());
    }
}

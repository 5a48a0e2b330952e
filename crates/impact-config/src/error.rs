use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("TOML serialization error: {0}")]
    #[diagnostic(
        code(impact_config::toml_serialize),
        help("Check your configuration structure for invalid values")
    )]
    TomlSerError(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    #[diagnostic(
        code(impact_config::toml_deserialize),
        help("Check your config.toml syntax and structure")
    )]
    TomlDeError(#[from] toml::de::Error),

    #[error("Configuration file already exists: {0}")]
    #[diagnostic(
        code(impact_config::already_exists),
        help("Remove the existing config file or use a different location")
    )]
    ConfigAlreadyExists(String),

    #[error("Repository name cannot be empty")]
    #[diagnostic(
        code(impact_config::empty_repo_name),
        help("Give every [[repositories]] entry a `name`")
    )]
    EmptyRepositoryName,

    #[error("Invalid repository URL for {name}: {url}")]
    #[diagnostic(
        code(impact_config::invalid_repository_url),
        help("Repository URLs must be absolute, e.g. https://example.com/index.json")
    )]
    InvalidRepositoryUrl {
        name: String,
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Duplicate repository name: {0}")]
    #[diagnostic(
        code(impact_config::duplicate_repo),
        help("Each repository must have a unique name")
    )]
    DuplicateRepositoryName(String),

    #[error("IO error: {0}")]
    #[diagnostic(code(impact_config::io))]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    #[diagnostic(code(impact_config::toml))]
    Toml(#[from] toml_edit::TomlError),

    #[error("Encountered unexpected TOML item: {0}")]
    #[diagnostic(code(impact_config::unexpected_toml_item))]
    UnexpectedTomlItem(String),

    #[error("Failed to annotate first table in array: {0}")]
    #[diagnostic(code(impact_config::annotate_first_table))]
    AnnotateFirstTable(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::DuplicateRepositoryName("main".to_string());
        assert_eq!(err.to_string(), "Duplicate repository name: main");

        let err = ConfigError::EmptyRepositoryName;
        assert_eq!(err.to_string(), "Repository name cannot be empty");
    }

    #[test]
    fn test_invalid_url_has_source() {
        let err = ConfigError::InvalidRepositoryUrl {
            name: "main".to_string(),
            url: "not a url".to_string(),
            source: url::ParseError::RelativeUrlWithoutBase,
        };
        assert!(err.to_string().contains("not a url"));
        assert!(std::error::Error::source(&err).is_some());
    }
}

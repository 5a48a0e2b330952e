use impact_config::error::ConfigError;
use impact_registry::RegistryError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Registry(#[from] RegistryError),

    #[error("Invalid proxy: {0}")]
    #[diagnostic(
        code(impact_cli::invalid_proxy),
        help("Use a proxy URL such as http://host:port or socks5://host:port")
    )]
    InvalidProxy(String),

    #[error("Invalid header: {0}")]
    #[diagnostic(
        code(impact_cli::invalid_header),
        help("Headers must be given as `Name: value`")
    )]
    InvalidHeader(String),

    #[error("Error while {action}: {source}")]
    #[diagnostic(code(impact_cli::io))]
    IoError {
        action: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(code(impact_cli::json))]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = std::result::Result<T, CliError>;

pub trait ErrorContext<T> {
    fn with_context<C>(self, context: C) -> CliResult<T>
    where
        C: FnOnce() -> String;
}

impl<T> ErrorContext<T> for std::io::Result<T> {
    fn with_context<C>(self, context: C) -> CliResult<T>
    where
        C: FnOnce() -> String,
    {
        self.map_err(|err| {
            CliError::IoError {
                action: context(),
                source: err,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use miette::Diagnostic;

    use super::*;

    #[test]
    fn test_registry_error_diagnostic_passthrough() {
        let err = CliError::from(RegistryError::HttpStatus {
            url: "https://example.com/index.json".to_string(),
            status: 404,
        });

        assert_eq!(
            Diagnostic::code(&err).map(|c| c.to_string()).as_deref(),
            Some("impact_registry::http_status")
        );
        assert!(Diagnostic::url(&err).is_none());
        assert!(Diagnostic::help(&err).is_some());

        let report = format!("{:?}", miette::Report::new(err));
        assert!(report.contains("HTTP 404"));
    }

    #[test]
    fn test_config_error_diagnostic_passthrough() {
        let err = CliError::from(ConfigError::DuplicateRepositoryName("main".to_string()));
        assert_eq!(
            Diagnostic::code(&err).map(|c| c.to_string()).as_deref(),
            Some("impact_config::duplicate_repo")
        );
    }
}

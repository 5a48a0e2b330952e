use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use documented::{Documented, DocumentedFields};
use serde::{Deserialize, Serialize};
use toml_edit::DocumentMut;
use tracing::{debug, info, warn};
use url::Url;

use crate::{
    annotations::{annotate_toml_array_of_tables, annotate_toml_table},
    error::{ConfigError, Result},
    repository::Repository,
    utils::{split_list, xdg_config_home},
};

pub const CONFIG_ENV: &str = "IMPACT_CONFIG";
pub const REPOSITORIES_ENV: &str = "IMPACT_REPOSITORIES";

const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Application's configuration
#[derive(Clone, Debug, Deserialize, Serialize, Documented, DocumentedFields)]
pub struct Config {
    /// Repositories providing library indexes, fetched in the order listed.
    /// When two indexes define the same library, the later one wins.
    ///
    /// [[repositories]]
    /// name = "main"
    /// url = "https://example.com/impact_data.json"
    #[serde(default)]
    pub repositories: Vec<Repository>,

    /// Limits the number of results returned by a search.
    /// Default: 20
    pub search_limit: Option<usize>,

    /// Timeout in seconds for each index request.
    /// Default: none
    pub timeout: Option<u64>,

    /// User agent sent with index requests.
    /// Default: "impact/<version>"
    pub user_agent: Option<String>,
}

/// Location of the config file: `$IMPACT_CONFIG`, else `$XDG_CONFIG_HOME/impact/config.toml`.
pub fn default_config_path() -> PathBuf {
    match std::env::var(CONFIG_ENV) {
        Ok(path_str) => PathBuf::from(path_str),
        Err(_) => xdg_config_home().join("impact").join("config.toml"),
    }
}

impl Config {
    pub fn default_config() -> Self {
        Self {
            repositories: Vec::new(),
            search_limit: Some(DEFAULT_SEARCH_LIMIT),
            timeout: None,
            user_agent: None,
        }
    }

    /// Loads the configuration from [`default_config_path`].
    pub fn new() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Loads the configuration from `path`.
    /// If the file does not exist, the default configuration is used.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let mut config = match fs::read_to_string(path) {
            Ok(content) => {
                debug!("reading configuration from {}", path.display());
                toml::from_str(&content)?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("{} not found, using default configuration", path.display());
                Self::default_config()
            }
            Err(err) => return Err(ConfigError::IoError(err)),
        };

        if let Ok(urls) = std::env::var(REPOSITORIES_ENV) {
            debug!("overriding repositories from {REPOSITORIES_ENV}");
            config.repositories = split_list(&urls)
                .into_iter()
                .enumerate()
                .map(|(idx, url)| Repository::new(format!("env-{}", idx + 1), url))
                .collect();
        }

        config.resolve()?;

        Ok(config)
    }

    pub fn resolve(&mut self) -> Result<()> {
        self.search_limit.get_or_insert(DEFAULT_SEARCH_LIMIT);

        let mut seen_repos = HashSet::new();

        for repo in &mut self.repositories {
            if repo.name.trim().is_empty() {
                return Err(ConfigError::EmptyRepositoryName);
            }
            if !seen_repos.insert(repo.name.clone()) {
                return Err(ConfigError::DuplicateRepositoryName(repo.name.clone()));
            }
            Url::parse(&repo.url).map_err(|source| {
                ConfigError::InvalidRepositoryUrl {
                    name: repo.name.clone(),
                    url: repo.url.clone(),
                    source,
                }
            })?;

            repo.enabled.get_or_insert(true);
        }

        if !self.repositories.iter().any(Repository::is_enabled) {
            warn!("No repositories enabled. You can add repositories in your config file.");
        }

        Ok(())
    }

    pub fn search_limit(&self) -> usize {
        self.search_limit.unwrap_or(DEFAULT_SEARCH_LIMIT)
    }

    pub fn to_annotated_document(&self) -> Result<DocumentMut> {
        let toml_string = toml::to_string_pretty(self)?;
        let mut doc = toml_string.parse::<DocumentMut>()?;

        annotate_toml_table::<Config>(doc.as_table_mut(), true)?;

        if let Some(repositories_item) = doc.get_mut("repositories") {
            if let Some(repositories_array) = repositories_item.as_array_of_tables_mut() {
                annotate_toml_array_of_tables::<Repository>(repositories_array)?;
            }
        }

        Ok(doc)
    }
}

/// Writes the annotated default configuration to `config_path`.
pub fn generate_default_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config_path = config_path.as_ref();

    if config_path.exists() {
        return Err(ConfigError::ConfigAlreadyExists(
            config_path.display().to_string(),
        ));
    }

    let annotated_doc = Config::default_config().to_annotated_document()?;

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(config_path, annotated_doc.to_string())?;
    info!(
        "Default configuration file generated with documentation at: {}",
        config_path.display()
    );
    Ok(())
}

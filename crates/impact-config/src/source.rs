//! The seam between configuration and the repository data loader.

use crate::config::Config;

/// Supplies the ordered list of index URLs to fetch.
///
/// Order matters: when two indexes define the same key, the one that comes
/// later in the list wins. URLs are passed through as-is; validation, if
/// any, is the implementor's job.
pub trait RepoSource {
    fn repository_urls(&self) -> Vec<String>;
}

impl RepoSource for Config {
    /// Enabled repositories, in the order they appear in the config file.
    fn repository_urls(&self) -> Vec<String> {
        self.repositories
            .iter()
            .filter(|repo| repo.is_enabled())
            .map(|repo| repo.url.clone())
            .collect()
    }
}

impl RepoSource for Vec<String> {
    fn repository_urls(&self) -> Vec<String> {
        self.clone()
    }
}

impl RepoSource for [String] {
    fn repository_urls(&self) -> Vec<String> {
        self.to_vec()
    }
}

impl<S: RepoSource + ?Sized> RepoSource for &S {
    fn repository_urls(&self) -> Vec<String> {
        (**self).repository_urls()
    }
}

impl<S: RepoSource + ?Sized> RepoSource for Box<S> {
    fn repository_urls(&self) -> Vec<String> {
        (**self).repository_urls()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::Repository;

    #[test]
    fn test_config_source_skips_disabled() {
        let mut config = Config::default_config();
        config.repositories = vec![
            Repository::new("a", "https://a.example.com/index.json"),
            Repository {
                enabled: Some(false),
                ..Repository::new("b", "https://b.example.com/index.json")
            },
            Repository::new("c", "https://c.example.com/index.json"),
        ];

        assert_eq!(
            config.repository_urls(),
            vec![
                "https://a.example.com/index.json".to_string(),
                "https://c.example.com/index.json".to_string(),
            ]
        );
    }

    #[test]
    fn test_vec_source_keeps_order() {
        let urls = vec!["B".to_string(), "A".to_string()];
        assert_eq!(urls.repository_urls(), vec!["B", "A"]);
        assert_eq!((&urls).repository_urls(), vec!["B", "A"]);
        assert_eq!(urls.as_slice().repository_urls(), vec!["B", "A"]);
    }
}

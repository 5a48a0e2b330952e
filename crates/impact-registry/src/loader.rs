//! Fetching and merging repository indexes.
//!
//! A [`RepoDataLoader`] owns the cache for the merged index. The first
//! successful [`RepoDataLoader::load`] fetches every configured URL in
//! order, merges the documents (later URLs win on conflicting keys) and
//! keeps the result. Every later call hands out the same [`Arc`] without
//! touching the network. A failed load stores nothing, so the next call
//! starts over from the first URL.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use impact_config::{config::Config, RepoSource};
use serde_json::Value;
use tracing::{debug, trace};

use crate::{
    error::{RegistryError, Result},
    http_client::ClientConfig,
    transport::{HttpTransport, Transport},
};

/// The merged index: library name to its JSON description, in first-seen order.
pub type RepoData = serde_json::Map<String, Value>;

/// Fetches the indexes of a [`RepoSource`] once and caches the merged result.
pub struct RepoDataLoader<S, T> {
    source: S,
    transport: T,
    // Held for the whole fetch, so overlapping loads wait for the first one.
    cache: Mutex<Option<Arc<RepoData>>>,
}

impl RepoDataLoader<Config, HttpTransport> {
    /// Loader over the enabled repositories of `config`, using an HTTP
    /// transport configured from the same file.
    pub fn from_config(config: Config) -> Self {
        let transport = HttpTransport::new(ClientConfig::from_config(&config));
        Self::new(config, transport)
    }
}

impl<S, T> RepoDataLoader<S, T>
where
    S: RepoSource,
    T: Transport,
{
    pub fn new(source: S, transport: T) -> Self {
        Self {
            source,
            transport,
            cache: Mutex::new(None),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the merged index, fetching it on first use.
    ///
    /// # Errors
    ///
    /// Fails with a transport error if any URL cannot be fetched, or a parse
    /// error if any body is not a JSON object. Nothing is cached in either
    /// case.
    pub fn load(&self) -> Result<Arc<RepoData>> {
        let mut cache = self.lock_cache();

        if let Some(data) = cache.as_ref() {
            trace!(libraries = data.len(), "using cached repository data");
            return Ok(Arc::clone(data));
        }

        let urls = self.source.repository_urls();
        debug!(repositories = urls.len(), "loading repository data");

        let mut merged = RepoData::new();
        for url in &urls {
            debug!("Fetching repository data from {}", url);
            let body = self.transport.get(url)?;
            let document = parse_document(url, &body)?;
            trace!(url = url.as_str(), entries = document.len(), "merging document");
            merge_documents(&mut merged, document);
        }

        debug!(libraries = merged.len(), "repository data loaded");
        let merged = Arc::new(merged);
        *cache = Some(Arc::clone(&merged));
        Ok(merged)
    }

    pub fn is_loaded(&self) -> bool {
        self.lock_cache().is_some()
    }

    /// The cached index, without fetching anything.
    pub fn cached(&self) -> Option<Arc<RepoData>> {
        self.lock_cache().clone()
    }

    // The cache only ever holds nothing or a complete index, so a poisoned
    // lock is still safe to use.
    fn lock_cache(&self) -> MutexGuard<'_, Option<Arc<RepoData>>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Loads the merged repository index through `loader`.
pub fn load_repo_data<S, T>(loader: &RepoDataLoader<S, T>) -> Result<Arc<RepoData>>
where
    S: RepoSource,
    T: Transport,
{
    loader.load()
}

/// Parses one fetched body into a mapping.
pub fn parse_document(url: &str, body: &[u8]) -> Result<RepoData> {
    let value: Value = serde_json::from_slice(body).map_err(|source| {
        RegistryError::Parse {
            url: url.to_string(),
            source,
        }
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => {
            Err(RegistryError::NotAnObject {
                url: url.to_string(),
                found: json_type(&other),
            })
        }
    }
}

/// Shallow merge: every key of `document` replaces the one in `acc`.
pub fn merge_documents(acc: &mut RepoData, document: RepoData) {
    for (key, value) in document {
        acc.insert(key, value);
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

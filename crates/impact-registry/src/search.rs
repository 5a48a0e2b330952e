//! Read-only queries over a loaded index.

use crate::{
    error::{RegistryError, Result},
    library::LibraryInfo,
    loader::RepoData,
};

/// Libraries whose name or description contains `query`, in index order.
pub fn search(
    data: &RepoData,
    query: &str,
    case_sensitive: bool,
    limit: usize,
) -> Vec<LibraryInfo> {
    let needle = if case_sensitive {
        query.to_string()
    } else {
        query.to_lowercase()
    };
    let matches = |text: &str| {
        if case_sensitive {
            text.contains(&needle)
        } else {
            text.to_lowercase().contains(&needle)
        }
    };

    data.iter()
        .map(|(name, value)| LibraryInfo::from_entry(name, value))
        .filter(|info| {
            matches(&info.name) || info.description.as_deref().is_some_and(|d| matches(d))
        })
        .take(limit)
        .collect()
}

/// Looks up a library by exact name, falling back to a case-insensitive match.
pub fn find_library(data: &RepoData, name: &str) -> Result<LibraryInfo> {
    if let Some(value) = data.get(name) {
        return Ok(LibraryInfo::from_entry(name, value));
    }

    data.iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(key, value)| LibraryInfo::from_entry(key, value))
        .ok_or_else(|| RegistryError::LibraryNotFound(name.to_string()))
}

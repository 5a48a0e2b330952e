//! Repository index loading for the impact library manager.
//!
//! Library indexes are JSON objects served over HTTP. This crate fetches
//! the indexes named by a [`RepoSource`](impact_config::RepoSource),
//! merges them into one mapping and caches it for the life of the loader.
//!
//! # Example
//!
//! ```no_run
//! use impact_config::config::Config;
//! use impact_registry::{search, RepoDataLoader};
//!
//! fn show(config: Config) -> impact_registry::Result<()> {
//!     let loader = RepoDataLoader::from_config(config);
//!     let data = loader.load()?;
//!     for info in search(&data, "buildings", false, 10) {
//!         println!("{}", info.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod http_client;
pub mod library;
pub mod loader;
pub mod search;
pub mod transport;

pub use error::{RegistryError, Result};
pub use http_client::ClientConfig;
pub use library::LibraryInfo;
pub use loader::{load_repo_data, merge_documents, parse_document, RepoData, RepoDataLoader};
pub use search::{find_library, search};
pub use transport::{HttpTransport, Transport};

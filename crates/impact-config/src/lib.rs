pub mod annotations;
pub mod config;
pub mod error;
pub mod repository;
pub mod source;
pub mod utils;

pub use source::RepoSource;

#[cfg(test)]
pub mod test_utils;

//! Blocking HTTP access to repository indexes.

use tracing::trace;
use ureq::Agent;

use crate::{
    error::{RegistryError, Result},
    http_client::{apply_headers, ClientConfig},
};

/// Upper bound on the size of a single index body.
pub const MAX_INDEX_SIZE: u64 = 256 * 1024 * 1024;

/// Performs one GET and returns the whole response body.
pub trait Transport {
    fn get(&self, url: &str) -> Result<Vec<u8>>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        (**self).get(url)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        (**self).get(url)
    }
}

/// [`Transport`] backed by a `ureq` agent.
pub struct HttpTransport {
    agent: Agent,
    config: ClientConfig,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            agent: config.build(),
            config,
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        let req = apply_headers(self.agent.get(url), &self.config.headers);
        let resp = req
            .call()
            .map_err(|err| RegistryError::transport(url, err))?;

        let status = resp.status();
        trace!(url, status = status.as_u16(), "received response");
        if !status.is_success() {
            return Err(RegistryError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let mut body = resp.into_body();
        body.with_config()
            .limit(MAX_INDEX_SIZE)
            .read_to_vec()
            .map_err(|err| RegistryError::transport(url, err))
    }
}

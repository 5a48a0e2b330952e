use std::time::Duration;

use impact_config::config::Config;
use ureq::{http::HeaderMap, Agent, Proxy, RequestBuilder};

pub const DEFAULT_USER_AGENT: &str = concat!("impact/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub user_agent: Option<String>,
    pub headers: Option<HeaderMap>,
    pub proxy: Option<Proxy>,
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    /// A user agent of `impact/<version>`; proxy, headers and timeout unset.
    fn default() -> Self {
        Self {
            user_agent: Some(DEFAULT_USER_AGENT.into()),
            proxy: None,
            headers: None,
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Picks up the `timeout` and `user_agent` settings from the application config.
    pub fn from_config(config: &Config) -> Self {
        let mut client = Self::default();
        if let Some(user_agent) = &config.user_agent {
            client.user_agent = Some(user_agent.clone());
        }
        client.timeout = config.timeout.map(Duration::from_secs);
        client
    }

    /// Builds an HTTP `Agent` configured from this `ClientConfig`.
    ///
    /// Status codes are not turned into errors by the agent; callers inspect
    /// the response status themselves.
    pub fn build(&self) -> Agent {
        let mut config = ureq::Agent::config_builder()
            .proxy(self.proxy.clone())
            .timeout_global(self.timeout)
            .http_status_as_error(false);

        if let Some(user_agent) = &self.user_agent {
            config = config.user_agent(user_agent);
        }

        config.build().into()
    }
}

/// Apply headers from an optional `HeaderMap` to a `RequestBuilder`.
pub(crate) fn apply_headers<B>(
    mut req: RequestBuilder<B>,
    headers: &Option<HeaderMap>,
) -> RequestBuilder<B> {
    if let Some(headers) = headers {
        for (key, value) in headers.iter() {
            req = req.header(key, value);
        }
    }
    req
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.user_agent.as_deref(), Some(DEFAULT_USER_AGENT));
        assert!(DEFAULT_USER_AGENT.starts_with("impact/"));
        assert!(config.proxy.is_none());
        assert!(config.headers.is_none());
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_client_config_from_config() {
        let mut app = Config::default_config();
        app.timeout = Some(30);
        app.user_agent = Some("custom-agent/1.0".to_string());

        let config = ClientConfig::from_config(&app);
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.user_agent.as_deref(), Some("custom-agent/1.0"));

        let config = ClientConfig::from_config(&Config::default_config());
        assert_eq!(config.timeout, None);
        assert_eq!(config.user_agent.as_deref(), Some(DEFAULT_USER_AGENT));
    }
}

use std::{sync::Arc, time::Duration};

use impact_config::config::Config;
use impact_registry::{ClientConfig, HttpTransport, RepoData, RepoDataLoader};
use tracing::trace;
use ureq::{
    http::{HeaderMap, HeaderName, HeaderValue},
    Proxy,
};

use crate::{
    cli::Args,
    error::{CliError, CliResult},
};

/// Long-lived state shared by every command of one invocation.
pub struct AppState {
    loader: RepoDataLoader<Config, HttpTransport>,
}

impl AppState {
    pub fn new(config: Config, client: ClientConfig) -> Self {
        trace!("creating new AppState");
        Self {
            loader: RepoDataLoader::new(config, HttpTransport::new(client)),
        }
    }

    pub fn config(&self) -> &Config {
        self.loader.source()
    }

    pub fn repo_data(&self) -> CliResult<Arc<RepoData>> {
        Ok(self.loader.load()?)
    }
}

/// HTTP settings from the config file, overridden by command line flags.
pub fn client_config(config: &Config, args: &Args) -> CliResult<ClientConfig> {
    let mut client = ClientConfig::from_config(config);

    if let Some(proxy) = args.proxy.as_deref() {
        client.proxy = Some(Proxy::new(proxy).map_err(|err| {
            CliError::InvalidProxy(format!("{proxy}: {err}"))
        })?);
    }

    if let Some(user_agent) = &args.user_agent {
        client.user_agent = Some(user_agent.clone());
    }

    if let Some(timeout) = args.timeout {
        client.timeout = Some(Duration::from_secs(timeout));
    }

    if let Some(headers) = &args.header {
        client.headers = Some(parse_headers(headers)?);
    }

    Ok(client)
}

fn parse_headers(headers: &[String]) -> CliResult<HeaderMap> {
    let mut map = HeaderMap::new();
    for header in headers {
        let (key, value) = header
            .split_once(':')
            .ok_or_else(|| CliError::InvalidHeader(header.clone()))?;
        let key: HeaderName = key
            .trim()
            .parse()
            .map_err(|_| CliError::InvalidHeader(header.clone()))?;
        let value: HeaderValue = value
            .trim()
            .parse()
            .map_err(|_| CliError::InvalidHeader(header.clone()))?;
        map.append(key, value);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_client_config_flags_override_file() {
        let mut config = Config::default_config();
        config.timeout = Some(60);
        config.user_agent = Some("from-file".to_string());

        let args = Args::parse_from([
            "impact",
            "--timeout",
            "5",
            "--user-agent",
            "from-flag",
            "-H",
            "Accept: application/json",
            "repos",
        ]);
        let client = client_config(&config, &args).unwrap();

        assert_eq!(client.timeout, Some(Duration::from_secs(5)));
        assert_eq!(client.user_agent.as_deref(), Some("from-flag"));
        let headers = client.headers.unwrap();
        assert_eq!(headers.get("accept").unwrap(), "application/json");
    }

    #[test]
    fn test_client_config_keeps_file_values() {
        let mut config = Config::default_config();
        config.timeout = Some(60);

        let args = Args::parse_from(["impact", "repos"]);
        let client = client_config(&config, &args).unwrap();
        assert_eq!(client.timeout, Some(Duration::from_secs(60)));
        assert!(client.headers.is_none());
        assert!(client.proxy.is_none());
    }

    #[test]
    fn test_invalid_header() {
        let result = parse_headers(&["no-colon".to_string()]);
        assert!(matches!(result, Err(CliError::InvalidHeader(_))));

        let result = parse_headers(&["bad name: x".to_string()]);
        assert!(matches!(result, Err(CliError::InvalidHeader(_))));
    }

    #[test]
    fn test_empty_config_loads_empty_index() {
        let state = AppState::new(Config::default_config(), ClientConfig::default());
        let data = state.repo_data().unwrap();
        assert!(data.is_empty());
        assert!(Arc::ptr_eq(&data, &state.repo_data().unwrap()));
    }
}

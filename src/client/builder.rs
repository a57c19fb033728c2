use super::BlizzardApi;
use crate::error::{ConfigError, Error};
use crate::interfaces::{BlizzardApiOptions, Credentials};
use std::time::Duration;
use reqwest::Client;
use url::Url;

/// Builder for a [`BlizzardApi`].
#[derive(Debug)]
pub struct BlizzardApiBuilder {
    credentials: Credentials,
    client: Option<Client>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    base_url: Option<String>,
}

impl BlizzardApiBuilder {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            client: None,
            user_agent: None,
            timeout: None,
            base_url: None,
        }
    }
    
    /// Uses an existing [`Client`]. When set, `user_agent` and `timeout` are ignored.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }
    
    pub fn user_agent<S>(mut self, user_agent: S) -> Self
    where
        S: Into<String>,
    {
        self.user_agent = Some(user_agent.into());
        self
    }
    
    /// Timeout applied to every request, including token exchanges.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
    
    /// Sends every request, API and OAuth alike, to `base_url` instead of the region's hosts.
    pub fn base_url<S>(mut self, base_url: S) -> Self
    where
        S: Into<String>,
    {
        self.base_url = Some(base_url.into());
        self
    }
    
    pub fn build(self) -> Result<BlizzardApi, Error> {
        let base_url = self.base_url
            .as_deref()
            .map(parse_base_url)
            .transpose()?;
        let options = BlizzardApiOptions {
            credentials: self.credentials,
            client: self.client,
            user_agent: self.user_agent,
            timeout: self.timeout,
            base_url,
        };
        
        BlizzardApi::from_options(options)
    }
}

fn parse_base_url(base_url: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(base_url)?;
    
    if url.cannot_be_a_base() {
        return Err(ConfigError::CannotBeABase(base_url.into()));
    }
    
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn rejects_invalid_base_url() {
        let error = BlizzardApiBuilder::new(Credentials::new("id", "secret"))
            .base_url("not a url")
            .build()
            .unwrap_err();
        
        assert!(matches!(error, Error::Config(ConfigError::InvalidBaseUrl(_))));
    }
    
    #[test]
    fn rejects_non_base_url() {
        let error = BlizzardApiBuilder::new(Credentials::new("id", "secret"))
            .base_url("mailto:someone@example.com")
            .build()
            .unwrap_err();
        
        assert!(matches!(error, Error::Config(ConfigError::CannotBeABase(_))));
    }
    
    #[test]
    fn client_build_failure_is_config_error() {
        let error = BlizzardApiBuilder::new(Credentials::new("id", "secret"))
            .user_agent("my-app\n1.0")
            .build()
            .unwrap_err();
        
        assert!(matches!(error, Error::Config(ConfigError::Client(_))));
    }
    
    #[test]
    fn builds_with_options() {
        let api = BlizzardApiBuilder::new(Credentials::new("id", "secret"))
            .user_agent("my-app/1.0")
            .timeout(Duration::from_secs(5))
            .base_url("http://localhost:8080")
            .build();
        
        assert!(api.is_ok());
    }
}

use std::fmt;
use std::time::Duration;
use reqwest::Client;
use url::Url;

/// Application credentials supplied by Blizzard.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    /// Creates new [`Credentials`].
    pub fn new<I, S>(client_id: I, client_secret: S) -> Self
    where
        I: Into<String>,
        S: Into<String>,
    {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug)]
pub struct BlizzardApiOptions {
    pub credentials: Credentials,
    pub client: Option<Client>,
    pub user_agent: Option<String>,
    pub timeout: Option<Duration>,
    pub base_url: Option<Url>,
}

#[derive(Debug, Clone)]
pub struct RequestDispatcherOptions {
    pub client: Client,
    pub base_url: Option<Url>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_secret() {
        let credentials = Credentials::new("id", "hunter2");
        let debug = format!("{credentials:?}");

        assert!(debug.contains("id"));
        assert!(!debug.contains("hunter2"));
    }
}

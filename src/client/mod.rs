//! The top-level [`BlizzardApi`] client.

mod builder;

pub use builder::BlizzardApiBuilder;

use crate::battlenet::BattlenetApi;
use crate::diablo3::Diablo3Api;
use crate::dispatcher::RequestDispatcher;
use crate::error::{ConfigError, Error};
use crate::helpers::DEFAULT_USER_AGENT;
use crate::hearthstone::HearthstoneApi;
use crate::interfaces::{BlizzardApiOptions, Credentials, RequestDispatcherOptions};
use crate::oauth::{AccessToken, AuthError, TokenManager};
use crate::region::Region;
use crate::request::QueryParams;
use crate::starcraft2::Starcraft2Api;
use crate::wow::WowApi;
use crate::wow_classic::WowClassicApi;
use std::sync::Arc;
use reqwest::Client;
use serde_json::Value;

/// Environment variable holding the client ID for [`BlizzardApi::from_env`].
pub const CLIENT_ID_ENV: &str = "BLIZZARD_CLIENT_ID";
/// Environment variable holding the client secret for [`BlizzardApi::from_env`].
pub const CLIENT_SECRET_ENV: &str = "BLIZZARD_CLIENT_SECRET";

/// Entry point to every API. Cheap to clone; clones share one token cache.
///
/// ```no_run
/// # async fn run() -> Result<(), blizzard_api::Error> {
/// use blizzard_api::{BlizzardApi, Region};
///
/// let api = BlizzardApi::new("client_id", "client_secret");
/// let card = api.hearthstone.game_data
///     .get_card(Region::Us, "en_US", "52119-arch-villain-rafaam", None)
///     .await?;
///
/// println!("{}", card["name"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BlizzardApi {
    pub battlenet: BattlenetApi,
    pub diablo3: Diablo3Api,
    pub hearthstone: HearthstoneApi,
    pub starcraft2: Starcraft2Api,
    pub wow: WowApi,
    pub wow_classic: WowClassicApi,
    dispatcher: Arc<RequestDispatcher>,
}

impl BlizzardApi {
    /// Creates a new [`BlizzardApi`] with default settings.
    pub fn new<I, S>(client_id: I, client_secret: S) -> Self
    where
        I: Into<String>,
        S: Into<String>,
    {
        let client = Client::new();
        let credentials = Credentials::new(client_id, client_secret);
        
        Self::with_client(credentials, client, None)
    }
    
    /// Creates a new [`BlizzardApiBuilder`].
    pub fn builder<I, S>(client_id: I, client_secret: S) -> BlizzardApiBuilder
    where
        I: Into<String>,
        S: Into<String>,
    {
        BlizzardApiBuilder::new(Credentials::new(client_id, client_secret))
    }
    
    /// Creates a new [`BlizzardApi`] using credentials from the `BLIZZARD_CLIENT_ID` and
    /// `BLIZZARD_CLIENT_SECRET` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let client_id = std::env::var(CLIENT_ID_ENV)
            .map_err(|_| ConfigError::MissingEnvVar(CLIENT_ID_ENV))?;
        let client_secret = std::env::var(CLIENT_SECRET_ENV)
            .map_err(|_| ConfigError::MissingEnvVar(CLIENT_SECRET_ENV))?;
        
        Ok(Self::new(client_id, client_secret))
    }
    
    fn from_options(options: BlizzardApiOptions) -> Result<Self, Error> {
        let client = match options.client {
            Some(client) => client,
            None => {
                let user_agent = options.user_agent
                    .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
                let mut builder = Client::builder()
                    .user_agent(user_agent);
                
                if let Some(timeout) = options.timeout {
                    builder = builder.timeout(timeout);
                }
                
                builder.build().map_err(ConfigError::Client)?
            },
        };
        
        Ok(Self::with_client(options.credentials, client, options.base_url))
    }
    
    fn with_client(
        credentials: Credentials,
        client: Client,
        base_url: Option<url::Url>,
    ) -> Self {
        let tokens = TokenManager::new(
            Arc::new(credentials),
            client.clone(),
            base_url.clone(),
        );
        let dispatcher = Arc::new(RequestDispatcher::new(
            RequestDispatcherOptions {
                client,
                base_url,
            },
            tokens,
        ));
        
        Self {
            battlenet: BattlenetApi::new(Arc::clone(&dispatcher)),
            diablo3: Diablo3Api::new(Arc::clone(&dispatcher)),
            hearthstone: HearthstoneApi::new(Arc::clone(&dispatcher)),
            starcraft2: Starcraft2Api::new(Arc::clone(&dispatcher)),
            wow: WowApi::new(Arc::clone(&dispatcher)),
            wow_classic: WowClassicApi::new(Arc::clone(&dispatcher)),
            dispatcher,
        }
    }
    
    /// The dispatcher shared by every facade.
    pub fn dispatcher(&self) -> &RequestDispatcher {
        &self.dispatcher
    }
    
    /// Gets the client access token for `region`, exchanging credentials if needed.
    pub async fn get_client_token(&self, region: Region) -> Result<AccessToken, AuthError> {
        self.dispatcher.tokens().get_token(region).await
    }
    
    /// Drops the cached client token for `region`.
    pub async fn invalidate_client_token(&self, region: Region) {
        self.dispatcher.tokens().invalidate(region).await
    }
    
    /// Gets any resource path not covered by a facade method.
    pub async fn get_resource(
        &self,
        region: Region,
        resource: &str,
        query: &QueryParams,
    ) -> Result<Value, Error> {
        self.dispatcher.get(region, resource, query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn client_is_send_sync() {
        fn assert_traits<T: Send + Sync + Clone>() {}
        
        assert_traits::<BlizzardApi>();
    }
    
    #[test]
    fn clones_share_dispatcher() {
        let api = BlizzardApi::new("id", "secret");
        let cloned = api.clone();
        
        assert!(std::ptr::eq(api.dispatcher(), cloned.dispatcher()));
    }
}

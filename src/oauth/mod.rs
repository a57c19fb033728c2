//! OAuth client credentials flow.
//!
//! A [`TokenManager`] holds one token slot per region. Each slot is an async mutex held for
//! the whole exchange, so callers that observe an expired token while a refresh is in flight
//! wait for that refresh instead of starting their own.

mod error;
mod token;

pub use error::AuthError;
pub use token::{AccessToken, TokenResponse};

use crate::helpers::{origin, create_api_headers};
use crate::interfaces::Credentials;
use crate::region::Region;
use std::sync::Arc;
use chrono::Utc;
use dashmap::DashMap;
use reqwest::Client;
use tokio::sync::Mutex;
use url::Url;

/// Path of the token endpoint on the OAuth host.
pub const TOKEN_PATH: &str = "/oauth/token";

type TokenSlot = Arc<Mutex<Option<AccessToken>>>;

/// Acquires and caches client access tokens per region.
#[derive(Debug)]
pub struct TokenManager {
    credentials: Arc<Credentials>,
    client: Client,
    base_url: Option<Url>,
    slots: DashMap<Region, TokenSlot>,
}

impl TokenManager {
    /// Creates a new [`TokenManager`]. When `base_url` is set, token requests are sent there
    /// instead of the region's OAuth host.
    pub fn new(
        credentials: Arc<Credentials>,
        client: Client,
        base_url: Option<Url>,
    ) -> Self {
        Self {
            credentials,
            client,
            base_url,
            slots: DashMap::new(),
        }
    }
    
    /// Gets a live token for `region`, exchanging credentials for a new one if none is cached
    /// or the cached one has expired.
    pub async fn get_token(&self, region: Region) -> Result<AccessToken, AuthError> {
        let slot = self.slot(region);
        let mut cached = slot.lock().await;
        
        if let Some(token) = cached.as_ref() {
            if !token.is_expired() {
                return Ok(token.clone());
            }
        }
        
        let token = self.exchange(region).await?;
        
        *cached = Some(token.clone());
        
        Ok(token)
    }
    
    /// Gets the cached token for `region` if it is still live. Never performs I/O. Returns
    /// `None` while a refresh for the region is in flight.
    pub fn cached_token(&self, region: Region) -> Option<AccessToken> {
        let slot = self.slots.get(&region).map(|slot| Arc::clone(slot.value()))?;
        let cached = slot.try_lock().ok()?;
        let token = cached
            .as_ref()
            .filter(|token| !token.is_expired())
            .cloned();
        
        token
    }
    
    /// Drops the cached token for `region`. The next call to [`TokenManager::get_token`]
    /// performs a fresh exchange.
    pub async fn invalidate(&self, region: Region) {
        let slot = self.slots.get(&region).map(|slot| Arc::clone(slot.value()));
        
        if let Some(slot) = slot {
            *slot.lock().await = None;
        }
    }
    
    fn slot(&self, region: Region) -> TokenSlot {
        Arc::clone(self.slots.entry(region).or_default().value())
    }
    
    /// Performs the client credentials exchange.
    async fn exchange(&self, region: Region) -> Result<AccessToken, AuthError> {
        let hosts = region.hosts();
        let url = format!("{}{TOKEN_PATH}", origin(self.base_url.as_ref(), hosts.oauth_host));
        
        log::debug!("POST {} ({})", url, region);
        
        let response = self.client.post(&url)
            .headers(create_api_headers())
            .basic_auth(&self.credentials.client_id, Some(&self.credentials.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        
        if !status.is_success() {
            return Err(AuthError::Rejected {
                status,
                body,
            });
        }
        
        let response = serde_json::from_str::<TokenResponse>(&body)?;
        
        if let Some(token_type) = &response.token_type {
            if !token_type.eq_ignore_ascii_case("bearer") {
                return Err(AuthError::UnsupportedTokenType(token_type.clone()));
            }
        }
        
        Ok(AccessToken::from_response(response, region, Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    fn manager() -> TokenManager {
        TokenManager::new(
            Arc::new(Credentials::new("id", "secret")),
            Client::new(),
            None,
        )
    }
    
    #[test]
    fn token_manager_is_send_sync() {
        fn assert_traits<T: Send + Sync>() {}
        
        assert_traits::<TokenManager>();
    }
    
    #[test]
    fn nothing_cached_initially() {
        let manager = manager();
        
        for region in Region::ALL {
            assert!(manager.cached_token(region).is_none());
        }
    }
    
    #[tokio::test]
    async fn invalidate_without_token_is_noop() {
        let manager = manager();
        
        manager.invalidate(Region::Us).await;
        
        assert!(manager.cached_token(Region::Us).is_none());
    }
}

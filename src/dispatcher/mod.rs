//! Authenticated GET dispatch shared by every facade.

mod helpers;

use crate::error::Error;
use crate::helpers::{origin, create_api_headers};
use crate::interfaces::RequestDispatcherOptions;
use crate::oauth::TokenManager;
use crate::region::Region;
use crate::request::{QueryParams, RequestSpec};
use reqwest::{Client, Request};
use serde::de::DeserializeOwned;
use url::Url;

/// Performs authenticated GET requests against the API hosts.
#[derive(Debug)]
pub struct RequestDispatcher {
    client: Client,
    base_url: Option<Url>,
    tokens: TokenManager,
}

impl RequestDispatcher {
    /// Creates a new [`RequestDispatcher`].
    pub fn new(
        options: RequestDispatcherOptions,
        tokens: TokenManager,
    ) -> Self {
        Self {
            client: options.client,
            base_url: options.base_url,
            tokens,
        }
    }
    
    /// The token manager supplying client tokens.
    pub fn tokens(&self) -> &TokenManager {
        &self.tokens
    }
    
    /// Gets `resource` from the region's API host using the cached client token, refreshing it
    /// first if it has expired.
    pub async fn get<T>(
        &self,
        region: Region,
        resource: &str,
        query: &QueryParams,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let token = self.tokens.get_token(region).await?;
        
        self.get_with_token(region, resource, query, &token.value).await
    }
    
    /// Sends a [`RequestSpec`].
    pub async fn send<T>(&self, spec: RequestSpec) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        self.get(spec.region, &spec.resource, &spec.query).await
    }
    
    /// Gets `resource` from the region's API host using a caller-supplied access token, such
    /// as a user token obtained through the authorization code flow. The cached client token
    /// is neither used nor refreshed.
    pub async fn get_with_token<T>(
        &self,
        region: Region,
        resource: &str,
        query: &QueryParams,
        access_token: &str,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let request = self.build_request(region, resource, query, access_token)?;
        
        self.execute(request).await
    }
    
    /// Gets `resource` from the region's OAuth host using a caller-supplied access token.
    pub async fn get_oauth<T>(
        &self,
        region: Region,
        resource: &str,
        access_token: &str,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{resource}", origin(self.base_url.as_ref(), region.hosts().oauth_host));
        let request = self.client.get(&url)
            .headers(create_api_headers())
            .bearer_auth(access_token)
            .build()?;
        
        self.execute(request).await
    }
    
    /// Builds the GET request for `resource`. The region's default locale is added when
    /// `query` does not name one.
    pub fn build_request(
        &self,
        region: Region,
        resource: &str,
        query: &QueryParams,
        access_token: &str,
    ) -> Result<Request, Error> {
        let hosts = region.hosts();
        let url = format!("{}{resource}", origin(self.base_url.as_ref(), hosts.api_host));
        let mut pairs = query.to_pairs();
        
        if !query.contains_key("locale") {
            pairs.push(("locale", hosts.default_locale.to_string()));
        }
        
        let request = self.client.get(&url)
            .headers(create_api_headers())
            .query(&pairs)
            .bearer_auth(access_token)
            .build()?;
        
        Ok(request)
    }
    
    async fn execute<T>(&self, request: Request) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        log::debug!("GET {}", request.url());
        
        let response = self.client.execute(request).await?;
        
        helpers::parse_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::Credentials;
    use std::sync::Arc;
    use reqwest::header::AUTHORIZATION;
    
    fn dispatcher(base_url: Option<Url>) -> RequestDispatcher {
        let client = Client::new();
        let tokens = TokenManager::new(
            Arc::new(Credentials::new("id", "secret")),
            client.clone(),
            base_url.clone(),
        );
        
        RequestDispatcher::new(RequestDispatcherOptions { client, base_url }, tokens)
    }
    
    #[test]
    fn builds_authenticated_resource_url() {
        let query = QueryParams::new().with("locale", "en_US");
        let request = dispatcher(None)
            .build_request(Region::Us, "/hearthstone/cards/1", &query, "token")
            .unwrap();
        
        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(request.url().as_str(), "https://us.api.blizzard.com/hearthstone/cards/1?locale=en_US");
        assert_eq!(request.headers().get(AUTHORIZATION).unwrap(), "Bearer token");
    }
    
    #[test]
    fn adds_default_locale() {
        let request = dispatcher(None)
            .build_request(Region::Eu, "/d3/data/act", &QueryParams::new(), "token")
            .unwrap();
        
        assert_eq!(request.url().as_str(), "https://eu.api.blizzard.com/d3/data/act?locale=en_GB");
    }
    
    #[test]
    fn encodes_query_values() {
        let query = QueryParams::new()
            .with("locale", "en_US")
            .with("textFilter", "fire ball")
            .with("collectible", true)
            .with("page", 2);
        let request = dispatcher(None)
            .build_request(Region::Us, "/hearthstone/cards", &query, "token")
            .unwrap();
        
        assert_eq!(
            request.url().as_str(),
            "https://us.api.blizzard.com/hearthstone/cards?locale=en_US&textFilter=fire+ball&collectible=true&page=2",
        );
    }
    
    #[test]
    fn china_uses_gateway_host() {
        let query = QueryParams::new().with("locale", "zh_CN");
        let request = dispatcher(None)
            .build_request(Region::Cn, "/hearthstone/metadata", &query, "token")
            .unwrap();
        
        assert_eq!(request.url().as_str(), "https://gateway.battlenet.com.cn/hearthstone/metadata?locale=zh_CN");
    }
    
    #[test]
    fn base_url_replaces_host() {
        let base_url = Url::parse("http://localhost:9000").unwrap();
        let query = QueryParams::new().with("locale", "en_US");
        let request = dispatcher(Some(base_url))
            .build_request(Region::Kr, "/sc2/player/1", &query, "token")
            .unwrap();
        
        assert_eq!(request.url().as_str(), "http://localhost:9000/sc2/player/1?locale=en_US");
    }
}

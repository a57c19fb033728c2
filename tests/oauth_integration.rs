//! Client credentials exchange and per-region token caching against a mock token endpoint.

mod common;

use std::time::Duration;
use blizzard_api::{AuthError, BlizzardApi, Error, Region};
use common::{api, mock_token, token_json, CLIENT_ID, CLIENT_SECRET};
use httpmock::prelude::*;

#[tokio::test]
async fn exchanges_credentials_for_token() {
    let server = MockServer::start();
    let token_mock = mock_token(&server, "first-token", 86399);
    let api = api(&server);
    let token = api.get_client_token(Region::Us).await.unwrap();
    
    assert_eq!(token.value, "first-token");
    assert_eq!(token.region, Region::Us);
    assert!(!token.is_expired());
    token_mock.assert_calls(1);
}

#[tokio::test]
async fn caches_token_within_validity() {
    let server = MockServer::start();
    let token_mock = mock_token(&server, "cached-token", 86399);
    let api = api(&server);
    let first = api.get_client_token(Region::Eu).await.unwrap();
    let second = api.get_client_token(Region::Eu).await.unwrap();
    
    assert_eq!(first, second);
    assert_eq!(api.dispatcher().tokens().cached_token(Region::Eu), Some(first));
    token_mock.assert_calls(1);
}

#[tokio::test]
async fn refreshes_expired_token() {
    let server = MockServer::start();
    let mut expired_mock = mock_token(&server, "expired-token", 0);
    let api = api(&server);
    let first = api.get_client_token(Region::Us).await.unwrap();
    
    assert!(first.is_expired());
    assert!(api.dispatcher().tokens().cached_token(Region::Us).is_none());
    expired_mock.assert_calls(1);
    expired_mock.delete();
    
    let fresh_mock = mock_token(&server, "fresh-token", 86399);
    let second = api.get_client_token(Region::Us).await.unwrap();
    let third = api.get_client_token(Region::Us).await.unwrap();
    
    assert_ne!(first.value, second.value);
    assert_eq!(second.value, "fresh-token");
    assert_eq!(second, third);
    fresh_mock.assert_calls(1);
}

#[tokio::test]
async fn caches_tokens_per_region() {
    let server = MockServer::start();
    let token_mock = mock_token(&server, "token", 86399);
    let api = api(&server);
    
    for region in Region::ALL {
        let token = api.get_client_token(region).await.unwrap();
        
        assert_eq!(token.region, region);
    }
    
    api.get_client_token(Region::Kr).await.unwrap();
    token_mock.assert_calls(Region::ALL.len());
}

#[tokio::test]
async fn invalidate_forces_new_exchange() {
    let server = MockServer::start();
    let token_mock = mock_token(&server, "token", 86399);
    let api = api(&server);
    
    api.get_client_token(Region::Tw).await.unwrap();
    api.invalidate_client_token(Region::Tw).await;
    
    assert!(api.dispatcher().tokens().cached_token(Region::Tw).is_none());
    
    api.get_client_token(Region::Tw).await.unwrap();
    token_mock.assert_calls(2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_callers_share_one_exchange() {
    let server = MockServer::start();
    let body = token_json("shared-token", 86399);
    let token_mock = server.mock(|when, then| {
        when.method(POST).path("/oauth/token");
        then.status(200)
            .header("content-type", "application/json")
            .delay(Duration::from_millis(200))
            .body(body);
    });
    let api = api(&server);
    let handles = (0..8)
        .map(|_| {
            let api = api.clone();
            
            tokio::spawn(async move {
                api.get_client_token(Region::Us).await
            })
        })
        .collect::<Vec<_>>();
    
    for handle in handles {
        let token = handle.await.unwrap().unwrap();
        
        assert_eq!(token.value, "shared-token");
    }
    
    token_mock.assert_calls(1);
}

#[tokio::test]
async fn rejected_exchange_is_auth_error() {
    let server = MockServer::start();
    let token_mock = server.mock(|when, then| {
        when.method(POST).path("/oauth/token");
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"error":"invalid_client","error_description":"Invalid client or Invalid client credentials"}"#);
    });
    let api = api(&server);
    let error = api.get_client_token(Region::Us).await.unwrap_err();
    
    match error {
        AuthError::Rejected { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid_client"));
        },
        error => panic!("unexpected error: {error}"),
    }
    
    token_mock.assert_calls(1);
}

#[tokio::test]
async fn rejected_exchange_fails_resource_request() {
    let server = MockServer::start();
    
    server.mock(|when, then| {
        when.method(POST).path("/oauth/token");
        then.status(401).body("unauthorized");
    });
    
    let resource_mock = server.mock(|when, then| {
        when.method(GET).path("/hearthstone/metadata");
        then.status(200).body("{}");
    });
    let api = api(&server);
    let error = api.hearthstone.game_data
        .get_metadata(Region::Us, "en_US")
        .await
        .unwrap_err();
    
    assert!(matches!(error, Error::Auth(AuthError::Rejected { .. })));
    resource_mock.assert_calls(0);
}

#[tokio::test]
async fn malformed_token_response_is_auth_error() {
    let server = MockServer::start();
    
    server.mock(|when, then| {
        when.method(POST).path("/oauth/token");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"token_type":"bearer"}"#);
    });
    
    let api = api(&server);
    let error = api.get_client_token(Region::Us).await.unwrap_err();
    
    assert!(matches!(error, AuthError::InvalidResponse(_)));
}

#[tokio::test]
async fn accepts_string_expires_in() {
    let server = MockServer::start();
    
    server.mock(|when, then| {
        when.method(POST).path("/oauth/token");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"access_token":"token","token_type":"bearer","expires_in":"86399"}"#);
    });
    
    let api = api(&server);
    let token = api.get_client_token(Region::Us).await.unwrap();
    
    assert!(!token.is_expired());
}

#[tokio::test]
async fn unreachable_token_endpoint_is_request_error() {
    let api = BlizzardApi::builder(CLIENT_ID, CLIENT_SECRET)
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();
    let error = api.get_client_token(Region::Us).await.unwrap_err();
    
    assert!(matches!(error, AuthError::Request(_)), "unexpected error: {error}");
    assert!(api.dispatcher().tokens().cached_token(Region::Us).is_none());
}

#![allow(dead_code)]

use blizzard_api::BlizzardApi;
use httpmock::prelude::*;
use httpmock::Mock;

pub const CLIENT_ID: &str = "client_id";
pub const CLIENT_SECRET: &str = "client_secret";
/// `client_id:client_secret` in base64.
pub const BASIC_AUTH: &str = "Basic Y2xpZW50X2lkOmNsaWVudF9zZWNyZXQ=";

pub fn token_json(token: &str, expires_in: u64) -> String {
    format!(r#"{{"access_token":"{token}","token_type":"bearer","expires_in":{expires_in}}}"#)
}

/// Mocks the token endpoint, returning `token` valid for `expires_in` seconds.
pub fn mock_token<'a>(server: &'a MockServer, token: &str, expires_in: u64) -> Mock<'a> {
    let body = token_json(token, expires_in);
    
    server.mock(|when, then| {
        when.method(POST)
            .path("/oauth/token")
            .header("authorization", BASIC_AUTH)
            .body("grant_type=client_credentials");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

/// Builds a client sending every request to `server`.
pub fn api(server: &MockServer) -> BlizzardApi {
    BlizzardApi::builder(CLIENT_ID, CLIENT_SECRET)
        .base_url(server.base_url())
        .build()
        .unwrap()
}

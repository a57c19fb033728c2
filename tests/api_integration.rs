//! Facade methods against a mock API: paths, query parameters, bearer headers and errors.

mod common;

use blizzard_api::{BlizzardApi, Error, QueryParams, Region};
use common::{api, mock_token, CLIENT_ID, CLIENT_SECRET};
use httpmock::prelude::*;

#[tokio::test]
async fn gets_hearthstone_card() {
    let server = MockServer::start();
    let token_mock = mock_token(&server, "client-token", 86399);
    let card_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/hearthstone/cards/1")
            .query_param("locale", "en_US")
            .query_param("game_mode", "constructed")
            .header("authorization", "Bearer client-token");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"id":1,"name":"Ragnaros the Firelord"}"#);
    });
    let api = api(&server);
    let card = api.hearthstone.game_data
        .get_card(Region::Us, "en_US", "1", None)
        .await
        .unwrap();
    
    assert_eq!(card["name"], "Ragnaros the Firelord");
    token_mock.assert_calls(1);
    card_mock.assert_calls(1);
}

#[tokio::test]
async fn reuses_token_across_facades() {
    let server = MockServer::start();
    let token_mock = mock_token(&server, "client-token", 86399);
    let metadata_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/hearthstone/metadata")
            .header("authorization", "Bearer client-token");
        then.status(200).body("{}");
    });
    let act_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/d3/data/act/1")
            .header("authorization", "Bearer client-token");
        then.status(200).body("{}");
    });
    let api = api(&server);
    
    api.hearthstone.game_data.get_metadata(Region::Us, "en_US").await.unwrap();
    api.diablo3.community.get_act(Region::Us, "en_US", 1).await.unwrap();
    
    token_mock.assert_calls(1);
    metadata_mock.assert_calls(1);
    act_mock.assert_calls(1);
}

#[tokio::test]
async fn not_found_is_api_error() {
    let server = MockServer::start();
    
    mock_token(&server, "client-token", 86399);
    server.mock(|when, then| {
        when.method(GET).path("/hearthstone/cards/does-not-exist");
        then.status(404)
            .header("content-type", "application/json")
            .body(r#"{"code":404,"detail":"Not Found"}"#);
    });
    
    let api = api(&server);
    let error = api.hearthstone.game_data
        .get_card(Region::Us, "en_US", "does-not-exist", None)
        .await
        .unwrap_err();
    
    assert_eq!(error.status().unwrap(), 404);
    assert_eq!(error.body_json().unwrap(), serde_json::json!({"code": 404, "detail": "Not Found"}));
    
    match error {
        Error::Api { body, .. } => assert_eq!(body, r#"{"code":404,"detail":"Not Found"}"#),
        error => panic!("unexpected error: {error}"),
    }
}

#[tokio::test]
async fn invalid_json_is_parse_error() {
    let server = MockServer::start();
    
    mock_token(&server, "client-token", 86399);
    server.mock(|when, then| {
        when.method(GET).path("/hearthstone/metadata");
        then.status(200).body("<html></html>");
    });
    
    let api = api(&server);
    let error = api.hearthstone.game_data
        .get_metadata(Region::Us, "en_US")
        .await
        .unwrap_err();
    
    assert!(matches!(error, Error::Parse(_)));
}

#[tokio::test]
async fn gets_user_info_with_supplied_token() {
    let server = MockServer::start();
    let token_mock = mock_token(&server, "client-token", 86399);
    let user_info_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/oauth/userinfo")
            .header("authorization", "Bearer user-token");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"sub":"1","id":1,"battletag":"Player#1234"}"#);
    });
    let api = api(&server);
    
    // a cached client token must not leak into the user info request
    api.get_client_token(Region::Us).await.unwrap();
    
    let user_info = api.battlenet.oauth
        .get_user_info(Region::Us, "user-token")
        .await
        .unwrap();
    
    assert_eq!(user_info["battletag"], "Player#1234");
    token_mock.assert_calls(1);
    user_info_mock.assert_calls(1);
}

#[tokio::test]
async fn merges_search_criteria() {
    let server = MockServer::start();
    
    mock_token(&server, "client-token", 86399);
    
    let search_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/hearthstone/cards")
            .query_param("locale", "en_US")
            .query_param("class", "mage")
            .query_param("manaCost", "7")
            .query_param("collectible", "true");
        then.status(200).body(r#"{"cards":[],"cardCount":0}"#);
    });
    let api = api(&server);
    let query = QueryParams::new()
        .with("class", "mage")
        .with("manaCost", 7)
        .with("collectible", true)
        .with("locale", "fr_FR");
    let cards = api.hearthstone.game_data
        .search_cards(Region::Us, "en_US", query)
        .await
        .unwrap();
    
    assert_eq!(cards["cardCount"], 0);
    search_mock.assert_calls(1);
}

#[tokio::test]
async fn adds_wow_namespace() {
    let server = MockServer::start();
    
    mock_token(&server, "client-token", 86399);
    
    let mount_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/data/wow/mount/6")
            .query_param("namespace", "static-eu")
            .query_param("locale", "en_GB");
        then.status(200).body(r#"{"id":6}"#);
    });
    let realms_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/data/wow/realm/index")
            .query_param("namespace", "dynamic-classic-us");
        then.status(200).body(r#"{"realms":[]}"#);
    });
    let api = api(&server);
    
    api.wow.game_data.get_mount(Region::Eu, "en_GB", 6).await.unwrap();
    api.wow_classic.game_data.get_realms_index(Region::Us, "en_US").await.unwrap();
    
    mount_mock.assert_calls(1);
    realms_mock.assert_calls(1);
}

#[tokio::test]
async fn lowercases_character_names() {
    let server = MockServer::start();
    
    mock_token(&server, "client-token", 86399);
    
    let character_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/profile/wow/character/area-52/thrall/equipment")
            .query_param("namespace", "profile-us");
        then.status(200).body(r#"{"equipped_items":[]}"#);
    });
    let api = api(&server);
    
    api.wow.profile
        .get_character_equipment_summary(Region::Us, "en_US", "area-52", "Thrall")
        .await
        .unwrap();
    
    character_mock.assert_calls(1);
}

#[tokio::test]
async fn account_profile_uses_user_token() {
    let server = MockServer::start();
    let token_mock = mock_token(&server, "client-token", 86399);
    let account_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/profile/user/wow")
            .query_param("namespace", "profile-us")
            .header("authorization", "Bearer user-token");
        then.status(200).body(r#"{"id":1}"#);
    });
    let api = api(&server);
    
    api.wow.profile
        .get_account_profile_summary(Region::Us, "en_US", "user-token")
        .await
        .unwrap();
    
    account_mock.assert_calls(1);
    token_mock.assert_calls(0);
}

#[tokio::test]
async fn get_resource_adds_default_locale() {
    let server = MockServer::start();
    
    mock_token(&server, "client-token", 86399);
    
    let resource_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/sc2/ladder/season/2")
            .query_param("locale", "en_GB");
        then.status(200).body(r#"{"seasonId":60}"#);
    });
    let api = api(&server);
    let season = api
        .get_resource(Region::Eu, "/sc2/ladder/season/2", &QueryParams::new())
        .await
        .unwrap();
    
    assert_eq!(season["seasonId"], 60);
    resource_mock.assert_calls(1);
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    let api = BlizzardApi::builder(CLIENT_ID, CLIENT_SECRET)
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();
    let error = api.battlenet.oauth
        .get_user_info(Region::Us, "user-token")
        .await
        .unwrap_err();
    
    assert!(matches!(error, Error::Network(_)), "unexpected error: {error}");
    assert!(error.status().is_none());
}

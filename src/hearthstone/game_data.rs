use crate::dispatcher::RequestDispatcher;
use crate::error::Error;
use crate::helpers::encode_path_segment;
use crate::region::Region;
use crate::request::{QueryParams, RequestSpec};
use std::sync::Arc;
use serde_json::Value;

/// Game mode used by [`HearthstoneGameDataApi::get_card`] when none is given.
pub const DEFAULT_GAME_MODE: &str = "constructed";

/// Hearthstone game data methods.
#[derive(Debug, Clone)]
pub struct HearthstoneGameDataApi {
    dispatcher: Arc<RequestDispatcher>,
}

impl HearthstoneGameDataApi {
    pub(crate) fn new(dispatcher: Arc<RequestDispatcher>) -> Self {
        Self {
            dispatcher,
        }
    }
    
    // Cards
    
    /// Searches cards. Search criteria such as `set`, `class`, `manaCost`, `page` or
    /// `gameMode` go in `query`.
    pub async fn search_cards(
        &self,
        region: Region,
        locale: &str,
        query: QueryParams,
    ) -> Result<Value, Error> {
        let spec = RequestSpec::new(region, "/hearthstone/cards", locale)
            .extend(query);
        
        self.dispatcher.send(spec).await
    }
    
    /// Gets a card by ID or slug. `game_mode` defaults to `"constructed"`.
    pub async fn get_card(
        &self,
        region: Region,
        locale: &str,
        id_or_slug: &str,
        game_mode: Option<&str>,
    ) -> Result<Value, Error> {
        let resource = format!("/hearthstone/cards/{}", encode_path_segment(id_or_slug));
        let spec = RequestSpec::new(region, resource, locale)
            .param("game_mode", game_mode.unwrap_or(DEFAULT_GAME_MODE));
        
        self.dispatcher.send(spec).await
    }
    
    // Card backs
    
    pub async fn search_card_backs(
        &self,
        region: Region,
        locale: &str,
        query: QueryParams,
    ) -> Result<Value, Error> {
        let spec = RequestSpec::new(region, "/hearthstone/cardbacks", locale)
            .extend(query);
        
        self.dispatcher.send(spec).await
    }
    
    pub async fn get_card_back(
        &self,
        region: Region,
        locale: &str,
        id_or_slug: &str,
    ) -> Result<Value, Error> {
        let resource = format!("/hearthstone/cardbacks/{}", encode_path_segment(id_or_slug));
        let spec = RequestSpec::new(region, resource, locale);
        
        self.dispatcher.send(spec).await
    }
    
    // Decks
    
    /// Finds a deck by deck `code`, or by `ids` plus `hero`, given in `query`.
    pub async fn get_deck(
        &self,
        region: Region,
        locale: &str,
        query: QueryParams,
    ) -> Result<Value, Error> {
        let spec = RequestSpec::new(region, "/hearthstone/deck", locale)
            .extend(query);
        
        self.dispatcher.send(spec).await
    }
    
    // Metadata
    
    pub async fn get_metadata(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        let spec = RequestSpec::new(region, "/hearthstone/metadata", locale);
        
        self.dispatcher.send(spec).await
    }
    
    /// Gets one type of metadata, e.g. `"sets"` or `"classes"`.
    pub async fn get_metadata_type(
        &self,
        region: Region,
        locale: &str,
        type_id: &str,
    ) -> Result<Value, Error> {
        let resource = format!("/hearthstone/metadata/{}", encode_path_segment(type_id));
        let spec = RequestSpec::new(region, resource, locale);
        
        self.dispatcher.send(spec).await
    }
}

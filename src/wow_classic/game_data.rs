use crate::dispatcher::RequestDispatcher;
use crate::error::Error;
use crate::helpers::encode_path_segment;
use crate::region::Region;
use crate::request::{QueryParams, RequestSpec};
use crate::wow::Namespace;
use std::sync::Arc;
use serde_json::Value;

/// World of Warcraft Classic game data methods.
///
/// Same resource paths as retail, served from the `static-classic-{region}` and
/// `dynamic-classic-{region}` namespaces.
#[derive(Debug, Clone)]
pub struct WowClassicGameDataApi {
    dispatcher: Arc<RequestDispatcher>,
}

impl WowClassicGameDataApi {
    pub(crate) fn new(dispatcher: Arc<RequestDispatcher>) -> Self {
        Self {
            dispatcher,
        }
    }
    
    async fn get<R>(
        &self,
        region: Region,
        locale: &str,
        namespace: Namespace,
        resource: R,
    ) -> Result<Value, Error>
    where
        R: Into<String>,
    {
        let spec = RequestSpec::new(region, resource, locale)
            .param("namespace", namespace.classic_for_region(region));
        
        self.dispatcher.send(spec).await
    }
    
    async fn search(
        &self,
        region: Region,
        locale: &str,
        namespace: Namespace,
        resource: &str,
        query: QueryParams,
    ) -> Result<Value, Error> {
        let spec = RequestSpec::new(region, resource, locale)
            .param("namespace", namespace.classic_for_region(region))
            .extend(query);
        
        self.dispatcher.send(spec).await
    }
    
    // Auction house
    
    /// Lists the auction houses (alliance, horde, neutral) of a connected realm.
    pub async fn get_auction_house_index(
        &self,
        region: Region,
        locale: &str,
        connected_realm_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/connected-realm/{connected_realm_id}/auctions/index");
        
        self.get(region, locale, Namespace::Dynamic, resource).await
    }
    
    pub async fn get_auctions(
        &self,
        region: Region,
        locale: &str,
        connected_realm_id: u64,
        auction_house_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!(
            "/data/wow/connected-realm/{connected_realm_id}/auctions/{auction_house_id}",
        );
        
        self.get(region, locale, Namespace::Dynamic, resource).await
    }
    
    // Connected realm
    
    pub async fn get_connected_realms_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Dynamic, "/data/wow/connected-realm/index").await
    }
    
    pub async fn get_connected_realm(
        &self,
        region: Region,
        locale: &str,
        connected_realm_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/connected-realm/{connected_realm_id}");
        
        self.get(region, locale, Namespace::Dynamic, resource).await
    }
    
    pub async fn search_connected_realm(
        &self,
        region: Region,
        locale: &str,
        query: QueryParams,
    ) -> Result<Value, Error> {
        self.search(region, locale, Namespace::Dynamic, "/data/wow/search/connected-realm", query).await
    }
    
    // Creature
    
    pub async fn get_creature_families_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/creature-family/index").await
    }
    
    pub async fn get_creature_family(
        &self,
        region: Region,
        locale: &str,
        creature_family_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/creature-family/{creature_family_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_creature_types_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/creature-type/index").await
    }
    
    pub async fn get_creature_type(
        &self,
        region: Region,
        locale: &str,
        creature_type_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/creature-type/{creature_type_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_creature(
        &self,
        region: Region,
        locale: &str,
        creature_id: u64,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, format!("/data/wow/creature/{creature_id}")).await
    }
    
    pub async fn search_creature(
        &self,
        region: Region,
        locale: &str,
        query: QueryParams,
    ) -> Result<Value, Error> {
        self.search(region, locale, Namespace::Static, "/data/wow/search/creature", query).await
    }
    
    pub async fn get_creature_display_media(
        &self,
        region: Region,
        locale: &str,
        creature_display_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/media/creature-display/{creature_display_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_creature_family_media(
        &self,
        region: Region,
        locale: &str,
        creature_family_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/media/creature-family/{creature_family_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    // Guild crest
    
    pub async fn get_guild_crest_components_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/guild-crest/index").await
    }
    
    pub async fn get_guild_crest_border_media(
        &self,
        region: Region,
        locale: &str,
        border_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/media/guild-crest/border/{border_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_guild_crest_emblem_media(
        &self,
        region: Region,
        locale: &str,
        emblem_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/media/guild-crest/emblem/{emblem_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    // Item
    
    pub async fn get_item_classes_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/item-class/index").await
    }
    
    pub async fn get_item_class(
        &self,
        region: Region,
        locale: &str,
        item_class_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/item-class/{item_class_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_item_subclass(
        &self,
        region: Region,
        locale: &str,
        item_class_id: u64,
        item_subclass_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!(
            "/data/wow/item-class/{item_class_id}/item-subclass/{item_subclass_id}",
        );
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_item(
        &self,
        region: Region,
        locale: &str,
        item_id: u64,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, format!("/data/wow/item/{item_id}")).await
    }
    
    pub async fn get_item_media(
        &self,
        region: Region,
        locale: &str,
        item_id: u64,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, format!("/data/wow/media/item/{item_id}")).await
    }
    
    pub async fn search_item(
        &self,
        region: Region,
        locale: &str,
        query: QueryParams,
    ) -> Result<Value, Error> {
        self.search(region, locale, Namespace::Static, "/data/wow/search/item", query).await
    }
    
    // Media search
    
    pub async fn search_media(
        &self,
        region: Region,
        locale: &str,
        query: QueryParams,
    ) -> Result<Value, Error> {
        self.search(region, locale, Namespace::Static, "/data/wow/search/media", query).await
    }
    
    // Playable class
    
    pub async fn get_playable_classes_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/playable-class/index").await
    }
    
    pub async fn get_playable_class(
        &self,
        region: Region,
        locale: &str,
        class_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/playable-class/{class_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    pub async fn get_playable_class_media(
        &self,
        region: Region,
        locale: &str,
        class_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/media/playable-class/{class_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    // Playable race
    
    pub async fn get_playable_races_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/playable-race/index").await
    }
    
    pub async fn get_playable_race(
        &self,
        region: Region,
        locale: &str,
        playable_race_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/playable-race/{playable_race_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    // Power type
    
    pub async fn get_power_types_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Static, "/data/wow/power-type/index").await
    }
    
    pub async fn get_power_type(
        &self,
        region: Region,
        locale: &str,
        power_type_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/power-type/{power_type_id}");
        
        self.get(region, locale, Namespace::Static, resource).await
    }
    
    // PvP season
    
    pub async fn get_pvp_regions_index(
        &self,
        region: Region,
        locale: &str,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Dynamic, "/data/wow/pvp-region/index").await
    }
    
    pub async fn get_pvp_seasons_index(
        &self,
        region: Region,
        locale: &str,
        pvp_region_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/pvp-region/{pvp_region_id}/pvp-season/index");
        
        self.get(region, locale, Namespace::Dynamic, resource).await
    }
    
    pub async fn get_pvp_season(
        &self,
        region: Region,
        locale: &str,
        pvp_region_id: u64,
        pvp_season_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/pvp-region/{pvp_region_id}/pvp-season/{pvp_season_id}");
        
        self.get(region, locale, Namespace::Dynamic, resource).await
    }
    
    pub async fn get_pvp_leaderboards_index(
        &self,
        region: Region,
        locale: &str,
        pvp_region_id: u64,
        pvp_season_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!(
            "/data/wow/pvp-region/{pvp_region_id}/pvp-season/{pvp_season_id}/pvp-leaderboard/index",
        );
        
        self.get(region, locale, Namespace::Dynamic, resource).await
    }
    
    pub async fn get_pvp_leaderboard(
        &self,
        region: Region,
        locale: &str,
        pvp_region_id: u64,
        pvp_season_id: u64,
        pvp_bracket: &str,
    ) -> Result<Value, Error> {
        let resource = format!(
            "/data/wow/pvp-region/{pvp_region_id}/pvp-season/{pvp_season_id}/pvp-leaderboard/{}",
            encode_path_segment(pvp_bracket),
        );
        
        self.get(region, locale, Namespace::Dynamic, resource).await
    }
    
    pub async fn get_pvp_rewards_index(
        &self,
        region: Region,
        locale: &str,
        pvp_region_id: u64,
        pvp_season_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!(
            "/data/wow/pvp-region/{pvp_region_id}/pvp-season/{pvp_season_id}/pvp-reward/index",
        );
        
        self.get(region, locale, Namespace::Dynamic, resource).await
    }
    
    // Realm
    
    pub async fn get_realms_index(&self, region: Region, locale: &str) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Dynamic, "/data/wow/realm/index").await
    }
    
    pub async fn get_realm(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
    ) -> Result<Value, Error> {
        let resource = format!("/data/wow/realm/{}", encode_path_segment(realm_slug));
        
        self.get(region, locale, Namespace::Dynamic, resource).await
    }
    
    pub async fn search_realm(
        &self,
        region: Region,
        locale: &str,
        query: QueryParams,
    ) -> Result<Value, Error> {
        self.search(region, locale, Namespace::Dynamic, "/data/wow/search/realm", query).await
    }
    
    // Region
    
    pub async fn get_regions_index(&self, region: Region, locale: &str) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Dynamic, "/data/wow/region/index").await
    }
    
    pub async fn get_region(
        &self,
        region: Region,
        locale: &str,
        region_id: u64,
    ) -> Result<Value, Error> {
        self.get(region, locale, Namespace::Dynamic, format!("/data/wow/region/{region_id}")).await
    }
}

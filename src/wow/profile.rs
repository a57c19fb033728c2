use super::Namespace;
use crate::dispatcher::RequestDispatcher;
use crate::error::Error;
use crate::helpers::encode_path_segment;
use crate::region::Region;
use crate::request::{QueryParams, RequestSpec};
use std::sync::Arc;
use serde_json::Value;

/// World of Warcraft profile methods.
///
/// Character and guild methods use the client token. Account methods need a user token
/// granted with the `wow.profile` scope through the authorization code flow.
#[derive(Debug, Clone)]
pub struct WowProfileApi {
    dispatcher: Arc<RequestDispatcher>,
}

impl WowProfileApi {
    pub(crate) fn new(dispatcher: Arc<RequestDispatcher>) -> Self {
        Self {
            dispatcher,
        }
    }
    
    async fn get(
        &self,
        region: Region,
        locale: &str,
        resource: String,
    ) -> Result<Value, Error> {
        let spec = RequestSpec::new(region, resource, locale)
            .param("namespace", Namespace::Profile.for_region(region));
        
        self.dispatcher.send(spec).await
    }
    
    async fn get_account(
        &self,
        region: Region,
        locale: &str,
        access_token: &str,
        resource: String,
    ) -> Result<Value, Error> {
        let query = QueryParams::new()
            .with("locale", locale)
            .with("namespace", Namespace::Profile.for_region(region));
        
        self.dispatcher.get_with_token(region, &resource, &query, access_token).await
    }
    
    // Character names are matched in lowercase.
    async fn get_character(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
        suffix: &str,
    ) -> Result<Value, Error> {
        let resource = format!(
            "/profile/wow/character/{}/{}{suffix}",
            encode_path_segment(realm_slug),
            encode_path_segment(&character_name.to_lowercase()),
        );
        
        self.get(region, locale, resource).await
    }
    
    async fn get_guild_resource(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        name_slug: &str,
        suffix: &str,
    ) -> Result<Value, Error> {
        let resource = format!(
            "/data/wow/guild/{}/{}{suffix}",
            encode_path_segment(realm_slug),
            encode_path_segment(name_slug),
        );
        
        self.get(region, locale, resource).await
    }
    
    // Account profile
    
    /// Gets a profile summary for the account that granted `access_token`.
    pub async fn get_account_profile_summary(
        &self,
        region: Region,
        locale: &str,
        access_token: &str,
    ) -> Result<Value, Error> {
        self.get_account(region, locale, access_token, "/profile/user/wow".into()).await
    }
    
    /// Gets a protected profile summary for a character on the account that granted
    /// `access_token`.
    pub async fn get_protected_character_profile_summary(
        &self,
        region: Region,
        locale: &str,
        access_token: &str,
        realm_id: u64,
        character_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/profile/user/wow/protected-character/{realm_id}-{character_id}");
        
        self.get_account(region, locale, access_token, resource).await
    }
    
    pub async fn get_account_collections_index(
        &self,
        region: Region,
        locale: &str,
        access_token: &str,
    ) -> Result<Value, Error> {
        let resource = "/profile/user/wow/collections".into();
        
        self.get_account(region, locale, access_token, resource).await
    }
    
    pub async fn get_account_mounts_collection_summary(
        &self,
        region: Region,
        locale: &str,
        access_token: &str,
    ) -> Result<Value, Error> {
        let resource = "/profile/user/wow/collections/mounts".into();
        
        self.get_account(region, locale, access_token, resource).await
    }
    
    pub async fn get_account_pets_collection_summary(
        &self,
        region: Region,
        locale: &str,
        access_token: &str,
    ) -> Result<Value, Error> {
        let resource = "/profile/user/wow/collections/pets".into();
        
        self.get_account(region, locale, access_token, resource).await
    }
    
    // Character achievements
    
    pub async fn get_character_achievements_summary(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, Error> {
        self.get_character(region, locale, realm_slug, character_name, "/achievements").await
    }
    
    pub async fn get_character_achievement_statistics(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, Error> {
        self.get_character(region, locale, realm_slug, character_name, "/achievements/statistics").await
    }
    
    // Character appearance
    
    pub async fn get_character_appearance_summary(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, Error> {
        self.get_character(region, locale, realm_slug, character_name, "/appearance").await
    }
    
    // Character collections
    
    pub async fn get_character_collections_index(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, Error> {
        self.get_character(region, locale, realm_slug, character_name, "/collections").await
    }
    
    pub async fn get_character_mounts_collection_summary(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, Error> {
        self.get_character(region, locale, realm_slug, character_name, "/collections/mounts").await
    }
    
    pub async fn get_character_pets_collection_summary(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, Error> {
        self.get_character(region, locale, realm_slug, character_name, "/collections/pets").await
    }
    
    pub async fn get_character_heirlooms_collection_summary(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, Error> {
        self.get_character(region, locale, realm_slug, character_name, "/collections/heirlooms").await
    }
    
    pub async fn get_character_toys_collection_summary(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, Error> {
        self.get_character(region, locale, realm_slug, character_name, "/collections/toys").await
    }
    
    // Character encounters
    
    pub async fn get_character_encounters_summary(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, Error> {
        self.get_character(region, locale, realm_slug, character_name, "/encounters").await
    }
    
    pub async fn get_character_dungeons(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, Error> {
        self.get_character(region, locale, realm_slug, character_name, "/encounters/dungeons").await
    }
    
    pub async fn get_character_raids(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, Error> {
        self.get_character(region, locale, realm_slug, character_name, "/encounters/raids").await
    }
    
    // Character equipment
    
    pub async fn get_character_equipment_summary(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, Error> {
        self.get_character(region, locale, realm_slug, character_name, "/equipment").await
    }
    
    // Character hunter pets
    
    /// Only hunters have hunter pets; other classes get a 404.
    pub async fn get_character_hunter_pets_summary(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, Error> {
        self.get_character(region, locale, realm_slug, character_name, "/hunter-pets").await
    }
    
    // Character media
    
    pub async fn get_character_media_summary(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, Error> {
        self.get_character(region, locale, realm_slug, character_name, "/character-media").await
    }
    
    // Character mythic keystone profile
    
    pub async fn get_character_mythic_keystone_profile_index(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, Error> {
        self.get_character(region, locale, realm_slug, character_name, "/mythic-keystone-profile").await
    }
    
    // Character professions
    
    pub async fn get_character_professions_summary(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, Error> {
        self.get_character(region, locale, realm_slug, character_name, "/professions").await
    }
    
    // Character profile
    
    pub async fn get_character_profile_summary(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, Error> {
        self.get_character(region, locale, realm_slug, character_name, "").await
    }
    
    /// Gets the status and a unique ID for a character.
    ///
    /// A 404 means the character no longer exists; compare the ID with a stored one to detect
    /// a deleted character whose name was taken by a new one.
    pub async fn get_character_profile_status(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, Error> {
        self.get_character(region, locale, realm_slug, character_name, "/status").await
    }
    
    // Character PvP
    
    pub async fn get_character_pvp_summary(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, Error> {
        self.get_character(region, locale, realm_slug, character_name, "/pvp-summary").await
    }
    
    // Character quests
    
    pub async fn get_character_quests(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, Error> {
        self.get_character(region, locale, realm_slug, character_name, "/quests").await
    }
    
    pub async fn get_character_completed_quests(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, Error> {
        self.get_character(region, locale, realm_slug, character_name, "/quests/completed").await
    }
    
    // Character reputations
    
    pub async fn get_character_reputations_summary(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, Error> {
        self.get_character(region, locale, realm_slug, character_name, "/reputations").await
    }
    
    // Character soulbinds
    
    pub async fn get_character_soulbinds(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, Error> {
        self.get_character(region, locale, realm_slug, character_name, "/soulbinds").await
    }
    
    // Character specializations
    
    pub async fn get_character_specializations_summary(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, Error> {
        self.get_character(region, locale, realm_slug, character_name, "/specializations").await
    }
    
    // Character statistics
    
    pub async fn get_character_statistics_summary(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, Error> {
        self.get_character(region, locale, realm_slug, character_name, "/statistics").await
    }
    
    // Character titles
    
    pub async fn get_character_titles_summary(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value, Error> {
        self.get_character(region, locale, realm_slug, character_name, "/titles").await
    }
    
    // Character mythic keystone season
    
    pub async fn get_character_mythic_keystone_season_details(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
        season_id: u64,
    ) -> Result<Value, Error> {
        let suffix = format!("/mythic-keystone-profile/season/{season_id}");
        
        self.get_character(region, locale, realm_slug, character_name, &suffix).await
    }
    
    // Character PvP bracket
    
    /// Gets PvP statistics for a bracket, e.g. `"3v3"` or `"rbg"`.
    pub async fn get_character_pvp_bracket_statistics(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        character_name: &str,
        pvp_bracket: &str,
    ) -> Result<Value, Error> {
        let suffix = format!("/pvp-bracket/{}", encode_path_segment(pvp_bracket));
        
        self.get_character(region, locale, realm_slug, character_name, &suffix).await
    }
    
    // Guild
    
    pub async fn get_guild(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        name_slug: &str,
    ) -> Result<Value, Error> {
        self.get_guild_resource(region, locale, realm_slug, name_slug, "").await
    }
    
    pub async fn get_guild_activity(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        name_slug: &str,
    ) -> Result<Value, Error> {
        self.get_guild_resource(region, locale, realm_slug, name_slug, "/activity").await
    }
    
    pub async fn get_guild_achievements(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        name_slug: &str,
    ) -> Result<Value, Error> {
        self.get_guild_resource(region, locale, realm_slug, name_slug, "/achievements").await
    }
    
    pub async fn get_guild_roster(
        &self,
        region: Region,
        locale: &str,
        realm_slug: &str,
        name_slug: &str,
    ) -> Result<Value, Error> {
        self.get_guild_resource(region, locale, realm_slug, name_slug, "/roster").await
    }
}

use crate::dispatcher::RequestDispatcher;
use crate::error::Error;
use crate::region::Region;
use crate::request::RequestSpec;
use std::sync::Arc;
use serde_json::Value;

/// StarCraft II community methods.
#[derive(Debug, Clone)]
pub struct Starcraft2CommunityApi {
    dispatcher: Arc<RequestDispatcher>,
}

impl Starcraft2CommunityApi {
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
        self.dispatcher.send(RequestSpec::new(region, resource, locale)).await
    }
    
    // Profile
    
    pub async fn get_static_profile(
        &self,
        region: Region,
        locale: &str,
        region_id: u32,
    ) -> Result<Value, Error> {
        self.get(region, locale, format!("/sc2/static/profile/{region_id}")).await
    }
    
    pub async fn get_metadata_profile(
        &self,
        region: Region,
        locale: &str,
        region_id: u32,
        realm_id: u32,
        profile_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/sc2/metadata/profile/{region_id}/{realm_id}/{profile_id}");
        
        self.get(region, locale, resource).await
    }
    
    pub async fn get_profile(
        &self,
        region: Region,
        locale: &str,
        region_id: u32,
        realm_id: u32,
        profile_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/sc2/profile/{region_id}/{realm_id}/{profile_id}");
        
        self.get(region, locale, resource).await
    }
    
    pub async fn get_ladder_summary(
        &self,
        region: Region,
        locale: &str,
        region_id: u32,
        realm_id: u32,
        profile_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/sc2/profile/{region_id}/{realm_id}/{profile_id}/ladder/summary");
        
        self.get(region, locale, resource).await
    }
    
    pub async fn get_ladder(
        &self,
        region: Region,
        locale: &str,
        region_id: u32,
        realm_id: u32,
        profile_id: u64,
        ladder_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!(
            "/sc2/profile/{region_id}/{realm_id}/{profile_id}/ladder/{ladder_id}",
        );
        
        self.get(region, locale, resource).await
    }
    
    // Ladder
    
    pub async fn get_grandmaster_leaderboard(
        &self,
        region: Region,
        locale: &str,
        region_id: u32,
    ) -> Result<Value, Error> {
        self.get(region, locale, format!("/sc2/ladder/grandmaster/{region_id}")).await
    }
    
    pub async fn get_season(
        &self,
        region: Region,
        locale: &str,
        region_id: u32,
    ) -> Result<Value, Error> {
        self.get(region, locale, format!("/sc2/ladder/season/{region_id}")).await
    }
    
    // Account
    
    pub async fn get_player(
        &self,
        region: Region,
        locale: &str,
        account_id: u64,
    ) -> Result<Value, Error> {
        self.get(region, locale, format!("/sc2/player/{account_id}")).await
    }
    
    // Legacy
    
    pub async fn get_legacy_profile(
        &self,
        region: Region,
        locale: &str,
        region_id: u32,
        realm_id: u32,
        profile_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/sc2/legacy/profile/{region_id}/{realm_id}/{profile_id}");
        
        self.get(region, locale, resource).await
    }
    
    pub async fn get_legacy_ladders(
        &self,
        region: Region,
        locale: &str,
        region_id: u32,
        realm_id: u32,
        profile_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/sc2/legacy/profile/{region_id}/{realm_id}/{profile_id}/ladders");
        
        self.get(region, locale, resource).await
    }
    
    pub async fn get_legacy_match_history(
        &self,
        region: Region,
        locale: &str,
        region_id: u32,
        realm_id: u32,
        profile_id: u64,
    ) -> Result<Value, Error> {
        let resource = format!("/sc2/legacy/profile/{region_id}/{realm_id}/{profile_id}/matches");
        
        self.get(region, locale, resource).await
    }
    
    pub async fn get_legacy_ladder(
        &self,
        region: Region,
        locale: &str,
        region_id: u32,
        ladder_id: u64,
    ) -> Result<Value, Error> {
        self.get(region, locale, format!("/sc2/legacy/ladder/{region_id}/{ladder_id}")).await
    }
    
    pub async fn get_legacy_achievements(
        &self,
        region: Region,
        locale: &str,
        region_id: u32,
    ) -> Result<Value, Error> {
        self.get(region, locale, format!("/sc2/legacy/data/achievements/{region_id}")).await
    }
    
    pub async fn get_legacy_rewards(
        &self,
        region: Region,
        locale: &str,
        region_id: u32,
    ) -> Result<Value, Error> {
        self.get(region, locale, format!("/sc2/legacy/data/rewards/{region_id}")).await
    }
}

use crate::dispatcher::RequestDispatcher;
use crate::error::Error;
use crate::helpers::encode_path_segment;
use crate::region::Region;
use crate::request::RequestSpec;
use std::sync::Arc;
use serde_json::Value;

/// Diablo III game data methods (seasons and eras).
#[derive(Debug, Clone)]
pub struct Diablo3GameDataApi {
    dispatcher: Arc<RequestDispatcher>,
}

impl Diablo3GameDataApi {
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
    
    // Season
    
    pub async fn get_season_index(&self, region: Region, locale: &str) -> Result<Value, Error> {
        self.get(region, locale, "/data/d3/season/".into()).await
    }
    
    pub async fn get_season(
        &self,
        region: Region,
        locale: &str,
        season_id: u64,
    ) -> Result<Value, Error> {
        self.get(region, locale, format!("/data/d3/season/{season_id}")).await
    }
    
    /// Gets a season leaderboard, e.g. `"achievement-points"` or `"rift-barbarian"`.
    pub async fn get_season_leaderboard(
        &self,
        region: Region,
        locale: &str,
        season_id: u64,
        leaderboard_id: &str,
    ) -> Result<Value, Error> {
        let resource = format!(
            "/data/d3/season/{season_id}/leaderboard/{}",
            encode_path_segment(leaderboard_id),
        );
        
        self.get(region, locale, resource).await
    }
    
    // Era
    
    pub async fn get_era_index(&self, region: Region, locale: &str) -> Result<Value, Error> {
        self.get(region, locale, "/data/d3/era/".into()).await
    }
    
    pub async fn get_era(
        &self,
        region: Region,
        locale: &str,
        era_id: u64,
    ) -> Result<Value, Error> {
        self.get(region, locale, format!("/data/d3/era/{era_id}")).await
    }
    
    pub async fn get_era_leaderboard(
        &self,
        region: Region,
        locale: &str,
        era_id: u64,
        leaderboard_id: &str,
    ) -> Result<Value, Error> {
        let resource = format!(
            "/data/d3/era/{era_id}/leaderboard/{}",
            encode_path_segment(leaderboard_id),
        );
        
        self.get(region, locale, resource).await
    }
}

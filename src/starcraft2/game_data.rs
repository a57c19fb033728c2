use crate::dispatcher::RequestDispatcher;
use crate::error::Error;
use crate::region::Region;
use crate::request::RequestSpec;
use std::sync::Arc;
use serde_json::Value;

/// StarCraft II game data methods.
#[derive(Debug, Clone)]
pub struct Starcraft2GameDataApi {
    dispatcher: Arc<RequestDispatcher>,
}

impl Starcraft2GameDataApi {
    pub(crate) fn new(dispatcher: Arc<RequestDispatcher>) -> Self {
        Self {
            dispatcher,
        }
    }
    
    /// Gets data for a league.
    ///
    /// `queue_id` is e.g. 201 for LotV 1v1, `team_type` is 0 (arranged) or 1 (random) and
    /// `league_id` runs from 0 (Bronze) to 6 (Grandmaster).
    pub async fn get_league_data(
        &self,
        region: Region,
        locale: &str,
        season_id: u32,
        queue_id: u32,
        team_type: u32,
        league_id: u32,
    ) -> Result<Value, Error> {
        let resource = format!("/data/sc2/league/{season_id}/{queue_id}/{team_type}/{league_id}");
        let spec = RequestSpec::new(region, resource, locale);
        
        self.dispatcher.send(spec).await
    }
}

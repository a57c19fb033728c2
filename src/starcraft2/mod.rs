//! StarCraft II APIs.
//!
//! Profile methods address a profile by `region_id` (1 = US, 2 = EU, 3 = KR/TW, 5 = CN),
//! `realm_id` (1 or 2) and `profile_id`.

mod community;
mod game_data;

pub use community::Starcraft2CommunityApi;
pub use game_data::Starcraft2GameDataApi;

use crate::dispatcher::RequestDispatcher;
use std::sync::Arc;

/// StarCraft II APIs.
#[derive(Debug, Clone)]
pub struct Starcraft2Api {
    pub community: Starcraft2CommunityApi,
    pub game_data: Starcraft2GameDataApi,
}

impl Starcraft2Api {
    pub(crate) fn new(dispatcher: Arc<RequestDispatcher>) -> Self {
        Self {
            community: Starcraft2CommunityApi::new(Arc::clone(&dispatcher)),
            game_data: Starcraft2GameDataApi::new(dispatcher),
        }
    }
}

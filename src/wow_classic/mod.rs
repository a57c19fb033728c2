//! World of Warcraft Classic APIs.

mod game_data;

pub use game_data::WowClassicGameDataApi;

use crate::dispatcher::RequestDispatcher;
use std::sync::Arc;

/// World of Warcraft Classic APIs.
#[derive(Debug, Clone)]
pub struct WowClassicApi {
    pub game_data: WowClassicGameDataApi,
}

impl WowClassicApi {
    pub(crate) fn new(dispatcher: Arc<RequestDispatcher>) -> Self {
        Self {
            game_data: WowClassicGameDataApi::new(dispatcher),
        }
    }
}

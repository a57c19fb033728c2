//! Diablo III APIs.

mod community;
mod game_data;

pub use community::Diablo3CommunityApi;
pub use game_data::Diablo3GameDataApi;

use crate::dispatcher::RequestDispatcher;
use std::sync::Arc;

/// Diablo III APIs.
#[derive(Debug, Clone)]
pub struct Diablo3Api {
    pub community: Diablo3CommunityApi,
    pub game_data: Diablo3GameDataApi,
}

impl Diablo3Api {
    pub(crate) fn new(dispatcher: Arc<RequestDispatcher>) -> Self {
        Self {
            community: Diablo3CommunityApi::new(Arc::clone(&dispatcher)),
            game_data: Diablo3GameDataApi::new(dispatcher),
        }
    }
}

//! Hearthstone APIs.

mod game_data;

pub use game_data::HearthstoneGameDataApi;

use crate::dispatcher::RequestDispatcher;
use std::sync::Arc;

/// Hearthstone APIs.
#[derive(Debug, Clone)]
pub struct HearthstoneApi {
    pub game_data: HearthstoneGameDataApi,
}

impl HearthstoneApi {
    pub(crate) fn new(dispatcher: Arc<RequestDispatcher>) -> Self {
        Self {
            game_data: HearthstoneGameDataApi::new(dispatcher),
        }
    }
}

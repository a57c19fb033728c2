//! Battle.net OAuth APIs.

mod oauth;

pub use oauth::BattlenetOauthApi;

use crate::dispatcher::RequestDispatcher;
use std::sync::Arc;

/// Battle.net APIs.
#[derive(Debug, Clone)]
pub struct BattlenetApi {
    pub oauth: BattlenetOauthApi,
}

impl BattlenetApi {
    pub(crate) fn new(dispatcher: Arc<RequestDispatcher>) -> Self {
        Self {
            oauth: BattlenetOauthApi::new(dispatcher),
        }
    }
}

use crate::dispatcher::RequestDispatcher;
use crate::error::Error;
use crate::region::Region;
use std::sync::Arc;
use serde_json::Value;

/// User info endpoint on the OAuth host.
pub const USER_INFO_PATH: &str = "/oauth/userinfo";

/// Battle.net OAuth methods.
#[derive(Debug, Clone)]
pub struct BattlenetOauthApi {
    dispatcher: Arc<RequestDispatcher>,
}

impl BattlenetOauthApi {
    pub(crate) fn new(dispatcher: Arc<RequestDispatcher>) -> Self {
        Self {
            dispatcher,
        }
    }
    
    /// Gets basic information about the user who granted `access_token`.
    ///
    /// `access_token` is a user token from the authorization code flow. The cached client
    /// token is not used.
    pub async fn get_user_info(
        &self,
        region: Region,
        access_token: &str,
    ) -> Result<Value, Error> {
        self.dispatcher.get_oauth(region, USER_INFO_PATH, access_token).await
    }
}

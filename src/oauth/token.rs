use crate::region::Region;
use crate::serializers::from_number_or_string;
use crate::types::DateTime;
use std::fmt;
use chrono::{Duration, Utc};
use serde::Deserialize;

// Ten years. Keeps absurd lifetimes from overflowing the expiry timestamp.
const MAX_EXPIRES_IN_SECONDS: u64 = 315_360_000;

/// The body returned by the token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Seconds until the token expires.
    #[serde(deserialize_with = "from_number_or_string")]
    pub expires_in: u64,
}

/// A cached client access token.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    /// The bearer token.
    pub value: String,
    /// When the token stops being valid.
    pub expires_at: DateTime,
    /// The region the token was issued for.
    pub region: Region,
}

impl AccessToken {
    /// Creates an [`AccessToken`] from a token response received at `now`.
    pub fn from_response(
        response: TokenResponse,
        region: Region,
        now: DateTime,
    ) -> Self {
        let expires_in = response.expires_in.min(MAX_EXPIRES_IN_SECONDS) as i64;
        let expires_at = now + Duration::seconds(expires_in);
        
        Self {
            value: response.access_token,
            expires_at,
            region,
        }
    }
    
    /// Checks if the token is expired at `now`.
    pub fn is_expired_at(&self, now: DateTime) -> bool {
        now >= self.expires_at
    }
    
    /// Checks if the token is expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .field("region", &self.region)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    fn response(expires_in: u64) -> TokenResponse {
        serde_json::from_str(&format!(
            r#"{{"access_token":"abc","token_type":"bearer","expires_in":{expires_in}}}"#
        )).unwrap()
    }
    
    #[test]
    fn expires_after_expires_in() {
        let now = Utc::now();
        let token = AccessToken::from_response(response(60), Region::Us, now);
        
        assert_eq!(token.expires_at, now + Duration::seconds(60));
        assert!(!token.is_expired_at(now));
        assert!(!token.is_expired_at(now + Duration::seconds(59)));
        assert!(token.is_expired_at(now + Duration::seconds(60)));
    }
    
    #[test]
    fn zero_lifetime_is_immediately_expired() {
        let now = Utc::now();
        let token = AccessToken::from_response(response(0), Region::Eu, now);
        
        assert!(token.is_expired_at(now));
    }
    
    #[test]
    fn debug_hides_value() {
        let token = AccessToken::from_response(response(60), Region::Us, Utc::now());
        
        assert!(!format!("{token:?}").contains("abc"));
    }
}

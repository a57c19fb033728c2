use reqwest::StatusCode;

/// Represents a failed client credentials exchange.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token request failed: {}", .0)]
    Request(#[from] reqwest::Error),
    #[error("Token request rejected with status {}: {}", .status, .body)]
    Rejected {
        /// The HTTP status of the response.
        status: StatusCode,
        /// The raw response body.
        body: String,
    },
    #[error("Invalid token response: {}", .0)]
    InvalidResponse(#[from] serde_json::Error),
    #[error("Unsupported token type: {}", .0)]
    UnsupportedTokenType(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_renders_status_and_body() {
        let error = AuthError::Rejected {
            status: StatusCode::UNAUTHORIZED,
            body: r#"{"error":"invalid_client"}"#.into(),
        };

        assert_eq!(
            error.to_string(),
            r#"Token request rejected with status 401 Unauthorized: {"error":"invalid_client"}"#,
        );
    }

    #[test]
    fn unsupported_token_type_renders() {
        let error = AuthError::UnsupportedTokenType("mac".into());

        assert_eq!(error.to_string(), "Unsupported token type: mac");
    }
}

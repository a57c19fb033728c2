use crate::oauth::AuthError;
use reqwest::StatusCode;
use serde_json::Value;

/// Represents an error raised before any I/O is performed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown region: {}", .0)]
    UnknownRegion(String),
    #[error("Invalid base URL: {}", .0)]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("Base URL cannot be used as a base: {}", .0)]
    CannotBeABase(String),
    #[error("Missing environment variable: {}", .0)]
    MissingEnvVar(&'static str),
    #[error("Could not build HTTP client: {}", .0)]
    Client(reqwest::Error),
}

/// Any error returned by an API call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Config error: {}", .0)]
    Config(#[from] ConfigError),
    #[error("Authentication error: {}", .0)]
    Auth(#[from] AuthError),
    #[error("Request: {}", .0)]
    Network(#[from] reqwest::Error),
    #[error("API responded with status {}: {}", .status, .body)]
    Api {
        /// The HTTP status of the response.
        status: StatusCode,
        /// The raw response body.
        body: String,
    },
    #[error("JSON parse error: {}", .0)]
    Parse(#[from] serde_json::Error),
}

impl Error {
    /// The HTTP status of an [`Error::Api`] error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Parses the body of an [`Error::Api`] error as JSON. Returns `None` for other errors or if
    /// the body is not JSON.
    pub fn body_json(&self) -> Option<Value> {
        match self {
            Self::Api { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_exposes_status_and_body() {
        let error = Error::Api {
            status: StatusCode::NOT_FOUND,
            body: r#"{"code":404,"detail":"Not Found"}"#.into(),
        };
        let body = error.body_json().unwrap();

        assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(body["code"], 404);
        assert_eq!(body["detail"], "Not Found");
        assert_eq!(
            error.to_string(),
            r#"API responded with status 404 Not Found: {"code":404,"detail":"Not Found"}"#,
        );
    }

    #[test]
    fn non_json_body_is_none() {
        let error = Error::Api {
            status: StatusCode::BAD_GATEWAY,
            body: "<html>bad gateway</html>".into(),
        };

        assert!(error.body_json().is_none());
    }

    #[test]
    fn config_error_has_no_status() {
        let error = Error::from(ConfigError::UnknownRegion("xx".into()));

        assert!(error.status().is_none());
        assert_eq!(error.to_string(), "Config error: Unknown region: xx");
    }
}

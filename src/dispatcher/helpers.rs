use crate::error::Error;
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Checks the response status and parses the body.
///
/// Non-2xx responses become [`Error::Api`] carrying the status and the raw body, untouched.
pub async fn parse_response<T>(response: Response) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = response.text().await?;
    
    if !status.is_success() {
        return Err(Error::Api {
            status,
            body,
        });
    }
    
    let parsed = serde_json::from_str::<T>(&body)?;
    
    Ok(parsed)
}

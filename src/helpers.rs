use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use url::Url;

pub const DEFAULT_USER_AGENT: &str = concat!("blizzard-api/", env!("CARGO_PKG_VERSION"));

/// Creates API headers.
pub fn create_api_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    
    headers.append(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Gets the origin requests for `host` are sent to, e.g. `https://us.api.blizzard.com`. When
/// `base_url` is set it replaces the host entirely.
pub fn origin(base_url: Option<&Url>, host: &str) -> String {
    match base_url {
        Some(base_url) => base_url.as_str().trim_end_matches('/').to_string(),
        None => format!("https://{host}"),
    }
}

/// Percent-encodes a single path segment such as a slug or character name.
pub fn encode_path_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        // form encoding uses + for spaces, paths do not
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn origin_uses_https_host() {
        assert_eq!(origin(None, "us.api.blizzard.com"), "https://us.api.blizzard.com");
    }
    
    #[test]
    fn origin_prefers_base_url() {
        let base_url = Url::parse("http://127.0.0.1:8080/").unwrap();
        
        assert_eq!(origin(Some(&base_url), "us.api.blizzard.com"), "http://127.0.0.1:8080");
    }
    
    #[test]
    fn encodes_path_segments() {
        assert_eq!(encode_path_segment("area-52"), "area-52");
        assert_eq!(encode_path_segment("Jaina Proudmoore"), "Jaina%20Proudmoore");
        assert_eq!(encode_path_segment("Ænima"), "%C3%86nima");
    }
}

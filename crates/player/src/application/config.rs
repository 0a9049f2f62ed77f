//! Remote API configuration
//!
//! The base URL comes from `DUNDER_API_URL` when set and falls back to the
//! public deployment otherwise. On wasm the variable is read at build time,
//! since a browser has no process environment.

use url::Url;

/// Public deployment used when no override is configured
pub const DEFAULT_API_URL: &str = "https://dundermifflinchico.azurewebsites.net";

/// Environment variable overriding [`DEFAULT_API_URL`]
pub const API_URL_ENV: &str = "DUNDER_API_URL";

/// Path of the characters collection
pub const CHARACTERS_PATH: &str = "/api/personagens";

/// Path of the login endpoint
pub const LOGIN_PATH: &str = "/auth/login";

/// Path of the user registration endpoint
pub const REGISTER_PATH: &str = "/auth/register";

/// Base URL of the remote API, shared through Dioxus context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Builds a config for `base_url`, dropping any trailing slash.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolves the base URL from the environment.
    ///
    /// An override that is not an absolute http(s) URL is ignored with a
    /// warning rather than producing requests that can never succeed.
    pub fn from_env() -> Self {
        match Self::env_override() {
            Some(raw) => Self::from_override(&raw),
            None => Self::default(),
        }
    }

    fn from_override(raw: &str) -> Self {
        match Url::parse(raw.trim()) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::new(url.as_str()),
            Ok(url) => {
                tracing::warn!(
                    "Ignoring {} with unsupported scheme {}; using {}",
                    API_URL_ENV,
                    url.scheme(),
                    DEFAULT_API_URL
                );
                Self::default()
            }
            Err(e) => {
                tracing::warn!(
                    "Ignoring invalid {} ({}); using {}",
                    API_URL_ENV,
                    e,
                    DEFAULT_API_URL
                );
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn env_override() -> Option<String> {
        std::env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
    }

    #[cfg(target_arch = "wasm32")]
    fn env_override() -> Option<String> {
        option_env!("DUNDER_API_URL")
            .filter(|v| !v.trim().is_empty())
            .map(str::to_string)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins an absolute API path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// URL of the characters collection
    pub fn characters_url(&self) -> String {
        self.url(CHARACTERS_PATH)
    }

    /// URL of a single character, with the id percent-encoded as one segment
    pub fn character_url(&self, id: &dunder_domain::CharacterId) -> String {
        let collection = self.characters_url();
        let mut url = match Url::parse(&collection) {
            Ok(url) => url,
            Err(_) => return format!("{}/{}", collection, id),
        };
        match url.path_segments_mut() {
            Ok(mut segments) => {
                segments.push(&id.to_string());
            }
            Err(()) => return format!("{}/{}", collection, id),
        }
        url.to_string()
    }

    /// URL of an uploaded image, as referenced by `Character::foto`
    pub fn upload_url(&self, file_name: &str) -> String {
        format!("{}/uploads/{}", self.base_url, file_name)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dunder_domain::CharacterId;

    #[test]
    fn trims_trailing_slash() {
        let config = ApiConfig::new("http://localhost:3001/");
        assert_eq!(config.base_url(), "http://localhost:3001");
        assert_eq!(config.characters_url(), "http://localhost:3001/api/personagens");
    }

    #[test]
    fn builds_item_and_upload_urls() {
        let config = ApiConfig::default();
        assert_eq!(
            config.character_url(&CharacterId::numeric(7)),
            "https://dundermifflinchico.azurewebsites.net/api/personagens/7"
        );
        assert_eq!(
            config.upload_url("dwight.png"),
            "https://dundermifflinchico.azurewebsites.net/uploads/dwight.png"
        );
    }

    #[test]
    fn string_ids_are_encoded_as_a_single_segment() {
        let config = ApiConfig::new("http://localhost:3001");
        assert_eq!(
            config.character_url(&CharacterId::text("a/b?c#d")),
            "http://localhost:3001/api/personagens/a%2Fb%3Fc%23d"
        );
        assert_eq!(
            config.character_url(&CharacterId::text("6571f0c2")),
            "http://localhost:3001/api/personagens/6571f0c2"
        );
    }

    #[test]
    fn invalid_override_falls_back_to_default() {
        assert_eq!(ApiConfig::from_override("not a url"), ApiConfig::default());
        assert_eq!(ApiConfig::from_override("ftp://files"), ApiConfig::default());
        assert_eq!(
            ApiConfig::from_override("http://127.0.0.1:8080").base_url(),
            "http://127.0.0.1:8080"
        );
    }
}

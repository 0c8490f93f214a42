//! Client Configuration
//!
//! Where the backend lives and where the session token is kept.

/// Backend used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// localStorage key holding the session token
pub const TOKEN_KEY: &str = "authToken";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub token_key: &'static str,
}

impl AppConfig {
    /// Resolve the config for the running page.
    ///
    /// Order: `data-api-url` on the document root, then the
    /// `KANBANFLOW_API_URL` build variable, then `DEFAULT_API_URL`.
    pub fn from_document() -> Self {
        Self::resolve(document_api_url(), option_env!("KANBANFLOW_API_URL"))
    }

    fn resolve(attribute: Option<String>, build_env: Option<&str>) -> Self {
        let api_base_url = attribute
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .or_else(|| build_env.map(str::trim).filter(|url| !url.is_empty()).map(String::from))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            token_key: TOKEN_KEY,
        }
    }
}

fn document_api_url() -> Option<String> {
    web_sys::window()?
        .document()?
        .document_element()?
        .get_attribute("data-api-url")
}

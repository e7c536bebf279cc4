use std::env;

use async_trait::async_trait;
use reqwest::{Client, Url};

use mate_core::model::QuizPayload;

use crate::error::FetchError;

/// Source of quiz content for one play session.
#[async_trait]
pub trait QuizDataProvider: Send + Sync {
    /// Fetch the quiz for the given token.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` for any failure: transport, non-2xx status or a
    /// payload that does not validate.
    async fn fetch(&self, token: &str) -> Result<QuizPayload, FetchError>;

    /// URL the renderer should load an image reference from.
    fn asset_url(&self, image_ref: &str, _token: &str) -> String {
        image_ref.to_string()
    }
}

/// Where the token travels on each request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenPlacement {
    Query(String),
    Header(String),
}

impl Default for TokenPlacement {
    fn default() -> Self {
        Self::Query("auth".into())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderConfig {
    pub base_url: String,
    pub path: String,
    pub token_placement: TokenPlacement,
}

impl ProviderConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path: "/game-data".into(),
            token_placement: TokenPlacement::default(),
        }
    }

    #[must_use]
    pub fn with_token_placement(mut self, token_placement: TokenPlacement) -> Self {
        self.token_placement = token_placement;
        self
    }

    /// Read `MATE_API_BASE_URL`, `MATE_API_PATH` and `MATE_TOKEN_HEADER`.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            env::var("MATE_API_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".into());
        let path = env::var("MATE_API_PATH").unwrap_or_else(|_| "/game-data".into());
        let token_placement = match env::var("MATE_TOKEN_HEADER") {
            Ok(name) if !name.trim().is_empty() => TokenPlacement::Header(name.trim().into()),
            _ => TokenPlacement::default(),
        };
        Self {
            base_url,
            path,
            token_placement,
        }
    }

    fn join(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

/// Fetches quiz data over HTTP GET.
#[derive(Clone)]
pub struct HttpQuizProvider {
    client: Client,
    config: ProviderConfig,
}

impl HttpQuizProvider {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ProviderConfig::from_env())
    }

    #[must_use]
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

#[async_trait]
impl QuizDataProvider for HttpQuizProvider {
    async fn fetch(&self, token: &str) -> Result<QuizPayload, FetchError> {
        let url = self.config.join(&self.config.path);
        let request = self.client.get(url);
        let request = match &self.config.token_placement {
            TokenPlacement::Query(name) => request.query(&[(name.as_str(), token)]),
            TokenPlacement::Header(name) => request.header(name.as_str(), token),
        };

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status()));
        }

        let body = response.bytes().await?;
        let payload: QuizPayload = serde_json::from_slice(&body)?;
        Ok(payload)
    }

    fn asset_url(&self, image_ref: &str, token: &str) -> String {
        let joined = if image_ref.starts_with("http://") || image_ref.starts_with("https://") {
            image_ref.to_string()
        } else {
            self.config.join(image_ref)
        };

        let TokenPlacement::Query(name) = &self.config.token_placement else {
            return joined;
        };
        match Url::parse(&joined) {
            Ok(mut url) => {
                url.query_pairs_mut().append_pair(name, token);
                url.to_string()
            }
            Err(_) => joined,
        }
    }
}

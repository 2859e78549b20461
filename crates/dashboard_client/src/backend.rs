use std::time::Duration;

use dashboard_logging::{dash_debug, dash_trace};
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::FavoritesEnvelope;
use crate::{ApiError, Command, CommandReply, Favorite, FailureKind, StatusSnapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendSettings {
    /// Scheme, host and optional path prefix, e.g. `http://127.0.0.1:10000`.
    pub base_url: String,
    /// `None` leaves the transport default in place.
    pub connect_timeout: Option<Duration>,
    /// `None` leaves the transport default in place.
    pub request_timeout: Option<Duration>,
}

impl BackendSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

/// The backend HTTP contract consumed by the dashboard.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    async fn start(&self, command: &Command) -> Result<CommandReply, ApiError>;
    async fn stop(&self) -> Result<CommandReply, ApiError>;
    async fn status(&self) -> Result<StatusSnapshot, ApiError>;
    async fn favorites(&self) -> Result<Vec<Favorite>, ApiError>;
    async fn save_favorite(&self, favorite: &Favorite) -> Result<CommandReply, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    base_url: String,
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(settings: BackendSettings) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;

        let base_url = settings.base_url.trim_end_matches('/').to_string();
        // Fail early on a base URL that can never produce a valid endpoint.
        reqwest::Url::parse(&base_url)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, format!("{base_url}: {err}")))?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url, ApiError> {
        let raw = format!("{}{}", self.base_url, path);
        reqwest::Url::parse(&raw)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, format!("{raw}: {err}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        dash_debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;
        read_json(response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        dash_debug!("POST {}", url);
        let mut request = self.client.post(url);
        if let Some(body) = body {
            let bytes = serde_json::to_vec(body)
                .map_err(|err| ApiError::new(FailureKind::Encode, err.to_string()))?;
            request = request.header(CONTENT_TYPE, "application/json").body(bytes);
        }
        let response = request.send().await.map_err(map_reqwest_error)?;
        read_json(response).await
    }
}

#[async_trait::async_trait]
impl Backend for ReqwestBackend {
    async fn start(&self, command: &Command) -> Result<CommandReply, ApiError> {
        self.post_json("/start", Some(command)).await
    }

    async fn stop(&self) -> Result<CommandReply, ApiError> {
        self.post_json::<(), _>("/stop", None).await
    }

    async fn status(&self) -> Result<StatusSnapshot, ApiError> {
        self.get_json("/status").await
    }

    async fn favorites(&self) -> Result<Vec<Favorite>, ApiError> {
        let envelope: FavoritesEnvelope = self.get_json("/favoritos").await?;
        Ok(envelope.into_favorites())
    }

    async fn save_favorite(&self, favorite: &Favorite) -> Result<CommandReply, ApiError> {
        self.post_json("/favoritos", Some(favorite)).await
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_reqwest_error)?;
    dash_trace!("response {} ({} bytes)", status, body.len());

    if !status.is_success() {
        // The backend explains rejections in `{msg}`; keep it for the log.
        let message = serde_json::from_slice::<CommandReply>(&body)
            .map(|reply| reply.msg)
            .unwrap_or_else(|_| status.to_string());
        return Err(ApiError::new(
            FailureKind::HttpStatus(status.as_u16()),
            message,
        ));
    }

    serde_json::from_slice(&body).map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ApiError::new(FailureKind::Decode, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}

use reqwest::{Client, RequestBuilder, StatusCode};
use url::Url;
use uuid::Uuid;

use crate::types::{CreateEvent, CreatedEvent, Event, RegisteredEvent, Registration, UpdateEvent};

/// Errors produced by the HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, TLS, connection reset, …).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("api error: status {status}, body: {body}")]
    Api { status: StatusCode, body: String },

    /// Response body could not be deserialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The base URL could not be joined with the endpoint path.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

/// Typed HTTP client for the events API.
///
/// Event mutations require the admin API key; reads and registration
/// calls go out unauthenticated.
#[derive(Debug, Clone)]
pub struct EventsClient {
    http: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl EventsClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
            api_key: None,
        }
    }

    /// Attach the bearer key used for event mutations.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Replace the default `reqwest::Client` with a custom one.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    /// `GET /api/events` – the full list, most future date first.
    pub async fn list_events(&self) -> Result<Vec<Event>, ClientError> {
        let url = self.base_url.join("/api/events")?;
        let resp = self.http.get(url).send().await?;

        parse_response(resp).await
    }

    /// `GET /api/events/{id}`
    pub async fn get_event(&self, id: Uuid) -> Result<Event, ClientError> {
        let url = self.base_url.join(&format!("/api/events/{id}"))?;
        let resp = self.http.get(url).send().await?;

        parse_response(resp).await
    }

    /// `POST /api/events`
    pub async fn create_event(&self, payload: &CreateEvent) -> Result<CreatedEvent, ClientError> {
        let url = self.base_url.join("/api/events")?;
        let resp = self.authorize(self.http.post(url)).json(payload).send().await?;

        parse_response(resp).await
    }

    /// `PUT /api/events/{id}` – full-record replace.
    pub async fn update_event(
        &self,
        id: Uuid,
        payload: &UpdateEvent,
    ) -> Result<Event, ClientError> {
        let url = self.base_url.join(&format!("/api/events/{id}"))?;
        let resp = self.authorize(self.http.put(url)).json(payload).send().await?;

        parse_response(resp).await
    }

    /// `DELETE /api/events/{id}`
    pub async fn delete_event(&self, id: Uuid) -> Result<(), ClientError> {
        let url = self.base_url.join(&format!("/api/events/{id}"))?;
        let resp = self.authorize(self.http.delete(url)).send().await?;

        expect_success(resp).await
    }

    /// `POST /api/events/{event_id}/register`
    pub async fn register(
        &self,
        event_id: Uuid,
        athlete_id: Uuid,
    ) -> Result<Registration, ClientError> {
        let url = self
            .base_url
            .join(&format!("/api/events/{event_id}/register"))?;
        let resp = self
            .http
            .post(url)
            .json(&serde_json::json!({ "athlete_id": athlete_id }))
            .send()
            .await?;

        parse_response(resp).await
    }

    /// `GET /api/events/athlete/{athlete_id}/registrations`
    pub async fn athlete_registrations(
        &self,
        athlete_id: Uuid,
    ) -> Result<Vec<RegisteredEvent>, ClientError> {
        let url = self
            .base_url
            .join(&format!("/api/events/athlete/{athlete_id}/registrations"))?;
        let resp = self.http.get(url).send().await?;

        parse_response(resp).await
    }
}

async fn parse_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Api { status, body });
    }
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(ClientError::Json)
}

async fn expect_success(resp: reqwest::Response) -> Result<(), ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Api { status, body });
    }
    Ok(())
}

// Hand-written async HTTP client for the court-slot endpoints.
//
// Base URL: the backend API root (e.g. `https://api.example.com/api/v1/`)
// Auth: optional `Authorization: Bearer` header from `TransportConfig`

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types::{
    ErrorResponse, FieldSlotGridResponse, LockSlotsBody, MaybeEnveloped, MergeSlotsBody,
    UnlockSlotsBody,
};

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the booking backend's court-slot endpoints.
///
/// Every call is a single attempt. Callers that mutate slots are expected
/// to re-fetch the grid afterwards instead of patching local state.
pub struct SlotClient {
    http: reqwest::Client,
    base_url: Url,
    /// Known only when this crate built the `reqwest::Client`.
    timeout: Option<Duration>,
}

impl SlotClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL and transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self {
            http,
            base_url,
            timeout: Some(transport.timeout),
        })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self {
            http,
            base_url,
            timeout: None,
        })
    }

    /// The API base URL, always ending in `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Ensure the base path ends with `/` so relative joins append
    /// instead of replacing the last segment.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join path segments onto the base URL, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get_with_params<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        debug!("GET {url} params={params:?}");

        let resp = self
            .http
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        self.handle_response(resp).await
    }

    async fn post_no_response<B: Serialize + Sync>(&self, url: Url, body: &B) -> Result<(), Error> {
        debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        self.handle_empty(resp).await
    }

    async fn delete(&self, url: Url) -> Result<(), Error> {
        debug!("DELETE {url}");

        let resp = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        self.handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await.map_err(|e| self.transport_error(e))?;
            serde_json::from_str::<MaybeEnveloped<T>>(&body)
                .map(MaybeEnveloped::into_inner)
                .map_err(|e| {
                    let preview: String = body.chars().take(200).collect();
                    Error::Deserialization {
                        message: format!("{e} (body preview: {preview:?})"),
                        body,
                    }
                })
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    /// A timeout on a client we configured is reported with its limit.
    fn transport_error(&self, err: reqwest::Error) -> Error {
        match self.timeout {
            Some(limit) if err.is_timeout() => Error::Timeout {
                timeout_secs: limit.as_secs(),
            },
            _ => Error::Transport(err),
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();
        let parsed = serde_json::from_str::<ErrorResponse>(&raw).ok();

        let message = parsed
            .as_ref()
            .and_then(ErrorResponse::message_text)
            .or_else(|| (!raw.is_empty()).then(|| raw.clone()))
            .unwrap_or_else(|| status.to_string());

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Error::Authentication { message };
        }

        Error::Api {
            status: status.as_u16(),
            message,
            code: parsed.and_then(|p| p.code.or(p.error)),
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Slot grid ────────────────────────────────────────────────────

    /// `GET fields/{field_id}/slots?date={date}` (date is `YYYY-MM-DD`).
    pub async fn get_field_slots(
        &self,
        field_id: &str,
        date: &str,
    ) -> Result<FieldSlotGridResponse, Error> {
        let url = self.url(&["fields", field_id, "slots"])?;
        self.get_with_params(url, &[("date", date.to_owned())]).await
    }

    // ── Slot mutations ───────────────────────────────────────────────

    /// `POST court-slots/lock`
    pub async fn lock_slots(&self, body: &LockSlotsBody) -> Result<(), Error> {
        let url = self.url(&["court-slots", "lock"])?;
        self.post_no_response(url, body).await
    }

    /// `POST court-slots/unlock`
    pub async fn unlock_slots(&self, body: &UnlockSlotsBody) -> Result<(), Error> {
        let url = self.url(&["court-slots", "unlock"])?;
        self.post_no_response(url, body).await
    }

    /// `POST court-slots/merge`
    pub async fn merge_slots(&self, body: &MergeSlotsBody) -> Result<(), Error> {
        let url = self.url(&["court-slots", "merge"])?;
        self.post_no_response(url, body).await
    }

    /// `DELETE court-slots/unmerge/{slot_id}`
    pub async fn unmerge_slot(&self, slot_id: &str) -> Result<(), Error> {
        let url = self.url(&["court-slots", "unmerge", slot_id])?;
        self.delete(url).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_trailing_slash() {
        let client =
            SlotClient::from_reqwest("https://api.example.com/api/v1", reqwest::Client::new())
                .unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.example.com/api/v1/");
    }

    #[test]
    fn url_appends_encoded_segments() {
        let client =
            SlotClient::from_reqwest("https://api.example.com/api/", reqwest::Client::new())
                .unwrap();
        let url = client.url(&["fields", "a b", "slots"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/api/fields/a%20b/slots");
    }
}

//! HTTP client for the remote event API.
//!
//! The server owns all Event, Participation and Comment records; this
//! client only issues requests and decodes JSON snapshots. Every call
//! except login/registration sends the bearer token.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use gather_core::comment::{Comment, CommentDraft};
use gather_core::event::Event;
use gather_core::participation::{Participation, RsvpStatus};

use crate::session::UserProfile;

/// Authenticated HTTP client for a gather server.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

// Request/response types matching the server API

#[derive(Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}

#[derive(Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Serialize)]
struct JoinRequest {
    user_id: i64,
    rsvp_status: RsvpStatus,
}

#[derive(Serialize)]
struct AttendanceRequest {
    attended: bool,
}

impl ApiClient {
    pub fn new(base_url: &str, token: &str) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Client without a token, for the login/registration calls.
    pub fn anonymous(base_url: &str) -> Self {
        Self::new(base_url, "")
    }

    /// POST /api/auth/login
    pub async fn login(&self, req: &LoginRequest) -> Result<AuthResponse> {
        let resp = self
            .http
            .post(format!("{}/api/auth/login", self.base_url))
            .json(req)
            .send()
            .await
            .context("Failed to reach the server")?;

        read_json(resp).await
    }

    /// POST /api/auth/register
    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse> {
        let resp = self
            .http
            .post(format!("{}/api/auth/register", self.base_url))
            .json(req)
            .send()
            .await
            .context("Failed to reach the server")?;

        read_json(resp).await
    }

    /// GET /api/events
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let resp = self
            .http
            .get(format!("{}/api/events", self.base_url))
            .bearer_auth(&self.token)
            .send()
            .await
            .context("Failed to reach the server")?;

        read_json(resp).await
    }

    /// GET /api/events/{id}
    pub async fn get_event(&self, id: i64) -> Result<Event> {
        let resp = self
            .http
            .get(format!("{}/api/events/{}", self.base_url, id))
            .bearer_auth(&self.token)
            .send()
            .await
            .context("Failed to reach the server")?;

        read_json(resp).await
    }

    /// POST /api/events
    pub async fn create_event(&self, event: &Event) -> Result<Event> {
        let resp = self
            .http
            .post(format!("{}/api/events", self.base_url))
            .bearer_auth(&self.token)
            .json(event)
            .send()
            .await
            .context("Failed to reach the server")?;

        read_json(resp).await
    }

    /// PUT /api/events/{id}
    pub async fn update_event(&self, id: i64, event: &Event) -> Result<()> {
        let resp = self
            .http
            .put(format!("{}/api/events/{}", self.base_url, id))
            .bearer_auth(&self.token)
            .json(event)
            .send()
            .await
            .context("Failed to reach the server")?;

        check(resp).await?;
        Ok(())
    }

    /// DELETE /api/events/{id}
    pub async fn delete_event(&self, id: i64) -> Result<()> {
        let resp = self
            .http
            .delete(format!("{}/api/events/{}", self.base_url, id))
            .bearer_auth(&self.token)
            .send()
            .await
            .context("Failed to reach the server")?;

        check(resp).await?;
        Ok(())
    }

    /// GET /api/events/{id}/participants
    pub async fn list_participants(&self, event_id: i64) -> Result<Vec<Participation>> {
        let resp = self
            .http
            .get(format!(
                "{}/api/events/{}/participants",
                self.base_url, event_id
            ))
            .bearer_auth(&self.token)
            .send()
            .await
            .context("Failed to reach the server")?;

        read_json(resp).await
    }

    /// POST /api/events/{id}/participants
    pub async fn join_event(&self, event_id: i64, user_id: i64) -> Result<()> {
        let resp = self
            .http
            .post(format!(
                "{}/api/events/{}/participants",
                self.base_url, event_id
            ))
            .bearer_auth(&self.token)
            .json(&JoinRequest {
                user_id,
                rsvp_status: RsvpStatus::Yes,
            })
            .send()
            .await
            .context("Failed to reach the server")?;

        check(resp).await?;
        Ok(())
    }

    /// DELETE /api/events/{id}/participants
    ///
    /// No body: the server resolves the participation from the bearer
    /// token.
    pub async fn cancel_participation(&self, event_id: i64) -> Result<()> {
        let resp = self
            .http
            .delete(format!(
                "{}/api/events/{}/participants",
                self.base_url, event_id
            ))
            .bearer_auth(&self.token)
            .send()
            .await
            .context("Failed to reach the server")?;

        check(resp).await?;
        Ok(())
    }

    /// GET /api/events/{id}/participants/my-participation
    ///
    /// The server answers with an error status when the user never joined;
    /// that simply means no attendance flag, not a failure worth
    /// surfacing.
    pub async fn my_participation(&self, event_id: i64) -> Result<Option<Participation>> {
        let resp = self
            .http
            .get(format!(
                "{}/api/events/{}/participants/my-participation",
                self.base_url, event_id
            ))
            .bearer_auth(&self.token)
            .send()
            .await
            .context("Failed to reach the server")?;

        if !resp.status().is_success() {
            return Ok(None);
        }

        Ok(Some(resp.json().await?))
    }

    /// PATCH /api/events/{id}/participants/{userId}/attendance
    pub async fn mark_attendance(&self, event_id: i64, user_id: i64) -> Result<()> {
        let resp = self
            .http
            .patch(format!(
                "{}/api/events/{}/participants/{}/attendance",
                self.base_url, event_id, user_id
            ))
            .bearer_auth(&self.token)
            .json(&AttendanceRequest { attended: true })
            .send()
            .await
            .context("Failed to reach the server")?;

        check(resp).await?;
        Ok(())
    }

    /// GET /api/events/{id}/comments
    pub async fn list_comments(&self, event_id: i64) -> Result<Vec<Comment>> {
        let resp = self
            .http
            .get(format!(
                "{}/api/events/{}/comments",
                self.base_url, event_id
            ))
            .bearer_auth(&self.token)
            .send()
            .await
            .context("Failed to reach the server")?;

        read_json(resp).await
    }

    /// POST /api/events/{id}/comments
    pub async fn post_comment(&self, event_id: i64, draft: &CommentDraft) -> Result<()> {
        let resp = self
            .http
            .post(format!(
                "{}/api/events/{}/comments",
                self.base_url, event_id
            ))
            .bearer_auth(&self.token)
            .json(draft)
            .send()
            .await
            .context("Failed to reach the server")?;

        check(resp).await?;
        Ok(())
    }
}

/// Surface a non-2xx response as an error carrying the server-provided
/// message when the body has one, or a generic fallback. 4xx and 5xx are
/// not distinguished.
async fn check(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let message = resp
        .json::<ErrorResponse>()
        .await
        .ok()
        .and_then(|e| e.message)
        .unwrap_or_else(|| format!("Request failed with status {status}"));

    anyhow::bail!("{message}")
}

/// Check the status, then decode the JSON body.
async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    let resp = check(resp).await?;
    resp.json().await.context("Failed to decode server response")
}

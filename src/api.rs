//! Talking to the activities backend.
//!
//! `ActivityApi` is the seam the board controller is written against;
//! `HttpActivityApi` is the browser implementation on top of `gloo-net`.

use gloo_net::http::Request;
use serde::Deserialize;
use urlencoding::encode;
use web_sys::RequestCache;

use crate::error::ApiError;
use crate::model::ActivityCollection;

/// Body of a signup/unregister response. Success carries `message`,
/// failure carries `detail`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ApiReply {
    #[serde(default)]
    pub message: Option<String>,
    /// FastAPI puts a list of validation errors here on 422, so don't insist on a string.
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ApiReply {
    pub fn detail_text(&self) -> Option<&str> {
        self.detail.as_ref().and_then(|d| d.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterAction {
    Signup,
    Unregister,
}

impl RosterAction {
    pub fn path(self) -> &'static str {
        match self {
            RosterAction::Signup => "signup",
            RosterAction::Unregister => "unregister",
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait ActivityApi {
    async fn fetch_activities(&self) -> Result<ActivityCollection, ApiError>;

    async fn signup(&self, activity: &str, email: &str) -> Result<ApiReply, ApiError>;

    async fn unregister(&self, activity: &str, email: &str) -> Result<ApiReply, ApiError>;
}

pub fn activities_url(base: &str) -> String {
    format!("{}/activities", base.trim_end_matches('/'))
}

pub fn roster_url(base: &str, activity: &str, action: RosterAction, email: &str) -> String {
    format!(
        "{}/activities/{}/{}?email={}",
        base.trim_end_matches('/'),
        encode(activity),
        action.path(),
        encode(email)
    )
}

/// The body is decoded before the status is looked at, so a garbled error
/// page counts as a decode failure rather than a rejection.
pub fn decode_reply(ok: bool, status: u16, body: &str) -> Result<ApiReply, ApiError> {
    let reply: ApiReply = serde_json::from_str(body)?;
    if ok {
        Ok(reply)
    } else {
        Err(ApiError::Rejected {
            status,
            detail: reply.detail_text().map(str::to_string),
        })
    }
}

pub fn decode_collection(ok: bool, status: u16, body: &str) -> Result<ActivityCollection, ApiError> {
    if !ok {
        let detail = serde_json::from_str::<ApiReply>(body)
            .ok()
            .and_then(|r| r.detail_text().map(str::to_string));
        return Err(ApiError::Rejected { status, detail });
    }
    Ok(serde_json::from_str(body)?)
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpActivityApi {
    base: String,
    bypass_cache: bool,
}

impl HttpActivityApi {
    pub fn new(base: impl Into<String>, bypass_cache: bool) -> Self {
        Self {
            base: base.into(),
            bypass_cache,
        }
    }

    async fn post_roster(
        &self,
        action: RosterAction,
        activity: &str,
        email: &str,
    ) -> Result<ApiReply, ApiError> {
        let url = roster_url(&self.base, activity, action, email);
        log::debug!("POST {url}");

        let resp = Request::post(&url).send().await?;
        let body = resp.text().await?;
        decode_reply(resp.ok(), resp.status(), &body)
    }
}

impl ActivityApi for HttpActivityApi {
    async fn fetch_activities(&self) -> Result<ActivityCollection, ApiError> {
        let url = activities_url(&self.base);
        log::debug!("GET {url} (bypass cache: {})", self.bypass_cache);

        let mut req = Request::get(&url);
        if self.bypass_cache {
            req = req.cache(RequestCache::NoStore);
        }
        let resp = req.send().await?;
        let body = resp.text().await?;
        decode_collection(resp.ok(), resp.status(), &body)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<ApiReply, ApiError> {
        self.post_roster(RosterAction::Signup, activity, email).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<ApiReply, ApiError> {
        self.post_roster(RosterAction::Unregister, activity, email).await
    }
}

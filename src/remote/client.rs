//! REST client for the portfolio profile store
//!
//! Credentials are always handed in by the caller. A call without them is
//! rejected before any request is built.

use crate::error::{Result, MatcherError};
use crate::matching::profile::Profile;
use anyhow::Context;
use log::{debug, info};
use reqwest::{Method, Request};
use std::time::Duration;

const PROFILES_ENDPOINT: &str = "/api/profiles";

/// Bearer token issued by the portfolio backend.
#[derive(Clone)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    pub fn bearer(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(MatcherError::Unauthorized("empty token".to_string()));
        }
        Ok(Self { token })
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials").field("token", &"<redacted>").finish()
    }
}

fn require(credentials: Option<&Credentials>) -> Result<&Credentials> {
    credentials.ok_or_else(|| MatcherError::Unauthorized("sign in required".to_string()))
}

pub struct ProfileClient {
    client: reqwest::Client,
    base_url: String,
}

impl ProfileClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn profile_url(&self, user: &str) -> String {
        format!("{}{}/{}", self.base_url, PROFILES_ENDPOINT, user)
    }

    /// Build the authenticated profile request without sending it.
    pub fn build_request(
        &self,
        method: Method,
        user: &str,
        credentials: Option<&Credentials>,
    ) -> Result<Request> {
        let credentials = require(credentials)?;
        if user.trim().is_empty() {
            return Err(MatcherError::InvalidInput("user id must not be empty".to_string()));
        }

        let request = self
            .client
            .request(method, self.profile_url(user))
            .bearer_auth(credentials.token())
            .build()
            .context("Failed to build profile request")?;
        Ok(request)
    }

    pub async fn fetch_profile(&self, user: &str, credentials: Option<&Credentials>) -> Result<Profile> {
        let request = self.build_request(Method::GET, user, credentials)?;
        info!("Fetching profile: {}", request.url());

        let response = self
            .client
            .execute(request)
            .await
            .context("Profile request failed")?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(MatcherError::Unauthorized(format!("profile store returned {}", status)));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MatcherError::Network(format!("Profile store returned {}: {}", status, error_text)));
        }

        let body = response
            .text()
            .await
            .context("Failed to read profile response")?;
        Profile::from_json_str(&body)
    }

    pub async fn save_profile(
        &self,
        user: &str,
        profile: &Profile,
        credentials: Option<&Credentials>,
    ) -> Result<()> {
        let mut request = self.build_request(Method::PUT, user, credentials)?;
        let body = serde_json::to_vec(&profile.to_json())?;
        request.headers_mut().insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        *request.body_mut() = Some(body.into());

        info!("Saving profile: {}", request.url());
        let response = self
            .client
            .execute(request)
            .await
            .context("Profile save failed")?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(MatcherError::Unauthorized(format!("profile store returned {}", status)));
        }
        if !status.is_success() {
            return Err(MatcherError::Network(format!("Profile save returned {}", status)));
        }
        Ok(())
    }
}

//! Credential acquisition — the only endpoints called without a bearer
//! token.

use anyhow::{Context, Result};
use hallazgo_core::session::{AuthResponse, LoginRequest, RegisterRequest};

use super::{ApiClient, ok};

impl ApiClient {
  /// `POST /auth/login`
  ///
  /// Returns the raw response; persisting the credential and updating the
  /// held token are the caller's decisions.
  pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
    let resp = self
      .client
      .post(self.url("/auth/login"))
      .json(request)
      .send()
      .await
      .context("POST /auth/login failed")?;
    let resp = ok("POST /auth/login", resp)?;
    resp.json().await.context("deserialising auth response")
  }

  /// `POST /auth/register`
  pub async fn register(
    &self,
    request: &RegisterRequest,
  ) -> Result<AuthResponse> {
    let resp = self
      .client
      .post(self.url("/auth/register"))
      .json(request)
      .send()
      .await
      .context("POST /auth/register failed")?;
    let resp = ok("POST /auth/register", resp)?;
    resp.json().await.context("deserialising auth response")
  }
}

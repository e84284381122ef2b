//! Async HTTP client wrapping the campus reporting REST API.
//!
//! One [`ApiClient`] is built at startup and shared by every screen. The
//! bearer token lives here — injected at construction from the session
//! store, or replaced by a successful login — and is never re-read from
//! disk inside request code. Each service area of the backend gets its
//! own module with one method per endpoint.

pub mod admins;
pub mod auth;
pub mod employees;
pub mod incidents;
pub mod lost_objects;
pub mod students;

use std::{path::Path, time::Duration};

use anyhow::{Context, Result, anyhow};
use reqwest::Client;

/// Connection settings for the reporting API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
  /// The persisted credential, if a session already exists.
  pub token:    Option<String>,
}

/// Async HTTP client for the reporting REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client:   Client,
  base_url: String,
  token:    Option<String>,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self {
      client,
      base_url: config.base_url,
      token: config.token,
    })
  }

  /// Replace the held credential after a login, or drop it on logout.
  pub fn set_token(&mut self, token: Option<String>) {
    self.token = token;
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.base_url.trim_end_matches('/'), path)
  }

  /// The held bearer token, or a fast failure for endpoints that require
  /// one. Presence of the credential is the sole client-side auth signal;
  /// the backend remains the authority.
  fn bearer(&self) -> Result<&str> {
    self
      .token
      .as_deref()
      .ok_or_else(|| anyhow!("no hay credencial; inicia sesión primero"))
  }
}

/// Consume a non-2xx response into an error naming the call.
fn ok(label: &str, resp: reqwest::Response) -> Result<reqwest::Response> {
  if !resp.status().is_success() {
    return Err(anyhow!("{label} → {}", resp.status()));
  }
  Ok(resp)
}

/// Read `path` into a multipart part, guessing the MIME type from the
/// file extension.
async fn file_part(path: &Path) -> Result<reqwest::multipart::Part> {
  let bytes = tokio::fs::read(path)
    .await
    .with_context(|| format!("reading {}", path.display()))?;
  let file_name = path
    .file_name()
    .map(|n| n.to_string_lossy().into_owned())
    .unwrap_or_else(|| "foto".to_string());
  let part = reqwest::multipart::Part::bytes(bytes)
    .file_name(file_name)
    .mime_str(guess_mime(path))?;
  Ok(part)
}

fn guess_mime(path: &Path) -> &'static str {
  match path.extension().and_then(|e| e.to_str()) {
    Some("jpg") | Some("jpeg") => "image/jpeg",
    Some("png") => "image/png",
    Some("gif") => "image/gif",
    Some("webp") => "image/webp",
    _ => "application/octet-stream",
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn client(base_url: &str) -> ApiClient {
    ApiClient::new(ApiConfig {
      base_url: base_url.to_string(),
      token:    None,
    })
    .unwrap()
  }

  #[test]
  fn url_joins_without_doubled_slashes() {
    let c = client("http://localhost:8080/");
    assert_eq!(c.url("/incidente"), "http://localhost:8080/incidente");

    let c = client("http://localhost:8080");
    assert_eq!(
      c.url("/objetoPerdido/7/estado"),
      "http://localhost:8080/objetoPerdido/7/estado"
    );
  }

  #[test]
  fn bearer_fails_fast_without_a_credential() {
    let c = client("http://localhost:8080");
    assert!(c.bearer().is_err());

    let mut c = client("http://localhost:8080");
    c.set_token(Some("tok".into()));
    assert_eq!(c.bearer().unwrap(), "tok");
  }

  #[test]
  fn mime_guessing_covers_the_usual_photo_types() {
    assert_eq!(guess_mime(Path::new("foto.jpg")), "image/jpeg");
    assert_eq!(guess_mime(Path::new("foto.jpeg")), "image/jpeg");
    assert_eq!(guess_mime(Path::new("foto.png")), "image/png");
    assert_eq!(
      guess_mime(Path::new("archivo.bin")),
      "application/octet-stream"
    );
    assert_eq!(guess_mime(Path::new("sin_extension")), "application/octet-stream");
  }
}

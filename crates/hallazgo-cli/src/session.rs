//! Persistence of the opaque bearer credential.
//!
//! The credential lives in a single well-known file. Its presence is the
//! sole client-side authentication signal; resolving it into a
//! [`Session`] goes through `hallazgo_core::session`, so an undecodable
//! credential is indistinguishable from an absent one to callers.

use std::path::PathBuf;

use anyhow::Context as _;
use hallazgo_core::session::Session;

/// Reads, writes, and clears the persisted credential.
#[derive(Debug, Clone)]
pub struct SessionStore {
  path: PathBuf,
}

impl SessionStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  /// The persisted token, if any. An unreadable or empty file is treated
  /// as absent.
  pub fn load(&self) -> Option<String> {
    let raw = std::fs::read_to_string(&self.path).ok()?;
    let token = raw.trim();
    (!token.is_empty()).then(|| token.to_string())
  }

  /// Persist `token`, creating parent directories as needed. Called once
  /// per successful login.
  pub fn save(&self, token: &str) -> anyhow::Result<()> {
    if let Some(parent) = self.path.parent() {
      std::fs::create_dir_all(parent)
        .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(&self.path, token)
      .with_context(|| format!("writing {}", self.path.display()))
  }

  /// Remove the persisted credential. Idempotent: clearing an absent
  /// credential is a no-op, not an error.
  pub fn clear(&self) -> anyhow::Result<()> {
    match std::fs::remove_file(&self.path) {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
      Err(e) => {
        Err(e).with_context(|| format!("removing {}", self.path.display()))
      }
    }
  }

  /// Derive the current session from the persisted credential. `None`
  /// covers both "absent" and "undecodable"; the distinction is logged
  /// here and nowhere else.
  pub fn resolve(&self) -> Option<Session> {
    let token = self.load()?;
    let session = Session::from_token(&token);
    if session.is_none() {
      tracing::debug!("persisted credential present but undecodable");
    }
    session
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use base64::Engine as _;
  use base64::engine::general_purpose::URL_SAFE_NO_PAD as B64;
  use hallazgo_core::session::Role;

  use super::*;

  fn scratch_store(test: &str) -> SessionStore {
    let dir = std::env::temp_dir().join(format!(
      "hallazgo-session-{}-{test}",
      std::process::id()
    ));
    SessionStore::new(dir.join("token"))
  }

  fn forge(payload: serde_json::Value) -> String {
    let header = B64.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = B64.encode(payload.to_string());
    format!("{header}.{body}.sig")
  }

  #[test]
  fn missing_credential_resolves_to_none() {
    let store = scratch_store("missing");
    store.clear().unwrap();
    assert!(store.load().is_none());
    assert!(store.resolve().is_none());
  }

  #[test]
  fn save_then_resolve_round_trips() {
    let store = scratch_store("roundtrip");
    let token = forge(serde_json::json!({
      "sub": "marta@utec.edu.pe",
      "role": "ROLE_ADMIN",
    }));
    store.save(&token).unwrap();

    assert_eq!(store.load().as_deref(), Some(token.as_str()));
    let session = store.resolve().unwrap();
    assert_eq!(session.subject, "marta@utec.edu.pe");
    assert_eq!(session.role, Role::Administrador);

    store.clear().unwrap();
  }

  #[test]
  fn clearing_twice_equals_clearing_once() {
    let store = scratch_store("idempotent");
    store.save("whatever").unwrap();

    store.clear().unwrap();
    assert!(store.resolve().is_none());
    store.clear().unwrap();
    assert!(store.resolve().is_none());
  }

  #[test]
  fn undecodable_credential_resolves_to_none() {
    let store = scratch_store("undecodable");
    store.save("not-a-jwt").unwrap();
    assert!(store.load().is_some());
    assert!(store.resolve().is_none());
    store.clear().unwrap();
  }
}

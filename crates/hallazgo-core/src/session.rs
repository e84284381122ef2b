//! Session and role resolution from the persisted bearer credential.
//!
//! The credential is an opaque JWT issued by the backend. Its signature is
//! not locally checkable, so the payload is decoded without verification
//! and every failure mode collapses into "no session" — callers route to
//! the login screen instead of crashing.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD as B64;
use serde::{Deserialize, Serialize};

// ─── Role ────────────────────────────────────────────────────────────────────

/// The role a session carries. Exactly one per session; changing it
/// requires a new credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
  Estudiante,
  Empleado,
  Administrador,
  /// Fallback for credentials whose role claim is not recognised.
  Usuario,
}

impl Role {
  /// Map a raw role claim to a [`Role`]. Total: any unrecognised input
  /// maps to [`Role::Usuario`].
  pub fn from_raw(raw: &str) -> Self {
    match raw {
      "ROLE_ESTUDIANTE" => Self::Estudiante,
      "ROLE_EMPLEADO" => Self::Empleado,
      "ROLE_ADMIN" => Self::Administrador,
      _ => Self::Usuario,
    }
  }

  /// The friendly display name.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Estudiante => "Estudiante",
      Self::Empleado => "Empleado",
      Self::Administrador => "Administrador",
      Self::Usuario => "Usuario",
    }
  }
}

impl std::fmt::Display for Role {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Claims ──────────────────────────────────────────────────────────────────

/// The decoded JWT payload. Every field is optional at the serde level so
/// a partially-populated token still decodes; [`Session::from_token`]
/// decides which claims are load-bearing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Claims {
  /// Account email of the authenticated user.
  pub sub:  Option<String>,
  /// Raw role claim, e.g. `ROLE_ESTUDIANTE`.
  pub role: Option<String>,
  /// Expiry as a unix timestamp. Decoded for diagnostics only — expiry is
  /// enforced by the backend, not locally.
  pub exp:  Option<i64>,
}

/// Decode the payload segment of `token` without verifying the signature.
///
/// Returns `None` for anything that is not a three-segment token carrying
/// a base64url JSON payload. Never panics and never returns an error: an
/// undecodable credential is handled exactly like an absent one.
pub fn decode_claims(token: &str) -> Option<Claims> {
  let mut segments = token.split('.');
  let _header = segments.next()?;
  let payload = segments.next()?;
  // Exactly three segments; the signature is carried but not checkable.
  if segments.next().is_none() || segments.next().is_some() {
    return None;
  }
  let bytes = B64.decode(payload).ok()?;
  serde_json::from_slice(&bytes).ok()
}

// ─── Session ─────────────────────────────────────────────────────────────────

/// The identity derived from the persisted credential: who is logged in
/// and what they may see. Reconstructed on demand, never mutated in place;
/// it ends when the credential is cleared or stops decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
  /// Account email (the `sub` claim).
  pub subject: String,
  pub role:    Role,
}

impl Session {
  /// Derive a session from a bearer token.
  ///
  /// Returns `None` when the token cannot be decoded or carries no role
  /// claim. A missing `sub` yields an empty subject — only the role claim
  /// is load-bearing for authorisation.
  pub fn from_token(token: &str) -> Option<Self> {
    let claims = decode_claims(token)?;
    let raw_role = claims.role?;
    Some(Self {
      subject: claims.sub.unwrap_or_default(),
      role:    Role::from_raw(&raw_role),
    })
  }
}

// ─── Auth DTOs ───────────────────────────────────────────────────────────────

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
  pub email:    String,
  pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
  pub first_name:  String,
  pub last_name:   String,
  pub email:       String,
  pub password:    String,
  pub phone:       String,
  /// Registers an employee account instead of a student one.
  pub is_empleado: bool,
}

/// Response of both auth endpoints. Only a successful login carries a
/// credential worth persisting.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
  #[serde(default)]
  pub token:   Option<String>,
  #[serde(default)]
  pub message: Option<String>,
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn forge(payload: serde_json::Value) -> String {
    let header = B64.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = B64.encode(payload.to_string());
    format!("{header}.{body}.forged-signature")
  }

  #[test]
  fn role_mapping_is_total_and_deterministic() {
    let cases = [
      ("ROLE_ESTUDIANTE", Role::Estudiante),
      ("ROLE_EMPLEADO", Role::Empleado),
      ("ROLE_ADMIN", Role::Administrador),
      ("ROLE_SUPERVISOR", Role::Usuario),
      ("", Role::Usuario),
      ("estudiante", Role::Usuario),
    ];
    for (raw, expected) in cases {
      assert_eq!(Role::from_raw(raw), expected);
      // Same input, same output.
      assert_eq!(Role::from_raw(raw), Role::from_raw(raw));
    }
  }

  #[test]
  fn forged_token_round_trips() {
    let token = forge(serde_json::json!({
      "sub": "ana@utec.edu.pe",
      "role": "ROLE_ESTUDIANTE",
      "exp": 1_999_999_999u32,
    }));
    let session = Session::from_token(&token).unwrap();
    assert_eq!(session.subject, "ana@utec.edu.pe");
    assert_eq!(session.role, Role::Estudiante);
  }

  #[test]
  fn unknown_role_claim_falls_back_to_usuario() {
    let token = forge(serde_json::json!({
      "sub": "x@utec.edu.pe",
      "role": "ROLE_DECANO",
    }));
    let session = Session::from_token(&token).unwrap();
    assert_eq!(session.role, Role::Usuario);
  }

  #[test]
  fn missing_role_claim_yields_no_session() {
    let token = forge(serde_json::json!({ "sub": "x@utec.edu.pe" }));
    assert!(decode_claims(&token).is_some());
    assert!(Session::from_token(&token).is_none());
  }

  #[test]
  fn missing_subject_yields_empty_subject() {
    let token = forge(serde_json::json!({ "role": "ROLE_ADMIN" }));
    let session = Session::from_token(&token).unwrap();
    assert_eq!(session.subject, "");
    assert_eq!(session.role, Role::Administrador);
  }

  #[test]
  fn malformed_tokens_yield_no_session() {
    let bad = [
      "",
      "not-a-jwt",
      "one.two",
      "a.b.c.d",
      "header.!!!not-base64!!!.sig",
    ];
    for token in bad {
      assert!(Session::from_token(token).is_none(), "token {token:?}");
    }
    // Valid base64 that is not JSON.
    let garbage = format!("h.{}.s", B64.encode(b"hello"));
    assert!(Session::from_token(&garbage).is_none());
  }

  #[test]
  fn ignores_unknown_claims() {
    let token = forge(serde_json::json!({
      "sub": "x@utec.edu.pe",
      "role": "ROLE_EMPLEADO",
      "iat": 1_700_000_000u32,
      "iss": "hallazgo",
    }));
    assert_eq!(
      Session::from_token(&token).unwrap().role,
      Role::Empleado
    );
  }
}

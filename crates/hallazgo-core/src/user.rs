//! User records for the three account kinds, and the role-shaped
//! [`Profile`] variant.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::session::Role;

// ─── Students ────────────────────────────────────────────────────────────────

/// A student account as listed on the administration surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
  pub id:           i64,
  pub first_name:   String,
  pub last_name:    String,
  pub phone_number: String,
  pub email:        String,
  #[serde(default)]
  pub foto_perfil_url: Option<String>,
}

/// The authenticated student's own record (`GET /estudiante/me`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSelf {
  pub first_name:   String,
  pub last_name:    String,
  pub email:        String,
  pub phone_number: String,
  #[serde(default)]
  pub foto_perfil_url: Option<String>,
}

/// Input to `POST /estudiante`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
  pub first_name:   String,
  pub last_name:    String,
  pub email:        String,
  pub phone_number: String,
}

/// Partial update for the authenticated student. Unset fields are
/// omitted from the JSON part entirely.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatch {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub first_name:   Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub last_name:    Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub phone_number: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email:        Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub password:     Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub foto_perfil_url: Option<String>,
}

// ─── Employees ───────────────────────────────────────────────────────────────

/// An employee account, including the per-day work schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
  pub id:           i64,
  pub first_name:   String,
  pub last_name:    String,
  pub email:        String,
  pub phone_number: String,
  #[serde(default)]
  pub horario_de_trabajo: BTreeMap<String, String>,
}

/// The authenticated employee's own record (`GET /empleado/me`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSelf {
  pub first_name:   String,
  pub last_name:    String,
  pub email:        String,
  pub phone_number: String,
}

/// Input to `POST /empleado`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
  pub first_name:   String,
  pub last_name:    String,
  pub email:        String,
  pub phone_number: String,
  pub password:     String,
}

// ─── Administrators ──────────────────────────────────────────────────────────

/// An administrator account as returned by `POST /admin`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
  pub id:           i64,
  pub first_name:   String,
  pub last_name:    String,
  pub email:        String,
  pub phone_number: String,
}

/// The authenticated administrator's own record (`GET /admin/me`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSelf {
  pub first_name:   String,
  pub last_name:    String,
  pub email:        String,
  pub phone_number: String,
}

/// Input to `POST /admin`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdmin {
  pub first_name:   String,
  pub last_name:    String,
  pub email:        String,
  pub phone_number: String,
  pub password:     String,
}

// ─── Profile ─────────────────────────────────────────────────────────────────

/// The authenticated user's own record, shaped by role.
///
/// One tagged variant instead of a dynamically-shaped object
/// discriminated by a role string: consumers match exhaustively, and a
/// new role cannot be added without the compiler pointing at every site
/// that must handle it.
#[derive(Debug, Clone, PartialEq)]
pub enum Profile {
  Student(StudentSelf),
  Employee(EmployeeSelf),
  Admin(AdminSelf),
}

impl Profile {
  pub fn role(&self) -> Role {
    match self {
      Self::Student(_) => Role::Estudiante,
      Self::Employee(_) => Role::Empleado,
      Self::Admin(_) => Role::Administrador,
    }
  }

  pub fn full_name(&self) -> String {
    let (first, last) = match self {
      Self::Student(s) => (&s.first_name, &s.last_name),
      Self::Employee(e) => (&e.first_name, &e.last_name),
      Self::Admin(a) => (&a.first_name, &a.last_name),
    };
    format!("{first} {last}")
  }

  pub fn email(&self) -> &str {
    match self {
      Self::Student(s) => &s.email,
      Self::Employee(e) => &e.email,
      Self::Admin(a) => &a.email,
    }
  }

  pub fn phone_number(&self) -> &str {
    match self {
      Self::Student(s) => &s.phone_number,
      Self::Employee(e) => &e.phone_number,
      Self::Admin(a) => &a.phone_number,
    }
  }

  /// Only students carry a profile photo.
  pub fn photo_url(&self) -> Option<&str> {
    match self {
      Self::Student(s) => s.foto_perfil_url.as_deref(),
      Self::Employee(_) | Self::Admin(_) => None,
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn student() -> StudentSelf {
    StudentSelf {
      first_name:      "Ana".into(),
      last_name:       "Quispe".into(),
      email:           "ana@utec.edu.pe".into(),
      phone_number:    "999111222".into(),
      foto_perfil_url: Some("https://cdn.example/ana.jpg".into()),
    }
  }

  #[test]
  fn profile_accessors_cover_every_arm() {
    let profiles = [
      Profile::Student(student()),
      Profile::Employee(EmployeeSelf {
        first_name:   "Luis".into(),
        last_name:    "Soto".into(),
        email:        "luis@utec.edu.pe".into(),
        phone_number: "988000111".into(),
      }),
      Profile::Admin(AdminSelf {
        first_name:   "Marta".into(),
        last_name:    "Rojas".into(),
        email:        "marta@utec.edu.pe".into(),
        phone_number: "977333444".into(),
      }),
    ];
    let roles: Vec<Role> = profiles.iter().map(Profile::role).collect();
    assert_eq!(
      roles,
      vec![Role::Estudiante, Role::Empleado, Role::Administrador]
    );
    for profile in &profiles {
      assert!(profile.full_name().contains(' '));
      assert!(profile.email().ends_with("@utec.edu.pe"));
      assert!(!profile.phone_number().is_empty());
    }
    assert!(profiles[0].photo_url().is_some());
    assert!(profiles[1].photo_url().is_none());
  }

  #[test]
  fn employee_schedule_deserialises_from_wire_shape() {
    let raw = serde_json::json!({
      "id": 3,
      "firstName": "Luis",
      "lastName": "Soto",
      "email": "luis@utec.edu.pe",
      "phoneNumber": "988000111",
      "horarioDeTrabajo": { "lunes": "08:00-16:00", "viernes": "09:00-13:00" },
    });
    let employee: Employee = serde_json::from_value(raw).unwrap();
    assert_eq!(
      employee.horario_de_trabajo.get("lunes").map(String::as_str),
      Some("08:00-16:00")
    );
  }

  #[test]
  fn student_patch_omits_unset_fields() {
    let patch = StudentPatch {
      phone_number: Some("911222333".into()),
      ..StudentPatch::default()
    };
    let json = serde_json::to_value(&patch).unwrap();
    assert_eq!(json, serde_json::json!({ "phoneNumber": "911222333" }));
  }
}

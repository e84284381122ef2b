//! Report types — the records users create, triage, and resolve.
//!
//! Lost objects and incidents are distinct wire entities, but they share
//! one lifecycle vocabulary: an independent triage axis
//! ([`ReportStatus`]) and resolution axis ([`TaskStatus`]). Field names
//! follow the backend's Spanish camelCase wire format.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Error;

// ─── Status enums ────────────────────────────────────────────────────────────

/// Triage outcome of a report. Independent of [`TaskStatus`]: a rejected
/// report may still carry an unfinished task and vice versa.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
  /// Initial state of every new report.
  #[default]
  Pendiente,
  Aceptado,
  Rechazado,
}

impl ReportStatus {
  /// The wire string stored by the backend.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Pendiente => "PENDIENTE",
      Self::Aceptado => "ACEPTADO",
      Self::Rechazado => "RECHAZADO",
    }
  }
}

impl std::fmt::Display for ReportStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for ReportStatus {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "PENDIENTE" => Ok(Self::Pendiente),
      "ACEPTADO" => Ok(Self::Aceptado),
      "RECHAZADO" => Ok(Self::Rechazado),
      other => Err(Error::UnknownReportStatus(other.to_string())),
    }
  }
}

/// Resolution outcome of the work a report generates.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
  /// Initial state of every new report.
  #[default]
  NoFinalizado,
  Finalizado,
}

impl TaskStatus {
  /// The wire string stored by the backend.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::NoFinalizado => "NO_FINALIZADO",
      Self::Finalizado => "FINALIZADO",
    }
  }
}

impl std::fmt::Display for TaskStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for TaskStatus {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "NO_FINALIZADO" => Ok(Self::NoFinalizado),
      "FINALIZADO" => Ok(Self::Finalizado),
      other => Err(Error::UnknownTaskStatus(other.to_string())),
    }
  }
}

// ─── Report kind ─────────────────────────────────────────────────────────────

/// Discriminates the two report kinds. Only descriptive fields differ;
/// the lifecycle vocabulary is identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
  LostObject,
  Incident,
}

impl ReportKind {
  pub fn label(&self) -> &'static str {
    match self {
      Self::LostObject => "Objeto Perdido",
      Self::Incident => "Incidente",
    }
  }

  pub fn toggled(&self) -> Self {
    match self {
      Self::LostObject => Self::Incident,
      Self::Incident => Self::LostObject,
    }
  }
}

// ─── Lost objects ────────────────────────────────────────────────────────────

/// A lost-object report as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LostObject {
  pub id:             i64,
  pub piso:           String,
  pub ubicacion:      String,
  pub estado_reporte: ReportStatus,
  pub estado_tarea:   TaskStatus,
  pub detalle:        String,
  pub email:          String,
  pub phone_number:   String,
  pub fecha_reporte:  NaiveDate,
  #[serde(default)]
  pub foto_objeto_perdido_url: Option<String>,
}

/// Input to `POST /objetoPerdido`. Built through [`ReportDraft`], which
/// pins the initial status pair.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLostObject {
  pub piso:           String,
  pub ubicacion:      String,
  pub detalle:        String,
  pub email:          String,
  pub phone_number:   String,
  pub description:    String,
  pub fecha_reporte:  NaiveDate,
  pub estado_reporte: ReportStatus,
  pub estado_tarea:   TaskStatus,
  /// Filled in by the backend once the binary part is stored.
  pub foto_objeto_perdido_url: String,
}

// ─── Incidents ───────────────────────────────────────────────────────────────

/// An incident report as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
  pub id:             i64,
  pub piso:           String,
  pub detalle:        String,
  pub ubicacion:      String,
  pub estado_reporte: ReportStatus,
  pub estado_tarea:   TaskStatus,
  pub email:          String,
  pub phone_number:   String,
  #[serde(default)]
  pub description:    Option<String>,
  /// Reporting student, once the backend has linked it.
  #[serde(default)]
  pub estudiante_id:  Option<i64>,
  /// Handling employee, once assigned.
  #[serde(default)]
  pub empleado_id:    Option<i64>,
  pub fecha_reporte:  NaiveDate,
  #[serde(default)]
  pub foto_incidente_url: Option<String>,
}

/// Input to `POST /incidente`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIncident {
  pub piso:           String,
  pub ubicacion:      String,
  pub detalle:        String,
  pub description:    String,
  pub email:          String,
  pub phone_number:   String,
  pub fecha_reporte:  NaiveDate,
  pub estado_reporte: ReportStatus,
  pub estado_tarea:   TaskStatus,
  pub foto_incidente_url: String,
}

// ─── Draft ───────────────────────────────────────────────────────────────────

/// Field set shared by both kinds at submission time. Converting a draft
/// is the only way this crate produces a creation DTO, so a new report
/// always starts `PENDIENTE` / `NO_FINALIZADO` regardless of kind.
#[derive(Debug, Clone)]
pub struct ReportDraft {
  pub piso:          String,
  pub ubicacion:     String,
  pub detalle:       String,
  pub description:   String,
  pub email:         String,
  pub phone_number:  String,
  pub fecha_reporte: NaiveDate,
}

impl ReportDraft {
  pub fn into_lost_object(self) -> NewLostObject {
    NewLostObject {
      piso:           self.piso,
      ubicacion:      self.ubicacion,
      detalle:        self.detalle,
      email:          self.email,
      phone_number:   self.phone_number,
      description:    self.description,
      fecha_reporte:  self.fecha_reporte,
      estado_reporte: ReportStatus::default(),
      estado_tarea:   TaskStatus::default(),
      foto_objeto_perdido_url: String::new(),
    }
  }

  pub fn into_incident(self) -> NewIncident {
    NewIncident {
      piso:           self.piso,
      ubicacion:      self.ubicacion,
      detalle:        self.detalle,
      description:    self.description,
      email:          self.email,
      phone_number:   self.phone_number,
      fecha_reporte:  self.fecha_reporte,
      estado_reporte: ReportStatus::default(),
      estado_tarea:   TaskStatus::default(),
      foto_incidente_url: String::new(),
    }
  }
}

// ─── Status patch ────────────────────────────────────────────────────────────

/// Partial body for `PATCH …/{id}/estado`. Unset axes are omitted from
/// the JSON entirely so the backend only touches what the caller chose.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusPatch {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub estado_reporte: Option<ReportStatus>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub estado_tarea:   Option<TaskStatus>,
}

impl StatusPatch {
  /// A patch that only moves the triage axis.
  pub fn report_status(to: ReportStatus) -> Self {
    Self {
      estado_reporte: Some(to),
      ..Self::default()
    }
  }

  /// A patch that only moves the resolution axis.
  pub fn task_status(to: TaskStatus) -> Self {
    Self {
      estado_tarea: Some(to),
      ..Self::default()
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use std::str::FromStr;

  fn draft() -> ReportDraft {
    ReportDraft {
      piso:          "3".into(),
      ubicacion:     "biblioteca".into(),
      detalle:       "billetera negra".into(),
      description:   "billetera de cuero".into(),
      email:         "ana@utec.edu.pe".into(),
      phone_number:  "999111222".into(),
      fecha_reporte: NaiveDate::from_ymd_opt(2024, 11, 20).unwrap(),
    }
  }

  #[test]
  fn status_wire_strings_round_trip() {
    for status in [
      ReportStatus::Pendiente,
      ReportStatus::Aceptado,
      ReportStatus::Rechazado,
    ] {
      assert_eq!(ReportStatus::from_str(status.as_str()).unwrap(), status);
      let json = serde_json::to_string(&status).unwrap();
      assert_eq!(json, format!("\"{}\"", status.as_str()));
    }
    for status in [TaskStatus::NoFinalizado, TaskStatus::Finalizado] {
      assert_eq!(TaskStatus::from_str(status.as_str()).unwrap(), status);
      let json = serde_json::to_string(&status).unwrap();
      assert_eq!(json, format!("\"{}\"", status.as_str()));
    }
  }

  #[test]
  fn unknown_status_strings_are_rejected() {
    assert!(ReportStatus::from_str("APROBADO").is_err());
    assert!(TaskStatus::from_str("pendiente").is_err());
  }

  #[test]
  fn new_reports_start_pending_and_unfinished_for_both_kinds() {
    let lost = draft().into_lost_object();
    assert_eq!(lost.estado_reporte, ReportStatus::Pendiente);
    assert_eq!(lost.estado_tarea, TaskStatus::NoFinalizado);

    let incident = draft().into_incident();
    assert_eq!(incident.estado_reporte, ReportStatus::Pendiente);
    assert_eq!(incident.estado_tarea, TaskStatus::NoFinalizado);
  }

  #[test]
  fn lost_object_deserialises_from_wire_shape() {
    let raw = serde_json::json!({
      "id": 42,
      "piso": "3",
      "ubicacion": "biblioteca",
      "estadoReporte": "PENDIENTE",
      "estadoTarea": "NO_FINALIZADO",
      "detalle": "billetera negra",
      "email": "ana@utec.edu.pe",
      "phoneNumber": "999111222",
      "fechaReporte": "2024-11-20",
      "fotoObjetoPerdidoUrl": null,
    });
    let lost: LostObject = serde_json::from_value(raw).unwrap();
    assert_eq!(lost.id, 42);
    assert_eq!(lost.estado_reporte, ReportStatus::Pendiente);
    assert_eq!(
      lost.fecha_reporte,
      NaiveDate::from_ymd_opt(2024, 11, 20).unwrap()
    );
    assert!(lost.foto_objeto_perdido_url.is_none());
  }

  #[test]
  fn incident_tolerates_missing_optional_fields() {
    let raw = serde_json::json!({
      "id": 7,
      "piso": "1",
      "detalle": "vidrio roto",
      "ubicacion": "laboratorio",
      "estadoReporte": "ACEPTADO",
      "estadoTarea": "NO_FINALIZADO",
      "email": "ana@utec.edu.pe",
      "phoneNumber": "999111222",
      "fechaReporte": "2024-11-18",
    });
    let incident: Incident = serde_json::from_value(raw).unwrap();
    assert!(incident.description.is_none());
    assert!(incident.estudiante_id.is_none());
    assert!(incident.empleado_id.is_none());
  }

  #[test]
  fn status_patch_omits_unset_axis() {
    let patch = StatusPatch::report_status(ReportStatus::Aceptado);
    let json = serde_json::to_value(&patch).unwrap();
    assert_eq!(
      json,
      serde_json::json!({ "estadoReporte": "ACEPTADO" })
    );

    let patch = StatusPatch::task_status(TaskStatus::Finalizado);
    let json = serde_json::to_value(&patch).unwrap();
    assert_eq!(json, serde_json::json!({ "estadoTarea": "FINALIZADO" }));
  }

  #[test]
  fn creation_dto_uses_wire_field_names() {
    let json = serde_json::to_value(draft().into_lost_object()).unwrap();
    assert_eq!(json["estadoReporte"], "PENDIENTE");
    assert_eq!(json["estadoTarea"], "NO_FINALIZADO");
    assert_eq!(json["phoneNumber"], "999111222");
    assert_eq!(json["fechaReporte"], "2024-11-20");
    assert_eq!(json["fotoObjetoPerdidoUrl"], "");
  }
}

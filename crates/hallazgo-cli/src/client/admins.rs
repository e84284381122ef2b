//! `/admin` endpoints: the administrator's own record, admin creation,
//! and the report roll-ups feeding the dashboard and per-student views.

use anyhow::{Context, Result};
use hallazgo_core::{
  report::{Incident, LostObject},
  stats::ReportVolume,
  user::{Admin, AdminSelf, NewAdmin},
};

use super::{ApiClient, ok};

impl ApiClient {
  /// `GET /admin/me`
  pub async fn admin_self(&self) -> Result<AdminSelf> {
    let resp = self
      .client
      .get(self.url("/admin/me"))
      .bearer_auth(self.bearer()?)
      .send()
      .await
      .context("GET /admin/me failed")?;
    let resp = ok("GET /admin/me", resp)?;
    resp.json().await.context("deserialising admin record")
  }

  /// `POST /admin`
  pub async fn create_admin(&self, new: &NewAdmin) -> Result<Admin> {
    let resp = self
      .client
      .post(self.url("/admin"))
      .bearer_auth(self.bearer()?)
      .json(new)
      .send()
      .await
      .context("POST /admin failed")?;
    let resp = ok("POST /admin", resp)?;
    resp.json().await.context("deserialising admin")
  }

  /// `GET /admin/reportes/objetos-perdidos/aceptados`
  pub async fn accepted_lost_objects(&self) -> Result<Vec<LostObject>> {
    let resp = self
      .client
      .get(self.url("/admin/reportes/objetos-perdidos/aceptados"))
      .bearer_auth(self.bearer()?)
      .send()
      .await
      .context("GET /admin/reportes/objetos-perdidos/aceptados failed")?;
    let resp = ok("GET /admin/reportes/objetos-perdidos/aceptados", resp)?;
    resp.json().await.context("deserialising lost objects")
  }

  /// `GET /admin/reportes/estudiante/{id}/objetos-perdidos`
  pub async fn student_lost_objects(
    &self,
    id: i64,
  ) -> Result<Vec<LostObject>> {
    let path = format!("/admin/reportes/estudiante/{id}/objetos-perdidos");
    let resp = self
      .client
      .get(self.url(&path))
      .bearer_auth(self.bearer()?)
      .send()
      .await
      .with_context(|| format!("GET {path} failed"))?;
    let resp = ok(&format!("GET {path}"), resp)?;
    resp.json().await.context("deserialising lost objects")
  }

  /// `GET /admin/reportes/estudiante/{id}/incidentes`
  pub async fn student_incidents(&self, id: i64) -> Result<Vec<Incident>> {
    let path = format!("/admin/reportes/estudiante/{id}/incidentes");
    let resp = self
      .client
      .get(self.url(&path))
      .bearer_auth(self.bearer()?)
      .send()
      .await
      .with_context(|| format!("GET {path} failed"))?;
    let resp = ok(&format!("GET {path}"), resp)?;
    resp.json().await.context("deserialising incidents")
  }

  /// `GET /admin/dashboard/reportes-general` — per-day report volume for
  /// the dashboard series.
  pub async fn report_volume(&self) -> Result<ReportVolume> {
    let resp = self
      .client
      .get(self.url("/admin/dashboard/reportes-general"))
      .bearer_auth(self.bearer()?)
      .send()
      .await
      .context("GET /admin/dashboard/reportes-general failed")?;
    let resp = ok("GET /admin/dashboard/reportes-general", resp)?;
    resp.json().await.context("deserialising report volume")
  }
}

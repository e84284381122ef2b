//! `/estudiante` endpoints: the student's own record and reports, plus
//! the administrative list/create/delete surface.

use std::path::Path;

use anyhow::{Context, Result};
use hallazgo_core::{
  report::{Incident, LostObject},
  user::{NewStudent, Student, StudentPatch, StudentSelf},
};

use super::{ApiClient, file_part, ok};

impl ApiClient {
  /// `GET /estudiante/lista`
  pub async fn list_students(&self) -> Result<Vec<Student>> {
    let resp = self
      .client
      .get(self.url("/estudiante/lista"))
      .bearer_auth(self.bearer()?)
      .send()
      .await
      .context("GET /estudiante/lista failed")?;
    let resp = ok("GET /estudiante/lista", resp)?;
    resp.json().await.context("deserialising students")
  }

  /// `GET /estudiante/me`
  pub async fn student_self(&self) -> Result<StudentSelf> {
    let resp = self
      .client
      .get(self.url("/estudiante/me"))
      .bearer_auth(self.bearer()?)
      .send()
      .await
      .context("GET /estudiante/me failed")?;
    let resp = ok("GET /estudiante/me", resp)?;
    resp.json().await.context("deserialising student record")
  }

  /// `POST /estudiante`
  pub async fn create_student(&self, new: &NewStudent) -> Result<Student> {
    let resp = self
      .client
      .post(self.url("/estudiante"))
      .bearer_auth(self.bearer()?)
      .json(new)
      .send()
      .await
      .context("POST /estudiante failed")?;
    let resp = ok("POST /estudiante", resp)?;
    resp.json().await.context("deserialising student")
  }

  /// `PATCH /estudiante/me` — multipart: JSON part `estudiante` plus an
  /// optional `fotoPerfil` binary part.
  pub async fn update_student_self(
    &self,
    patch: &StudentPatch,
    photo: Option<&Path>,
  ) -> Result<Student> {
    let metadata =
      serde_json::to_string(patch).context("serialising student patch")?;
    let mut form =
      reqwest::multipart::Form::new().text("estudiante", metadata);
    if let Some(path) = photo {
      form = form.part("fotoPerfil", file_part(path).await?);
    }

    let resp = self
      .client
      .patch(self.url("/estudiante/me"))
      .bearer_auth(self.bearer()?)
      .multipart(form)
      .send()
      .await
      .context("PATCH /estudiante/me failed")?;
    let resp = ok("PATCH /estudiante/me", resp)?;
    resp.json().await.context("deserialising student")
  }

  /// `DELETE /estudiante/{id}`
  pub async fn delete_student(&self, id: i64) -> Result<()> {
    let resp = self
      .client
      .delete(self.url(&format!("/estudiante/{id}")))
      .bearer_auth(self.bearer()?)
      .send()
      .await
      .context("DELETE /estudiante/{id} failed")?;
    ok("DELETE /estudiante/{id}", resp)?;
    Ok(())
  }

  /// `GET /estudiante/me/objetos-perdidos`
  pub async fn my_lost_objects(&self) -> Result<Vec<LostObject>> {
    let resp = self
      .client
      .get(self.url("/estudiante/me/objetos-perdidos"))
      .bearer_auth(self.bearer()?)
      .send()
      .await
      .context("GET /estudiante/me/objetos-perdidos failed")?;
    let resp = ok("GET /estudiante/me/objetos-perdidos", resp)?;
    resp.json().await.context("deserialising lost objects")
  }

  /// `GET /estudiante/me/incidentes`
  pub async fn my_incidents(&self) -> Result<Vec<Incident>> {
    let resp = self
      .client
      .get(self.url("/estudiante/me/incidentes"))
      .bearer_auth(self.bearer()?)
      .send()
      .await
      .context("GET /estudiante/me/incidentes failed")?;
    let resp = ok("GET /estudiante/me/incidentes", resp)?;
    resp.json().await.context("deserialising incidents")
  }
}

//! `/objetoPerdido` endpoints. Creation is multipart (JSON metadata part
//! plus optional photo); everything else is plain JSON.

use std::path::Path;

use anyhow::{Context, Result};
use hallazgo_core::report::{LostObject, NewLostObject, StatusPatch};

use super::{ApiClient, file_part, ok};

impl ApiClient {
  /// `GET /objetoPerdido`
  pub async fn list_lost_objects(&self) -> Result<Vec<LostObject>> {
    let resp = self
      .client
      .get(self.url("/objetoPerdido"))
      .bearer_auth(self.bearer()?)
      .send()
      .await
      .context("GET /objetoPerdido failed")?;
    let resp = ok("GET /objetoPerdido", resp)?;
    resp.json().await.context("deserialising lost objects")
  }

  /// `GET /objetoPerdido/{id}`
  pub async fn get_lost_object(&self, id: i64) -> Result<LostObject> {
    let resp = self
      .client
      .get(self.url(&format!("/objetoPerdido/{id}")))
      .bearer_auth(self.bearer()?)
      .send()
      .await
      .context("GET /objetoPerdido/{id} failed")?;
    let resp = ok("GET /objetoPerdido/{id}", resp)?;
    resp.json().await.context("deserialising lost object")
  }

  /// `POST /objetoPerdido` — multipart: JSON part `objetoPerdido` plus an
  /// optional `fotoObjetoPerdido` binary part.
  pub async fn create_lost_object(
    &self,
    new: &NewLostObject,
    photo: Option<&Path>,
  ) -> Result<LostObject> {
    let metadata =
      serde_json::to_string(new).context("serialising lost object")?;
    let mut form =
      reqwest::multipart::Form::new().text("objetoPerdido", metadata);
    if let Some(path) = photo {
      form = form.part("fotoObjetoPerdido", file_part(path).await?);
    }

    let resp = self
      .client
      .post(self.url("/objetoPerdido"))
      .bearer_auth(self.bearer()?)
      .multipart(form)
      .send()
      .await
      .context("POST /objetoPerdido failed")?;
    let resp = ok("POST /objetoPerdido", resp)?;
    resp.json().await.context("deserialising lost object")
  }

  /// `PATCH /objetoPerdido/{id}/estado` — forwards the chosen status
  /// value verbatim; the backend is the authority on the transition.
  pub async fn patch_lost_object_status(
    &self,
    id: i64,
    patch: &StatusPatch,
  ) -> Result<LostObject> {
    let resp = self
      .client
      .patch(self.url(&format!("/objetoPerdido/{id}/estado")))
      .bearer_auth(self.bearer()?)
      .json(patch)
      .send()
      .await
      .context("PATCH /objetoPerdido/{id}/estado failed")?;
    let resp = ok("PATCH /objetoPerdido/{id}/estado", resp)?;
    resp.json().await.context("deserialising lost object")
  }

  /// `DELETE /objetoPerdido/{id}`
  pub async fn delete_lost_object(&self, id: i64) -> Result<()> {
    let resp = self
      .client
      .delete(self.url(&format!("/objetoPerdido/{id}")))
      .bearer_auth(self.bearer()?)
      .send()
      .await
      .context("DELETE /objetoPerdido/{id} failed")?;
    ok("DELETE /objetoPerdido/{id}", resp)?;
    Ok(())
  }
}

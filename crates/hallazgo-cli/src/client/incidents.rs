//! `/incidente` endpoints. Unlike lost objects, creation is plain JSON —
//! the consumed contract differs between the two kinds.

use anyhow::{Context, Result};
use hallazgo_core::report::{Incident, NewIncident, StatusPatch};

use super::{ApiClient, ok};

impl ApiClient {
  /// `GET /incidente`
  pub async fn list_incidents(&self) -> Result<Vec<Incident>> {
    let resp = self
      .client
      .get(self.url("/incidente"))
      .bearer_auth(self.bearer()?)
      .send()
      .await
      .context("GET /incidente failed")?;
    let resp = ok("GET /incidente", resp)?;
    resp.json().await.context("deserialising incidents")
  }

  /// `GET /incidente/{id}`
  pub async fn get_incident(&self, id: i64) -> Result<Incident> {
    let resp = self
      .client
      .get(self.url(&format!("/incidente/{id}")))
      .bearer_auth(self.bearer()?)
      .send()
      .await
      .context("GET /incidente/{id} failed")?;
    let resp = ok("GET /incidente/{id}", resp)?;
    resp.json().await.context("deserialising incident")
  }

  /// `POST /incidente`
  pub async fn create_incident(&self, new: &NewIncident) -> Result<Incident> {
    let resp = self
      .client
      .post(self.url("/incidente"))
      .bearer_auth(self.bearer()?)
      .json(new)
      .send()
      .await
      .context("POST /incidente failed")?;
    let resp = ok("POST /incidente", resp)?;
    resp.json().await.context("deserialising incident")
  }

  /// `PATCH /incidente/{id}/estado` — forwards the chosen status value
  /// verbatim; the backend is the authority on the transition.
  pub async fn patch_incident_status(
    &self,
    id: i64,
    patch: &StatusPatch,
  ) -> Result<Incident> {
    let resp = self
      .client
      .patch(self.url(&format!("/incidente/{id}/estado")))
      .bearer_auth(self.bearer()?)
      .json(patch)
      .send()
      .await
      .context("PATCH /incidente/{id}/estado failed")?;
    let resp = ok("PATCH /incidente/{id}/estado", resp)?;
    resp.json().await.context("deserialising incident")
  }

  /// `DELETE /incidente/{id}`
  pub async fn delete_incident(&self, id: i64) -> Result<()> {
    let resp = self
      .client
      .delete(self.url(&format!("/incidente/{id}")))
      .bearer_auth(self.bearer()?)
      .send()
      .await
      .context("DELETE /incidente/{id} failed")?;
    ok("DELETE /incidente/{id}", resp)?;
    Ok(())
  }
}

//! `/empleado` endpoints: the employee's own record and assigned work,
//! plus the administrative list/create/delete surface.

use anyhow::{Context, Result};
use hallazgo_core::{
  report::{Incident, LostObject},
  user::{Employee, EmployeeSelf, NewEmployee},
};

use super::{ApiClient, ok};

impl ApiClient {
  /// `GET /empleado/lista`
  pub async fn list_employees(&self) -> Result<Vec<Employee>> {
    let resp = self
      .client
      .get(self.url("/empleado/lista"))
      .bearer_auth(self.bearer()?)
      .send()
      .await
      .context("GET /empleado/lista failed")?;
    let resp = ok("GET /empleado/lista", resp)?;
    resp.json().await.context("deserialising employees")
  }

  /// `GET /empleado/me`
  pub async fn employee_self(&self) -> Result<EmployeeSelf> {
    let resp = self
      .client
      .get(self.url("/empleado/me"))
      .bearer_auth(self.bearer()?)
      .send()
      .await
      .context("GET /empleado/me failed")?;
    let resp = ok("GET /empleado/me", resp)?;
    resp.json().await.context("deserialising employee record")
  }

  /// `POST /empleado`
  pub async fn create_employee(&self, new: &NewEmployee) -> Result<Employee> {
    let resp = self
      .client
      .post(self.url("/empleado"))
      .bearer_auth(self.bearer()?)
      .json(new)
      .send()
      .await
      .context("POST /empleado failed")?;
    let resp = ok("POST /empleado", resp)?;
    resp.json().await.context("deserialising employee")
  }

  /// `DELETE /empleado/{id}`
  pub async fn delete_employee(&self, id: i64) -> Result<()> {
    let resp = self
      .client
      .delete(self.url(&format!("/empleado/{id}")))
      .bearer_auth(self.bearer()?)
      .send()
      .await
      .context("DELETE /empleado/{id} failed")?;
    ok("DELETE /empleado/{id}", resp)?;
    Ok(())
  }

  /// `GET /empleado/me/objetos-perdidos` — lost objects assigned to the
  /// authenticated employee.
  pub async fn assigned_lost_objects(&self) -> Result<Vec<LostObject>> {
    let resp = self
      .client
      .get(self.url("/empleado/me/objetos-perdidos"))
      .bearer_auth(self.bearer()?)
      .send()
      .await
      .context("GET /empleado/me/objetos-perdidos failed")?;
    let resp = ok("GET /empleado/me/objetos-perdidos", resp)?;
    resp.json().await.context("deserialising lost objects")
  }

  /// `GET /empleado/me/incidentes` — incidents assigned to the
  /// authenticated employee.
  pub async fn assigned_incidents(&self) -> Result<Vec<Incident>> {
    let resp = self
      .client
      .get(self.url("/empleado/me/incidentes"))
      .bearer_auth(self.bearer()?)
      .send()
      .await
      .context("GET /empleado/me/incidentes failed")?;
    let resp = ok("GET /empleado/me/incidentes", resp)?;
    resp.json().await.context("deserialising incidents")
  }
}

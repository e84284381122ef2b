//! Application state machine and event dispatcher.
//!
//! One screen owns the keyboard at a time. Remote calls are awaited
//! inline inside key handling, so a screen is never torn down while its
//! request is in flight; every mutation of displayed state happens in the
//! success branch of the call that confirmed it.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};
use hallazgo_core::{
  lifecycle,
  report::{
    Incident, LostObject, ReportDraft, ReportKind, ReportStatus,
    StatusPatch, TaskStatus,
  },
  session::{LoginRequest, RegisterRequest, Role, Session},
  stats::DailySeries,
  user::{
    Employee, NewAdmin, NewEmployee, NewStudent, Profile, Student,
    StudentPatch,
  },
};

use crate::{
  client::ApiClient,
  forms::{Field, Form, FormEvent},
  nav::{self, NavTarget},
  session::SessionStore,
};

// ─── Screen ───────────────────────────────────────────────────────────────────

/// Which view owns the keyboard and the content pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
  Login,
  Register,
  Dashboard,
  Reports,
  ReportForm,
  ReportDetail,
  Users,
  UserForm,
  Profile,
  ProfileEdit,
}

// ─── Report plumbing ─────────────────────────────────────────────────────────

/// Which backend surface feeds the report list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportScope {
  /// The student's own reports.
  Mine,
  /// Everything, for administrative review.
  All,
  /// Work assigned to the employee.
  Assigned,
  /// One student's reports, viewed by an administrator.
  Student(i64),
}

impl ReportScope {
  pub fn title(&self) -> &'static str {
    match self {
      Self::Mine => "Mis Reportes",
      Self::All => "Reportes",
      Self::Assigned => "Tareas Asignadas",
      Self::Student(_) => "Reportes del Estudiante",
    }
  }
}

/// A loaded report of either kind, for the detail screen.
#[derive(Debug, Clone)]
pub enum ReportRecord {
  Lost(LostObject),
  Incident(Incident),
}

impl ReportRecord {
  pub fn kind(&self) -> ReportKind {
    match self {
      Self::Lost(_) => ReportKind::LostObject,
      Self::Incident(_) => ReportKind::Incident,
    }
  }

  pub fn id(&self) -> i64 {
    match self {
      Self::Lost(o) => o.id,
      Self::Incident(i) => i.id,
    }
  }

  pub fn report_status(&self) -> ReportStatus {
    match self {
      Self::Lost(o) => o.estado_reporte,
      Self::Incident(i) => i.estado_reporte,
    }
  }

  pub fn task_status(&self) -> TaskStatus {
    match self {
      Self::Lost(o) => o.estado_tarea,
      Self::Incident(i) => i.estado_tarea,
    }
  }
}

/// Modal selector over the targets the lifecycle model allows. Only ever
/// constructed with a non-empty option list.
#[derive(Debug, Clone)]
pub enum StatusSelector {
  Report {
    options: Vec<ReportStatus>,
    cursor:  usize,
  },
  Task {
    options: Vec<TaskStatus>,
    cursor:  usize,
  },
}

// ─── User administration ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserTab {
  Students,
  Employees,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserFormKind {
  Student,
  Employee,
  Admin,
}

impl UserFormKind {
  pub fn title(&self) -> &'static str {
    match self {
      Self::Student => "Nuevo Estudiante",
      Self::Employee => "Nuevo Empleado",
      Self::Admin => "Nuevo Administrador",
    }
  }
}

// ─── Forms ───────────────────────────────────────────────────────────────────

fn login_form() -> Form {
  Form::new(vec![
    Field::required("Correo electrónico"),
    Field::secret("Contraseña"),
  ])
}

fn register_form() -> Form {
  Form::new(vec![
    Field::required("Nombre"),
    Field::required("Apellido"),
    Field::required("Correo electrónico"),
    Field::required("Celular"),
    Field::secret("Contraseña"),
  ])
}

fn report_form(email: &str, phone: &str) -> Form {
  Form::new(vec![
    Field::required("Piso"),
    Field::required("Ubicación"),
    Field::required("Detalle"),
    Field::optional("Descripción"),
    Field::required("Fecha (AAAA-MM-DD)")
      .with_value(Local::now().date_naive().to_string()),
    Field::optional("Foto (ruta)"),
    Field::readonly("Correo", email),
    Field::readonly("Celular", phone),
  ])
}

fn user_form(kind: UserFormKind) -> Form {
  let mut fields = vec![
    Field::required("Nombre"),
    Field::required("Apellido"),
    Field::required("Correo electrónico"),
    Field::required("Celular"),
  ];
  if kind != UserFormKind::Student {
    fields.push(Field::secret("Contraseña"));
  }
  Form::new(fields)
}

fn non_empty(value: &str) -> Option<String> {
  let trimmed = value.trim();
  (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  /// Current screen / keyboard focus.
  pub screen: Screen,

  /// The resolved session, if a credential is held. `None` means the
  /// login screen.
  pub session: Option<Session>,

  /// The authenticated user's own record, loaded once per session.
  pub profile: Option<Profile>,

  /// The form owned by whichever form screen is active.
  pub form: Form,

  /// Inline validation / submission error shown above the active form.
  pub form_error: Option<String>,

  /// Registration: create an employee account instead of a student one.
  pub register_employee: bool,

  pub user_form_kind: UserFormKind,

  /// Which kind the report form will submit as.
  pub report_form_kind: ReportKind,

  // Report lists
  pub report_scope:  ReportScope,
  pub report_kind:   ReportKind,
  pub lost_objects:  Vec<LostObject>,
  pub incidents:     Vec<Incident>,
  pub report_cursor: usize,

  /// The record shown on the detail screen.
  pub detail: Option<ReportRecord>,

  /// Status-change modal, when open.
  pub selector: Option<StatusSelector>,

  // User administration
  pub user_tab:    UserTab,
  pub students:    Vec<Student>,
  pub employees:   Vec<Employee>,
  pub user_cursor: usize,

  // Dashboard
  pub series:   DailySeries,
  pub accepted: Vec<LostObject>,

  /// Fuzzy filter over the accepted-objects table.
  pub filter:        String,
  pub filter_active: bool,

  /// One-line message shown in the status bar.
  pub status_msg: String,

  pub client: ApiClient,
  pub store:  SessionStore,
}

impl App {
  pub fn new(
    client: ApiClient,
    store: SessionStore,
    session: Option<Session>,
  ) -> Self {
    let screen = if session.is_some() {
      Screen::Dashboard
    } else {
      Screen::Login
    };
    Self {
      screen,
      session,
      profile: None,
      form: login_form(),
      form_error: None,
      register_employee: false,
      user_form_kind: UserFormKind::Student,
      report_form_kind: ReportKind::LostObject,
      report_scope: ReportScope::Mine,
      report_kind: ReportKind::LostObject,
      lost_objects: Vec::new(),
      incidents: Vec::new(),
      report_cursor: 0,
      detail: None,
      selector: None,
      user_tab: UserTab::Students,
      students: Vec::new(),
      employees: Vec::new(),
      user_cursor: 0,
      series: DailySeries::default(),
      accepted: Vec::new(),
      filter: String::new(),
      filter_active: false,
      status_msg: String::new(),
      client,
      store,
    }
  }

  /// The current role; [`Role::Usuario`] outside a session, which no
  /// gate accepts.
  pub fn role(&self) -> Role {
    self
      .session
      .as_ref()
      .map(|s| s.role)
      .unwrap_or(Role::Usuario)
  }

  /// Initial load for a session restored from the persisted credential.
  pub async fn load_initial(&mut self) {
    if self.session.is_some() {
      self.load_profile().await;
      self.load_dashboard().await;
    }
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Load the authenticated user's own record via the endpoint matching
  /// the session role.
  async fn load_profile(&mut self) {
    let loaded = match self.role() {
      Role::Estudiante => {
        self.client.student_self().await.map(Profile::Student)
      }
      Role::Empleado => {
        self.client.employee_self().await.map(Profile::Employee)
      }
      Role::Administrador => {
        self.client.admin_self().await.map(Profile::Admin)
      }
      // No `/me` surface exists for an unrecognised role.
      Role::Usuario => return,
    };
    match loaded {
      Ok(profile) => self.profile = Some(profile),
      Err(e) => tracing::warn!("perfil: {e:#}"),
    }
  }

  /// Fetch the admin dashboard aggregates. Each call is guarded
  /// separately: one failure logs a warning and the rest of the screen
  /// still renders.
  async fn load_dashboard(&mut self) {
    if self.role() != Role::Administrador {
      return;
    }
    match self.client.report_volume().await {
      Ok(volume) => {
        self.series =
          DailySeries::from_volume(&volume, Local::now().date_naive());
      }
      Err(e) => tracing::warn!("volumen de reportes: {e:#}"),
    }
    match self.client.accepted_lost_objects().await {
      Ok(objects) => self.accepted = objects,
      Err(e) => tracing::warn!("objetos aceptados: {e:#}"),
    }
  }

  /// Load both report kinds for `scope` and switch to the list screen.
  /// The two fetches are independently guarded.
  async fn open_reports(&mut self, scope: ReportScope) {
    self.status_msg.clear();

    let lost = match scope {
      ReportScope::Mine => self.client.my_lost_objects().await,
      ReportScope::All => self.client.list_lost_objects().await,
      ReportScope::Assigned => self.client.assigned_lost_objects().await,
      ReportScope::Student(id) => self.client.student_lost_objects(id).await,
    };
    match lost {
      Ok(objects) => self.lost_objects = objects,
      Err(e) => {
        tracing::warn!("objetos perdidos: {e:#}");
        self.status_msg = format!("Error: {e}");
      }
    }

    let incidents = match scope {
      ReportScope::Mine => self.client.my_incidents().await,
      ReportScope::All => self.client.list_incidents().await,
      ReportScope::Assigned => self.client.assigned_incidents().await,
      ReportScope::Student(id) => self.client.student_incidents(id).await,
    };
    match incidents {
      Ok(incidents) => self.incidents = incidents,
      Err(e) => {
        tracing::warn!("incidentes: {e:#}");
        self.status_msg = format!("Error: {e}");
      }
    }

    self.report_scope = scope;
    self.report_kind = ReportKind::LostObject;
    self.report_cursor = 0;
    self.screen = Screen::Reports;
  }

  /// Fetch one report and open the detail screen for it.
  async fn open_detail(&mut self, kind: ReportKind, id: i64) {
    let record = match kind {
      ReportKind::LostObject => self
        .client
        .get_lost_object(id)
        .await
        .map(ReportRecord::Lost),
      ReportKind::Incident => {
        self.client.get_incident(id).await.map(ReportRecord::Incident)
      }
    };
    match record {
      Ok(record) => {
        self.detail = Some(record);
        self.selector = None;
        self.status_msg.clear();
        self.screen = Screen::ReportDetail;
      }
      Err(e) => self.status_msg = format!("Error: {e}"),
    }
  }

  async fn open_users(&mut self) {
    self.status_msg.clear();
    match self.client.list_students().await {
      Ok(students) => self.students = students,
      Err(e) => {
        tracing::warn!("estudiantes: {e:#}");
        self.status_msg = format!("Error: {e}");
      }
    }
    match self.client.list_employees().await {
      Ok(employees) => self.employees = employees,
      Err(e) => {
        tracing::warn!("empleados: {e:#}");
        self.status_msg = format!("Error: {e}");
      }
    }
    self.user_tab = UserTab::Students;
    self.user_cursor = 0;
    self.screen = Screen::Users;
  }

  // ── Derived views ─────────────────────────────────────────────────────────

  /// Accepted lost objects matching the dashboard filter.
  pub fn filtered_accepted(&self) -> Vec<&LostObject> {
    if self.filter.is_empty() {
      return self.accepted.iter().collect();
    }
    let matcher = SkimMatcherV2::default();
    self
      .accepted
      .iter()
      .filter(|o| {
        matcher.fuzzy_match(&o.detalle, &self.filter).is_some()
          || matcher.fuzzy_match(&o.ubicacion, &self.filter).is_some()
      })
      .collect()
  }

  pub fn visible_report_count(&self) -> usize {
    match self.report_kind {
      ReportKind::LostObject => self.lost_objects.len(),
      ReportKind::Incident => self.incidents.len(),
    }
  }

  fn cursor_report_id(&self) -> Option<i64> {
    match self.report_kind {
      ReportKind::LostObject => {
        self.lost_objects.get(self.report_cursor).map(|o| o.id)
      }
      ReportKind::Incident => {
        self.incidents.get(self.report_cursor).map(|i| i.id)
      }
    }
  }

  fn visible_user_count(&self) -> usize {
    match self.user_tab {
      UserTab::Students => self.students.len(),
      UserTab::Employees => self.employees.len(),
    }
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL)
      && key.code == KeyCode::Char('c')
    {
      return Ok(false);
    }

    match self.screen {
      Screen::Login => self.handle_login_key(key).await,
      Screen::Register => self.handle_register_key(key).await,
      Screen::Dashboard => self.handle_dashboard_key(key).await,
      Screen::Reports => self.handle_reports_key(key).await,
      Screen::ReportForm => self.handle_report_form_key(key).await,
      Screen::ReportDetail => self.handle_detail_key(key).await,
      Screen::Users => self.handle_users_key(key).await,
      Screen::UserForm => self.handle_user_form_key(key).await,
      Screen::Profile => self.handle_profile_key(key).await,
      Screen::ProfileEdit => self.handle_profile_edit_key(key).await,
    }
  }

  /// Digits activate the sidebar items for the current role. Returns
  /// `Some(continue)` when the key was consumed as navigation.
  async fn nav_key(&mut self, key: KeyEvent) -> Result<Option<bool>> {
    let KeyCode::Char(c) = key.code else {
      return Ok(None);
    };
    let Some(digit) = c.to_digit(10) else {
      return Ok(None);
    };
    let items = nav::nav_items(self.role());
    let Some(item) =
      (digit as usize).checked_sub(1).and_then(|i| items.get(i))
    else {
      return Ok(None);
    };
    let target = item.target;
    Ok(Some(self.activate(target).await?))
  }

  async fn activate(&mut self, target: NavTarget) -> Result<bool> {
    match target {
      NavTarget::Dashboard => {
        self.load_dashboard().await;
        self.screen = Screen::Dashboard;
      }
      NavTarget::MyReports => self.open_reports(ReportScope::Mine).await,
      NavTarget::AllReports => self.open_reports(ReportScope::All).await,
      NavTarget::Tasks => self.open_reports(ReportScope::Assigned).await,
      NavTarget::Users => self.open_users().await,
      NavTarget::Profile => {
        if self.profile.is_none() {
          self.load_profile().await;
        }
        self.screen = Screen::Profile;
      }
      NavTarget::Logout => self.logout(),
    }
    Ok(true)
  }

  /// Clear the persisted credential (idempotent) and return to login.
  fn logout(&mut self) {
    if let Err(e) = self.store.clear() {
      tracing::warn!("cerrando sesión: {e:#}");
    }
    self.client.set_token(None);
    self.session = None;
    self.profile = None;
    self.lost_objects.clear();
    self.incidents.clear();
    self.students.clear();
    self.employees.clear();
    self.accepted.clear();
    self.series = DailySeries::default();
    self.detail = None;
    self.selector = None;
    self.filter.clear();
    self.filter_active = false;
    self.status_msg.clear();
    self.form = login_form();
    self.form_error = None;
    self.screen = Screen::Login;
  }

  // ── Login / register ──────────────────────────────────────────────────────

  async fn handle_login_key(&mut self, key: KeyEvent) -> Result<bool> {
    // Ctrl-R switches to the registration form.
    if key.modifiers.contains(KeyModifiers::CONTROL)
      && key.code == KeyCode::Char('r')
    {
      self.form = register_form();
      self.register_employee = false;
      self.form_error = None;
      self.screen = Screen::Register;
      return Ok(true);
    }
    match self.form.handle_key(key) {
      FormEvent::Submitted => self.submit_login().await,
      FormEvent::Cancelled => return Ok(false),
      FormEvent::None => {}
    }
    Ok(true)
  }

  async fn submit_login(&mut self) {
    if let Some(label) = self.form.missing_required() {
      self.form_error = Some(format!("Por favor completa: {label}"));
      return;
    }
    let request = LoginRequest {
      email:    self.form.value("Correo electrónico").trim().to_string(),
      password: self.form.value("Contraseña").to_string(),
    };
    match self.client.login(&request).await {
      Ok(resp) => {
        let Some(token) = resp.token else {
          self.form_error = Some("La respuesta no trajo credencial".into());
          return;
        };
        let Some(session) = Session::from_token(&token) else {
          self.form_error = Some("Credencial inválida".into());
          return;
        };
        if let Err(e) = self.store.save(&token) {
          tracing::warn!("guardando credencial: {e:#}");
        }
        self.client.set_token(Some(token));
        self.session = Some(session);
        self.form = Form::default();
        self.form_error = None;
        self.status_msg.clear();
        self.load_profile().await;
        self.load_dashboard().await;
        self.screen = Screen::Dashboard;
      }
      Err(e) => {
        tracing::warn!("inicio de sesión: {e:#}");
        self.form_error =
          Some("Correo o contraseña incorrectos. Intenta de nuevo.".into());
      }
    }
  }

  async fn handle_register_key(&mut self, key: KeyEvent) -> Result<bool> {
    // Ctrl-E toggles between student and employee registration.
    if key.modifiers.contains(KeyModifiers::CONTROL)
      && key.code == KeyCode::Char('e')
    {
      self.register_employee = !self.register_employee;
      return Ok(true);
    }
    match self.form.handle_key(key) {
      FormEvent::Submitted => self.submit_register().await,
      FormEvent::Cancelled => {
        self.form = login_form();
        self.form_error = None;
        self.screen = Screen::Login;
      }
      FormEvent::None => {}
    }
    Ok(true)
  }

  async fn submit_register(&mut self) {
    if let Some(label) = self.form.missing_required() {
      self.form_error = Some(format!("Por favor completa: {label}"));
      return;
    }
    let request = RegisterRequest {
      first_name:  self.form.value("Nombre").trim().to_string(),
      last_name:   self.form.value("Apellido").trim().to_string(),
      email:       self.form.value("Correo electrónico").trim().to_string(),
      password:    self.form.value("Contraseña").to_string(),
      phone:       self.form.value("Celular").trim().to_string(),
      is_empleado: self.register_employee,
    };
    match self.client.register(&request).await {
      Ok(resp) => {
        self.form = login_form();
        self.form_error = None;
        self.status_msg = resp
          .message
          .unwrap_or_else(|| "Cuenta creada, inicia sesión".to_string());
        self.screen = Screen::Login;
      }
      Err(e) => {
        tracing::warn!("registro: {e:#}");
        self.form_error = Some(format!("Error: {e}"));
      }
    }
  }

  // ── Dashboard ─────────────────────────────────────────────────────────────

  async fn handle_dashboard_key(&mut self, key: KeyEvent) -> Result<bool> {
    if self.filter_active {
      match key.code {
        KeyCode::Esc => {
          self.filter_active = false;
          self.filter.clear();
        }
        KeyCode::Enter => self.filter_active = false,
        KeyCode::Backspace => {
          self.filter.pop();
        }
        KeyCode::Char(c) => self.filter.push(c),
        _ => {}
      }
      return Ok(true);
    }
    if let Some(cont) = self.nav_key(key).await? {
      return Ok(cont);
    }
    match key.code {
      KeyCode::Char('q') => return Ok(false),
      KeyCode::Char('/') if self.role() == Role::Administrador => {
        self.filter_active = true;
        self.filter.clear();
      }
      KeyCode::Char('r') => self.load_dashboard().await,
      _ => {}
    }
    Ok(true)
  }

  // ── Report list ───────────────────────────────────────────────────────────

  async fn handle_reports_key(&mut self, key: KeyEvent) -> Result<bool> {
    if let Some(cont) = self.nav_key(key).await? {
      return Ok(cont);
    }
    match key.code {
      KeyCode::Char('q') => return Ok(false),
      KeyCode::Esc => {
        if matches!(self.report_scope, ReportScope::Student(_)) {
          self.open_users().await;
        } else {
          self.screen = Screen::Dashboard;
        }
      }
      KeyCode::Tab => {
        self.report_kind = self.report_kind.toggled();
        self.report_cursor = 0;
      }
      KeyCode::Down | KeyCode::Char('j') => {
        let len = self.visible_report_count();
        if len > 0 && self.report_cursor + 1 < len {
          self.report_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        if self.report_cursor > 0 {
          self.report_cursor -= 1;
        }
      }
      KeyCode::Enter => {
        if let Some(id) = self.cursor_report_id() {
          self.open_detail(self.report_kind, id).await;
        }
      }
      KeyCode::Char('n') if self.report_scope == ReportScope::Mine => {
        self.open_report_form().await;
      }
      KeyCode::Char('d')
        if lifecycle::role_may_delete_report(self.role()) =>
      {
        self.delete_cursor_report().await;
      }
      _ => {}
    }
    Ok(true)
  }

  async fn delete_cursor_report(&mut self) {
    let Some(id) = self.cursor_report_id() else {
      return;
    };
    let deleted = match self.report_kind {
      ReportKind::LostObject => self.client.delete_lost_object(id).await,
      ReportKind::Incident => self.client.delete_incident(id).await,
    };
    match deleted {
      Ok(()) => {
        match self.report_kind {
          ReportKind::LostObject => {
            self.lost_objects.retain(|o| o.id != id)
          }
          ReportKind::Incident => self.incidents.retain(|i| i.id != id),
        }
        let len = self.visible_report_count();
        if self.report_cursor >= len && self.report_cursor > 0 {
          self.report_cursor -= 1;
        }
        self.status_msg = format!("Reporte {id} eliminado");
      }
      Err(e) => {
        tracing::warn!("eliminando reporte: {e:#}");
        self.status_msg = format!("Error: {e}");
      }
    }
  }

  // ── Report form ───────────────────────────────────────────────────────────

  /// Open the creation form with contact fields prefilled, read-only,
  /// from the student's own record.
  async fn open_report_form(&mut self) {
    if self.profile.is_none() {
      self.load_profile().await;
    }
    let (email, phone) = match &self.profile {
      Some(p) => (p.email().to_string(), p.phone_number().to_string()),
      None => (String::new(), String::new()),
    };
    self.report_form_kind = ReportKind::LostObject;
    self.form = report_form(&email, &phone);
    self.form_error = None;
    self.screen = Screen::ReportForm;
  }

  async fn handle_report_form_key(&mut self, key: KeyEvent) -> Result<bool> {
    // Ctrl-K toggles the report kind.
    if key.modifiers.contains(KeyModifiers::CONTROL)
      && key.code == KeyCode::Char('k')
    {
      self.report_form_kind = self.report_form_kind.toggled();
      return Ok(true);
    }
    match self.form.handle_key(key) {
      FormEvent::Submitted => self.submit_report().await,
      FormEvent::Cancelled => {
        self.form_error = None;
        self.screen = Screen::Reports;
      }
      FormEvent::None => {}
    }
    Ok(true)
  }

  async fn submit_report(&mut self) {
    // Validation happens before any remote call.
    if let Some(label) = self.form.missing_required() {
      self.form_error = Some(format!("Por favor completa: {label}"));
      return;
    }
    let raw_date = self.form.value("Fecha (AAAA-MM-DD)").trim().to_string();
    let Ok(fecha) = NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d") else {
      self.form_error = Some("Fecha inválida, usa AAAA-MM-DD".into());
      return;
    };
    let draft = ReportDraft {
      piso:          self.form.value("Piso").trim().to_string(),
      ubicacion:     self.form.value("Ubicación").trim().to_string(),
      detalle:       self.form.value("Detalle").trim().to_string(),
      description:   self.form.value("Descripción").trim().to_string(),
      email:         self.form.value("Correo").to_string(),
      phone_number:  self.form.value("Celular").to_string(),
      fecha_reporte: fecha,
    };
    let photo = non_empty(self.form.value("Foto (ruta)")).map(PathBuf::from);

    let created = match self.report_form_kind {
      ReportKind::LostObject => self
        .client
        .create_lost_object(&draft.into_lost_object(), photo.as_deref())
        .await
        .map(|o| o.id),
      // The incident contract has no binary part; a photo path is
      // ignored here.
      ReportKind::Incident => self
        .client
        .create_incident(&draft.into_incident())
        .await
        .map(|i| i.id),
    };
    match created {
      Ok(id) => {
        self.form_error = None;
        self.status_msg = format!("Reporte {id} creado");
        self.open_reports(ReportScope::Mine).await;
      }
      Err(e) => {
        tracing::warn!("creando reporte: {e:#}");
        self.form_error = Some(format!("Error: {e}"));
      }
    }
  }

  // ── Report detail ─────────────────────────────────────────────────────────

  async fn handle_detail_key(&mut self, key: KeyEvent) -> Result<bool> {
    // The selector modal owns the keyboard while open.
    if self.selector.is_some() {
      return self.handle_selector_key(key).await;
    }
    if let Some(cont) = self.nav_key(key).await? {
      return Ok(cont);
    }
    match key.code {
      KeyCode::Char('q') => return Ok(false),
      KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => {
        self.detail = None;
        self.screen = Screen::Reports;
      }
      KeyCode::Char('r') => self.open_report_status_selector(),
      KeyCode::Char('t') => self.open_task_status_selector(),
      KeyCode::Char('d')
        if lifecycle::role_may_delete_report(self.role()) =>
      {
        self.delete_detail_report().await;
      }
      _ => {}
    }
    Ok(true)
  }

  /// The selector only exists when the lifecycle model offers targets
  /// for this role and the report's current state.
  fn open_report_status_selector(&mut self) {
    let Some(record) = &self.detail else {
      return;
    };
    let options = lifecycle::report_status_targets(
      self.role(),
      record.report_status(),
    );
    if options.is_empty() {
      return;
    }
    self.selector = Some(StatusSelector::Report { options, cursor: 0 });
  }

  fn open_task_status_selector(&mut self) {
    let Some(record) = &self.detail else {
      return;
    };
    let options =
      lifecycle::task_status_targets(self.role(), record.task_status());
    if options.is_empty() {
      return;
    }
    self.selector = Some(StatusSelector::Task { options, cursor: 0 });
  }

  async fn handle_selector_key(&mut self, key: KeyEvent) -> Result<bool> {
    match key.code {
      KeyCode::Esc => self.selector = None,
      KeyCode::Down | KeyCode::Char('j') => {
        if let Some(selector) = &mut self.selector {
          let (len, cursor) = match selector {
            StatusSelector::Report { options, cursor } => {
              (options.len(), cursor)
            }
            StatusSelector::Task { options, cursor } => {
              (options.len(), cursor)
            }
          };
          if *cursor + 1 < len {
            *cursor += 1;
          }
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        if let Some(selector) = &mut self.selector {
          let cursor = match selector {
            StatusSelector::Report { cursor, .. } => cursor,
            StatusSelector::Task { cursor, .. } => cursor,
          };
          if *cursor > 0 {
            *cursor -= 1;
          }
        }
      }
      KeyCode::Enter => self.apply_selected_status().await,
      _ => {}
    }
    Ok(true)
  }

  /// Forward the chosen value verbatim; displayed state changes only in
  /// the success branch of the confirming call.
  async fn apply_selected_status(&mut self) {
    let Some(selector) = self.selector.take() else {
      return;
    };
    let Some(record) = &self.detail else {
      return;
    };
    let id = record.id();
    let kind = record.kind();
    let role = self.role();

    let patch = match &selector {
      StatusSelector::Report { options, cursor } => {
        let Some(&to) = options.get(*cursor) else {
          return;
        };
        if !lifecycle::can_transition_report_status(
          role,
          record.report_status(),
          to,
        ) {
          return;
        }
        StatusPatch::report_status(to)
      }
      StatusSelector::Task { options, cursor } => {
        let Some(&to) = options.get(*cursor) else {
          return;
        };
        if !lifecycle::can_transition_task_status(
          role,
          record.task_status(),
          to,
        ) {
          return;
        }
        StatusPatch::task_status(to)
      }
    };

    let updated = match kind {
      ReportKind::LostObject => self
        .client
        .patch_lost_object_status(id, &patch)
        .await
        .map(ReportRecord::Lost),
      ReportKind::Incident => self
        .client
        .patch_incident_status(id, &patch)
        .await
        .map(ReportRecord::Incident),
    };
    match updated {
      Ok(record) => {
        // Echo the confirmed value into the list rows as well.
        match &record {
          ReportRecord::Lost(updated) => {
            if let Some(row) =
              self.lost_objects.iter_mut().find(|o| o.id == updated.id)
            {
              *row = updated.clone();
            }
          }
          ReportRecord::Incident(updated) => {
            if let Some(row) =
              self.incidents.iter_mut().find(|i| i.id == updated.id)
            {
              *row = updated.clone();
            }
          }
        }
        self.detail = Some(record);
        self.status_msg = "Estado actualizado".into();
      }
      Err(e) => {
        tracing::warn!("actualizando estado: {e:#}");
        self.status_msg = format!("Error: {e}");
      }
    }
  }

  async fn delete_detail_report(&mut self) {
    let Some(record) = &self.detail else {
      return;
    };
    let id = record.id();
    let kind = record.kind();
    let deleted = match kind {
      ReportKind::LostObject => self.client.delete_lost_object(id).await,
      ReportKind::Incident => self.client.delete_incident(id).await,
    };
    match deleted {
      Ok(()) => {
        match kind {
          ReportKind::LostObject => {
            self.lost_objects.retain(|o| o.id != id)
          }
          ReportKind::Incident => self.incidents.retain(|i| i.id != id),
        }
        self.detail = None;
        self.status_msg = format!("Reporte {id} eliminado");
        self.screen = Screen::Reports;
      }
      Err(e) => {
        tracing::warn!("eliminando reporte: {e:#}");
        self.status_msg = format!("Error: {e}");
      }
    }
  }

  // ── User administration ───────────────────────────────────────────────────

  async fn handle_users_key(&mut self, key: KeyEvent) -> Result<bool> {
    if let Some(cont) = self.nav_key(key).await? {
      return Ok(cont);
    }
    match key.code {
      KeyCode::Char('q') => return Ok(false),
      KeyCode::Esc => self.screen = Screen::Dashboard,
      KeyCode::Tab => {
        self.user_tab = match self.user_tab {
          UserTab::Students => UserTab::Employees,
          UserTab::Employees => UserTab::Students,
        };
        self.user_cursor = 0;
      }
      KeyCode::Down | KeyCode::Char('j') => {
        let len = self.visible_user_count();
        if len > 0 && self.user_cursor + 1 < len {
          self.user_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        if self.user_cursor > 0 {
          self.user_cursor -= 1;
        }
      }
      KeyCode::Char('n') => self.open_user_form(UserFormKind::Student),
      KeyCode::Char('e') => self.open_user_form(UserFormKind::Employee),
      KeyCode::Char('a') => self.open_user_form(UserFormKind::Admin),
      KeyCode::Char('r') if self.user_tab == UserTab::Students => {
        if let Some(id) =
          self.students.get(self.user_cursor).map(|s| s.id)
        {
          self.open_reports(ReportScope::Student(id)).await;
        }
      }
      KeyCode::Char('d') => self.delete_cursor_user().await,
      _ => {}
    }
    Ok(true)
  }

  fn open_user_form(&mut self, kind: UserFormKind) {
    self.user_form_kind = kind;
    self.form = user_form(kind);
    self.form_error = None;
    self.screen = Screen::UserForm;
  }

  async fn delete_cursor_user(&mut self) {
    match self.user_tab {
      UserTab::Students => {
        let Some(id) = self.students.get(self.user_cursor).map(|s| s.id)
        else {
          return;
        };
        match self.client.delete_student(id).await {
          Ok(()) => {
            self.students.retain(|s| s.id != id);
            self.status_msg = format!("Estudiante {id} eliminado");
          }
          Err(e) => {
            tracing::warn!("eliminando estudiante: {e:#}");
            self.status_msg = format!("Error: {e}");
          }
        }
      }
      UserTab::Employees => {
        let Some(id) = self.employees.get(self.user_cursor).map(|e| e.id)
        else {
          return;
        };
        match self.client.delete_employee(id).await {
          Ok(()) => {
            self.employees.retain(|e| e.id != id);
            self.status_msg = format!("Empleado {id} eliminado");
          }
          Err(e) => {
            tracing::warn!("eliminando empleado: {e:#}");
            self.status_msg = format!("Error: {e}");
          }
        }
      }
    }
    let len = self.visible_user_count();
    if self.user_cursor >= len && self.user_cursor > 0 {
      self.user_cursor -= 1;
    }
  }

  async fn handle_user_form_key(&mut self, key: KeyEvent) -> Result<bool> {
    match self.form.handle_key(key) {
      FormEvent::Submitted => self.submit_user_form().await,
      FormEvent::Cancelled => {
        self.form_error = None;
        self.screen = Screen::Users;
      }
      FormEvent::None => {}
    }
    Ok(true)
  }

  async fn submit_user_form(&mut self) {
    if let Some(label) = self.form.missing_required() {
      self.form_error = Some(format!("Por favor completa: {label}"));
      return;
    }
    let first_name = self.form.value("Nombre").trim().to_string();
    let last_name = self.form.value("Apellido").trim().to_string();
    let email = self.form.value("Correo electrónico").trim().to_string();
    let phone_number = self.form.value("Celular").trim().to_string();
    let password = self.form.value("Contraseña").to_string();

    let created = match self.user_form_kind {
      UserFormKind::Student => self
        .client
        .create_student(&NewStudent {
          first_name,
          last_name,
          email,
          phone_number,
        })
        .await
        .map(|s| format!("Estudiante {} creado", s.id)),
      UserFormKind::Employee => self
        .client
        .create_employee(&NewEmployee {
          first_name,
          last_name,
          email,
          phone_number,
          password,
        })
        .await
        .map(|e| format!("Empleado {} creado", e.id)),
      UserFormKind::Admin => self
        .client
        .create_admin(&NewAdmin {
          first_name,
          last_name,
          email,
          phone_number,
          password,
        })
        .await
        .map(|a| format!("Administrador {} creado", a.id)),
    };
    match created {
      Ok(message) => {
        self.form_error = None;
        self.status_msg = message;
        self.open_users().await;
      }
      Err(e) => {
        tracing::warn!("creando usuario: {e:#}");
        self.form_error = Some(format!("Error: {e}"));
      }
    }
  }

  // ── Profile ───────────────────────────────────────────────────────────────

  async fn handle_profile_key(&mut self, key: KeyEvent) -> Result<bool> {
    if let Some(cont) = self.nav_key(key).await? {
      return Ok(cont);
    }
    match key.code {
      KeyCode::Char('q') => return Ok(false),
      KeyCode::Esc => self.screen = Screen::Dashboard,
      // Only the student surface has a `/me` patch endpoint.
      KeyCode::Char('e') => self.open_profile_edit(),
      _ => {}
    }
    Ok(true)
  }

  fn open_profile_edit(&mut self) {
    let Some(Profile::Student(student)) = &self.profile else {
      return;
    };
    let password_field = {
      let mut field = Field::secret("Nueva contraseña");
      field.required = false;
      field
    };
    self.form = Form::new(vec![
      Field::optional("Nombre").with_value(student.first_name.clone()),
      Field::optional("Apellido").with_value(student.last_name.clone()),
      Field::optional("Celular").with_value(student.phone_number.clone()),
      Field::optional("Correo electrónico")
        .with_value(student.email.clone()),
      password_field,
      Field::optional("Foto (ruta)"),
    ]);
    self.form_error = None;
    self.screen = Screen::ProfileEdit;
  }

  async fn handle_profile_edit_key(
    &mut self,
    key: KeyEvent,
  ) -> Result<bool> {
    match self.form.handle_key(key) {
      FormEvent::Submitted => self.submit_profile_edit().await,
      FormEvent::Cancelled => {
        self.form_error = None;
        self.screen = Screen::Profile;
      }
      FormEvent::None => {}
    }
    Ok(true)
  }

  async fn submit_profile_edit(&mut self) {
    let patch = StudentPatch {
      first_name:      non_empty(self.form.value("Nombre")),
      last_name:       non_empty(self.form.value("Apellido")),
      phone_number:    non_empty(self.form.value("Celular")),
      email:           non_empty(self.form.value("Correo electrónico")),
      password:        non_empty(self.form.value("Nueva contraseña")),
      foto_perfil_url: None,
    };
    let photo = non_empty(self.form.value("Foto (ruta)")).map(PathBuf::from);

    match self.client.update_student_self(&patch, photo.as_deref()).await {
      Ok(_) => {
        self.form_error = None;
        self.status_msg = "Perfil actualizado".into();
        self.load_profile().await;
        self.screen = Screen::Profile;
      }
      Err(e) => {
        tracing::warn!("actualizando perfil: {e:#}");
        self.form_error = Some(format!("Error: {e}"));
      }
    }
  }
}

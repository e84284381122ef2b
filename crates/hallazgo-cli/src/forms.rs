//! Minimal focused-field text forms for the login, registration, report,
//! and profile screens.
//!
//! Required-field validation happens here, before any remote call is
//! issued; a failing form never reaches the network.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ─── Field ───────────────────────────────────────────────────────────────────

/// One labelled text input.
#[derive(Debug, Clone)]
pub struct Field {
  pub label:    &'static str,
  pub value:    String,
  /// Render as dots (passwords).
  pub secret:   bool,
  /// Prefilled by the application and not editable (contact data).
  pub readonly: bool,
  pub required: bool,
}

impl Field {
  pub fn required(label: &'static str) -> Self {
    Self {
      label,
      value: String::new(),
      secret: false,
      readonly: false,
      required: true,
    }
  }

  pub fn optional(label: &'static str) -> Self {
    Self {
      required: false,
      ..Self::required(label)
    }
  }

  pub fn secret(label: &'static str) -> Self {
    Self {
      secret: true,
      ..Self::required(label)
    }
  }

  pub fn readonly(label: &'static str, value: impl Into<String>) -> Self {
    Self {
      value: value.into(),
      readonly: true,
      required: false,
      ..Self::required(label)
    }
  }

  pub fn with_value(mut self, value: impl Into<String>) -> Self {
    self.value = value.into();
    self
  }

  /// The value as shown on screen.
  pub fn display_value(&self) -> String {
    if self.secret {
      "•".repeat(self.value.chars().count())
    } else {
      self.value.clone()
    }
  }
}

// ─── Form ────────────────────────────────────────────────────────────────────

/// Outcome of feeding one key event to a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
  None,
  Submitted,
  Cancelled,
}

#[derive(Debug, Clone, Default)]
pub struct Form {
  pub fields: Vec<Field>,
  pub focus:  usize,
}

impl Form {
  pub fn new(fields: Vec<Field>) -> Self {
    let mut form = Self { fields, focus: 0 };
    // Land on the first editable field.
    if form.fields.first().is_some_and(|f| f.readonly) {
      form.focus_next();
    }
    form
  }

  /// The current value of the field labelled `label`; empty if absent.
  pub fn value(&self, label: &str) -> &str {
    self
      .fields
      .iter()
      .find(|f| f.label == label)
      .map(|f| f.value.as_str())
      .unwrap_or_default()
  }

  /// Label of the first required field left empty, if any.
  pub fn missing_required(&self) -> Option<&'static str> {
    self
      .fields
      .iter()
      .find(|f| f.required && f.value.trim().is_empty())
      .map(|f| f.label)
  }

  pub fn focus_next(&mut self) {
    self.step(1);
  }

  pub fn focus_prev(&mut self) {
    self.step(self.fields.len().saturating_sub(1));
  }

  // Advance focus by `by`, skipping readonly fields. Bounded by one full
  // lap so an all-readonly form cannot loop forever.
  fn step(&mut self, by: usize) {
    if self.fields.is_empty() {
      return;
    }
    for _ in 0..self.fields.len() {
      self.focus = (self.focus + by) % self.fields.len();
      if !self.fields[self.focus].readonly {
        return;
      }
    }
  }

  /// Feed one key event to the form.
  pub fn handle_key(&mut self, key: KeyEvent) -> FormEvent {
    match key.code {
      KeyCode::Esc => return FormEvent::Cancelled,
      KeyCode::Enter => return FormEvent::Submitted,
      KeyCode::Tab | KeyCode::Down => self.focus_next(),
      KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
      KeyCode::Backspace => {
        if let Some(field) = self.fields.get_mut(self.focus)
          && !field.readonly
        {
          field.value.pop();
        }
      }
      KeyCode::Char(c) => {
        if !key.modifiers.contains(KeyModifiers::CONTROL)
          && let Some(field) = self.fields.get_mut(self.focus)
          && !field.readonly
        {
          field.value.push(c);
        }
      }
      _ => {}
    }
    FormEvent::None
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  fn login_form() -> Form {
    Form::new(vec![
      Field::required("Correo electrónico"),
      Field::secret("Contraseña"),
    ])
  }

  #[test]
  fn typing_fills_the_focused_field() {
    let mut form = login_form();
    for c in "ana@utec.edu.pe".chars() {
      form.handle_key(key(KeyCode::Char(c)));
    }
    assert_eq!(form.value("Correo electrónico"), "ana@utec.edu.pe");

    form.handle_key(key(KeyCode::Tab));
    form.handle_key(key(KeyCode::Char('x')));
    assert_eq!(form.value("Contraseña"), "x");
  }

  #[test]
  fn backspace_edits_and_secret_masks() {
    let mut form = login_form();
    form.handle_key(key(KeyCode::Tab));
    for c in "abc".chars() {
      form.handle_key(key(KeyCode::Char(c)));
    }
    form.handle_key(key(KeyCode::Backspace));
    assert_eq!(form.value("Contraseña"), "ab");
    assert_eq!(form.fields[1].display_value(), "••");
  }

  #[test]
  fn focus_skips_readonly_fields() {
    let mut form = Form::new(vec![
      Field::readonly("Email", "ana@utec.edu.pe"),
      Field::required("Piso"),
      Field::readonly("Celular", "999111222"),
      Field::required("Ubicación"),
    ]);
    // Initial focus already skipped the readonly first field.
    assert_eq!(form.fields[form.focus].label, "Piso");
    form.focus_next();
    assert_eq!(form.fields[form.focus].label, "Ubicación");
    form.focus_next();
    assert_eq!(form.fields[form.focus].label, "Piso");
  }

  #[test]
  fn readonly_fields_reject_edits() {
    let mut form = Form::new(vec![Field::readonly("Email", "fixed")]);
    form.handle_key(key(KeyCode::Char('x')));
    form.handle_key(key(KeyCode::Backspace));
    assert_eq!(form.value("Email"), "fixed");
  }

  #[test]
  fn missing_required_reports_the_first_gap() {
    let mut form = login_form();
    assert_eq!(form.missing_required(), Some("Correo electrónico"));
    form.fields[0].value = "ana@utec.edu.pe".into();
    assert_eq!(form.missing_required(), Some("Contraseña"));
    form.fields[1].value = "secreto".into();
    assert!(form.missing_required().is_none());
  }

  #[test]
  fn enter_and_esc_map_to_events() {
    let mut form = login_form();
    assert_eq!(form.handle_key(key(KeyCode::Enter)), FormEvent::Submitted);
    assert_eq!(form.handle_key(key(KeyCode::Esc)), FormEvent::Cancelled);
    assert_eq!(
      form.handle_key(key(KeyCode::Char('a'))),
      FormEvent::None
    );
  }
}

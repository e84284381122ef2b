//! Login and registration screens — a centered form, no sidebar.

use ratatui::{Frame, layout::Rect};

use crate::{
  app::{App, Screen},
  ui::{centered_rect, draw_form_box},
};

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let title = match app.screen {
    Screen::Register if app.register_employee => {
      "Crea una cuenta — Empleado".to_string()
    }
    Screen::Register => "Crea una cuenta — Estudiante".to_string(),
    _ => "Inicia sesión en tu cuenta".to_string(),
  };

  // Fields plus border, error line, and breathing room.
  let height = app.form.fields.len() as u16 + 6;
  let rect = centered_rect(area, 64, height);
  draw_form_box(f, rect, &title, &app.form, app.form_error.as_deref());
}

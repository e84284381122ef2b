//! Report creation form. The kind toggle lives in the title; contact
//! fields arrive prefilled and read-only.

use ratatui::{Frame, layout::Rect};

use crate::{
  app::App,
  ui::draw_form_box,
};

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let title = format!(
    "Nuevo Reporte — {} (Ctrl-K cambia)",
    app.report_form_kind.label()
  );
  draw_form_box(f, area, &title, &app.form, app.form_error.as_deref());
}

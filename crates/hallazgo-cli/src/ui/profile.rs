//! Profile pane — overview of the authenticated user's own record, and
//! the student edit form.

use hallazgo_core::user::Profile;
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::{
  app::{App, Screen},
  ui::draw_form_box,
};

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  if app.screen == Screen::ProfileEdit {
    draw_form_box(
      f,
      area,
      "Editar Perfil",
      &app.form,
      app.form_error.as_deref(),
    );
    return;
  }

  let block = Block::default()
    .title(" Perfil ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let label = |text: &str| {
    Span::styled(
      format!("{:<18}", text),
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    )
  };

  let Some(profile) = &app.profile else {
    let role = app.role();
    f.render_widget(
      Paragraph::new(vec![
        Line::from("No se pudo cargar el perfil."),
        Line::from(format!("Rol de la sesión: {role}")),
      ])
      .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  };

  let mut lines = vec![
    Line::from(vec![label("Nombre"), Span::raw(profile.full_name())]),
    Line::from(vec![
      label("Rol"),
      Span::raw(profile.role().to_string()),
    ]),
    Line::from(vec![
      label("Correo"),
      Span::raw(profile.email().to_string()),
    ]),
    Line::from(vec![
      label("Celular"),
      Span::raw(profile.phone_number().to_string()),
    ]),
  ];
  if let Some(photo) = profile.photo_url() {
    lines.push(Line::from(vec![label("Foto"), Span::raw(photo.to_string())]));
  }
  if matches!(profile, Profile::Student(_)) {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
      "Presiona e para editar tu perfil.",
      Style::default().fg(Color::Gray),
    )));
  }

  f.render_widget(Paragraph::new(lines), inner);
}

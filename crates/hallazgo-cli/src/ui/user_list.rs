//! User administration pane: students and employees tabs, plus the
//! creation forms.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
  app::{App, Screen, UserTab},
  ui::{clip, draw_form_box},
};

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  if app.screen == Screen::UserForm {
    draw_form_box(
      f,
      area,
      app.user_form_kind.title(),
      &app.form,
      app.form_error.as_deref(),
    );
    return;
  }

  let (tab_label, count) = match app.user_tab {
    UserTab::Students => ("Estudiantes", app.students.len()),
    UserTab::Employees => ("Empleados", app.employees.len()),
  };
  let block = Block::default()
    .title(format!(" Usuarios — {tab_label} ({count}) "))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  if count == 0 {
    f.render_widget(
      Paragraph::new("No hay usuarios en esta pestaña.")
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  }

  let header = Line::from(Span::styled(
    format!(
      "{:>4}  {:<26}  {:<30}  {:<12}",
      "ID", "NOMBRE", "CORREO", "CELULAR"
    ),
    Style::default().add_modifier(Modifier::BOLD),
  ));

  let mut items: Vec<ListItem> = vec![ListItem::new(header)];
  match app.user_tab {
    UserTab::Students => {
      items.extend(app.students.iter().map(|student| {
        ListItem::new(Line::from(format!(
          "{:>4}  {:<26}  {:<30}  {:<12}",
          student.id,
          clip(
            &format!("{} {}", student.first_name, student.last_name),
            26
          ),
          clip(&student.email, 30),
          clip(&student.phone_number, 12),
        )))
      }));
    }
    UserTab::Employees => {
      items.extend(app.employees.iter().map(|employee| {
        ListItem::new(Line::from(format!(
          "{:>4}  {:<26}  {:<30}  {:<12}",
          employee.id,
          clip(
            &format!("{} {}", employee.first_name, employee.last_name),
            26
          ),
          clip(&employee.email, 30),
          clip(&employee.phone_number, 12),
        )))
      }));
    }
  }

  // Offset by one for the header row.
  let mut state = ListState::default();
  state.select(Some(app.user_cursor + 1));

  f.render_stateful_widget(
    List::new(items)
      .highlight_style(
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol(""),
    inner,
    &mut state,
  );
}

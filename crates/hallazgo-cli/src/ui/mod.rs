//! TUI rendering — orchestrates all panes.

pub mod dashboard;
pub mod login;
pub mod profile;
pub mod report_detail;
pub mod report_form;
pub mod report_list;
pub mod user_list;

use chrono::Local;
use hallazgo_core::report::{ReportStatus, TaskStatus};
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::{
  app::{App, ReportScope, Screen},
  forms::Form,
  nav::{self, NavTarget},
};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0], app);
  draw_body(f, rows[1], app);
  draw_status(f, rows[2], app);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left_text = match &app.session {
    Some(session) => {
      format!(" hallazgo  {} ({})", session.subject, session.role)
    }
    None => " hallazgo".to_string(),
  };
  let left = Span::styled(
    left_text,
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(
    format!("{date} "),
    Style::default().fg(Color::Gray),
  );

  // Simple left-right header: pad the middle.
  let left_width = left.content.chars().count() as u16;
  let right_width = right.content.chars().count() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![
    left,
    Span::raw(" ".repeat(pad as usize)),
    right,
  ]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
  if matches!(app.screen, Screen::Login | Screen::Register) {
    login::draw(f, area, app);
    return;
  }

  // Sidebar + content for every authenticated screen.
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Length(24), Constraint::Min(0)])
    .split(area);

  draw_sidebar(f, cols[0], app);

  match app.screen {
    Screen::Dashboard => dashboard::draw(f, cols[1], app),
    Screen::Reports => report_list::draw(f, cols[1], app),
    Screen::ReportForm => report_form::draw(f, cols[1], app),
    Screen::ReportDetail => report_detail::draw(f, cols[1], app),
    Screen::Users | Screen::UserForm => user_list::draw(f, cols[1], app),
    Screen::Profile | Screen::ProfileEdit => {
      profile::draw(f, cols[1], app)
    }
    Screen::Login | Screen::Register => {}
  }
}

/// The nav target the current screen belongs to, for highlighting.
fn active_target(app: &App) -> Option<NavTarget> {
  match app.screen {
    Screen::Dashboard => Some(NavTarget::Dashboard),
    Screen::Reports | Screen::ReportDetail | Screen::ReportForm => {
      Some(match app.report_scope {
        ReportScope::Mine => NavTarget::MyReports,
        ReportScope::All => NavTarget::AllReports,
        ReportScope::Assigned => NavTarget::Tasks,
        ReportScope::Student(_) => NavTarget::Users,
      })
    }
    Screen::Users | Screen::UserForm => Some(NavTarget::Users),
    Screen::Profile | Screen::ProfileEdit => Some(NavTarget::Profile),
    Screen::Login | Screen::Register => None,
  }
}

fn draw_sidebar(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" Menú ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let active = active_target(app);
  let items: Vec<ListItem> = nav::nav_items(app.role())
    .iter()
    .enumerate()
    .map(|(i, item)| {
      let style = if Some(item.target) == active {
        Style::default()
          .fg(Color::White)
          .bg(Color::Blue)
          .add_modifier(Modifier::BOLD)
      } else {
        Style::default()
      };
      ListItem::new(Line::from(vec![
        Span::styled(format!(" {} ", i + 1), Style::default().fg(Color::Cyan)),
        Span::styled(item.label.to_string(), style),
      ]))
    })
    .collect();

  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(List::new(items), inner);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = match app.screen {
    Screen::Login => {
      ("ACCESO", "Enter entrar  Ctrl-R registrarse  Esc salir")
    }
    Screen::Register => (
      "REGISTRO",
      "Enter crear cuenta  Ctrl-E alternar empleado  Esc volver",
    ),
    Screen::Dashboard if app.filter_active => {
      ("BUSCAR", "Escribe para filtrar  Esc cancelar  Enter aplicar")
    }
    Screen::Dashboard => {
      ("TABLERO", "1-9 navegar  / buscar  r recargar  q salir")
    }
    Screen::Reports => (
      "REPORTES",
      "↑↓/jk mover  Tab tipo  Enter detalle  n nuevo  d eliminar  Esc volver",
    ),
    Screen::ReportForm => {
      ("NUEVO", "Tab campo  Ctrl-K tipo  Enter enviar  Esc cancelar")
    }
    Screen::ReportDetail if app.selector.is_some() => {
      ("ESTADO", "↑↓ elegir  Enter aplicar  Esc cancelar")
    }
    Screen::ReportDetail => (
      "DETALLE",
      "r estado reporte  t estado tarea  d eliminar  Esc volver",
    ),
    Screen::Users => (
      "USUARIOS",
      "Tab pestaña  n estudiante  e empleado  a admin  r reportes  d eliminar",
    ),
    Screen::UserForm => ("NUEVO", "Tab campo  Enter crear  Esc cancelar"),
    Screen::Profile => ("PERFIL", "e editar  Esc volver  q salir"),
    Screen::ProfileEdit => {
      ("EDITAR", "Tab campo  Enter guardar  Esc cancelar")
    }
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(
    format!("  {status}"),
    Style::default().fg(Color::Gray),
  );

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}

// ─── Shared helpers ───────────────────────────────────────────────────────────

/// A rect of at most `width` × `height`, centered in `area`.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
  let width = width.min(area.width);
  let height = height.min(area.height);
  Rect {
    x: area.x + (area.width - width) / 2,
    y: area.y + (area.height - height) / 2,
    width,
    height,
  }
}

/// Render a bordered form: focused field marked and cursored, readonly
/// fields dimmed, validation error on top.
pub(crate) fn draw_form_box(
  f: &mut Frame,
  area: Rect,
  title: &str,
  form: &Form,
  error: Option<&str>,
) {
  let block = Block::default()
    .title(format!(" {title} "))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines: Vec<Line> = Vec::new();
  if let Some(error) = error {
    lines.push(Line::from(Span::styled(
      error.to_string(),
      Style::default().fg(Color::Red),
    )));
    lines.push(Line::from(""));
  }
  for (i, field) in form.fields.iter().enumerate() {
    let focused = i == form.focus;
    let marker = if focused { "▸ " } else { "  " };
    let cursor = if focused && !field.readonly { "_" } else { "" };
    let label_style = if focused {
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
    } else {
      Style::default()
    };
    let value_style = if field.readonly {
      Style::default().fg(Color::DarkGray)
    } else {
      Style::default()
    };
    lines.push(Line::from(vec![
      Span::raw(marker),
      Span::styled(format!("{:<22}", field.label), label_style),
      Span::styled(
        format!("{}{cursor}", field.display_value()),
        value_style,
      ),
    ]));
  }
  f.render_widget(Paragraph::new(lines), inner);
}

/// Clip `text` to at most `max` characters, ellipsised.
pub(crate) fn clip(text: &str, max: usize) -> String {
  if text.chars().count() <= max {
    return text.to_string();
  }
  let mut out: String =
    text.chars().take(max.saturating_sub(1)).collect();
  out.push('…');
  out
}

/// Colours match the original triage palette: pending amber, accepted
/// green, rejected red.
pub(crate) fn report_status_style(status: ReportStatus) -> Style {
  let color = match status {
    ReportStatus::Pendiente => Color::Yellow,
    ReportStatus::Aceptado => Color::Green,
    ReportStatus::Rechazado => Color::Red,
  };
  Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub(crate) fn task_status_style(status: TaskStatus) -> Style {
  let color = match status {
    TaskStatus::NoFinalizado => Color::Red,
    TaskStatus::Finalizado => Color::Green,
  };
  Style::default().fg(color).add_modifier(Modifier::BOLD)
}

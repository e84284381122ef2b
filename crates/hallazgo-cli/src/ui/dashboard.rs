//! Dashboard pane. Administrators get the per-day series and the
//! accepted-lost-objects table; other roles get a landing pane.

use hallazgo_core::session::Role;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, Paragraph, Sparkline},
};

use crate::{
  app::App,
  ui::clip,
};

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  if app.role() != Role::Administrador {
    draw_landing(f, area, app);
    return;
  }

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(3), // counters
      Constraint::Length(8), // per-day series
      Constraint::Min(0),    // accepted objects
    ])
    .split(area);

  draw_counters(f, rows[0], app);
  draw_series(f, rows[1], app);
  draw_accepted(f, rows[2], app);
}

// ─── Landing for non-admin roles ─────────────────────────────────────────────

fn draw_landing(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" Tablero ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let name = app
    .profile
    .as_ref()
    .map(|p| p.full_name())
    .or_else(|| app.session.as_ref().map(|s| s.subject.clone()))
    .unwrap_or_default();

  let lines = vec![
    Line::from(""),
    Line::from(Span::styled(
      format!("  Bienvenido, {name}"),
      Style::default().add_modifier(Modifier::BOLD),
    )),
    Line::from(format!("  Rol: {}", app.role())),
    Line::from(""),
    Line::from(Span::styled(
      "  Usa los números del menú para navegar.",
      Style::default().fg(Color::Gray),
    )),
  ];
  f.render_widget(Paragraph::new(lines), inner);
}

// ─── Admin widgets ────────────────────────────────────────────────────────────

fn draw_counters(f: &mut Frame, area: Rect, app: &App) {
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([
      Constraint::Percentage(34),
      Constraint::Percentage(33),
      Constraint::Percentage(33),
    ])
    .split(area);

  let lost = app.series.lost_objects.last().copied().unwrap_or(0);
  let incidents = app.series.incidents.last().copied().unwrap_or(0);

  counter(f, cols[0], "Objetos Perdidos | Hoy", lost, Color::Blue);
  counter(f, cols[1], "Incidentes | Hoy", incidents, Color::Green);
  counter(
    f,
    cols[2],
    "Reportes | Hoy",
    lost + incidents,
    Color::Yellow,
  );
}

fn counter(f: &mut Frame, area: Rect, label: &str, value: u64, color: Color) {
  let block = Block::default()
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(
    Paragraph::new(Line::from(vec![
      Span::styled(
        format!(" {label}  "),
        Style::default().add_modifier(Modifier::BOLD),
      ),
      Span::styled(
        value.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
      ),
    ])),
    inner,
  );
}

fn draw_series(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" Reportes por Día (últimos 7) ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  if app.series.is_empty() {
    f.render_widget(
      Paragraph::new("Sin datos todavía.")
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  }

  let week = app.series.tail(7);
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Length(3), Constraint::Length(3)])
    .split(inner);

  f.render_widget(
    Sparkline::default()
      .block(Block::default().title("Objetos Perdidos"))
      .data(week.lost_objects.iter().copied())
      .style(Style::default().fg(Color::Blue)),
    rows[0],
  );
  f.render_widget(
    Sparkline::default()
      .block(Block::default().title("Incidentes"))
      .data(week.incidents.iter().copied())
      .style(Style::default().fg(Color::Green)),
    rows[1],
  );
}

fn draw_accepted(f: &mut Frame, area: Rect, app: &App) {
  let filtered = app.filtered_accepted();
  let title = if app.filter_active || !app.filter.is_empty() {
    format!(
      " Objetos Perdidos Aceptados ({}/{}) ",
      filtered.len(),
      app.accepted.len()
    )
  } else {
    format!(" Objetos Perdidos Aceptados ({}) ", app.accepted.len())
  };

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let mut inner = block.inner(area);
  f.render_widget(block, area);

  // Filter bar at the bottom, as in the list panes.
  if (app.filter_active || !app.filter.is_empty()) && inner.height > 2 {
    let filter_area = Rect {
      x:      inner.x,
      y:      inner.y + inner.height - 1,
      width:  inner.width,
      height: 1,
    };
    inner.height = inner.height.saturating_sub(1);
    let filter_text = if app.filter_active {
      format!("/{}_", app.filter)
    } else {
      format!("/{}", app.filter)
    };
    f.render_widget(
      Paragraph::new(filter_text).style(Style::default().fg(Color::Yellow)),
      filter_area,
    );
  }

  let mut items: Vec<ListItem> = vec![ListItem::new(Line::from(
    Span::styled(
      format!(
        "{:<12}  {:<6}  {:<18}  {:<36}",
        "FECHA", "PISO", "UBICACIÓN", "DETALLE"
      ),
      Style::default().add_modifier(Modifier::BOLD),
    ),
  ))];
  items.extend(filtered.iter().map(|objeto| {
    ListItem::new(Line::from(format!(
      "{:<12}  {:<6}  {:<18}  {:<36}",
      objeto.fecha_reporte.to_string(),
      clip(&objeto.piso, 6),
      clip(&objeto.ubicacion, 18),
      clip(&objeto.detalle, 36),
    )))
  }));

  f.render_widget(List::new(items), inner);
}

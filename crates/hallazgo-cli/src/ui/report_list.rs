//! Report list pane — one screen for every scope (own reports, admin
//! review, assigned tasks, per-student view), toggling between kinds.

use hallazgo_core::report::ReportKind;
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
  app::App,
  ui::{clip, report_status_style, task_status_style},
};

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let count = app.visible_report_count();
  let kind_label = match app.report_kind {
    ReportKind::LostObject => "Objetos Perdidos",
    ReportKind::Incident => "Incidentes",
  };
  let title = format!(
    " {} — {kind_label} ({count}) ",
    app.report_scope.title()
  );

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  if count == 0 {
    f.render_widget(
      Paragraph::new("No hay reportes disponibles.")
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  }

  let header = Line::from(Span::styled(
    format!(
      "{:>4}  {:<12}  {:<6}  {:<16}  {:<26}  {:<10}  {:<13}",
      "ID", "FECHA", "PISO", "UBICACIÓN", "DETALLE", "REPORTE", "TAREA"
    ),
    Style::default().add_modifier(Modifier::BOLD),
  ));

  let mut items: Vec<ListItem> = vec![ListItem::new(header)];
  match app.report_kind {
    ReportKind::LostObject => {
      items.extend(app.lost_objects.iter().map(|objeto| {
        ListItem::new(Line::from(vec![
          Span::raw(format!(
            "{:>4}  {:<12}  {:<6}  {:<16}  {:<26}  ",
            objeto.id,
            objeto.fecha_reporte.to_string(),
            clip(&objeto.piso, 6),
            clip(&objeto.ubicacion, 16),
            clip(&objeto.detalle, 26),
          )),
          Span::styled(
            format!("{:<10}", objeto.estado_reporte),
            report_status_style(objeto.estado_reporte),
          ),
          Span::raw("  "),
          Span::styled(
            format!("{:<13}", objeto.estado_tarea),
            task_status_style(objeto.estado_tarea),
          ),
        ]))
      }));
    }
    ReportKind::Incident => {
      items.extend(app.incidents.iter().map(|incidente| {
        ListItem::new(Line::from(vec![
          Span::raw(format!(
            "{:>4}  {:<12}  {:<6}  {:<16}  {:<26}  ",
            incidente.id,
            incidente.fecha_reporte.to_string(),
            clip(&incidente.piso, 6),
            clip(&incidente.ubicacion, 16),
            clip(&incidente.detalle, 26),
          )),
          Span::styled(
            format!("{:<10}", incidente.estado_reporte),
            report_status_style(incidente.estado_reporte),
          ),
          Span::raw("  "),
          Span::styled(
            format!("{:<13}", incidente.estado_tarea),
            task_status_style(incidente.estado_tarea),
          ),
        ]))
      }));
    }
  }

  // Offset by one for the header row.
  let mut state = ListState::default();
  state.select(Some(app.report_cursor + 1));

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

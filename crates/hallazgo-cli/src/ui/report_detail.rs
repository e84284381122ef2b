//! Report detail pane, with the status-change modal.
//!
//! The edit markers and the modal only exist when the lifecycle model
//! offers targets for the viewer's role; other roles see plain text.

use hallazgo_core::lifecycle;
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::{
  app::{App, ReportRecord, StatusSelector},
  ui::{centered_rect, report_status_style, task_status_style},
};

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let Some(record) = &app.detail else {
    let block = Block::default()
      .title(" Detalle ")
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
      Paragraph::new("Selecciona un reporte y presiona Enter.")
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  };

  let block = Block::default()
    .title(format!(" {} {} ", record.kind().label(), record.id()))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let role = app.role();
  let can_edit_report =
    !lifecycle::report_status_targets(role, record.report_status())
      .is_empty();
  let can_edit_task =
    !lifecycle::task_status_targets(role, record.task_status()).is_empty();

  let mut lines: Vec<Line> = Vec::new();
  let label = |text: &str| {
    Span::styled(
      format!("{:<22}", text),
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    )
  };

  match record {
    ReportRecord::Lost(objeto) => {
      lines.push(Line::from(vec![
        label("Fecha"),
        Span::raw(objeto.fecha_reporte.to_string()),
      ]));
      lines.push(Line::from(vec![
        label("Piso"),
        Span::raw(objeto.piso.clone()),
      ]));
      lines.push(Line::from(vec![
        label("Ubicación"),
        Span::raw(objeto.ubicacion.clone()),
      ]));
      lines.push(Line::from(vec![
        label("Detalle"),
        Span::raw(objeto.detalle.clone()),
      ]));
      lines.push(Line::from(""));
      lines.push(Line::from(vec![
        label("Correo"),
        Span::raw(objeto.email.clone()),
      ]));
      lines.push(Line::from(vec![
        label("Teléfono"),
        Span::raw(objeto.phone_number.clone()),
      ]));
      lines.push(Line::from(vec![
        label("Foto"),
        Span::raw(
          objeto
            .foto_objeto_perdido_url
            .clone()
            .unwrap_or_else(|| "Sin foto".to_string()),
        ),
      ]));
    }
    ReportRecord::Incident(incidente) => {
      lines.push(Line::from(vec![
        label("Fecha"),
        Span::raw(incidente.fecha_reporte.to_string()),
      ]));
      lines.push(Line::from(vec![
        label("Piso"),
        Span::raw(incidente.piso.clone()),
      ]));
      lines.push(Line::from(vec![
        label("Ubicación"),
        Span::raw(incidente.ubicacion.clone()),
      ]));
      lines.push(Line::from(vec![
        label("Detalle"),
        Span::raw(incidente.detalle.clone()),
      ]));
      if let Some(description) = &incidente.description {
        lines.push(Line::from(vec![
          label("Descripción"),
          Span::raw(description.clone()),
        ]));
      }
      lines.push(Line::from(""));
      lines.push(Line::from(vec![
        label("Correo"),
        Span::raw(incidente.email.clone()),
      ]));
      lines.push(Line::from(vec![
        label("Teléfono"),
        Span::raw(incidente.phone_number.clone()),
      ]));
      if let Some(estudiante_id) = incidente.estudiante_id {
        lines.push(Line::from(vec![
          label("Estudiante"),
          Span::raw(estudiante_id.to_string()),
        ]));
      }
      if let Some(empleado_id) = incidente.empleado_id {
        lines.push(Line::from(vec![
          label("Empleado"),
          Span::raw(empleado_id.to_string()),
        ]));
      }
      lines.push(Line::from(vec![
        label("Foto"),
        Span::raw(
          incidente
            .foto_incidente_url
            .clone()
            .unwrap_or_else(|| "Sin foto".to_string()),
        ),
      ]));
    }
  }

  lines.push(Line::from(""));
  let mut report_line = vec![
    label("Estado del Reporte"),
    Span::styled(
      record.report_status().to_string(),
      report_status_style(record.report_status()),
    ),
  ];
  if can_edit_report {
    report_line.push(Span::styled(
      "  (r editar)",
      Style::default().fg(Color::Gray),
    ));
  }
  lines.push(Line::from(report_line));

  let mut task_line = vec![
    label("Estado de la Tarea"),
    Span::styled(
      record.task_status().to_string(),
      task_status_style(record.task_status()),
    ),
  ];
  if can_edit_task {
    task_line.push(Span::styled(
      "  (t editar)",
      Style::default().fg(Color::Gray),
    ));
  }
  lines.push(Line::from(task_line));

  f.render_widget(Paragraph::new(lines), inner);

  if let Some(selector) = &app.selector {
    draw_selector(f, area, selector);
  }
}

// ─── Status modal ─────────────────────────────────────────────────────────────

fn draw_selector(f: &mut Frame, area: Rect, selector: &StatusSelector) {
  let (items, cursor): (Vec<ListItem>, usize) = match selector {
    StatusSelector::Report { options, cursor } => (
      options
        .iter()
        .map(|status| {
          ListItem::new(Line::from(Span::styled(
            format!("  {status}"),
            report_status_style(*status),
          )))
        })
        .collect(),
      *cursor,
    ),
    StatusSelector::Task { options, cursor } => (
      options
        .iter()
        .map(|status| {
          ListItem::new(Line::from(Span::styled(
            format!("  {status}"),
            task_status_style(*status),
          )))
        })
        .collect(),
      *cursor,
    ),
  };

  let rect = centered_rect(area, 36, items.len() as u16 + 2);
  f.render_widget(Clear, rect);

  let block = Block::default()
    .title(" Actualizar Estado ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));
  let inner = block.inner(rect);
  f.render_widget(block, rect);

  let mut state = ListState::default();
  state.select(Some(cursor));
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

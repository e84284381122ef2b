//! The two status state machines shared by lost-object and incident
//! reports, and the role gates over their transitions.
//!
//! The legal transition graph is an explicit table rather than an
//! artefact of whichever controls a view happens to render. View code
//! derives its selectors from [`report_status_targets`] and
//! [`task_status_targets`], so a control simply does not exist for a role
//! the table excludes. The backend re-checks every transition; these
//! tables only decide what the client offers.

use crate::{
  report::{ReportStatus, TaskStatus},
  session::Role,
};

// ─── Transition tables ───────────────────────────────────────────────────────

/// Legal report-status transitions. Triage may be revisited (`Aceptado`
/// and `Rechazado` swap), but nothing re-enters `Pendiente`: un-triaging
/// would erase the fact that triage happened.
pub const REPORT_STATUS_TRANSITIONS: &[(ReportStatus, ReportStatus)] = &[
  (ReportStatus::Pendiente, ReportStatus::Aceptado),
  (ReportStatus::Pendiente, ReportStatus::Rechazado),
  (ReportStatus::Aceptado, ReportStatus::Rechazado),
  (ReportStatus::Rechazado, ReportStatus::Aceptado),
];

/// Legal task-status transitions. The handling employee may reopen a
/// finished task.
pub const TASK_STATUS_TRANSITIONS: &[(TaskStatus, TaskStatus)] = &[
  (TaskStatus::NoFinalizado, TaskStatus::Finalizado),
  (TaskStatus::Finalizado, TaskStatus::NoFinalizado),
];

// ─── Role gates ──────────────────────────────────────────────────────────────

/// Whether `role` may move a report's triage axis at all. Administrators
/// triage from the review surface, employees from the assigned-task
/// detail; students only ever read their reports.
pub fn role_may_set_report_status(role: Role) -> bool {
  matches!(role, Role::Administrador | Role::Empleado)
}

/// Whether `role` may move a report's resolution axis. Only the handling
/// employee works the task.
pub fn role_may_set_task_status(role: Role) -> bool {
  matches!(role, Role::Empleado)
}

/// Whether `role` may hard-delete a report.
pub fn role_may_delete_report(role: Role) -> bool {
  matches!(role, Role::Administrador)
}

// ─── Transition checks ───────────────────────────────────────────────────────

/// Whether `role` may move a report from `from` to `to` on the triage
/// axis. Identity "transitions" are not transitions.
pub fn can_transition_report_status(
  role: Role,
  from: ReportStatus,
  to: ReportStatus,
) -> bool {
  role_may_set_report_status(role)
    && REPORT_STATUS_TRANSITIONS.contains(&(from, to))
}

/// Whether `role` may move a report from `from` to `to` on the
/// resolution axis.
pub fn can_transition_task_status(
  role: Role,
  from: TaskStatus,
  to: TaskStatus,
) -> bool {
  role_may_set_task_status(role)
    && TASK_STATUS_TRANSITIONS.contains(&(from, to))
}

/// The triage statuses a selector may offer `role` for a report currently
/// in `from`. Empty for excluded roles: the control is not rendered.
pub fn report_status_targets(
  role: Role,
  from: ReportStatus,
) -> Vec<ReportStatus> {
  if !role_may_set_report_status(role) {
    return Vec::new();
  }
  REPORT_STATUS_TRANSITIONS
    .iter()
    .filter(|(f, _)| *f == from)
    .map(|(_, to)| *to)
    .collect()
}

/// The task statuses a selector may offer `role` for a report currently
/// in `from`.
pub fn task_status_targets(role: Role, from: TaskStatus) -> Vec<TaskStatus> {
  if !role_may_set_task_status(role) {
    return Vec::new();
  }
  TASK_STATUS_TRANSITIONS
    .iter()
    .filter(|(f, _)| *f == from)
    .map(|(_, to)| *to)
    .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  const ALL_ROLES: [Role; 4] = [
    Role::Estudiante,
    Role::Empleado,
    Role::Administrador,
    Role::Usuario,
  ];

  const REPORT_STATES: [ReportStatus; 3] = [
    ReportStatus::Pendiente,
    ReportStatus::Aceptado,
    ReportStatus::Rechazado,
  ];

  #[test]
  fn tables_contain_no_identity_transitions() {
    assert!(REPORT_STATUS_TRANSITIONS.iter().all(|(f, t)| f != t));
    assert!(TASK_STATUS_TRANSITIONS.iter().all(|(f, t)| f != t));
  }

  #[test]
  fn nothing_re_enters_pendiente() {
    assert!(
      REPORT_STATUS_TRANSITIONS
        .iter()
        .all(|(_, to)| *to != ReportStatus::Pendiente)
    );
  }

  #[test]
  fn defaults_are_the_initial_states() {
    assert_eq!(ReportStatus::default(), ReportStatus::Pendiente);
    assert_eq!(TaskStatus::default(), TaskStatus::NoFinalizado);
  }

  #[test]
  fn admin_triages_pending_reports() {
    for to in [ReportStatus::Aceptado, ReportStatus::Rechazado] {
      assert!(can_transition_report_status(
        Role::Administrador,
        ReportStatus::Pendiente,
        to,
      ));
    }
  }

  #[test]
  fn triage_can_be_revisited_but_not_undone() {
    assert!(can_transition_report_status(
      Role::Administrador,
      ReportStatus::Aceptado,
      ReportStatus::Rechazado,
    ));
    assert!(can_transition_report_status(
      Role::Administrador,
      ReportStatus::Rechazado,
      ReportStatus::Aceptado,
    ));
    for from in [ReportStatus::Aceptado, ReportStatus::Rechazado] {
      assert!(!can_transition_report_status(
        Role::Administrador,
        from,
        ReportStatus::Pendiente,
      ));
    }
  }

  #[test]
  fn students_and_unknown_roles_never_mutate_either_axis() {
    for role in [Role::Estudiante, Role::Usuario] {
      for from in REPORT_STATES {
        for to in REPORT_STATES {
          assert!(!can_transition_report_status(role, from, to));
        }
        assert!(report_status_targets(role, from).is_empty());
      }
      for from in [TaskStatus::NoFinalizado, TaskStatus::Finalizado] {
        for to in [TaskStatus::NoFinalizado, TaskStatus::Finalizado] {
          assert!(!can_transition_task_status(role, from, to));
        }
        assert!(task_status_targets(role, from).is_empty());
      }
    }
  }

  #[test]
  fn only_employees_work_the_task_axis() {
    assert!(can_transition_task_status(
      Role::Empleado,
      TaskStatus::NoFinalizado,
      TaskStatus::Finalizado,
    ));
    assert!(can_transition_task_status(
      Role::Empleado,
      TaskStatus::Finalizado,
      TaskStatus::NoFinalizado,
    ));
    assert!(!can_transition_task_status(
      Role::Administrador,
      TaskStatus::NoFinalizado,
      TaskStatus::Finalizado,
    ));
  }

  #[test]
  fn targets_never_offer_the_current_state() {
    for role in ALL_ROLES {
      for from in REPORT_STATES {
        assert!(!report_status_targets(role, from).contains(&from));
      }
      for from in [TaskStatus::NoFinalizado, TaskStatus::Finalizado] {
        assert!(!task_status_targets(role, from).contains(&from));
      }
    }
  }

  #[test]
  fn employee_sees_triage_targets_from_the_task_surface() {
    let targets =
      report_status_targets(Role::Empleado, ReportStatus::Pendiente);
    assert_eq!(
      targets,
      vec![ReportStatus::Aceptado, ReportStatus::Rechazado]
    );
  }

  #[test]
  fn only_admins_delete_reports() {
    assert!(role_may_delete_report(Role::Administrador));
    for role in [Role::Estudiante, Role::Empleado, Role::Usuario] {
      assert!(!role_may_delete_report(role));
    }
  }
}

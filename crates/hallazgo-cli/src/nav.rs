//! Role-derived navigation: the one table deciding which surfaces a
//! session can reach. Views render exactly these items; there is no other
//! path to a role-gated screen.

use hallazgo_core::session::Role;

/// Where a navigation item leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
  Dashboard,
  MyReports,
  AllReports,
  Tasks,
  Users,
  Profile,
  Logout,
}

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
  pub label:  &'static str,
  pub target: NavTarget,
}

const fn item(label: &'static str, target: NavTarget) -> NavItem {
  NavItem { label, target }
}

/// The navigation items visible to `role`, in display order. Dashboard,
/// profile, and logout are universal; everything else is role-gated.
pub fn nav_items(role: Role) -> Vec<NavItem> {
  let mut items = vec![item("Tablero", NavTarget::Dashboard)];
  if role == Role::Estudiante {
    items.push(item("Mis Reportes", NavTarget::MyReports));
  }
  if role == Role::Administrador {
    items.push(item("Reportes", NavTarget::AllReports));
  }
  if role == Role::Empleado {
    items.push(item("Mis Tareas", NavTarget::Tasks));
  }
  if role == Role::Administrador {
    items.push(item("Usuarios", NavTarget::Users));
  }
  items.push(item("Perfil", NavTarget::Profile));
  items.push(item("Cerrar Sesión", NavTarget::Logout));
  items
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn targets(role: Role) -> Vec<NavTarget> {
    nav_items(role).iter().map(|i| i.target).collect()
  }

  #[test]
  fn universal_items_appear_for_every_role() {
    for role in [
      Role::Estudiante,
      Role::Empleado,
      Role::Administrador,
      Role::Usuario,
    ] {
      let t = targets(role);
      assert!(t.contains(&NavTarget::Dashboard));
      assert!(t.contains(&NavTarget::Profile));
      assert!(t.contains(&NavTarget::Logout));
    }
  }

  #[test]
  fn students_see_their_reports_and_nothing_administrative() {
    let t = targets(Role::Estudiante);
    assert!(t.contains(&NavTarget::MyReports));
    assert!(!t.contains(&NavTarget::AllReports));
    assert!(!t.contains(&NavTarget::Tasks));
    assert!(!t.contains(&NavTarget::Users));
  }

  #[test]
  fn employees_see_only_their_tasks() {
    let t = targets(Role::Empleado);
    assert!(t.contains(&NavTarget::Tasks));
    assert!(!t.contains(&NavTarget::MyReports));
    assert!(!t.contains(&NavTarget::AllReports));
    assert!(!t.contains(&NavTarget::Users));
  }

  #[test]
  fn admins_see_review_and_user_administration() {
    let t = targets(Role::Administrador);
    assert!(t.contains(&NavTarget::AllReports));
    assert!(t.contains(&NavTarget::Users));
    assert!(!t.contains(&NavTarget::MyReports));
    assert!(!t.contains(&NavTarget::Tasks));
  }

  #[test]
  fn unknown_roles_get_only_the_universal_items() {
    assert_eq!(
      targets(Role::Usuario),
      vec![NavTarget::Dashboard, NavTarget::Profile, NavTarget::Logout]
    );
  }
}

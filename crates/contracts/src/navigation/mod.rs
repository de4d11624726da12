//! Role-based navigation menu resolution.
//!
//! `resolve_menu` is a pure function from a role and the current path to the
//! ordered list of navigation entries the sidebar renders. "Current" flags
//! are computed here from path-prefix matching so the frontend never
//! re-derives them.

use crate::system::auth::Role;

/// A navigation entry. Groups carry children and no path of their own.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// Empty for pure group headers.
    pub path: &'static str,
    pub current: bool,
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    fn leaf(id: &'static str, label: &'static str, icon: &'static str, path: &'static str) -> Self {
        MenuItem {
            id,
            label,
            icon,
            path,
            current: false,
            children: Vec::new(),
        }
    }

    fn group(
        id: &'static str,
        label: &'static str,
        icon: &'static str,
        children: Vec<MenuItem>,
    ) -> Self {
        MenuItem {
            id,
            label,
            icon,
            path: "",
            current: false,
            children,
        }
    }
}

/// Path-prefix match: `/` only on exact match, everything else on equality
/// or a `/`-delimited prefix (`/permits` is current on `/permits/applications`
/// but not on `/permitsx`).
pub fn is_current(current_path: &str, item_path: &str) -> bool {
    if item_path.is_empty() {
        return false;
    }
    if item_path == "/" {
        return current_path == "/";
    }
    current_path == item_path
        || current_path
            .strip_prefix(item_path)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Resolve the ordered menu for a role at the given path.
///
/// Unknown roles get an empty menu; the caller decides what to render then.
pub fn resolve_menu(role: Role, current_path: &str) -> Vec<MenuItem> {
    let mut items: Vec<MenuItem> = Vec::new();

    items.push(MenuItem::leaf("dashboard", "Dashboard", "gauge", "/"));

    if matches!(role, Role::Admin | Role::PermitOfficer) {
        items.push(MenuItem::group(
            "permits",
            "Permits",
            "file-text",
            vec![
                MenuItem::leaf(
                    "permit_applications",
                    "Applications",
                    "file-text",
                    "/permits/applications",
                ),
                MenuItem::leaf(
                    "permit_renewals",
                    "Renewals",
                    "refresh",
                    "/permits/renewals",
                ),
            ],
        ));
    }

    if matches!(role, Role::Admin | Role::Inspector) {
        items.push(MenuItem::leaf(
            "compliance",
            "Compliance",
            "clipboard-check",
            "/compliance",
        ));
        items.push(MenuItem::leaf(
            "personnel",
            "Personnel",
            "users",
            "/personnel",
        ));
    }

    items.push(MenuItem::leaf("reports", "Reports", "bar-chart", "/reports"));

    if matches!(role, Role::Admin | Role::Executive) {
        items.push(MenuItem::leaf(
            "ventures",
            "Joint Ventures",
            "handshake",
            "/ventures",
        ));
    }

    if role == Role::Admin {
        items.push(MenuItem::leaf(
            "admin_users",
            "User Management",
            "shield",
            "/admin/users",
        ));
    }

    for item in &mut items {
        mark_current(item, current_path);
    }
    items
}

/// Resolve for a raw role string; unknown roles produce an empty menu.
pub fn resolve_menu_str(role: &str, current_path: &str) -> Vec<MenuItem> {
    match Role::parse(role) {
        Some(role) => resolve_menu(role, current_path),
        None => Vec::new(),
    }
}

fn mark_current(item: &mut MenuItem, current_path: &str) {
    for child in &mut item.children {
        mark_current(child, current_path);
    }
    item.current =
        is_current(current_path, item.path) || item.children.iter().any(|c| c.current);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[MenuItem]) -> Vec<&'static str> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn admin_sees_everything() {
        let menu = resolve_menu(Role::Admin, "/");
        assert_eq!(
            ids(&menu),
            vec![
                "dashboard",
                "permits",
                "compliance",
                "personnel",
                "reports",
                "ventures",
                "admin_users"
            ]
        );
    }

    #[test]
    fn permit_officer_menu() {
        let menu = resolve_menu(Role::PermitOfficer, "/");
        assert_eq!(ids(&menu), vec!["dashboard", "permits", "reports"]);
    }

    #[test]
    fn inspector_menu() {
        let menu = resolve_menu(Role::Inspector, "/");
        assert_eq!(
            ids(&menu),
            vec!["dashboard", "compliance", "personnel", "reports"]
        );
    }

    #[test]
    fn executive_menu() {
        let menu = resolve_menu(Role::Executive, "/");
        assert_eq!(ids(&menu), vec!["dashboard", "reports", "ventures"]);
    }

    #[test]
    fn unknown_role_gets_empty_menu() {
        assert!(resolve_menu_str("superuser", "/").is_empty());
        assert!(resolve_menu_str("", "/reports").is_empty());
    }

    #[test]
    fn root_is_current_only_on_exact_match() {
        let menu = resolve_menu(Role::Executive, "/");
        assert!(menu.iter().find(|i| i.id == "dashboard").unwrap().current);

        let menu = resolve_menu(Role::Executive, "/reports");
        assert!(!menu.iter().find(|i| i.id == "dashboard").unwrap().current);
        assert!(menu.iter().find(|i| i.id == "reports").unwrap().current);
    }

    #[test]
    fn prefix_match_respects_segment_boundary() {
        assert!(is_current("/permits/applications", "/permits/applications"));
        assert!(is_current("/permits/applications/42", "/permits/applications"));
        assert!(!is_current("/permits/applications-old", "/permits/applications"));
        assert!(!is_current("/reportsx", "/reports"));
    }

    #[test]
    fn group_is_current_when_a_child_is() {
        let menu = resolve_menu(Role::PermitOfficer, "/permits/renewals");
        let permits = menu.iter().find(|i| i.id == "permits").unwrap();
        assert!(permits.current);
        assert!(!permits.children[0].current);
        assert!(permits.children[1].current);
    }
}

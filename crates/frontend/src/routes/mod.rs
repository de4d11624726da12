//! Path → page registry.
//!
//! Paths mirror the entries produced by `contracts::navigation::resolve_menu`.
//! Each guarded page re-checks its role set here, so deep links cannot skip
//! past the sidebar's filtering.

use contracts::system::auth::Role;
use leptos::prelude::*;

use crate::dashboards::home::HomeDashboard;
use crate::domain::compliance::ui::list::CompliancePage;
use crate::domain::permits::ui::list::{PermitApplicationsPage, PermitRenewalsPage};
use crate::domain::personnel::ui::list::PersonnelPage;
use crate::domain::reports::ui::list::ReportsPage;
use crate::domain::ventures::ui::list::VenturesPage;
use crate::system::auth::guard::RequireRole;
use crate::system::users::ui::list::UsersListPage;

const PERMIT_ROLES: &[Role] = &[Role::Admin, Role::PermitOfficer];
const COMPLIANCE_ROLES: &[Role] = &[Role::Admin, Role::Inspector];
const REPORT_ROLES: &[Role] = &[
    Role::Admin,
    Role::PermitOfficer,
    Role::Inspector,
    Role::Executive,
];
const VENTURE_ROLES: &[Role] = &[Role::Admin, Role::Executive];
const ADMIN_ROLES: &[Role] = &[Role::Admin];

pub fn page_for_path(path: &str) -> AnyView {
    match path {
        // Logged-in users hitting /login are redirected server-side; if the
        // client gets here anyway, show the dashboard.
        "/" | "/login" => view! { <HomeDashboard /> }.into_any(),
        "/permits/applications" => view! {
            <RequireRole roles=PERMIT_ROLES>
                <PermitApplicationsPage />
            </RequireRole>
        }
        .into_any(),
        "/permits/renewals" => view! {
            <RequireRole roles=PERMIT_ROLES>
                <PermitRenewalsPage />
            </RequireRole>
        }
        .into_any(),
        "/compliance" => view! {
            <RequireRole roles=COMPLIANCE_ROLES>
                <CompliancePage />
            </RequireRole>
        }
        .into_any(),
        "/personnel" => view! {
            <RequireRole roles=COMPLIANCE_ROLES>
                <PersonnelPage />
            </RequireRole>
        }
        .into_any(),
        "/reports" => view! {
            <RequireRole roles=REPORT_ROLES>
                <ReportsPage />
            </RequireRole>
        }
        .into_any(),
        "/ventures" => view! {
            <RequireRole roles=VENTURE_ROLES>
                <VenturesPage />
            </RequireRole>
        }
        .into_any(),
        "/admin/users" => view! {
            <RequireRole roles=ADMIN_ROLES>
                <UsersListPage />
            </RequireRole>
        }
        .into_any(),
        _ => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"Page not found"</h2>
            <p>"The requested page does not exist. Pick a destination from the menu."</p>
        </div>
    }
}

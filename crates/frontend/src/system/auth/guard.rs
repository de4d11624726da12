use contracts::system::auth::Role;
use leptos::prelude::*;

use super::context::use_auth;

/// Component that requires one of the given roles.
/// Shows an access-denied panel otherwise (including for unknown roles).
#[component]
pub fn RequireRole(roles: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    let allowed = move || {
        auth_state
            .get()
            .user
            .as_ref()
            .and_then(|u| u.role())
            .map(|role| roles.contains(&role))
            .unwrap_or(false)
    };

    view! {
        <Show
            when=allowed
            fallback=|| view! {
                <div class="access-denied">
                    <h2>"Access denied"</h2>
                    <p>"Your role does not grant access to this page."</p>
                </div>
            }
        >
            {children()}
        </Show>
    }
}

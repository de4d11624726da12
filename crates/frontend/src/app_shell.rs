//! Application shell - root components of the app.
//!
//! Contains:
//! - `AppShell` - auth gate (shows LoginPage or MainLayout)
//! - `MainLayout` - main application layout (Shell + Sidebar + routed page)

use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::drawer::MobileDrawer;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::routes::page_for_path;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Main application layout with Sidebar and the page resolved from the
/// current path.
#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Wires popstate so back/forward keep the rendered page in sync.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || page_for_path(&ctx.current_path.get())
        />
        <MobileDrawer />
    }
}

/// Application shell - auth gate component.
///
/// Shows:
/// - `LoginPage` when the user is not authenticated
/// - `MainLayout` when authenticated
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}

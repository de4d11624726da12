//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Toggle buttons for the desktop sidebar and the mobile drawer
//! - Application title
//! - User info with role label
//! - Logout action

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let (auth_state, set_auth_state) = use_auth();

    let toggle_sidebar = move |_| {
        ctx.toggle_sidebar();
    };

    let toggle_drawer = move |_| {
        ctx.toggle_drawer();
    };

    let logout = move |_| {
        spawn_local(async move {
            do_logout(set_auth_state).await;
        });
    };

    let is_sidebar_visible = move || ctx.sidebar_open.get();

    let username = move || {
        auth_state
            .get()
            .user
            .map(|u| u.username)
            .unwrap_or_else(|| "Guest".to_string())
    };

    let role_label = move || {
        auth_state
            .get()
            .user
            .as_ref()
            .and_then(|u| u.role())
            .map(|r| r.label())
            .unwrap_or("Unknown role")
    };

    view! {
        <div class="top-header">
            // Left section - drawer toggle (mobile only) and brand
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn top-header__icon-btn--mobile"
                    on:click=toggle_drawer
                    title="Menu"
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Petroleum Regulatory Commission"</span>
            </div>

            // Right section - actions
            <div class="top-header__actions">
                // Sidebar toggle (desktop)
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>

                // User info
                <div class="top-header__user">
                    {icon("user")}
                    <span>{username}</span>
                    <span class="top-header__role">{role_label}</span>
                </div>

                // Logout
                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}

//! Sidebar component rendering the role-resolved navigation menu.
//!
//! The menu itself comes from `contracts::navigation::resolve_menu_str`;
//! this component only renders entries and forwards clicks to `navigate`.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::navigation::{resolve_menu_str, MenuItem};
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    // Manually collapsed/expanded groups; the group holding the current
    // page is always expanded.
    let expanded_groups: RwSignal<Vec<String>> = RwSignal::new(Vec::new());

    let menu = Signal::derive(move || {
        let path = ctx.current_path.get();
        auth_state
            .get()
            .user
            .as_ref()
            .map(|u| resolve_menu_str(&u.role, &path))
            .unwrap_or_default()
    });

    view! {
        <div class="app-sidebar__content">
            {move || {
                let expanded = expanded_groups.get();
                menu.get()
                    .into_iter()
                    .map(|item| {
                        if item.children.is_empty() {
                            render_leaf(ctx, item, 12)
                        } else {
                            render_group(ctx, expanded_groups, &expanded, item)
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

fn render_leaf(ctx: AppGlobalContext, item: MenuItem, padding: i32) -> AnyView {
    let is_current = item.current;
    let path = item.path;
    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--active=is_current
            style:padding-left=format!("{}px", padding)
            on:click=move |_| ctx.navigate(path)
        >
            <div class="app-sidebar__item-content">
                {icon(item.icon)}
                <span>{item.label}</span>
            </div>
        </div>
    }
    .into_any()
}

fn render_group(
    ctx: AppGlobalContext,
    expanded_groups: RwSignal<Vec<String>>,
    expanded: &[String],
    item: MenuItem,
) -> AnyView {
    let group_id = item.id.to_string();
    let is_expanded = item.current || expanded.iter().any(|id| id == &group_id);

    let toggle_id = group_id.clone();
    let toggle = move |_| {
        let gid = toggle_id.clone();
        expanded_groups.update(move |items| {
            if let Some(pos) = items.iter().position(|x| x == &gid) {
                items.remove(pos);
            } else {
                items.push(gid);
            }
        });
    };

    let children = is_expanded.then(|| {
        view! {
            <div class="app-sidebar__children">
                {item
                    .children
                    .into_iter()
                    .map(|child| render_leaf(ctx, child, 24))
                    .collect_view()}
            </div>
        }
    });

    view! {
        <div>
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=item.current
                style:padding-left="12px"
                on:click=toggle
            >
                <div class="app-sidebar__item-content">
                    {icon(item.icon)}
                    <span>{item.label}</span>
                </div>
                <div
                    class="app-sidebar__chevron"
                    class:app-sidebar__chevron--expanded=is_expanded
                >
                    {icon("chevron-right")}
                </div>
            </div>
            {children}
        </div>
    }
    .into_any()
}

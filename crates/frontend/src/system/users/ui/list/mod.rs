mod state;

use contracts::system::auth::Role;
use contracts::system::users::UserAccount;
use leptos::prelude::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::{Badge, Select};
use crate::shared::date_utils::format_datetime;
use crate::shared::list_utils::{
    filter_list, get_sort_indicator, sort_list, SearchInput, Searchable, Sortable,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::users::data;
use state::{create_state, UsersListState};

impl Searchable for UserAccount {
    fn matches_filter(&self, filter: &str) -> bool {
        self.username.to_lowercase().contains(filter)
            || self
                .full_name
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(filter)
            || self
                .email
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(filter)
    }
}

impl Sortable for UserAccount {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "username" => self
                .username
                .to_lowercase()
                .cmp(&other.username.to_lowercase()),
            "full_name" => self
                .full_name
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .cmp(&other.full_name.as_deref().unwrap_or("").to_lowercase()),
            "role" => self.role.cmp(&other.role),
            "is_active" => self.is_active.cmp(&other.is_active),
            "last_login_at" => self
                .last_login_at
                .as_deref()
                .unwrap_or("")
                .cmp(other.last_login_at.as_deref().unwrap_or("")),
            _ => self.username.cmp(&other.username),
        }
    }
}

fn role_label(role: &str) -> String {
    Role::parse(role)
        .map(|r| r.label().to_string())
        .unwrap_or_else(|| role.to_string())
}

fn recalc_pagination(state: &mut UsersListState) {
    let total_pages = if state.total_count == 0 {
        1
    } else {
        state.total_count.div_ceil(state.page_size)
    };
    state.total_pages = total_pages;
    if state.page >= total_pages {
        state.page = total_pages.saturating_sub(1);
    }
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    let state = create_state();
    let all_items = StoredValue::new(data::user_accounts());

    let refresh_view = move || {
        let (query, role_filter) =
            state.with_untracked(|s| (s.search_query.clone(), s.role_filter.clone()));
        let mut data = all_items.get_value();
        if !role_filter.is_empty() {
            data.retain(|u| u.role == role_filter);
        }
        filter_list(&mut data, &query);
        state.update(|s| {
            sort_list(&mut data, &s.sort_field, s.sort_ascending);
            s.total_count = data.len();
            recalc_pagination(s);
            let start = s.page * s.page_size;
            let end = (start + s.page_size).min(data.len());
            s.items = data.get(start..end).unwrap_or(&[]).to_vec();
        });
    };

    refresh_view();

    let apply_search = Callback::new(move |query: String| {
        state.update(|s| {
            s.search_query = query;
            s.page = 0;
        });
        refresh_view();
    });

    let apply_role_filter = Callback::new(move |value: String| {
        state.update(|s| {
            s.role_filter = value;
            s.page = 0;
        });
        refresh_view();
    });

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
            refresh_view();
        }
    };

    let go_to_page = move |page: usize| {
        state.update(|s| {
            s.page = page;
        });
        refresh_view();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.page = 0;
        });
        refresh_view();
    };

    let role_options: Vec<(String, String)> = std::iter::once(("".into(), "All roles".into()))
        .chain(
            [
                Role::Admin,
                Role::PermitOfficer,
                Role::Inspector,
                Role::Executive,
            ]
            .into_iter()
            .map(|r| (r.as_str().into(), r.label().into())),
        )
        .collect();

    let sort_indicator = move |field: &'static str| {
        move || {
            state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending).to_string())
        }
    };

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"User Management"</h1>
                    <thaw::Badge>
                        {move || state.get().total_count.to_string()}
                    </thaw::Badge>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=Signal::derive(move || state.get().search_query.clone())
                        on_change=apply_search
                        placeholder="Username, name, email..."
                    />
                    <Select
                        value=Signal::derive(move || state.get().role_filter.clone())
                        on_change=apply_role_filter
                        options=role_options
                    />
                </div>
            </div>
            <div class="page__content">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th on:click=toggle_sort("username")>
                                "Username" {sort_indicator("username")}
                            </th>
                            <th on:click=toggle_sort("full_name")>
                                "Full Name" {sort_indicator("full_name")}
                            </th>
                            <th>"Email"</th>
                            <th on:click=toggle_sort("role")>
                                "Role" {sort_indicator("role")}
                            </th>
                            <th on:click=toggle_sort("is_active")>
                                "Active" {sort_indicator("is_active")}
                            </th>
                            <th on:click=toggle_sort("last_login_at")>
                                "Last Login" {sort_indicator("last_login_at")}
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || state.get().items.clone()
                            key=|user| user.id.clone()
                            children=move |user: UserAccount| {
                                let active_variant = if user.is_active { "success" } else { "neutral" };
                                let active_label = if user.is_active { "Active" } else { "Disabled" };
                                view! {
                                    <tr class="data-table__row">
                                        <td>{user.username.clone()}</td>
                                        <td>{user.full_name.clone().unwrap_or_else(|| "-".into())}</td>
                                        <td>{user.email.clone().unwrap_or_else(|| "-".into())}</td>
                                        <td>{role_label(&user.role)}</td>
                                        <td>
                                            <Badge variant=active_variant.to_string()>{active_label}</Badge>
                                        </td>
                                        <td>
                                            {user
                                                .last_login_at
                                                .as_deref()
                                                .map(format_datetime)
                                                .unwrap_or_else(|| "-".to_string())}
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                <PaginationControls
                    current_page=Signal::derive(move || state.get().page)
                    total_pages=Signal::derive(move || state.get().total_pages)
                    total_count=Signal::derive(move || state.get().total_count)
                    page_size=Signal::derive(move || state.get().page_size)
                    on_page_change=Callback::new(go_to_page)
                    on_page_size_change=Callback::new(change_page_size)
                />
            </div>
        </PageFrame>
    }
}

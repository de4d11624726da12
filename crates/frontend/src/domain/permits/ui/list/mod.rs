mod state;

use contracts::domain::permits::{PermitApplication, PermitStatus, PermitType};
use leptos::prelude::*;

use crate::domain::permits::data;
use crate::domain::permits::ui::details::PermitDetails;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::{Badge, Select};
use crate::shared::date_utils::{format_date, format_date_opt};
use crate::shared::list_utils::{
    filter_list, get_sort_indicator, sort_list, SearchInput, Searchable, Sortable,
};
use crate::shared::modal_frame::ModalFrame;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::{create_state, PermitListState};

impl Searchable for PermitApplication {
    fn matches_filter(&self, filter: &str) -> bool {
        self.permit_no.to_lowercase().contains(filter)
            || self.company.to_lowercase().contains(filter)
            || self.work_area.to_lowercase().contains(filter)
    }
}

impl Sortable for PermitApplication {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "permit_no" => self.permit_no.cmp(&other.permit_no),
            "company" => self
                .company
                .to_lowercase()
                .cmp(&other.company.to_lowercase()),
            "permit_type" => self.permit_type.as_str().cmp(other.permit_type.as_str()),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            "submitted_at" => self.submitted_at.cmp(&other.submitted_at),
            _ => self.permit_no.cmp(&other.permit_no),
        }
    }
}

pub fn status_variant(status: PermitStatus) -> &'static str {
    match status {
        PermitStatus::Approved => "success",
        PermitStatus::Rejected => "error",
        PermitStatus::UnderReview => "warning",
        PermitStatus::Submitted => "primary",
        PermitStatus::Draft => "neutral",
    }
}

#[component]
pub fn PermitApplicationsPage() -> impl IntoView {
    view! {
        <PermitList
            title="Permit Applications"
            page_id="permit_applications--list"
            items=data::permit_applications()
        />
    }
}

#[component]
pub fn PermitRenewalsPage() -> impl IntoView {
    view! {
        <PermitList
            title="Permit Renewals"
            page_id="permit_renewals--list"
            items=data::permit_renewals()
        />
    }
}

fn recalc_pagination(state: &mut PermitListState) {
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
fn PermitList(
    title: &'static str,
    page_id: &'static str,
    items: Vec<PermitApplication>,
) -> impl IntoView {
    let state = create_state();
    let all_items = StoredValue::new(items);
    let selected: RwSignal<Option<PermitApplication>> = RwSignal::new(None);

    let refresh_view = move || {
        let (query, status_filter, type_filter) = state.with_untracked(|s| {
            (
                s.search_query.clone(),
                s.status_filter.clone(),
                s.type_filter.clone(),
            )
        });
        let mut data = all_items.get_value();
        if !status_filter.is_empty() {
            data.retain(|p| p.status.as_str() == status_filter);
        }
        if !type_filter.is_empty() {
            data.retain(|p| p.permit_type.as_str() == type_filter);
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

    let apply_status_filter = Callback::new(move |value: String| {
        state.update(|s| {
            s.status_filter = value;
            s.page = 0;
        });
        refresh_view();
    });

    let apply_type_filter = Callback::new(move |value: String| {
        state.update(|s| {
            s.type_filter = value;
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

    let status_options: Vec<(String, String)> = std::iter::once(("".into(), "All statuses".into()))
        .chain(
            PermitStatus::all()
                .into_iter()
                .map(|s| (s.as_str().into(), s.label().into())),
        )
        .collect();

    let type_options: Vec<(String, String)> = std::iter::once(("".into(), "All types".into()))
        .chain(
            PermitType::all()
                .into_iter()
                .map(|t| (t.as_str().into(), t.label().into())),
        )
        .collect();

    let sort_indicator = move |field: &'static str| {
        move || {
            state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending).to_string())
        }
    };

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    <thaw::Badge>
                        {move || state.get().total_count.to_string()}
                    </thaw::Badge>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=Signal::derive(move || state.get().search_query.clone())
                        on_change=apply_search
                        placeholder="Permit no, company, work area..."
                    />
                    <Select
                        value=Signal::derive(move || state.get().status_filter.clone())
                        on_change=apply_status_filter
                        options=status_options
                    />
                    <Select
                        value=Signal::derive(move || state.get().type_filter.clone())
                        on_change=apply_type_filter
                        options=type_options
                    />
                </div>
            </div>
            <div class="page__content">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th on:click=toggle_sort("permit_no")>
                                "Permit No" {sort_indicator("permit_no")}
                            </th>
                            <th on:click=toggle_sort("company")>
                                "Company" {sort_indicator("company")}
                            </th>
                            <th on:click=toggle_sort("permit_type")>
                                "Type" {sort_indicator("permit_type")}
                            </th>
                            <th>"Work Area"</th>
                            <th on:click=toggle_sort("status")>
                                "Status" {sort_indicator("status")}
                            </th>
                            <th on:click=toggle_sort("submitted_at")>
                                "Submitted" {sort_indicator("submitted_at")}
                            </th>
                            <th>"Decided"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || state.get().items.clone()
                            key=|permit| permit.id.clone()
                            children=move |permit: PermitApplication| {
                                let row = permit.clone();
                                view! {
                                    <tr
                                        class="data-table__row"
                                        on:click=move |_| selected.set(Some(row.clone()))
                                    >
                                        <td>{permit.permit_no.clone()}</td>
                                        <td>{permit.company.clone()}</td>
                                        <td>{permit.permit_type.label()}</td>
                                        <td>{permit.work_area.clone()}</td>
                                        <td>
                                            <Badge variant=status_variant(permit.status).to_string()>
                                                {permit.status.label()}
                                            </Badge>
                                        </td>
                                        <td>{format_date(&permit.submitted_at)}</td>
                                        <td>{format_date_opt(&permit.decided_at)}</td>
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

            {move || selected.get().map(|permit| view! {
                <ModalFrame
                    on_close=Callback::new(move |_| selected.set(None))
                    modal_style="width: 560px; max-width: 92vw;".to_string()
                >
                    <PermitDetails
                        permit=permit.clone()
                        on_close=Callback::new(move |_| selected.set(None))
                    />
                </ModalFrame>
            })}
        </PageFrame>
    }
}

mod state;

use contracts::domain::ventures::{JointVenture, VentureStatus};
use leptos::prelude::*;

use crate::domain::ventures::data;
use crate::domain::ventures::ui::details::VentureDetails;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::{Badge, Select};
use crate::shared::date_utils::format_date;
use crate::shared::list_utils::{
    filter_list, get_sort_indicator, sort_list, SearchInput, Searchable, Sortable,
};
use crate::shared::modal_frame::ModalFrame;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::{create_state, VentureListState};

impl Searchable for JointVenture {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(filter)
            || self.operator.to_lowercase().contains(filter)
            || self.block.to_lowercase().contains(filter)
    }
}

impl Sortable for JointVenture {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "operator" => self
                .operator
                .to_lowercase()
                .cmp(&other.operator.to_lowercase()),
            "block" => self.block.cmp(&other.block),
            "state_share_pct" => self
                .state_share_pct
                .partial_cmp(&other.state_share_pct)
                .unwrap_or(std::cmp::Ordering::Equal),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            "signed_at" => self.signed_at.cmp(&other.signed_at),
            _ => self.name.cmp(&other.name),
        }
    }
}

pub fn status_variant(status: VentureStatus) -> &'static str {
    match status {
        VentureStatus::Active => "success",
        VentureStatus::Suspended => "warning",
        VentureStatus::Terminated => "neutral",
    }
}

fn recalc_pagination(state: &mut VentureListState) {
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
pub fn VenturesPage() -> impl IntoView {
    let state = create_state();
    let all_items = StoredValue::new(data::joint_ventures());
    let selected: RwSignal<Option<JointVenture>> = RwSignal::new(None);

    let refresh_view = move || {
        let (query, status_filter) =
            state.with_untracked(|s| (s.search_query.clone(), s.status_filter.clone()));
        let mut data = all_items.get_value();
        if !status_filter.is_empty() {
            data.retain(|v| v.status.as_str() == status_filter);
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
            VentureStatus::all()
                .into_iter()
                .map(|s| (s.as_str().into(), s.label().into())),
        )
        .collect();

    let sort_indicator = move |field: &'static str| {
        move || {
            state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending).to_string())
        }
    };

    view! {
        <PageFrame page_id="ventures--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Joint Ventures"</h1>
                    <thaw::Badge>
                        {move || state.get().total_count.to_string()}
                    </thaw::Badge>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=Signal::derive(move || state.get().search_query.clone())
                        on_change=apply_search
                        placeholder="Name, operator, block..."
                    />
                    <Select
                        value=Signal::derive(move || state.get().status_filter.clone())
                        on_change=apply_status_filter
                        options=status_options
                    />
                </div>
            </div>
            <div class="page__content">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th on:click=toggle_sort("name")>
                                "Name" {sort_indicator("name")}
                            </th>
                            <th on:click=toggle_sort("operator")>
                                "Operator" {sort_indicator("operator")}
                            </th>
                            <th on:click=toggle_sort("block")>
                                "Block" {sort_indicator("block")}
                            </th>
                            <th on:click=toggle_sort("state_share_pct")>
                                "State Share" {sort_indicator("state_share_pct")}
                            </th>
                            <th on:click=toggle_sort("status")>
                                "Status" {sort_indicator("status")}
                            </th>
                            <th on:click=toggle_sort("signed_at")>
                                "Signed" {sort_indicator("signed_at")}
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || state.get().items.clone()
                            key=|venture| venture.id.clone()
                            children=move |venture: JointVenture| {
                                let row = venture.clone();
                                view! {
                                    <tr
                                        class="data-table__row"
                                        on:click=move |_| selected.set(Some(row.clone()))
                                    >
                                        <td>{venture.name.clone()}</td>
                                        <td>{venture.operator.clone()}</td>
                                        <td>{venture.block.clone()}</td>
                                        <td>{format!("{:.0}%", venture.state_share_pct)}</td>
                                        <td>
                                            <Badge variant=status_variant(venture.status).to_string()>
                                                {venture.status.label()}
                                            </Badge>
                                        </td>
                                        <td>{format_date(&venture.signed_at)}</td>
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

            {move || selected.get().map(|venture| view! {
                <ModalFrame
                    on_close=Callback::new(move |_| selected.set(None))
                    modal_style="width: 560px; max-width: 92vw;".to_string()
                >
                    <VentureDetails
                        venture=venture.clone()
                        on_close=Callback::new(move |_| selected.set(None))
                    />
                </ModalFrame>
            })}
        </PageFrame>
    }
}

/// Shared utilities for list views (search, sort, UI pieces)
use leptos::prelude::*;
use std::cmp::Ordering;
use wasm_bindgen::JsCast;

/// Minimum query length before a search filter is applied.
pub const MIN_SEARCH_LEN: usize = 3;

/// Trait for data types that support text search
pub trait Searchable {
    /// Returns true when the record matches the query (already lowercased)
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait for data types that support sorting
pub trait Sortable {
    /// Compares two records by the given field name
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort a list by the given field
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Filter a list by a search query. Queries shorter than `MIN_SEARCH_LEN`
/// are treated as "no filter".
pub fn filter_list<T: Searchable>(items: &mut Vec<T>, filter: &str) {
    let query = filter.trim().to_lowercase();
    if query.len() < MIN_SEARCH_LEN {
        return;
    }
    items.retain(|item| item.matches_filter(&query));
}

/// Sort indicator suffix for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Search input with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value (for the active-state highlight)
    #[prop(into)]
    value: Signal<String>,
    /// Callback invoked after the debounce interval
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search (min. 3 characters)...".to_string()
    } else {
        placeholder
    };

    // Local input state (before the debounce fires)
    let (input_value, set_input_value) = signal(String::new());

    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        // Cancel a pending timer if there is one
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(timeout_id);
            }
        }

        let window = web_sys::window().expect("no window");
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        let timeout_id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref::<js_sys::Function>(),
                300,
            )
            .expect("setTimeout failed");

        closure.forget();
        debounce_timeout.set_value(Some(timeout_id));
    };

    let is_filter_active = move || {
        let text = value.get();
        text.trim().len() >= MIN_SEARCH_LEN
    };

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            {crate::shared::icons::icon("search")}
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        class="search-input__clear"
                        on:click=clear_filter
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Row {
        name: String,
        rank: u32,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(filter)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "rank" => self.rank.cmp(&other.rank),
                _ => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Mahakam".into(), rank: 2 },
            Row { name: "Natuna".into(), rank: 3 },
            Row { name: "Cepu".into(), rank: 1 },
        ]
    }

    #[test]
    fn short_queries_do_not_filter() {
        let mut items = rows();
        filter_list(&mut items, "ma");
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let mut items = rows();
        filter_list(&mut items, "MAHA");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Mahakam");
    }

    #[test]
    fn sort_by_field_and_direction() {
        let mut items = rows();
        sort_list(&mut items, "rank", true);
        assert_eq!(items[0].name, "Cepu");
        sort_list(&mut items, "rank", false);
        assert_eq!(items[0].name, "Natuna");
        sort_list(&mut items, "name", true);
        assert_eq!(items[0].name, "Cepu");
    }

    #[test]
    fn sort_indicator_reflects_state() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "rank", true), " ⇅");
    }
}

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Global UI state: the current path plus sidebar/drawer visibility.
///
/// Navigation goes through `navigate()` so the history stack and the
/// `current_path` signal never disagree. Menu "current" flags are derived
/// from this signal by the resolver in `contracts::navigation`.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub current_path: RwSignal<String>,
    pub sidebar_open: RwSignal<bool>,
    pub drawer_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            current_path: RwSignal::new(read_location_path()),
            sidebar_open: RwSignal::new(true),
            drawer_open: RwSignal::new(false),
        }
    }

    /// Push a new path onto the history stack and re-render.
    pub fn navigate(&self, path: &str) {
        if self.current_path.get_untracked() == path {
            self.drawer_open.set(false);
            return;
        }
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.push_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(path),
                );
            }
        }
        self.current_path.set(path.to_string());
        self.drawer_open.set(false);
    }

    /// Subscribe to popstate so browser back/forward updates the signal.
    /// This runs once when MainLayout is created.
    pub fn init_router_integration(&self) {
        let current_path = self.current_path;
        let closure = Closure::wrap(Box::new(move || {
            current_path.set(read_location_path());
        }) as Box<dyn FnMut()>);

        if let Some(w) = window() {
            w.set_onpopstate(Some(closure.as_ref().unchecked_ref()));
        }
        closure.forget();

        // The URL may have changed between construction and mount
        // (e.g. login navigated before the layout existed).
        self.current_path.set(read_location_path());
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    pub fn toggle_drawer(&self) {
        self.drawer_open.update(|open| *open = !*open);
    }

    pub fn close_drawer(&self) {
        self.drawer_open.set(false);
    }
}

fn read_location_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Mobile drawer: the same sidebar menu inside a dismissable overlay.
#[component]
pub fn MobileDrawer() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <Show when=move || ctx.drawer_open.get()>
            <div class="drawer-overlay" on:click=move |_| ctx.close_drawer()>
                <div class="drawer" on:click=move |ev| ev.stop_propagation()>
                    <div class="drawer__header">
                        <span class="drawer__title">"Navigation"</span>
                        <button
                            class="drawer__close"
                            on:click=move |_| ctx.close_drawer()
                            title="Close"
                        >
                            {icon("x")}
                        </button>
                    </div>
                    <Sidebar />
                </div>
            </div>
        </Show>
    }
}

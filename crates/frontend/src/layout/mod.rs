pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |        Content               |
/// |   (Left)  |       (Center)               |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    // Left gets AppGlobalContext internally for sidebar visibility control

    view! {
        <div class="app-layout">
            // Top header with toggle controls
            <TopHeader />

            // Main body with sidebar and content
            <div class="app-body">
                // Left sidebar - uses ctx.sidebar_open for visibility
                <left::Left>
                    {left()}
                </left::Left>

                // Main content area - re-rendered when the path changes
                <div class="app-main">
                    {move || center()}
                </div>
            </div>
        </div>
    }
}

use crate::shared::icons::icon;
use leptos::prelude::*;

/// Stat card for dashboard summary rows.
///
/// Values arrive preformatted; the card only handles layout and accent.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Preformatted display value
    value: String,
    /// Accent: "success", "warning", "error" or anything else for neutral
    #[prop(optional, into)]
    accent: MaybeProp<String>,
    /// Optional subtitle below the value
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    let accent_class = move || match accent.get().as_deref() {
        Some("success") => "stat-card stat-card--success",
        Some("warning") => "stat-card stat-card--warning",
        Some("error") => "stat-card stat-card--error",
        _ => "stat-card",
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=accent_class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{value}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

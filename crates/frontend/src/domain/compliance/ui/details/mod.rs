use contracts::domain::compliance::ComplianceCheck;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::domain::compliance::ui::list::status_variant;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::{format_date, format_date_opt};

#[component]
pub fn ComplianceDetails(check: ComplianceCheck, on_close: Callback<()>) -> impl IntoView {
    let findings = check
        .findings
        .clone()
        .unwrap_or_else(|| "No findings recorded.".to_string());

    view! {
        <div class="details" id="compliance--detail" data-page-category="detail">
            <div class="details__header">
                <h2 class="details__title">{check.facility.clone()}</h2>
                <Badge variant=status_variant(check.status).to_string()>
                    {check.status.label()}
                </Badge>
            </div>

            <dl class="details__grid">
                <dt>"Operator"</dt>
                <dd>{check.operator.clone()}</dd>
                <dt>"Check type"</dt>
                <dd>{check.check_type.label()}</dd>
                <dt>"Inspector"</dt>
                <dd>{check.inspector.clone()}</dd>
                <dt>"Scheduled"</dt>
                <dd>{format_date(&check.scheduled_for)}</dd>
                <dt>"Completed"</dt>
                <dd>{format_date_opt(&check.completed_at)}</dd>
            </dl>

            <div class="details__section">
                <h3>"Findings"</h3>
                <p>{findings}</p>
            </div>

            <div class="details__actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                >
                    "Close"
                </Button>
            </div>
        </div>
    }
}

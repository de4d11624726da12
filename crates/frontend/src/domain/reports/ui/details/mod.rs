use contracts::domain::reports::RegulatoryReport;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::domain::reports::ui::list::status_variant;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_date_opt;

#[component]
pub fn ReportDetails(report: RegulatoryReport, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="details" id="reports--detail" data-page-category="detail">
            <div class="details__header">
                <h2 class="details__title">{report.title.clone()}</h2>
                <Badge variant=status_variant(report.status).to_string()>
                    {report.status.label()}
                </Badge>
            </div>

            <dl class="details__grid">
                <dt>"Type"</dt>
                <dd>{report.report_type.label()}</dd>
                <dt>"Period"</dt>
                <dd>{report.period.clone()}</dd>
                <dt>"Submitted by"</dt>
                <dd>{report.submitted_by.clone()}</dd>
                <dt>"Published"</dt>
                <dd>{format_date_opt(&report.published_at)}</dd>
            </dl>

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

use contracts::domain::permits::PermitApplication;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::domain::permits::ui::list::status_variant;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::{format_date, format_date_opt};

/// Read-only detail view rendered inside a ModalFrame.
#[component]
pub fn PermitDetails(permit: PermitApplication, on_close: Callback<()>) -> impl IntoView {
    let kind = if permit.is_renewal {
        "Renewal request"
    } else {
        "New application"
    };

    view! {
        <div class="details" id="permit--detail" data-page-category="detail">
            <div class="details__header">
                <h2 class="details__title">{permit.permit_no.clone()}</h2>
                <Badge variant=status_variant(permit.status).to_string()>
                    {permit.status.label()}
                </Badge>
            </div>

            <dl class="details__grid">
                <dt>"Kind"</dt>
                <dd>{kind}</dd>
                <dt>"Company"</dt>
                <dd>{permit.company.clone()}</dd>
                <dt>"Permit type"</dt>
                <dd>{permit.permit_type.label()}</dd>
                <dt>"Work area"</dt>
                <dd>{permit.work_area.clone()}</dd>
                <dt>"Submitted"</dt>
                <dd>{format_date(&permit.submitted_at)}</dd>
                <dt>"Decided"</dt>
                <dd>{format_date_opt(&permit.decided_at)}</dd>
                <dt>"Contact"</dt>
                <dd>{permit.contact_email.clone()}</dd>
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

use contracts::domain::personnel::PersonnelRecord;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::domain::personnel::ui::list::status_variant;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_date_opt;

#[component]
pub fn PersonnelDetails(person: PersonnelRecord, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="details" id="personnel--detail" data-page-category="detail">
            <div class="details__header">
                <h2 class="details__title">{person.name.clone()}</h2>
                <Badge variant=status_variant(person.status).to_string()>
                    {person.status.label()}
                </Badge>
            </div>

            <dl class="details__grid">
                <dt>"Position"</dt>
                <dd>{person.position.clone()}</dd>
                <dt>"Division"</dt>
                <dd>{person.division.clone()}</dd>
                <dt>"Grade"</dt>
                <dd>{person.grade.clone()}</dd>
                <dt>"Certified until"</dt>
                <dd>{format_date_opt(&person.certified_until)}</dd>
                <dt>"Email"</dt>
                <dd>{person.email.clone()}</dd>
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

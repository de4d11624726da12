use contracts::domain::ventures::JointVenture;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::domain::ventures::ui::list::status_variant;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_date;

#[component]
pub fn VentureDetails(venture: JointVenture, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="details" id="ventures--detail" data-page-category="detail">
            <div class="details__header">
                <h2 class="details__title">{venture.name.clone()}</h2>
                <Badge variant=status_variant(venture.status).to_string()>
                    {venture.status.label()}
                </Badge>
            </div>

            <dl class="details__grid">
                <dt>"Operator"</dt>
                <dd>{venture.operator.clone()}</dd>
                <dt>"Block"</dt>
                <dd>{venture.block.clone()}</dd>
                <dt>"State share"</dt>
                <dd>{format!("{:.0}%", venture.state_share_pct)}</dd>
                <dt>"Signed"</dt>
                <dd>{format_date(&venture.signed_at)}</dd>
            </dl>

            <div class="details__section">
                <h3>"Partners"</h3>
                <p>{venture.partners.clone()}</p>
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

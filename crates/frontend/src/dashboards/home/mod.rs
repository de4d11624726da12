//! Commission overview dashboard: headline counters over the page-local
//! registers plus the latest permit submissions.

use contracts::domain::compliance::CheckStatus;
use contracts::domain::permits::{PermitApplication, PermitStatus};
use contracts::domain::personnel::PersonnelStatus;
use contracts::domain::reports::ReportStatus;
use leptos::prelude::*;

use crate::domain::compliance::data as compliance_data;
use crate::domain::permits::data as permits_data;
use crate::domain::permits::ui::list::status_variant;
use crate::domain::personnel::data as personnel_data;
use crate::domain::reports::data as reports_data;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_date;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

#[component]
pub fn HomeDashboard() -> impl IntoView {
    let permits = permits_data::permit_applications();
    let renewals = permits_data::permit_renewals();
    let checks = compliance_data::compliance_checks();
    let personnel = personnel_data::personnel_records();
    let reports = reports_data::regulatory_reports();

    let permits_in_review = permits
        .iter()
        .chain(renewals.iter())
        .filter(|p| {
            matches!(
                p.status,
                PermitStatus::Submitted | PermitStatus::UnderReview
            )
        })
        .count();

    let failed_checks = checks
        .iter()
        .filter(|c| c.status == CheckStatus::Failed)
        .count();

    let active_personnel = personnel
        .iter()
        .filter(|p| p.status == PersonnelStatus::Active)
        .count();

    let pending_reports = reports
        .iter()
        .filter(|r| r.status == ReportStatus::Pending)
        .count();

    // Latest submissions across applications and renewals
    let mut recent: Vec<PermitApplication> =
        permits.into_iter().chain(renewals.into_iter()).collect();
    recent.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    recent.truncate(5);

    view! {
        <PageFrame page_id="home--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                </div>
            </div>
            <div class="page__content">
                <div class="stat-card-row">
                    <StatCard
                        label="Permits in review"
                        icon_name="file-text"
                        value=permits_in_review.to_string()
                        accent="warning".to_string()
                        subtitle="Applications and renewals".to_string()
                    />
                    <StatCard
                        label="Failed compliance checks"
                        icon_name="clipboard-check"
                        value=failed_checks.to_string()
                        accent="error".to_string()
                        subtitle="Awaiting corrective action".to_string()
                    />
                    <StatCard
                        label="Active personnel"
                        icon_name="users"
                        value=active_personnel.to_string()
                        accent="success".to_string()
                    />
                    <StatCard
                        label="Pending reports"
                        icon_name="bar-chart"
                        value=pending_reports.to_string()
                        accent="warning".to_string()
                    />
                </div>

                <h2 class="section-title">"Latest permit submissions"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Permit No"</th>
                            <th>"Company"</th>
                            <th>"Type"</th>
                            <th>"Status"</th>
                            <th>"Submitted"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {recent
                            .into_iter()
                            .map(|permit| {
                                view! {
                                    <tr>
                                        <td>{permit.permit_no.clone()}</td>
                                        <td>{permit.company.clone()}</td>
                                        <td>{permit.permit_type.label()}</td>
                                        <td>
                                            <Badge variant=status_variant(permit.status).to_string()>
                                                {permit.status.label()}
                                            </Badge>
                                        </td>
                                        <td>{format_date(&permit.submitted_at)}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </PageFrame>
    }
}

//! Page-local sample data for the regulatory report register.

use contracts::domain::reports::{RegulatoryReport, ReportStatus, ReportType};

pub fn regulatory_reports() -> Vec<RegulatoryReport> {
    vec![
        RegulatoryReport {
            id: "rr-001".into(),
            title: "Q2 2025 National Lifting Summary".into(),
            report_type: ReportType::Quarterly,
            period: "2025-Q2".into(),
            submitted_by: "Directorate of Production".into(),
            status: ReportStatus::Published,
            published_at: Some("2025-07-21".into()),
        },
        RegulatoryReport {
            id: "rr-002".into(),
            title: "Rokan Block June Production Return".into(),
            report_type: ReportType::Production,
            period: "2025-06".into(),
            submitted_by: "Rokan Petroleum".into(),
            status: ReportStatus::Published,
            published_at: Some("2025-07-09".into()),
        },
        RegulatoryReport {
            id: "rr-003".into(),
            title: "KL-7 Gas Release Incident Report".into(),
            report_type: ReportType::Incident,
            period: "2025-07".into(),
            submitted_by: "Mahakam Hulu Energi".into(),
            status: ReportStatus::Pending,
            published_at: None,
        },
        RegulatoryReport {
            id: "rr-004".into(),
            title: "Cost Recovery Audit - Cepu Block FY2024".into(),
            report_type: ReportType::Audit,
            period: "2024".into(),
            submitted_by: "Finance & Audit Division".into(),
            status: ReportStatus::Pending,
            published_at: None,
        },
        RegulatoryReport {
            id: "rr-005".into(),
            title: "Q1 2025 National Lifting Summary".into(),
            report_type: ReportType::Quarterly,
            period: "2025-Q1".into(),
            submitted_by: "Directorate of Production".into(),
            status: ReportStatus::Archived,
            published_at: Some("2025-04-18".into()),
        },
        RegulatoryReport {
            id: "rr-006".into(),
            title: "Mahakam Delta May Production Return".into(),
            report_type: ReportType::Production,
            period: "2025-05".into(),
            submitted_by: "Mahakam Hulu Energi".into(),
            status: ReportStatus::Published,
            published_at: Some("2025-06-11".into()),
        },
        RegulatoryReport {
            id: "rr-007".into(),
            title: "Trunk Line Pig Launcher Failure Report".into(),
            report_type: ReportType::Incident,
            period: "2025-04".into(),
            submitted_by: "Trans-Borneo Pipelines".into(),
            status: ReportStatus::Archived,
            published_at: Some("2025-05-02".into()),
        },
        RegulatoryReport {
            id: "rr-008".into(),
            title: "HSE Oversight Annual Audit Plan".into(),
            report_type: ReportType::Audit,
            period: "2025".into(),
            submitted_by: "HSE Oversight Division".into(),
            status: ReportStatus::Published,
            published_at: Some("2025-01-27".into()),
        },
    ]
}

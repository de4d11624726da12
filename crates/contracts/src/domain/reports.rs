use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    Production,
    Incident,
    Audit,
    Quarterly,
}

impl ReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Production => "production",
            ReportType::Incident => "incident",
            ReportType::Audit => "audit",
            ReportType::Quarterly => "quarterly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportType::Production => "Production",
            ReportType::Incident => "Incident",
            ReportType::Audit => "Audit",
            ReportType::Quarterly => "Quarterly",
        }
    }

    pub fn all() -> [ReportType; 4] {
        [
            ReportType::Production,
            ReportType::Incident,
            ReportType::Audit,
            ReportType::Quarterly,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    Published,
    Archived,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Published => "published",
            ReportStatus::Archived => "archived",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "Pending",
            ReportStatus::Published => "Published",
            ReportStatus::Archived => "Archived",
        }
    }

    pub fn all() -> [ReportStatus; 3] {
        [
            ReportStatus::Pending,
            ReportStatus::Published,
            ReportStatus::Archived,
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegulatoryReport {
    pub id: String,
    pub title: String,
    pub report_type: ReportType,
    /// Reporting period, e.g. "2025-Q2" or "2025-06".
    pub period: String,
    pub submitted_by: String,
    pub status: ReportStatus,
    pub published_at: Option<String>,
}

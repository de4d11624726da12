use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermitType {
    Exploration,
    Production,
    Distribution,
    Transport,
}

impl PermitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermitType::Exploration => "exploration",
            PermitType::Production => "production",
            PermitType::Distribution => "distribution",
            PermitType::Transport => "transport",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PermitType::Exploration => "Exploration",
            PermitType::Production => "Production",
            PermitType::Distribution => "Distribution",
            PermitType::Transport => "Transport",
        }
    }

    pub fn all() -> [PermitType; 4] {
        [
            PermitType::Exploration,
            PermitType::Production,
            PermitType::Distribution,
            PermitType::Transport,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermitStatus {
    Draft,
    Submitted,
    UnderReview,
    Approved,
    Rejected,
}

impl PermitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermitStatus::Draft => "draft",
            PermitStatus::Submitted => "submitted",
            PermitStatus::UnderReview => "under_review",
            PermitStatus::Approved => "approved",
            PermitStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PermitStatus::Draft => "Draft",
            PermitStatus::Submitted => "Submitted",
            PermitStatus::UnderReview => "Under Review",
            PermitStatus::Approved => "Approved",
            PermitStatus::Rejected => "Rejected",
        }
    }

    pub fn all() -> [PermitStatus; 5] {
        [
            PermitStatus::Draft,
            PermitStatus::Submitted,
            PermitStatus::UnderReview,
            PermitStatus::Approved,
            PermitStatus::Rejected,
        ]
    }
}

/// A permit application as the commission tracks it.
///
/// Renewal requests share this shape; `is_renewal` separates the two views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermitApplication {
    pub id: String,
    pub permit_no: String,
    pub company: String,
    pub permit_type: PermitType,
    pub work_area: String,
    pub status: PermitStatus,
    pub submitted_at: String,
    pub decided_at: Option<String>,
    pub contact_email: String,
    pub is_renewal: bool,
}

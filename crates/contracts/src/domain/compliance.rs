use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckType {
    Safety,
    Environmental,
    Financial,
    Technical,
}

impl CheckType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckType::Safety => "safety",
            CheckType::Environmental => "environmental",
            CheckType::Financial => "financial",
            CheckType::Technical => "technical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CheckType::Safety => "Safety",
            CheckType::Environmental => "Environmental",
            CheckType::Financial => "Financial",
            CheckType::Technical => "Technical",
        }
    }

    pub fn all() -> [CheckType; 4] {
        [
            CheckType::Safety,
            CheckType::Environmental,
            CheckType::Financial,
            CheckType::Technical,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Scheduled,
    InProgress,
    Passed,
    Failed,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Scheduled => "scheduled",
            CheckStatus::InProgress => "in_progress",
            CheckStatus::Passed => "passed",
            CheckStatus::Failed => "failed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CheckStatus::Scheduled => "Scheduled",
            CheckStatus::InProgress => "In Progress",
            CheckStatus::Passed => "Passed",
            CheckStatus::Failed => "Failed",
        }
    }

    pub fn all() -> [CheckStatus; 4] {
        [
            CheckStatus::Scheduled,
            CheckStatus::InProgress,
            CheckStatus::Passed,
            CheckStatus::Failed,
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceCheck {
    pub id: String,
    pub facility: String,
    pub operator: String,
    pub check_type: CheckType,
    pub inspector: String,
    pub status: CheckStatus,
    pub scheduled_for: String,
    pub completed_at: Option<String>,
    pub findings: Option<String>,
}

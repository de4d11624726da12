use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonnelStatus {
    Active,
    OnLeave,
    Rotation,
    Retired,
}

impl PersonnelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonnelStatus::Active => "active",
            PersonnelStatus::OnLeave => "on_leave",
            PersonnelStatus::Rotation => "rotation",
            PersonnelStatus::Retired => "retired",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PersonnelStatus::Active => "Active",
            PersonnelStatus::OnLeave => "On Leave",
            PersonnelStatus::Rotation => "Rotation",
            PersonnelStatus::Retired => "Retired",
        }
    }

    pub fn all() -> [PersonnelStatus; 4] {
        [
            PersonnelStatus::Active,
            PersonnelStatus::OnLeave,
            PersonnelStatus::Rotation,
            PersonnelStatus::Retired,
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonnelRecord {
    pub id: String,
    pub name: String,
    pub position: String,
    pub division: String,
    pub grade: String,
    pub status: PersonnelStatus,
    /// Certification expiry date; `None` for uncertified staff.
    pub certified_until: Option<String>,
    pub email: String,
}

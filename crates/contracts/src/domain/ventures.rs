use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VentureStatus {
    Active,
    Suspended,
    Terminated,
}

impl VentureStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VentureStatus::Active => "active",
            VentureStatus::Suspended => "suspended",
            VentureStatus::Terminated => "terminated",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VentureStatus::Active => "Active",
            VentureStatus::Suspended => "Suspended",
            VentureStatus::Terminated => "Terminated",
        }
    }

    pub fn all() -> [VentureStatus; 3] {
        [
            VentureStatus::Active,
            VentureStatus::Suspended,
            VentureStatus::Terminated,
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JointVenture {
    pub id: String,
    pub name: String,
    pub operator: String,
    /// Display string, e.g. "NOC (55%), Westbrook Energy (45%)".
    pub partners: String,
    pub block: String,
    pub state_share_pct: f64,
    pub status: VentureStatus,
    pub signed_at: String,
}

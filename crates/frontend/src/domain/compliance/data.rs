//! Page-local sample data for the compliance check register.

use contracts::domain::compliance::{CheckStatus, CheckType, ComplianceCheck};

pub fn compliance_checks() -> Vec<ComplianceCheck> {
    vec![
        ComplianceCheck {
            id: "cc-001".into(),
            facility: "Badak LNG Train F".into(),
            operator: "Archipelago LNG Trading".into(),
            check_type: CheckType::Safety,
            inspector: "D. Prasetyo".into(),
            status: CheckStatus::Passed,
            scheduled_for: "2025-05-06".into(),
            completed_at: Some("2025-05-08".into()),
            findings: Some("Two minor valve-tagging issues, corrected on site.".into()),
        },
        ComplianceCheck {
            id: "cc-002".into(),
            facility: "Rokan Central Gathering Station".into(),
            operator: "Rokan Petroleum".into(),
            check_type: CheckType::Environmental,
            inspector: "S. Wulandari".into(),
            status: CheckStatus::Failed,
            scheduled_for: "2025-06-11".into(),
            completed_at: Some("2025-06-13".into()),
            findings: Some("Produced-water discharge exceeded permitted limits.".into()),
        },
        ComplianceCheck {
            id: "cc-003".into(),
            facility: "Mahakam Delta Platform KL-7".into(),
            operator: "Mahakam Hulu Energi".into(),
            check_type: CheckType::Technical,
            inspector: "D. Prasetyo".into(),
            status: CheckStatus::InProgress,
            scheduled_for: "2025-07-28".into(),
            completed_at: None,
            findings: None,
        },
        ComplianceCheck {
            id: "cc-004".into(),
            facility: "West Java Metering Station 3".into(),
            operator: "Nusantara Gas Distribution".into(),
            check_type: CheckType::Financial,
            inspector: "A. Situmorang".into(),
            status: CheckStatus::Scheduled,
            scheduled_for: "2025-08-19".into(),
            completed_at: None,
            findings: None,
        },
        ComplianceCheck {
            id: "cc-005".into(),
            facility: "Kalimantan Trunk Line KP-210".into(),
            operator: "Trans-Borneo Pipelines".into(),
            check_type: CheckType::Safety,
            inspector: "S. Wulandari".into(),
            status: CheckStatus::Scheduled,
            scheduled_for: "2025-08-25".into(),
            completed_at: None,
            findings: None,
        },
        ComplianceCheck {
            id: "cc-006".into(),
            facility: "Cepu Block CPF".into(),
            operator: "Cepu Block Operating".into(),
            check_type: CheckType::Environmental,
            inspector: "A. Situmorang".into(),
            status: CheckStatus::Passed,
            scheduled_for: "2025-04-14".into(),
            completed_at: Some("2025-04-16".into()),
            findings: None,
        },
        ComplianceCheck {
            id: "cc-007".into(),
            facility: "Sulawesi Receiving Terminal".into(),
            operator: "Archipelago LNG Trading".into(),
            check_type: CheckType::Technical,
            inspector: "D. Prasetyo".into(),
            status: CheckStatus::Failed,
            scheduled_for: "2025-03-03".into(),
            completed_at: Some("2025-03-05".into()),
            findings: Some("Cargo metering skid out of calibration since January.".into()),
        },
        ComplianceCheck {
            id: "cc-008".into(),
            facility: "East Natuna Drilling Unit 2".into(),
            operator: "Natuna Offshore Resources".into(),
            check_type: CheckType::Safety,
            inspector: "S. Wulandari".into(),
            status: CheckStatus::InProgress,
            scheduled_for: "2025-07-30".into(),
            completed_at: None,
            findings: None,
        },
    ]
}

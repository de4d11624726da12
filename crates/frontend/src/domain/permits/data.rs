//! Page-local sample data. Stands in for the permit registry the commission's
//! backend will eventually serve; discarded on navigation like any page state.

use contracts::domain::permits::{PermitApplication, PermitStatus, PermitType};

pub fn permit_applications() -> Vec<PermitApplication> {
    vec![
        PermitApplication {
            id: "pa-001".into(),
            permit_no: "EXP-2025-0114".into(),
            company: "Mahakam Hulu Energi".into(),
            permit_type: PermitType::Exploration,
            work_area: "Mahakam Delta".into(),
            status: PermitStatus::UnderReview,
            submitted_at: "2025-06-02".into(),
            decided_at: None,
            contact_email: "licensing@mahakamhulu.co.id".into(),
            is_renewal: false,
        },
        PermitApplication {
            id: "pa-002".into(),
            permit_no: "PRD-2025-0087".into(),
            company: "Cepu Block Operating".into(),
            permit_type: PermitType::Production,
            work_area: "Cepu Block".into(),
            status: PermitStatus::Approved,
            submitted_at: "2025-03-18".into(),
            decided_at: Some("2025-05-12".into()),
            contact_email: "permits@cepuoperating.com".into(),
            is_renewal: false,
        },
        PermitApplication {
            id: "pa-003".into(),
            permit_no: "DST-2025-0031".into(),
            company: "Nusantara Gas Distribution".into(),
            permit_type: PermitType::Distribution,
            work_area: "West Java Corridor".into(),
            status: PermitStatus::Submitted,
            submitted_at: "2025-07-01".into(),
            decided_at: None,
            contact_email: "legal@nusantaragas.id".into(),
            is_renewal: false,
        },
        PermitApplication {
            id: "pa-004".into(),
            permit_no: "TRN-2025-0052".into(),
            company: "Trans-Borneo Pipelines".into(),
            permit_type: PermitType::Transport,
            work_area: "Kalimantan Trunk Line".into(),
            status: PermitStatus::Rejected,
            submitted_at: "2025-02-09".into(),
            decided_at: Some("2025-04-22".into()),
            contact_email: "regulatory@tbpipelines.com".into(),
            is_renewal: false,
        },
        PermitApplication {
            id: "pa-005".into(),
            permit_no: "EXP-2025-0121".into(),
            company: "Natuna Offshore Resources".into(),
            permit_type: PermitType::Exploration,
            work_area: "East Natuna Shelf".into(),
            status: PermitStatus::Draft,
            submitted_at: "2025-07-19".into(),
            decided_at: None,
            contact_email: "compliance@natunaoffshore.com".into(),
            is_renewal: false,
        },
        PermitApplication {
            id: "pa-006".into(),
            permit_no: "PRD-2025-0093".into(),
            company: "Rokan Petroleum".into(),
            permit_type: PermitType::Production,
            work_area: "Rokan Block".into(),
            status: PermitStatus::UnderReview,
            submitted_at: "2025-05-27".into(),
            decided_at: None,
            contact_email: "permits@rokanpetroleum.co.id".into(),
            is_renewal: false,
        },
        PermitApplication {
            id: "pa-007".into(),
            permit_no: "DST-2025-0038".into(),
            company: "Archipelago LNG Trading".into(),
            permit_type: PermitType::Distribution,
            work_area: "Sulawesi Receiving Terminal".into(),
            status: PermitStatus::Approved,
            submitted_at: "2025-01-30".into(),
            decided_at: Some("2025-03-14".into()),
            contact_email: "office@archipelagolng.com".into(),
            is_renewal: false,
        },
        PermitApplication {
            id: "pa-008".into(),
            permit_no: "EXP-2025-0129".into(),
            company: "Sumatra Basin Exploration".into(),
            permit_type: PermitType::Exploration,
            work_area: "Central Sumatra Basin".into(),
            status: PermitStatus::Submitted,
            submitted_at: "2025-07-24".into(),
            decided_at: None,
            contact_email: "info@sumatrabasin.id".into(),
            is_renewal: false,
        },
    ]
}

pub fn permit_renewals() -> Vec<PermitApplication> {
    vec![
        PermitApplication {
            id: "pr-001".into(),
            permit_no: "PRD-2020-0041/R".into(),
            company: "Cepu Block Operating".into(),
            permit_type: PermitType::Production,
            work_area: "Cepu Block".into(),
            status: PermitStatus::UnderReview,
            submitted_at: "2025-06-15".into(),
            decided_at: None,
            contact_email: "permits@cepuoperating.com".into(),
            is_renewal: true,
        },
        PermitApplication {
            id: "pr-002".into(),
            permit_no: "TRN-2019-0012/R".into(),
            company: "Trans-Borneo Pipelines".into(),
            permit_type: PermitType::Transport,
            work_area: "Kalimantan Trunk Line".into(),
            status: PermitStatus::Approved,
            submitted_at: "2025-04-02".into(),
            decided_at: Some("2025-05-30".into()),
            contact_email: "regulatory@tbpipelines.com".into(),
            is_renewal: true,
        },
        PermitApplication {
            id: "pr-003".into(),
            permit_no: "DST-2021-0007/R".into(),
            company: "Nusantara Gas Distribution".into(),
            permit_type: PermitType::Distribution,
            work_area: "West Java Corridor".into(),
            status: PermitStatus::Submitted,
            submitted_at: "2025-07-08".into(),
            decided_at: None,
            contact_email: "legal@nusantaragas.id".into(),
            is_renewal: true,
        },
        PermitApplication {
            id: "pr-004".into(),
            permit_no: "PRD-2018-0029/R".into(),
            company: "Rokan Petroleum".into(),
            permit_type: PermitType::Production,
            work_area: "Rokan Block".into(),
            status: PermitStatus::Rejected,
            submitted_at: "2025-03-11".into(),
            decided_at: Some("2025-05-06".into()),
            contact_email: "permits@rokanpetroleum.co.id".into(),
            is_renewal: true,
        },
        PermitApplication {
            id: "pr-005".into(),
            permit_no: "EXP-2022-0063/R".into(),
            company: "Natuna Offshore Resources".into(),
            permit_type: PermitType::Exploration,
            work_area: "East Natuna Shelf".into(),
            status: PermitStatus::Approved,
            submitted_at: "2025-02-20".into(),
            decided_at: Some("2025-04-01".into()),
            contact_email: "compliance@natunaoffshore.com".into(),
            is_renewal: true,
        },
    ]
}

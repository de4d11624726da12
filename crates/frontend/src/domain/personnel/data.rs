//! Page-local sample data for inspectorate personnel tracking.

use contracts::domain::personnel::{PersonnelRecord, PersonnelStatus};

pub fn personnel_records() -> Vec<PersonnelRecord> {
    vec![
        PersonnelRecord {
            id: "ps-001".into(),
            name: "Dimas Prasetyo".into(),
            position: "Senior Field Inspector".into(),
            division: "Upstream Inspection".into(),
            grade: "IV-b".into(),
            status: PersonnelStatus::Active,
            certified_until: Some("2026-09-30".into()),
            email: "d.prasetyo@commission.go.id".into(),
        },
        PersonnelRecord {
            id: "ps-002".into(),
            name: "Sari Wulandari".into(),
            position: "Field Inspector".into(),
            division: "Upstream Inspection".into(),
            grade: "III-d".into(),
            status: PersonnelStatus::Rotation,
            certified_until: Some("2025-11-15".into()),
            email: "s.wulandari@commission.go.id".into(),
        },
        PersonnelRecord {
            id: "ps-003".into(),
            name: "Agus Situmorang".into(),
            position: "Compliance Auditor".into(),
            division: "Finance & Audit".into(),
            grade: "IV-a".into(),
            status: PersonnelStatus::Active,
            certified_until: Some("2027-02-28".into()),
            email: "a.situmorang@commission.go.id".into(),
        },
        PersonnelRecord {
            id: "ps-004".into(),
            name: "Rina Hartati".into(),
            position: "Permit Review Officer".into(),
            division: "Licensing".into(),
            grade: "III-c".into(),
            status: PersonnelStatus::OnLeave,
            certified_until: None,
            email: "r.hartati@commission.go.id".into(),
        },
        PersonnelRecord {
            id: "ps-005".into(),
            name: "Bambang Wirawan".into(),
            position: "Head of Upstream Inspection".into(),
            division: "Upstream Inspection".into(),
            grade: "IV-d".into(),
            status: PersonnelStatus::Active,
            certified_until: Some("2026-05-31".into()),
            email: "b.wirawan@commission.go.id".into(),
        },
        PersonnelRecord {
            id: "ps-006".into(),
            name: "Lestari Anggraini".into(),
            position: "Environmental Specialist".into(),
            division: "HSE Oversight".into(),
            grade: "III-d".into(),
            status: PersonnelStatus::Active,
            certified_until: Some("2025-10-12".into()),
            email: "l.anggraini@commission.go.id".into(),
        },
        PersonnelRecord {
            id: "ps-007".into(),
            name: "Hendra Gunawan".into(),
            position: "Field Inspector".into(),
            division: "HSE Oversight".into(),
            grade: "III-b".into(),
            status: PersonnelStatus::Rotation,
            certified_until: Some("2026-01-20".into()),
            email: "h.gunawan@commission.go.id".into(),
        },
        PersonnelRecord {
            id: "ps-008".into(),
            name: "Yusuf Maulana".into(),
            position: "Senior Compliance Auditor".into(),
            division: "Finance & Audit".into(),
            grade: "IV-c".into(),
            status: PersonnelStatus::Retired,
            certified_until: None,
            email: "y.maulana@commission.go.id".into(),
        },
    ]
}

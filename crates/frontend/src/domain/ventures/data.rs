//! Page-local sample data for the joint venture register.

use contracts::domain::ventures::{JointVenture, VentureStatus};

pub fn joint_ventures() -> Vec<JointVenture> {
    vec![
        JointVenture {
            id: "jv-001".into(),
            name: "Mahakam Delta JV".into(),
            operator: "Mahakam Hulu Energi".into(),
            partners: "National Oil Co (60%), Mahakam Hulu Energi (40%)".into(),
            block: "Mahakam Delta".into(),
            state_share_pct: 60.0,
            status: VentureStatus::Active,
            signed_at: "2019-08-14".into(),
        },
        JointVenture {
            id: "jv-002".into(),
            name: "Cepu Production Sharing".into(),
            operator: "Cepu Block Operating".into(),
            partners: "National Oil Co (45%), Cepu Block Operating (45%), Regional Gov (10%)".into(),
            block: "Cepu Block".into(),
            state_share_pct: 45.0,
            status: VentureStatus::Active,
            signed_at: "2016-02-01".into(),
        },
        JointVenture {
            id: "jv-003".into(),
            name: "East Natuna Consortium".into(),
            operator: "Natuna Offshore Resources".into(),
            partners: "National Oil Co (35%), Natuna Offshore (40%), Westbrook Energy (25%)".into(),
            block: "East Natuna Shelf".into(),
            state_share_pct: 35.0,
            status: VentureStatus::Suspended,
            signed_at: "2021-11-23".into(),
        },
        JointVenture {
            id: "jv-004".into(),
            name: "Rokan Continuation JV".into(),
            operator: "Rokan Petroleum".into(),
            partners: "National Oil Co (51%), Rokan Petroleum (49%)".into(),
            block: "Rokan Block".into(),
            state_share_pct: 51.0,
            status: VentureStatus::Active,
            signed_at: "2020-07-30".into(),
        },
        JointVenture {
            id: "jv-005".into(),
            name: "South Sumatra Legacy JV".into(),
            operator: "Sumatra Basin Exploration".into(),
            partners: "National Oil Co (50%), Sumatra Basin (30%), Korin Energy (20%)".into(),
            block: "Central Sumatra Basin".into(),
            state_share_pct: 50.0,
            status: VentureStatus::Terminated,
            signed_at: "2009-05-11".into(),
        },
        JointVenture {
            id: "jv-006".into(),
            name: "Kalimantan Midstream JV".into(),
            operator: "Trans-Borneo Pipelines".into(),
            partners: "National Oil Co (40%), Trans-Borneo (60%)".into(),
            block: "Kalimantan Trunk Line".into(),
            state_share_pct: 40.0,
            status: VentureStatus::Active,
            signed_at: "2022-03-17".into(),
        },
    ]
}

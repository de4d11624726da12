//! Page-local sample data for portal user administration.

use contracts::system::users::UserAccount;

pub fn user_accounts() -> Vec<UserAccount> {
    vec![
        UserAccount {
            id: "u-001".into(),
            username: "bwirawan".into(),
            full_name: Some("Bambang Wirawan".into()),
            email: Some("b.wirawan@commission.go.id".into()),
            role: "admin".into(),
            is_active: true,
            created_at: "2023-01-12T08:30:00Z".into(),
            last_login_at: Some("2025-08-04T07:12:44Z".into()),
        },
        UserAccount {
            id: "u-002".into(),
            username: "rhartati".into(),
            full_name: Some("Rina Hartati".into()),
            email: Some("r.hartati@commission.go.id".into()),
            role: "permit_officer".into(),
            is_active: true,
            created_at: "2023-03-02T10:05:00Z".into(),
            last_login_at: Some("2025-07-28T13:40:02Z".into()),
        },
        UserAccount {
            id: "u-003".into(),
            username: "dprasetyo".into(),
            full_name: Some("Dimas Prasetyo".into()),
            email: Some("d.prasetyo@commission.go.id".into()),
            role: "inspector".into(),
            is_active: true,
            created_at: "2023-02-20T09:00:00Z".into(),
            last_login_at: Some("2025-08-05T06:55:19Z".into()),
        },
        UserAccount {
            id: "u-004".into(),
            username: "swulandari".into(),
            full_name: Some("Sari Wulandari".into()),
            email: Some("s.wulandari@commission.go.id".into()),
            role: "inspector".into(),
            is_active: true,
            created_at: "2023-06-15T11:20:00Z".into(),
            last_login_at: Some("2025-08-01T09:31:08Z".into()),
        },
        UserAccount {
            id: "u-005".into(),
            username: "kdirectorate".into(),
            full_name: Some("Commissioner's Office".into()),
            email: None,
            role: "executive".into(),
            is_active: true,
            created_at: "2023-01-12T08:45:00Z".into(),
            last_login_at: Some("2025-07-30T15:02:51Z".into()),
        },
        UserAccount {
            id: "u-006".into(),
            username: "ymaulana".into(),
            full_name: Some("Yusuf Maulana".into()),
            email: Some("y.maulana@commission.go.id".into()),
            role: "inspector".into(),
            is_active: false,
            created_at: "2023-02-01T08:00:00Z".into(),
            last_login_at: Some("2025-02-14T10:10:10Z".into()),
        },
    ]
}

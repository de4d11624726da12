use serde::{Deserialize, Serialize};

/// Commission roles as issued by the upstream auth service.
///
/// The role string travels verbatim in `UserInfo::role`; `Role::parse`
/// is the single place that maps it onto the typed form. Anything the
/// upstream sends that we do not recognise yields `None`, which in turn
/// produces an empty navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    PermitOfficer,
    Inspector,
    Executive,
}

impl Role {
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "admin" => Some(Role::Admin),
            "permit_officer" => Some(Role::PermitOfficer),
            "inspector" => Some(Role::Inspector),
            "executive" => Some(Role::Executive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::PermitOfficer => "permit_officer",
            Role::Inspector => "inspector",
            Role::Executive => "executive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::PermitOfficer => "Permit Officer",
            Role::Inspector => "Inspector",
            Role::Executive => "Executive",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: String,
}

impl UserInfo {
    /// Typed role, `None` for anything the upstream sent that we don't know.
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_roles() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("permit_officer"), Some(Role::PermitOfficer));
        assert_eq!(Role::parse("inspector"), Some(Role::Inspector));
        assert_eq!(Role::parse("executive"), Some(Role::Executive));
    }

    #[test]
    fn parse_unknown_role() {
        assert_eq!(Role::parse("superuser"), None);
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("Admin"), None); // case-sensitive on purpose
    }

    #[test]
    fn role_round_trip() {
        for role in [
            Role::Admin,
            Role::PermitOfficer,
            Role::Inspector,
            Role::Executive,
        ] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn login_response_wire_shape() {
        let json = r#"{
            "token": "tok-123",
            "user": {
                "id": "u-1",
                "username": "rsiregar",
                "full_name": "R. Siregar",
                "email": null,
                "role": "inspector"
            }
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, "tok-123");
        assert_eq!(response.user.role(), Some(Role::Inspector));
        assert_eq!(response.user.email, None);
    }
}

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Normalized account role. The backend is inconsistent on the wire - some
/// endpoints send `"role": "ADMIN"`, others `"role": {"name": "ADMIN"}` - so
/// deserialization accepts both shapes and everything past that point works
/// with this enum only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    Admin,
    Staff,
    #[default]
    Student,
}

impl Role {
    pub fn parse(code: &str) -> Self {
        match code {
            "ADMIN" => Role::Admin,
            "STAFF" => Role::Staff,
            _ => Role::Student,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Staff => "STAFF",
            Role::Student => "STUDENT",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            Role::Admin => "👑 Quản trị viên",
            Role::Staff => "👨‍💼 Nhân viên",
            Role::Student => "🎓 Học viên",
        }
    }

    /// ADMIN and STAFF land on the dashboard after login.
    pub fn is_staff_level(&self) -> bool {
        matches!(self, Role::Admin | Role::Staff)
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Code(String),
            Object { name: String },
        }

        let code = match Repr::deserialize(deserializer)? {
            Repr::Code(code) => code,
            Repr::Object { name } => name,
        };
        Ok(Role::parse(&code))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: u64,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl Account {
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.email)
    }
}

/// `data` payload of a successful POST /auth/login.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(rename = "userLogin")]
    pub user: Account,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone_number: String,
}

/// Admin-side account creation/update payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub email: String,
    pub full_name: String,
    pub phone_number: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_accepts_both_wire_shapes() {
        let flat: Role = serde_json::from_str(r#""ADMIN""#).unwrap();
        assert_eq!(flat, Role::Admin);

        let nested: Role = serde_json::from_str(r#"{"name":"STAFF"}"#).unwrap();
        assert_eq!(nested, Role::Staff);
    }

    #[test]
    fn unknown_role_codes_default_to_student() {
        assert_eq!(Role::parse("SUPERVISOR"), Role::Student);
    }

    #[test]
    fn role_serializes_back_to_the_flat_code() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""ADMIN""#);
    }

    #[test]
    fn auth_session_parses_login_payload() {
        let json = r#"{
            "access_token": "tok-123",
            "userLogin": {"id": 1, "email": "a@b.vn", "fullName": "An", "role": "ADMIN"}
        }"#;
        let session: AuthSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.access_token, "tok-123");
        assert_eq!(session.user.role, Role::Admin);
        assert_eq!(session.user.display_name(), "An");
    }
}

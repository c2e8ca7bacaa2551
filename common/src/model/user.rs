use regex::Regex;
use serde::{Deserialize, Serialize};

/// A funcionario account as managed from the admin panel.
///
/// Accounts register through the public site and land in `en_revision`;
/// an administrator approves them (`activo`) or sends them back to review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    #[serde(rename = "username")]
    pub user_name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub status: UserStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// Account review state, as stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Activo,
    #[default]
    EnRevision,
}

impl UserStatus {
    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Activo => "Activo",
            UserStatus::EnRevision => "En revisión",
        }
    }
}

/// Email format check mirroring the backend's validation, so the admin list
/// can flag records the backend would reject on update.
pub fn email_valido(email: &str) -> bool {
    let re = Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$").unwrap();
    re.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_roundtrips_backend_wire_names() {
        assert_eq!(
            serde_json::to_string(&UserStatus::EnRevision).unwrap(),
            "\"en_revision\""
        );
        let status: UserStatus = serde_json::from_str("\"activo\"").unwrap();
        assert_eq!(status, UserStatus::Activo);
    }

    #[test]
    fn accepts_plain_addresses() {
        assert!(email_valido("admin@anda.com.uy"));
        assert!(email_valido("maria.perez+biblio@example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!email_valido("sin-arroba.example.org"));
        assert!(!email_valido("dos@@example.org"));
        assert!(!email_valido("nada@dominio"));
        assert!(!email_valido(""));
    }
}

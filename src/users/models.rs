//! Data models for user identity management

use chrono::{DateTime, NaiveDate, Utc};

/// Role a user profile carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleKind {
    Client,
    Courier,
    Manager,
}

impl RoleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RoleKind::Client => "client",
            RoleKind::Courier => "courier",
            RoleKind::Manager => "manager",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "client" => Some(RoleKind::Client),
            "courier" => Some(RoleKind::Courier),
            "manager" => Some(RoleKind::Manager),
            _ => None,
        }
    }
}

/// User account (email is the unique identity)
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub patronymic: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a user row
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub patronymic: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

/// One-to-one profile carrying the role reference
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserProfile {
    pub id: i64,
    pub user_id: i64,
    pub company: Option<String>,
    pub department: Option<String>,
    pub role_id: i64,
}

/// Telegram linkage for a user
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TelegramProfile {
    pub id: i64,
    pub user_id: i64,
    pub telegram_id: String,
}

/// Assistant chat audit row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AiChatLog {
    pub id: i64,
    pub user_id: i64,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_kind_round_trip() {
        assert_eq!(RoleKind::parse("client"), Some(RoleKind::Client));
        assert_eq!(RoleKind::parse("manager"), Some(RoleKind::Manager));
        assert_eq!(RoleKind::parse("admin"), None);
        assert_eq!(RoleKind::Courier.as_str(), "courier");
    }
}

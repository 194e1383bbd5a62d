//! Repository layer for user identity operations

use super::models::{AiChatLog, NewUser, RoleKind, TelegramProfile, User, UserProfile};
use sqlx::{PgPool, Row};

/// User repository for identity rows
pub struct UserRepository;

impl UserRepository {
    /// Create a new user, returning its id
    pub async fn create(pool: &PgPool, new: &NewUser) -> Result<i64, sqlx::Error> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"INSERT INTO users (email, first_name, last_name, patronymic, phone, birth_date)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING id"#,
        )
        .bind(&new.email)
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(&new.patronymic)
        .bind(&new.phone)
        .bind(new.birth_date)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    /// Get user by ID
    pub async fn get_by_id(pool: &PgPool, user_id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"SELECT id, email, first_name, last_name, patronymic, phone, birth_date, created_at
               FROM users WHERE id = $1"#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    /// Get user by email
    pub async fn get_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"SELECT id, email, first_name, last_name, patronymic, phone, birth_date, created_at
               FROM users WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }
}

/// Profile repository binding users to roles
pub struct ProfileRepository;

impl ProfileRepository {
    /// Create a profile for a user with the named role
    pub async fn create(
        pool: &PgPool,
        user_id: i64,
        role: RoleKind,
        company: Option<&str>,
        department: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"INSERT INTO user_profiles (user_id, company, department, role_id)
               VALUES ($1, $2, $3, (SELECT id FROM roles WHERE name = $4))
               RETURNING id"#,
        )
        .bind(user_id)
        .bind(company)
        .bind(department)
        .bind(role.as_str())
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    /// Get the profile for a user
    pub async fn get_by_user(
        pool: &PgPool,
        user_id: i64,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        sqlx::query_as::<_, UserProfile>(
            r#"SELECT id, user_id, company, department, role_id
               FROM user_profiles WHERE user_id = $1"#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    /// Resolve the role a user's profile carries
    pub async fn role_of(pool: &PgPool, user_id: i64) -> Result<Option<RoleKind>, sqlx::Error> {
        let row = sqlx::query(
            r#"SELECT r.name FROM user_profiles p
               JOIN roles r ON r.id = p.role_id
               WHERE p.user_id = $1"#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(row.and_then(|r| RoleKind::parse(r.get::<String, _>("name").as_str())))
    }
}

/// Telegram linkage repository
pub struct TelegramProfileRepository;

impl TelegramProfileRepository {
    /// Link a telegram id to a user
    pub async fn link(
        pool: &PgPool,
        user_id: i64,
        telegram_id: &str,
    ) -> Result<i64, sqlx::Error> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"INSERT INTO telegram_profiles (user_id, telegram_id)
               VALUES ($1, $2)
               RETURNING id"#,
        )
        .bind(user_id)
        .bind(telegram_id)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    /// Get the telegram link for a user
    pub async fn get_by_user(
        pool: &PgPool,
        user_id: i64,
    ) -> Result<Option<TelegramProfile>, sqlx::Error> {
        sqlx::query_as::<_, TelegramProfile>(
            r#"SELECT id, user_id, telegram_id FROM telegram_profiles WHERE user_id = $1"#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }
}

/// Assistant chat audit repository
pub struct ChatLogRepository;

impl ChatLogRepository {
    /// Append a question/answer pair
    pub async fn append(
        pool: &PgPool,
        user_id: i64,
        question: &str,
        answer: &str,
    ) -> Result<i64, sqlx::Error> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"INSERT INTO ai_chat_logs (user_id, question, answer)
               VALUES ($1, $2, $3)
               RETURNING id"#,
        )
        .bind(user_id)
        .bind(question)
        .bind(answer)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    /// Most recent chat entries for a user, newest first
    pub async fn recent_for_user(
        pool: &PgPool,
        user_id: i64,
        limit: i64,
    ) -> Result<Vec<AiChatLog>, sqlx::Error> {
        sqlx::query_as::<_, AiChatLog>(
            r#"SELECT id, user_id, question, answer, created_at
               FROM ai_chat_logs
               WHERE user_id = $1
               ORDER BY created_at DESC, id DESC
               LIMIT $2"#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}

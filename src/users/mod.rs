//! User identity and auxiliary profile entities
//!
//! PostgreSQL-backed storage for users, roles, profiles, and the
//! telegram/chat-log linkage entities.

pub mod models;
pub mod repository;

pub use models::{AiChatLog, NewUser, RoleKind, TelegramProfile, User, UserProfile};
pub use repository::{ChatLogRepository, ProfileRepository, TelegramProfileRepository, UserRepository};

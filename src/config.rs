use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub enable_tracing: bool,
    #[serde(default)]
    pub server: ServerConfig,
    /// PostgreSQL connection URL
    pub postgres_url: String,
    /// HS256 secret for bearer token verification.
    /// Overridden by the JWT_SECRET environment variable when set.
    pub jwt_secret: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl AppConfig {
    pub fn load(env: &str) -> Self {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .unwrap_or_else(|_| panic!("Failed to read config file: {}", config_path));
        serde_yaml::from_str(&content).expect("Failed to parse config yaml")
    }

    /// JWT secret with environment override.
    pub fn resolve_jwt_secret(&self) -> String {
        std::env::var("JWT_SECRET").unwrap_or_else(|_| self.jwt_secret.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let yaml = r#"
log_level: "debug"
log_dir: "./logs"
log_file: "test.log"
use_json: true
rotation: "hourly"
enable_tracing: false
postgres_url: "postgresql://localhost/delivery_test"
jwt_secret: "secret"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.use_json);
        // server section omitted, defaults apply
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
    }
}

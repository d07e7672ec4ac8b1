use serde::Deserialize;

/// Environment variable that overrides `email.api_key`
pub const API_KEY_ENV: &str = "RESEND_API_KEY";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub email: EmailConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with the built frontend (`trunk build` output)
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    pub api_url: String,
    #[serde(default)]
    pub api_key: String,
    pub from: String,
    pub subject: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[email]
api_url = "https://api.resend.com/emails"
api_key = ""
from = "Acme <onboarding@resend.dev>"
subject = "Welcome to Product Magazine!"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `RESEND_API_KEY`, when set, replaces the key from either source.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = load_from_file()?;
    apply_env_override(&mut config, std::env::var(API_KEY_ENV).ok());
    if config.email.api_key.trim().is_empty() {
        tracing::warn!("No email API key configured, subscriptions will fail");
    }
    Ok(config)
}

fn load_from_file() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

fn apply_env_override(config: &mut Config, api_key: Option<String>) {
    if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
        tracing::info!("Email API key taken from {}", API_KEY_ENV);
        config.email.api_key = key.trim().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.email.api_url, "https://api.resend.com/emails");
        assert_eq!(config.email.from, "Acme <onboarding@resend.dev>");
        assert!(config.email.api_key.is_empty());
    }

    #[test]
    fn test_env_key_overrides_file_key() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        config.email.api_key = "from-file".to_string();

        apply_env_override(&mut config, Some("  ".to_string()));
        assert_eq!(config.email.api_key, "from-file");

        apply_env_override(&mut config, Some("re_123".to_string()));
        assert_eq!(config.email.api_key, "re_123");
    }

    #[test]
    fn test_api_key_may_be_omitted() {
        let raw = r#"
            [server]
            host = "127.0.0.1"
            port = 8080
            static_dir = "public"

            [email]
            api_url = "http://localhost:9999/emails"
            from = "Shop <shop@example.com>"
            subject = "Hi"
        "#;
        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.email.api_key, "");
        assert_eq!(config.server.port, 8080);
    }
}

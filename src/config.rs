//! Server configuration

use anyhow::Result;
use serde::Deserialize;

use crate::auth::{password_digest, Credentials};

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_ip")]
    pub ip: String,

    #[serde(default)]
    pub auth: AuthConfig,
}

fn default_port() -> u16 {
    8080
}

fn default_ip() -> String {
    "0.0.0.0".to_string()
}

#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_username")]
    pub username: String,
    /// Hex SHA-256 of the administrator password
    #[serde(default = "default_password_sha256")]
    pub password_sha256: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password_sha256: default_password_sha256(),
        }
    }
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_password_sha256() -> String {
    password_digest("admin")
}

impl AuthConfig {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password_sha256.clone())
    }

    pub fn uses_default_password(&self) -> bool {
        self.password_sha256.eq_ignore_ascii_case(&default_password_sha256())
    }
}

/// Get config directory (ADMIN_CONFIG_DIR, XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("ADMIN_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join("Library/Application Support/admin-console");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("admin-console");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/admin-console");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("admin-console");
        }
    }

    std::path::PathBuf::from(".")
}

/// Process environment minus `ADMIN_PORT`, which only reaches the config
/// through the explicit override so an unparsable value falls back instead
/// of failing deserialization.
fn env_without_port() -> ::config::Map<String, String> {
    std::env::vars()
        .filter(|(key, _)| key != "ADMIN_PORT")
        .collect()
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        .set_default("port", default_port() as i64)?
        // config.toml / config.json / config.yaml, whichever exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // ADMIN_AUTH__USERNAME, ...; the port is handled below
        .add_source(
            ::config::Environment::with_prefix("ADMIN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(Some(env_without_port())),
        );

    // Port precedence: ADMIN_PORT > PORT > config file > default
    let port_override = ["ADMIN_PORT", "PORT"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| value.parse::<u16>().ok());
    if let Some(port_num) = port_override {
        builder = builder.set_override("port", port_num as i64)?;
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        env::remove_var("ADMIN_PORT");
        env::remove_var("PORT");
        env::remove_var("ADMIN_AUTH__USERNAME");
    }

    #[test]
    #[serial]
    fn test_defaults_without_file_or_env() {
        clear_env();
        env::set_var("ADMIN_CONFIG_DIR", "/tmp/admin-console-test-nonexistent");

        let config = load_config().expect("config should load");

        env::remove_var("ADMIN_CONFIG_DIR");

        assert_eq!(config.port, 8080);
        assert_eq!(config.ip, "0.0.0.0");
        assert_eq!(config.auth.username, "admin");
        assert!(config.auth.uses_default_password());
    }

    #[test]
    #[serial]
    fn test_port_env_fallback() {
        clear_env();
        env::set_var("ADMIN_CONFIG_DIR", "/tmp/admin-console-test-nonexistent");
        env::set_var("PORT", "3000");

        let config = load_config().expect("config should load");

        env::remove_var("PORT");
        env::remove_var("ADMIN_CONFIG_DIR");

        assert_eq!(config.port, 3000);
    }

    #[test]
    #[serial]
    fn test_admin_port_takes_precedence_over_port() {
        clear_env();
        env::set_var("ADMIN_CONFIG_DIR", "/tmp/admin-console-test-nonexistent");
        env::set_var("PORT", "3000");
        env::set_var("ADMIN_PORT", "4000");

        let config = load_config().expect("config should load");

        clear_env();
        env::remove_var("ADMIN_CONFIG_DIR");

        assert_eq!(config.port, 4000);
    }

    #[test]
    #[serial]
    fn test_invalid_port_uses_default() {
        clear_env();
        env::set_var("ADMIN_CONFIG_DIR", "/tmp/admin-console-test-nonexistent");
        env::set_var("PORT", "not-a-port");

        let config = load_config().expect("config should load");

        env::remove_var("PORT");
        env::remove_var("ADMIN_CONFIG_DIR");

        assert_eq!(config.port, 8080);
    }

    #[test]
    #[serial]
    fn test_invalid_admin_port_uses_default() {
        clear_env();
        env::set_var("ADMIN_CONFIG_DIR", "/tmp/admin-console-test-nonexistent");
        env::set_var("ADMIN_PORT", "not-a-port");

        let config = load_config().expect("invalid ADMIN_PORT should not fail loading");

        clear_env();
        env::remove_var("ADMIN_CONFIG_DIR");

        assert_eq!(config.port, 8080);
    }

    #[test]
    #[serial]
    fn test_invalid_admin_port_falls_back_to_port() {
        clear_env();
        env::set_var("ADMIN_CONFIG_DIR", "/tmp/admin-console-test-nonexistent");
        env::set_var("ADMIN_PORT", "not-a-port");
        env::set_var("PORT", "3000");

        let config = load_config().expect("config should load");

        clear_env();
        env::remove_var("ADMIN_CONFIG_DIR");

        assert_eq!(config.port, 3000);
    }

    #[test]
    #[serial]
    fn test_config_file_sets_credentials() {
        clear_env();
        let dir = tempfile::tempdir().expect("tempdir");
        let digest = password_digest("hunter2");
        std::fs::write(
            dir.path().join("config.toml"),
            format!("port = 9090\n\n[auth]\nusername = \"ops\"\npassword_sha256 = \"{digest}\"\n"),
        )
        .expect("write config");
        env::set_var("ADMIN_CONFIG_DIR", dir.path());

        let config = load_config().expect("config should load");

        env::remove_var("ADMIN_CONFIG_DIR");

        assert_eq!(config.port, 9090);
        assert_eq!(config.auth.username, "ops");
        assert!(!config.auth.uses_default_password());

        let creds = config.auth.credentials();
        let ok = creds.verify(&crate::auth::LoginRequest {
            username: "ops".into(),
            password: "hunter2".into(),
        });
        assert!(ok.is_ok());
    }

    #[test]
    #[serial]
    fn test_env_overrides_file_username() {
        clear_env();
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("config.toml"), "[auth]\nusername = \"ops\"\n")
            .expect("write config");
        env::set_var("ADMIN_CONFIG_DIR", dir.path());
        env::set_var("ADMIN_AUTH__USERNAME", "root");

        let config = load_config().expect("config should load");

        clear_env();
        env::remove_var("ADMIN_CONFIG_DIR");

        assert_eq!(config.auth.username, "root");
    }
}

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Demo credentials and the artificial sign-in delay.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AuthConfig {
    pub email: String,
    pub password: String,
    pub login_delay_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub copy_feedback_ms: u32,
    pub notification_ms: u32,
    pub theme_storage_key: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
}

/// Default configuration compiled into the bundle
pub const DEFAULT_CONFIG: &str = r#"
[auth]
email = "admin@crcl.sa"
password = "admin123"
login_delay_ms = 1000

[ui]
copy_feedback_ms = 2000
notification_ms = 3000
theme_storage_key = "theme"

[logging]
level = "debug"
"#;

/// Parse `override_toml` when given, otherwise the embedded defaults.
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<AppConfig> {
    let source = override_toml.unwrap_or(DEFAULT_CONFIG);
    let config: AppConfig = toml::from_str(source)?;
    Ok(config)
}

impl Default for AppConfig {
    /// Same values as [`DEFAULT_CONFIG`].
    fn default() -> Self {
        AppConfig {
            auth: AuthConfig {
                email: "admin@crcl.sa".into(),
                password: "admin123".into(),
                login_delay_ms: 1000,
            },
            ui: UiConfig {
                copy_feedback_ms: 2000,
                notification_ms: 3000,
                theme_storage_key: "theme".into(),
            },
            logging: LoggingConfig {
                level: "debug".into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = load_config(None);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.auth.email, "admin@crcl.sa");
        assert_eq!(config.auth.login_delay_ms, 1000);
        assert_eq!(config.ui.theme_storage_key, "theme");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn override_replaces_defaults() {
        let config = load_config(Some(
            r#"
[auth]
email = "ops@crcl.sa"
password = "secret"
login_delay_ms = 10

[ui]
copy_feedback_ms = 500
notification_ms = 500
theme_storage_key = "crcl-theme"

[logging]
level = "warn"
"#,
        ))
        .unwrap();
        assert_eq!(config.auth.email, "ops@crcl.sa");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn malformed_override_is_an_error() {
        assert!(load_config(Some("[auth]\nemail = 1")).is_err());
    }
}

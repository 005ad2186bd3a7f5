use std::str::FromStr;

use dioxus_logger::tracing::Level;

use crate::{
    error::{config::ConfigError, AppError},
    model::admin::AdminSet,
    util::parse::parse_snowflake,
};

const DEFAULT_KEYAUTH_VERSION: &str = "2.0";
const DEFAULT_KEYAUTH_URL: &str = "https://keyauth.win/api/1.3/";

/// Connection settings for the upstream licensing API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAuthConfig {
    /// Application name registered with the licensing API
    pub name: String,
    /// Account owner ID of the application
    pub owner_id: String,
    /// Application version sent with the session handshake
    pub version: String,
    /// Endpoint every request is POSTed to
    pub url: String,
}

pub struct Config {
    pub discord_token: String,
    pub discord_application_id: u64,
    /// Registers commands to this guild only when set, which takes effect immediately
    /// instead of waiting for global command propagation.
    pub discord_guild_id: Option<u64>,

    pub admins: AdminSet,
    pub keyauth: KeyAuthConfig,

    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Optional variables that are set but blank are treated as unset.
    ///
    /// # Arguments
    /// - `var` - Returns the value of a variable by name, or `None` if unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All mandatory variables present and parseable
    /// - `Err(AppError::ConfigErr)` - A mandatory variable is missing or a value is invalid
    pub fn from_vars<F>(var: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required =
            |key: &str| var(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));
        let optional = |key: &str| var(key).filter(|value| !value.trim().is_empty());

        let discord_application_id = parse_snowflake(
            "DISCORD_APPLICATION_ID",
            &required("DISCORD_APPLICATION_ID")?,
        )?;
        let discord_guild_id = optional("DISCORD_GUILD_ID")
            .map(|value| parse_snowflake("DISCORD_GUILD_ID", &value))
            .transpose()?;

        let log_level = match optional("LOG_LEVEL") {
            Some(value) => Level::from_str(value.trim()).map_err(|e| ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                value: value.clone(),
                reason: e.to_string(),
            })?,
            None => Level::INFO,
        };

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            discord_application_id,
            discord_guild_id,
            admins: AdminSet::parse("ADMIN_IDS", &required("ADMIN_IDS")?)?,
            keyauth: KeyAuthConfig {
                name: required("KEYAUTH_NAME")?,
                owner_id: required("KEYAUTH_OWNER_ID")?,
                version: optional("KEYAUTH_VERSION")
                    .unwrap_or_else(|| DEFAULT_KEYAUTH_VERSION.to_string()),
                url: optional("KEYAUTH_URL").unwrap_or_else(|| DEFAULT_KEYAUTH_URL.to_string()),
            },
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    fn minimal() -> HashMap<String, String> {
        vars(&[
            ("DISCORD_TOKEN", "token"),
            ("DISCORD_APPLICATION_ID", "1000"),
            ("ADMIN_IDS", "1,2"),
            ("KEYAUTH_NAME", "app"),
            ("KEYAUTH_OWNER_ID", "owner"),
        ])
    }

    fn load(env: &HashMap<String, String>) -> Result<Config, AppError> {
        Config::from_vars(|key| env.get(key).cloned())
    }

    /// Tests loading configuration with only the mandatory variables set.
    ///
    /// Expected: Ok with defaults applied to every optional setting
    #[test]
    fn applies_defaults_for_optional_values() {
        let config = load(&minimal()).unwrap();

        assert_eq!(config.discord_token, "token");
        assert_eq!(config.discord_application_id, 1000);
        assert_eq!(config.discord_guild_id, None);
        assert!(config.admins.contains(1));
        assert!(config.admins.contains(2));
        assert_eq!(config.keyauth.version, "2.0");
        assert_eq!(config.keyauth.url, "https://keyauth.win/api/1.3/");
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn reads_optional_values() {
        let mut env = minimal();
        env.extend(vars(&[
            ("DISCORD_GUILD_ID", "555"),
            ("KEYAUTH_VERSION", "1.3"),
            ("KEYAUTH_URL", "http://localhost:8080/"),
            ("LOG_LEVEL", "debug"),
        ]));

        let config = load(&env).unwrap();

        assert_eq!(config.discord_guild_id, Some(555));
        assert_eq!(config.keyauth.version, "1.3");
        assert_eq!(config.keyauth.url, "http://localhost:8080/");
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn blank_guild_id_means_global_registration() {
        let mut env = minimal();
        env.insert("DISCORD_GUILD_ID".to_string(), "  ".to_string());

        let config = load(&env).unwrap();

        assert_eq!(config.discord_guild_id, None);
    }

    /// Tests that every mandatory variable is enforced.
    ///
    /// Expected: Err(MissingEnvVar) naming the removed variable
    #[test]
    fn fails_when_mandatory_variable_missing() {
        for key in [
            "DISCORD_TOKEN",
            "DISCORD_APPLICATION_ID",
            "ADMIN_IDS",
            "KEYAUTH_NAME",
            "KEYAUTH_OWNER_ID",
        ] {
            let mut env = minimal();
            env.remove(key);

            let result = load(&env);

            match result {
                Err(AppError::ConfigErr(ConfigError::MissingEnvVar(missing))) => {
                    assert_eq!(missing, key)
                }
                _ => panic!("expected missing {key}"),
            }
        }
    }

    #[test]
    fn fails_on_invalid_application_id() {
        let mut env = minimal();
        env.insert("DISCORD_APPLICATION_ID".to_string(), "bot".to_string());

        let result = load(&env);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn fails_on_invalid_log_level() {
        let mut env = minimal();
        env.insert("LOG_LEVEL".to_string(), "loud".to_string());

        assert!(load(&env).is_err());
    }
}

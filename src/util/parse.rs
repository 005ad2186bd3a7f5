use crate::error::config::ConfigError;

/// Parses a Discord snowflake ID from a configuration value
///
/// # Arguments
/// - `var` - Name of the environment variable the value came from, for error reporting
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed the trimmed value to `u64`
/// - `Err(ConfigError::InvalidValue)` - Failed to parse the value as a u64
pub fn parse_snowflake(var: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidValue {
            var: var.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_snowflake() {
        assert_eq!(
            parse_snowflake("ADMIN_IDS", " 123456789012345678 ").unwrap(),
            123456789012345678
        );
    }

    #[test]
    fn rejects_non_numeric_value() {
        let result = parse_snowflake("DISCORD_GUILD_ID", "abc");

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref var, ref value, .. })
                if var == "DISCORD_GUILD_ID" && value == "abc"
        ));
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be parsed.
    #[error("Invalid value '{value}' for environment variable {var}: {reason}")]
    InvalidValue {
        /// Name of the offending environment variable
        var: String,
        /// The raw value that failed to parse
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Mandatory licensing API setting is empty.
    ///
    /// Raised when constructing the licensing API client, before any network call is made.
    #[error("Licensing API setting '{0}' must not be empty")]
    MissingValue(&'static str),
}

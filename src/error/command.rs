use thiserror::Error;

/// Errors raised while validating a slash command invocation.
///
/// None of these reach the licensing API; each one is converted into a single
/// notification for the invoking user.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Caller is not on the admin allow-list.
    #[error("User {0} is not allowed to use admin commands")]
    AccessDenied(u64),

    /// Required argument is absent, or is a string that is empty after trimming.
    #[error("Missing required argument '{0}'")]
    MissingArgument(String),

    /// Integer argument is lower than the minimum declared in the command schema.
    #[error("Argument '{name}' must be at least {min}, got {value}")]
    BelowMinimum {
        /// Argument name
        name: String,
        /// Declared minimum
        min: i64,
        /// Value provided by the caller
        value: i64,
    },

    /// Command name has no entry in the command catalog.
    #[error("Command '{0}' is not implemented")]
    UnknownCommand(String),
}

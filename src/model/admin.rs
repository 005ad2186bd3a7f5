use std::collections::HashSet;

use crate::{error::config::ConfigError, util::parse::parse_snowflake};

/// Discord user IDs allowed to run admin commands.
///
/// Parsed once from configuration at startup and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminSet(HashSet<u64>);

impl AdminSet {
    /// Creates an admin set from already parsed user IDs.
    #[cfg(test)]
    pub fn new(ids: impl IntoIterator<Item = u64>) -> Self {
        Self(ids.into_iter().collect())
    }

    /// Parses a comma-separated list of Discord user IDs.
    ///
    /// Whitespace around entries is ignored and empty entries are skipped, so
    /// `"1, 2,,3 "` yields three admins.
    ///
    /// # Arguments
    /// - `var` - Environment variable name, used in error messages
    /// - `value` - The raw comma-separated list
    ///
    /// # Returns
    /// - `Ok(AdminSet)` - All non-empty entries parsed
    /// - `Err(ConfigError::InvalidValue)` - An entry is not a valid user ID
    pub fn parse(var: &str, value: &str) -> Result<Self, ConfigError> {
        let ids = value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| parse_snowflake(var, entry))
            .collect::<Result<HashSet<_>, _>>()?;

        Ok(Self(ids))
    }

    pub fn contains(&self, user_id: u64) -> bool {
        self.0.contains(&user_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

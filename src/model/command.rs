use std::collections::HashMap;

/// Typed value of a single slash command option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    String(String),
    Integer(i64),
}

/// Arguments supplied with a slash command, keyed by option name.
///
/// Options the caller left out are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs(HashMap<String, ArgValue>);

impl CommandArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ArgValue) {
        self.0.insert(name.into(), value);
    }

    #[cfg(test)]
    pub fn with_string(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, ArgValue::String(value.into()));
        self
    }

    #[cfg(test)]
    pub fn with_integer(mut self, name: impl Into<String>, value: i64) -> Self {
        self.insert(name, ArgValue::Integer(value));
        self
    }

    /// Returns the raw string value of an option, or `None` if absent or not a string.
    pub fn string(&self, name: &str) -> Option<&str> {
        match self.0.get(name) {
            Some(ArgValue::String(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Returns the integer value of an option, or `None` if absent or not an integer.
    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.0.get(name) {
            Some(ArgValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }
}

/// A single slash command invocation as seen by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    /// Slash command name without the leading `/`
    pub name: String,
    /// Discord user ID of the caller
    pub caller_id: u64,
    pub args: CommandArgs,
}

impl CommandInvocation {
    pub fn new(name: impl Into<String>, caller_id: u64, args: CommandArgs) -> Self {
        Self {
            name: name.into(),
            caller_id,
            args,
        }
    }
}

//! User-facing notification produced for every command invocation.
//!
//! The bot renders a `Notification` as a single Discord embed. Keeping it free of
//! Serenity types lets the dispatcher be tested without a Discord connection.

/// Outcome category of a notification, which determines the embed colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Licensing API reported success
    Success,
    /// Licensing API responded with `success: false`
    Failure,
    /// Caller is not an admin
    Denied,
    /// Command arguments failed validation
    Invalid,
    /// Licensing API could not be reached or answered with an error status
    Error,
    /// Informational output that did not involve the licensing API
    Info,
}

impl NotificationKind {
    pub fn color(self) -> u32 {
        match self {
            Self::Success => 0x2ecc71,
            Self::Failure => 0xe67e22,
            Self::Denied => 0xe74c3c,
            Self::Invalid => 0xf1c40f,
            Self::Error => 0x992d22,
            Self::Info => 0x3498db,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub fields: Vec<NotificationField>,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field, keeping insertion order.
    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.fields.push(NotificationField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    /// Looks up the value of the first field with the given name.
    #[cfg(test)]
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }
}

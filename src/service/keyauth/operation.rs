//! Catalog of remote operations offered by the licensing API.
//!
//! Each operation maps to one request `type` plus a fixed set of extra form
//! parameters. Integer arguments are sent as decimal strings.

use crate::model::api::InfoKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    QueryUserInfo {
        username: String,
    },
    BanUser {
        username: String,
        reason: Option<String>,
    },
    UnbanUser {
        username: String,
    },
    DeleteUser {
        username: String,
    },
    ResetHardwareId {
        username: String,
    },
    CreateLicense {
        key: String,
        days: i64,
    },
    DeleteLicense {
        key: String,
    },
    ApplyLicense {
        key: String,
        username: String,
    },
    ExtendSubscription {
        username: String,
        subscription: String,
        days: i64,
    },
    GetStatistics,
    SetWebhook {
        webhook: String,
    },
    AddChannel {
        channel: String,
    },
    DeleteChannel {
        channel: String,
    },
}

impl Operation {
    /// Value of the `type` form field for this operation.
    pub fn request_type(&self) -> &'static str {
        match self {
            Self::QueryUserInfo { .. } => "userdata",
            Self::BanUser { .. } => "banuser",
            Self::UnbanUser { .. } => "unbanuser",
            Self::DeleteUser { .. } => "deluser",
            Self::ResetHardwareId { .. } => "resetuser",
            Self::CreateLicense { .. } => "add",
            Self::DeleteLicense { .. } => "del",
            Self::ApplyLicense { .. } => "activate",
            Self::ExtendSubscription { .. } => "extend",
            Self::GetStatistics => "stats",
            Self::SetWebhook { .. } => "addwebhook",
            Self::AddChannel { .. } => "addchannel",
            Self::DeleteChannel { .. } => "delchannel",
        }
    }

    /// Operation-specific form parameters, in addition to the ones every request carries.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::QueryUserInfo { username }
            | Self::UnbanUser { username }
            | Self::DeleteUser { username }
            | Self::ResetHardwareId { username } => vec![("user", username.clone())],
            Self::BanUser { username, reason } => {
                let mut params = vec![("user", username.clone())];
                if let Some(reason) = reason {
                    params.push(("reason", reason.clone()));
                }
                params
            }
            Self::CreateLicense { key, days } => {
                vec![("key", key.clone()), ("expiry", days.to_string())]
            }
            Self::DeleteLicense { key } => vec![("key", key.clone())],
            Self::ApplyLicense { key, username } => {
                vec![("key", key.clone()), ("user", username.clone())]
            }
            Self::ExtendSubscription {
                username,
                subscription,
                days,
            } => vec![
                ("user", username.clone()),
                ("sub", subscription.clone()),
                ("expiry", days.to_string()),
            ],
            Self::GetStatistics => Vec::new(),
            Self::SetWebhook { webhook } => vec![("webhook", webhook.clone())],
            Self::AddChannel { channel } | Self::DeleteChannel { channel } => {
                vec![("channel", channel.clone())]
            }
        }
    }

    /// Shape the response `info` payload is decoded into.
    pub fn info_kind(&self) -> InfoKind {
        match self {
            Self::QueryUserInfo { .. } => InfoKind::User,
            Self::GetStatistics => InfoKind::Stats,
            _ => InfoKind::Opaque,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_sent_as_decimal_strings() {
        let operation = Operation::ExtendSubscription {
            username: "alice".to_string(),
            subscription: "default".to_string(),
            days: 30,
        };

        assert_eq!(operation.request_type(), "extend");
        assert_eq!(
            operation.params(),
            vec![
                ("user", "alice".to_string()),
                ("sub", "default".to_string()),
                ("expiry", "30".to_string()),
            ]
        );
    }

    #[test]
    fn ban_reason_is_only_sent_when_given() {
        let without = Operation::BanUser {
            username: "bob".to_string(),
            reason: None,
        };
        let with = Operation::BanUser {
            username: "bob".to_string(),
            reason: Some("chargeback".to_string()),
        };

        assert_eq!(without.params(), vec![("user", "bob".to_string())]);
        assert_eq!(
            with.params(),
            vec![
                ("user", "bob".to_string()),
                ("reason", "chargeback".to_string())
            ]
        );
    }

    #[test]
    fn statistics_has_no_extra_params() {
        assert_eq!(Operation::GetStatistics.request_type(), "stats");
        assert!(Operation::GetStatistics.params().is_empty());
        assert_eq!(Operation::GetStatistics.info_kind(), InfoKind::Stats);
    }
}

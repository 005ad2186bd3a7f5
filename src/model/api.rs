//! Licensing API response models.
//!
//! The upstream API answers every request with a JSON object of the shape
//! `{success, message?, info?}`. `ApiResponse` is that wire shape; `ApiResult` is the
//! decoded form handed to the dispatcher, with `info` parsed into the variant the
//! operation expects.

use dioxus_logger::tracing;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Raw response body returned by the licensing API for every operation.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub info: Option<Value>,
}

/// Response body of the `init` session handshake.
#[derive(Debug, Clone, Deserialize)]
pub struct InitResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub sessionid: Option<String>,
}

/// Which `ApiInfo` variant an operation's `info` payload should be decoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoKind {
    User,
    Stats,
    Opaque,
}

/// Decoded result of a licensing API operation.
#[derive(Debug, Clone)]
pub struct ApiResult {
    pub success: bool,
    pub message: Option<String>,
    pub info: ApiInfo,
}

impl ApiResult {
    /// Decodes a raw response, parsing `info` according to `kind`.
    ///
    /// Decoding never fails: an `info` payload that does not match the expected shape
    /// is kept as `ApiInfo::Other`.
    pub fn decode(kind: InfoKind, response: ApiResponse) -> Self {
        let info = match response.info {
            None | Some(Value::Null) => ApiInfo::None,
            Some(value) => ApiInfo::decode(kind, value),
        };

        Self {
            success: response.success,
            message: response.message.filter(|message| !message.trim().is_empty()),
            info,
        }
    }
}

/// Operation-specific payload carried in the `info` field of a response.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiInfo {
    None,
    User(UserInfo),
    Stats(StatsInfo),
    Other(Value),
}

impl ApiInfo {
    fn decode(kind: InfoKind, value: Value) -> Self {
        if !value.is_object() {
            return Self::Other(value);
        }

        let decoded = match kind {
            InfoKind::User => serde_json::from_value::<UserInfo>(value.clone()).map(Self::User),
            InfoKind::Stats => {
                serde_json::from_value::<StatsInfo>(value.clone()).map(Self::Stats)
            }
            InfoKind::Opaque => return Self::Other(value),
        };

        decoded.unwrap_or_else(|e| {
            tracing::warn!("Unexpected {:?} info payload from licensing API: {}", kind, e);
            Self::Other(value)
        })
    }
}

/// User record returned by the user lookup operation.
///
/// Every field is optional; the licensing API omits fields it has no value for.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserInfo {
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub ip: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub hwid: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub createdate: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub lastlogin: Option<String>,
    #[serde(default, deserialize_with = "lenient_subscriptions")]
    pub subscriptions: Option<Vec<SubscriptionInfo>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SubscriptionInfo {
    #[serde(default, deserialize_with = "lenient_string")]
    pub subscription: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub expiry: Option<String>,
}

/// Application statistics returned by the statistics operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatsInfo {
    #[serde(default, deserialize_with = "lenient_string")]
    pub users: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub licenses: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub online: Option<String>,
}

/// Accepts a JSON string, number or boolean and keeps it as a string; `null` becomes `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(value)) => Some(value),
        Some(other) => Some(other.to_string()),
    })
}

/// Accepts a list of subscription records; anything else becomes `None`.
///
/// Entries that are not subscription objects are skipped, so a malformed list never
/// discards the rest of the user record.
fn lenient_subscriptions<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<SubscriptionInfo>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(entries)) => Some(
            entries
                .into_iter()
                .filter_map(|entry| serde_json::from_value::<SubscriptionInfo>(entry).ok())
                .collect(),
        ),
        _ => None,
    })
}

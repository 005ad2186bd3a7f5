//! Conversion of licensing API results and dispatch errors into notifications.

use crate::{
    command::spec::COMMANDS,
    error::{command::CommandError, AppError},
    model::{
        api::{ApiInfo, ApiResult, StatsInfo, UserInfo},
        notification::{Notification, NotificationKind},
    },
    service::keyauth::operation::Operation,
};

/// Placeholder for values the licensing API did not return.
const NOT_AVAILABLE: &str = "N/A";

/// Builds the notification for a completed licensing API call.
///
/// The upstream `message` takes precedence over the templated description in both
/// the success and failure case. Operation-specific fields are only added on success.
pub fn result_notification(operation: &Operation, result: ApiResult) -> Notification {
    if !result.success {
        return Notification::new(
            NotificationKind::Failure,
            title(operation),
            result.message.unwrap_or_else(|| failure_text(operation)),
        );
    }

    let notification = Notification::new(
        NotificationKind::Success,
        title(operation),
        result.message.unwrap_or_else(|| success_text(operation)),
    );

    match (operation, result.info) {
        (Operation::QueryUserInfo { .. }, ApiInfo::User(info)) => user_fields(notification, &info),
        (Operation::QueryUserInfo { .. }, _) => user_fields(notification, &UserInfo::default()),
        (Operation::GetStatistics, ApiInfo::Stats(info)) => stats_fields(notification, &info),
        (Operation::GetStatistics, _) => stats_fields(notification, &StatsInfo::default()),
        (Operation::CreateLicense { key, days }, _) => notification
            .field("License", format!("`{}`", key), true)
            .field("Days", days.to_string(), true),
        (Operation::ApplyLicense { key, username }, _) => notification
            .field("License", format!("`{}`", key), true)
            .field("Username", username, true),
        (
            Operation::ExtendSubscription {
                username,
                subscription,
                days,
            },
            _,
        ) => notification
            .field("Username", username, true)
            .field("Subscription", subscription, true)
            .field("Days", days.to_string(), true),
        _ => notification,
    }
}

/// Builds the notification for an invocation that could not be completed.
pub fn error_notification(err: &AppError) -> Notification {
    match err {
        AppError::CommandErr(CommandError::AccessDenied(_)) => Notification::new(
            NotificationKind::Denied,
            "Access Denied",
            "You are not authorized to use this command.",
        ),
        AppError::CommandErr(CommandError::MissingArgument(name)) => Notification::new(
            NotificationKind::Invalid,
            "Invalid Input",
            format!("`{}` is required and must not be empty.", name),
        ),
        AppError::CommandErr(CommandError::BelowMinimum { name, min, .. }) => Notification::new(
            NotificationKind::Invalid,
            "Invalid Input",
            format!("`{}` must be at least {}.", name, min),
        ),
        AppError::CommandErr(CommandError::UnknownCommand(name)) => Notification::new(
            NotificationKind::Error,
            "Not Implemented",
            format!("The command `/{}` is not implemented.", name),
        ),
        _ => Notification::new(
            NotificationKind::Error,
            "Error",
            "An error occurred while contacting the licensing service. Please try again later.",
        ),
    }
}

/// Lists every registered command.
pub fn help() -> Notification {
    COMMANDS.iter().fold(
        Notification::new(
            NotificationKind::Info,
            "Available Commands",
            "Licensing administration commands. Only configured admins can use them.",
        ),
        |notification, spec| notification.field(format!("/{}", spec.name), spec.description, false),
    )
}

fn user_fields(notification: Notification, info: &UserInfo) -> Notification {
    let notification = notification
        .field("Username", or_not_available(&info.username), true)
        .field("IP Address", or_not_available(&info.ip), true)
        .field("HWID", or_not_available(&info.hwid), false)
        .field("Created", or_not_available(&info.createdate), true)
        .field("Last Login", or_not_available(&info.lastlogin), true);

    match info.subscriptions.as_deref() {
        Some(subscriptions) if !subscriptions.is_empty() => {
            let value = subscriptions
                .iter()
                .map(|sub| {
                    format!(
                        "{} (expires {})",
                        or_not_available(&sub.subscription),
                        or_not_available(&sub.expiry)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            notification.field("Subscriptions", value, false)
        }
        _ => notification,
    }
}

fn stats_fields(notification: Notification, info: &StatsInfo) -> Notification {
    notification
        .field("Users", or_not_available(&info.users), true)
        .field("Licenses", or_not_available(&info.licenses), true)
        .field("Online Users", or_not_available(&info.online), true)
}

/// Returns the trimmed value, or `N/A` if it is missing or blank.
fn or_not_available(value: &Option<String>) -> &str {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(NOT_AVAILABLE)
}

fn title(operation: &Operation) -> &'static str {
    match operation {
        Operation::QueryUserInfo { .. } => "User Information",
        Operation::BanUser { .. } => "Ban User",
        Operation::UnbanUser { .. } => "Unban User",
        Operation::DeleteUser { .. } => "Delete User",
        Operation::ResetHardwareId { .. } => "Reset HWID",
        Operation::CreateLicense { .. } => "Create License",
        Operation::DeleteLicense { .. } => "Delete License",
        Operation::ApplyLicense { .. } => "Apply License",
        Operation::ExtendSubscription { .. } => "Extend Subscription",
        Operation::GetStatistics => "Application Statistics",
        Operation::SetWebhook { .. } => "Set Webhook",
        Operation::AddChannel { .. } => "Add Channel",
        Operation::DeleteChannel { .. } => "Delete Channel",
    }
}

fn success_text(operation: &Operation) -> String {
    match operation {
        Operation::QueryUserInfo { username } => format!("Details for user `{}`.", username),
        Operation::BanUser { username, .. } => format!("User `{}` has been banned.", username),
        Operation::UnbanUser { username } => format!("User `{}` has been unbanned.", username),
        Operation::DeleteUser { username } => format!("User `{}` has been deleted.", username),
        Operation::ResetHardwareId { username } => {
            format!("HWID of user `{}` has been reset.", username)
        }
        Operation::CreateLicense { key, days } => {
            format!("License `{}` has been created for {} days.", key, days)
        }
        Operation::DeleteLicense { key } => format!("License `{}` has been deleted.", key),
        Operation::ApplyLicense { key, username } => {
            format!("License `{}` has been applied to user `{}`.", key, username)
        }
        Operation::ExtendSubscription {
            username,
            subscription,
            days,
        } => format!(
            "Subscription `{}` of user `{}` has been extended by {} days.",
            subscription, username, days
        ),
        Operation::GetStatistics => "Current application statistics.".to_string(),
        Operation::SetWebhook { .. } => "Webhook has been set.".to_string(),
        Operation::AddChannel { channel } => format!("Channel `{}` has been added.", channel),
        Operation::DeleteChannel { channel } => format!("Channel `{}` has been deleted.", channel),
    }
}

fn failure_text(operation: &Operation) -> String {
    match operation {
        Operation::QueryUserInfo { username } => {
            format!("Failed to fetch information for user `{}`.", username)
        }
        Operation::BanUser { username, .. } => format!("Failed to ban user `{}`.", username),
        Operation::UnbanUser { username } => format!("Failed to unban user `{}`.", username),
        Operation::DeleteUser { username } => format!("Failed to delete user `{}`.", username),
        Operation::ResetHardwareId { username } => {
            format!("Failed to reset HWID of user `{}`.", username)
        }
        Operation::CreateLicense { key, .. } => format!("Failed to create license `{}`.", key),
        Operation::DeleteLicense { key } => format!("Failed to delete license `{}`.", key),
        Operation::ApplyLicense { key, username } => {
            format!("Failed to apply license `{}` to user `{}`.", key, username)
        }
        Operation::ExtendSubscription { username, .. } => {
            format!("Failed to extend subscription of user `{}`.", username)
        }
        Operation::GetStatistics => "Failed to fetch application statistics.".to_string(),
        Operation::SetWebhook { .. } => "Failed to set webhook.".to_string(),
        Operation::AddChannel { channel } => format!("Failed to add channel `{}`.", channel),
        Operation::DeleteChannel { channel } => format!("Failed to delete channel `{}`.", channel),
    }
}

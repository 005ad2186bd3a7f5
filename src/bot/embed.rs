use serenity::all::{CreateEmbed, Timestamp};

use crate::model::notification::Notification;

const TITLE_LIMIT: usize = 256;
const DESCRIPTION_LIMIT: usize = 4096;
const FIELD_NAME_LIMIT: usize = 256;
const FIELD_VALUE_LIMIT: usize = 1024;

/// Builds the Discord embed for a notification.
///
/// Uses the notification kind for the embed colour and the current time as the embed
/// timestamp. Fields are added in order; fields with a blank value are skipped since
/// Discord rejects them. Text longer than Discord's embed limits is truncated.
pub fn build_embed(notification: &Notification) -> CreateEmbed {
    notification
        .fields
        .iter()
        .filter(|field| !field.name.trim().is_empty() && !field.value.trim().is_empty())
        .fold(
            CreateEmbed::new()
                .title(clamp(&notification.title, TITLE_LIMIT))
                .description(clamp(&notification.description, DESCRIPTION_LIMIT))
                .color(notification.kind.color())
                .timestamp(Timestamp::now()),
            |embed, field| {
                embed.field(
                    clamp(&field.name, FIELD_NAME_LIMIT),
                    clamp(&field.value, FIELD_VALUE_LIMIT),
                    field.inline,
                )
            },
        )
}

/// Truncates `value` to at most `limit` characters, ending with `…` when cut.
fn clamp(value: &str, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }

    value
        .chars()
        .take(limit - 1)
        .chain(std::iter::once('…'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::notification::NotificationKind;

    #[test]
    fn embed_carries_title_description_colour_and_fields() {
        let notification = Notification::new(
            NotificationKind::Success,
            "Create License",
            "License `ABC-123` has been created for 30 days.",
        )
        .field("License", "`ABC-123`", true)
        .field("Days", "30", true);

        let embed = serde_json::to_value(build_embed(&notification)).unwrap();

        assert_eq!(embed["title"], "Create License");
        assert_eq!(
            embed["description"],
            "License `ABC-123` has been created for 30 days."
        );
        assert_eq!(embed["color"], NotificationKind::Success.color());
        assert_eq!(embed["fields"][0]["name"], "License");
        assert_eq!(embed["fields"][1]["value"], "30");
        assert_eq!(embed["fields"][1]["inline"], true);
    }

    #[test]
    fn blank_fields_are_skipped() {
        let notification = Notification::new(NotificationKind::Success, "User Information", "ok")
            .field("Username", "alice", true)
            .field("HWID", "  ", false)
            .field("Created", "1700000000", true);

        let embed = serde_json::to_value(build_embed(&notification)).unwrap();
        let fields = embed["fields"].as_array().unwrap();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0]["name"], "Username");
        assert_eq!(fields[1]["name"], "Created");
    }

    #[test]
    fn oversized_text_is_truncated_to_discord_limits() {
        let notification = Notification::new(
            NotificationKind::Failure,
            "Ban User",
            "x".repeat(DESCRIPTION_LIMIT + 100),
        )
        .field("Subscriptions", "y".repeat(FIELD_VALUE_LIMIT * 2), false);

        let embed = serde_json::to_value(build_embed(&notification)).unwrap();
        let description = embed["description"].as_str().unwrap();
        let value = embed["fields"][0]["value"].as_str().unwrap();

        assert_eq!(description.chars().count(), DESCRIPTION_LIMIT);
        assert!(description.ends_with('…'));
        assert_eq!(value.chars().count(), FIELD_VALUE_LIMIT);
        assert!(value.ends_with('…'));
    }

    #[test]
    fn text_within_limits_is_unchanged() {
        assert_eq!(clamp("ABC-123", FIELD_VALUE_LIMIT), "ABC-123");
        assert_eq!(clamp(&"z".repeat(TITLE_LIMIT), TITLE_LIMIT).len(), TITLE_LIMIT);
    }
}

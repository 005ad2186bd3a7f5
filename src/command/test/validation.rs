use super::*;

/// Tests that blank required string arguments are rejected for every command.
///
/// For each required string option, replaces its value with an empty and an
/// all-whitespace string while keeping every other argument valid.
///
/// Expected: Invalid notification naming the option, zero API calls
#[tokio::test]
async fn blank_required_string_is_rejected() {
    let api = RecordingApi::new();
    let dispatcher = dispatcher(api.clone());

    for spec in COMMANDS {
        for option in spec
            .options
            .iter()
            .filter(|option| option.required && option.kind == OptionKind::String)
        {
            for blank in ["", "   ", "\t\n"] {
                let args = valid_args(spec).with_string(option.name, blank);

                let notification = dispatcher
                    .dispatch(&invocation(spec.name, ADMIN_ID, args))
                    .await;

                assert_eq!(
                    notification.kind,
                    NotificationKind::Invalid,
                    "/{} accepted blank {}",
                    spec.name,
                    option.name
                );
                assert!(notification.description.contains(option.name));
            }
        }
    }

    assert!(api.calls().is_empty());
}

/// Tests that absent required arguments are rejected.
///
/// Expected: Invalid notification, zero API calls
#[tokio::test]
async fn missing_required_arguments_are_rejected() {
    let api = RecordingApi::new();
    let dispatcher = dispatcher(api.clone());

    let notification = dispatcher
        .dispatch(&invocation(
            "createlicense",
            ADMIN_ID,
            CommandArgs::new().with_string("key", "ABC-123"),
        ))
        .await;

    assert_eq!(notification.kind, NotificationKind::Invalid);
    assert!(notification.description.contains("days"));

    let notification = dispatcher
        .dispatch(&invocation("user", ADMIN_ID, CommandArgs::new()))
        .await;

    assert_eq!(notification.kind, NotificationKind::Invalid);
    assert!(api.calls().is_empty());
}

/// Tests that day counts below the declared minimum are rejected.
///
/// Discord enforces the minimum before the interaction reaches the bot; the dispatcher
/// checks it again.
///
/// Expected: Invalid notification, zero API calls
#[tokio::test]
async fn day_count_below_minimum_is_rejected() {
    let api = RecordingApi::new();
    let dispatcher = dispatcher(api.clone());

    for days in [0, -5] {
        let notification = dispatcher
            .dispatch(&invocation(
                "extendsub",
                ADMIN_ID,
                CommandArgs::new()
                    .with_string("username", "alice")
                    .with_string("subscription", "default")
                    .with_integer("days", days),
            ))
            .await;

        assert_eq!(notification.kind, NotificationKind::Invalid);
        assert!(notification.description.contains("at least 1"));
    }

    assert!(api.calls().is_empty());
}

/// Tests that string arguments are trimmed before being sent.
///
/// Expected: operation carries the trimmed username
#[tokio::test]
async fn string_arguments_are_trimmed() {
    let api = RecordingApi::new();
    let dispatcher = dispatcher(api.clone());

    dispatcher
        .dispatch(&invocation(
            "ban",
            ADMIN_ID,
            CommandArgs::new()
                .with_string("username", "  alice ")
                .with_string("reason", "   "),
        ))
        .await;

    assert_eq!(
        api.calls(),
        vec![Operation::BanUser {
            username: "alice".to_string(),
            reason: None,
        }]
    );
}

/// Tests that unknown command names are reported as not implemented.
///
/// Expected: "Not Implemented" notification, zero API calls
#[tokio::test]
async fn unknown_command_is_not_implemented() {
    let api = RecordingApi::new();
    let dispatcher = dispatcher(api.clone());

    let notification = dispatcher
        .dispatch(&invocation("refund", ADMIN_ID, CommandArgs::new()))
        .await;

    assert_eq!(notification.title, "Not Implemented");
    assert!(notification.description.contains("/refund"));
    assert!(api.calls().is_empty());
}

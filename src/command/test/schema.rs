use super::*;
use crate::command::spec::{self, create_commands};
use std::collections::HashSet;

/// Tests that day counts are declared as required integers with a minimum of 1.
///
/// Discord rejects values below the declared minimum before dispatch, so the schema is
/// what enforces the lower bound at the platform layer.
///
/// Expected: `days` is a required integer option with `min_value` 1
#[test]
fn day_options_declare_minimum_of_one() {
    for name in ["createlicense", "extendsub"] {
        let days = spec::find(name)
            .and_then(|spec| spec.option("days"))
            .unwrap();

        assert_eq!(days.kind, OptionKind::Integer);
        assert!(days.required);
        assert_eq!(days.min_value, Some(1));
    }
}

/// Tests the serialized registration payload of the day count options.
///
/// Expected: payload option has integer type 4, `required` and `min_value` 1
#[test]
fn registered_payload_carries_minimum() {
    for name in ["createlicense", "extendsub"] {
        let payload = serde_json::to_value(spec::find(name).unwrap().create_command()).unwrap();

        let days = payload["options"]
            .as_array()
            .unwrap()
            .iter()
            .find(|option| option["name"] == "days")
            .unwrap();

        assert_eq!(days["type"], 4);
        assert_eq!(days["required"], true);
        assert_eq!(days["min_value"], 1);
    }
}

/// Tests that every command can be registered with Discord.
///
/// Discord requires unique lowercase names of at most 32 characters, descriptions of
/// 1 to 100 characters, and required options before optional ones.
///
/// Expected: all constraints hold and one payload is built per command
#[test]
fn catalog_satisfies_discord_constraints() {
    let mut names = HashSet::new();

    for spec in COMMANDS {
        assert!(names.insert(spec.name), "duplicate /{}", spec.name);
        assert!(spec.name.len() <= 32);
        assert_eq!(spec.name, spec.name.to_lowercase());
        assert!((1..=100).contains(&spec.description.len()));

        let first_optional = spec.options.iter().position(|option| !option.required);
        if let Some(first_optional) = first_optional {
            assert!(spec.options[first_optional..]
                .iter()
                .all(|option| !option.required));
        }
    }

    assert_eq!(create_commands().len(), COMMANDS.len());
}

#[test]
fn lookup_by_name() {
    assert_eq!(
        spec::find("stats").map(|spec| spec.command),
        Some(spec::Command::Stats)
    );
    assert!(spec::find("Stats").is_none());
}

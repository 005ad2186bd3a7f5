//! Static slash command schema.
//!
//! `COMMANDS` is the single source of truth for the command catalog: it is registered
//! with Discord on startup and used by the dispatcher to validate arguments.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

/// Slash commands offered by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    User,
    Ban,
    Unban,
    DeleteUser,
    ResetHwid,
    CreateLicense,
    DeleteLicense,
    ApplyLicense,
    ExtendSub,
    Stats,
    SetWebhook,
    AddChannel,
    DelChannel,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    String,
    Integer,
}

/// Declared option of a slash command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: OptionKind,
    pub required: bool,
    /// Minimum accepted value, integer options only
    pub min_value: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub command: Command,
    pub name: &'static str,
    pub description: &'static str,
    pub options: &'static [OptionSpec],
}

const fn string_option(name: &'static str, description: &'static str) -> OptionSpec {
    OptionSpec {
        name,
        description,
        kind: OptionKind::String,
        required: true,
        min_value: None,
    }
}

const fn optional_string_option(name: &'static str, description: &'static str) -> OptionSpec {
    OptionSpec {
        required: false,
        ..string_option(name, description)
    }
}

const fn days_option(description: &'static str) -> OptionSpec {
    OptionSpec {
        name: "days",
        description,
        kind: OptionKind::Integer,
        required: true,
        min_value: Some(1),
    }
}

const USERNAME: OptionSpec = string_option("username", "Username of the licensing account");
const KEY: OptionSpec = string_option("key", "License key");

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        command: Command::User,
        name: "user",
        description: "Show information about a user",
        options: &[USERNAME],
    },
    CommandSpec {
        command: Command::Ban,
        name: "ban",
        description: "Ban a user",
        options: &[
            USERNAME,
            optional_string_option("reason", "Reason for the ban"),
        ],
    },
    CommandSpec {
        command: Command::Unban,
        name: "unban",
        description: "Unban a user",
        options: &[USERNAME],
    },
    CommandSpec {
        command: Command::DeleteUser,
        name: "deleteuser",
        description: "Delete a user",
        options: &[USERNAME],
    },
    CommandSpec {
        command: Command::ResetHwid,
        name: "resethwid",
        description: "Reset the hardware ID of a user",
        options: &[USERNAME],
    },
    CommandSpec {
        command: Command::CreateLicense,
        name: "createlicense",
        description: "Create a license key",
        options: &[
            string_option("key", "License key to create"),
            days_option("Number of days the license is valid for"),
        ],
    },
    CommandSpec {
        command: Command::DeleteLicense,
        name: "deletelicense",
        description: "Delete a license key",
        options: &[KEY],
    },
    CommandSpec {
        command: Command::ApplyLicense,
        name: "applylicense",
        description: "Apply a license key to a user",
        options: &[KEY, USERNAME],
    },
    CommandSpec {
        command: Command::ExtendSub,
        name: "extendsub",
        description: "Extend a user's subscription",
        options: &[
            USERNAME,
            string_option("subscription", "Subscription name"),
            days_option("Number of days to extend by"),
        ],
    },
    CommandSpec {
        command: Command::Stats,
        name: "stats",
        description: "Show application statistics",
        options: &[],
    },
    CommandSpec {
        command: Command::SetWebhook,
        name: "setwebhook",
        description: "Set the application webhook",
        options: &[string_option("webhook", "Webhook URL")],
    },
    CommandSpec {
        command: Command::AddChannel,
        name: "addchannel",
        description: "Add a chat channel",
        options: &[string_option("channel", "Channel name")],
    },
    CommandSpec {
        command: Command::DelChannel,
        name: "delchannel",
        description: "Delete a chat channel",
        options: &[string_option("channel", "Channel name")],
    },
    CommandSpec {
        command: Command::Help,
        name: "help",
        description: "List available commands",
        options: &[],
    },
];

/// Looks up a command by its slash command name.
pub fn find(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

/// Builds the registration payload for every command.
pub fn create_commands() -> Vec<CreateCommand> {
    COMMANDS.iter().map(CommandSpec::create_command).collect()
}

impl CommandSpec {
    pub fn create_command(&self) -> CreateCommand {
        self.options.iter().fold(
            CreateCommand::new(self.name).description(self.description),
            |command, option| command.add_option(option.create_option()),
        )
    }

    #[cfg(test)]
    pub fn option(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|option| option.name == name)
    }
}

impl OptionSpec {
    pub fn create_option(&self) -> CreateCommandOption {
        let kind = match self.kind {
            OptionKind::String => CommandOptionType::String,
            OptionKind::Integer => CommandOptionType::Integer,
        };

        let option =
            CreateCommandOption::new(kind, self.name, self.description).required(self.required);

        match self.min_value {
            Some(min) => option.min_int_value(min.into()),
            None => option,
        }
    }
}

use std::sync::Arc;

use dioxus_logger::tracing;

use crate::{
    command::{
        render,
        spec::{self, Command, CommandSpec, OptionKind},
    },
    error::{command::CommandError, AppError},
    model::{
        admin::AdminSet,
        command::{CommandArgs, CommandInvocation},
        notification::Notification,
    },
    service::keyauth::{operation::Operation, LicenseApi},
};

/// Routes slash command invocations to the licensing API.
///
/// Each invocation is checked against the admin allow-list, validated against the
/// command schema and then mapped to exactly one licensing API operation. The result,
/// or whatever error stopped processing, is turned into a single notification.
pub struct CommandDispatcher {
    admins: AdminSet,
    api: Arc<dyn LicenseApi>,
}

impl CommandDispatcher {
    /// Creates a new CommandDispatcher instance.
    ///
    /// # Arguments
    /// - `admins` - Discord user IDs allowed to run commands
    /// - `api` - Licensing API operations are executed through this
    ///
    /// # Returns
    /// - `CommandDispatcher` - New dispatcher instance
    pub fn new(admins: AdminSet, api: Arc<dyn LicenseApi>) -> Self {
        Self { admins, api }
    }

    /// Handles one invocation and produces the notification to show the caller.
    ///
    /// Never fails: access denial, validation errors, unknown commands and licensing API
    /// failures all become notifications.
    pub async fn dispatch(&self, invocation: &CommandInvocation) -> Notification {
        match self.try_dispatch(invocation).await {
            Ok(notification) => notification,
            Err(err) => {
                match &err {
                    AppError::CommandErr(e) => {
                        tracing::debug!("Rejected /{}: {}", invocation.name, e)
                    }
                    e => tracing::error!("Failed to handle /{}: {}", invocation.name, e),
                }
                render::error_notification(&err)
            }
        }
    }

    async fn try_dispatch(&self, invocation: &CommandInvocation) -> Result<Notification, AppError> {
        if !self.admins.contains(invocation.caller_id) {
            return Err(CommandError::AccessDenied(invocation.caller_id).into());
        }

        let Some(spec) = spec::find(&invocation.name) else {
            return Err(CommandError::UnknownCommand(invocation.name.clone()).into());
        };

        validate(spec, &invocation.args)?;

        let Some(operation) = operation_for(spec.command, &invocation.args)? else {
            return Ok(render::help());
        };

        let result = self.api.execute(&operation).await?;

        Ok(render::result_notification(&operation, result))
    }
}

/// Checks every declared option against the supplied arguments.
///
/// Required string options must be non-empty after trimming; required integer options
/// must be present and not below their declared minimum.
fn validate(spec: &CommandSpec, args: &CommandArgs) -> Result<(), CommandError> {
    for option in spec.options.iter().filter(|option| option.required) {
        match option.kind {
            OptionKind::String => {
                required_string(args, option.name)?;
            }
            OptionKind::Integer => {
                let value = required_integer(args, option.name)?;
                if let Some(min) = option.min_value.map(i64::from) {
                    if value < min {
                        return Err(CommandError::BelowMinimum {
                            name: option.name.to_string(),
                            min,
                            value,
                        });
                    }
                }
            }
        }
    }

    Ok(())
}

fn required_string(args: &CommandArgs, name: &str) -> Result<String, CommandError> {
    args.string(name)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| CommandError::MissingArgument(name.to_string()))
}

fn optional_string(args: &CommandArgs, name: &str) -> Option<String> {
    args.string(name)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn required_integer(args: &CommandArgs, name: &str) -> Result<i64, CommandError> {
    args.integer(name)
        .ok_or_else(|| CommandError::MissingArgument(name.to_string()))
}

/// Maps a validated command to its licensing API operation.
///
/// # Returns
/// - `Ok(Some(Operation))` - The operation to execute
/// - `Ok(None)` - The command is answered locally
/// - `Err(CommandError::MissingArgument)` - A required argument is absent
fn operation_for(command: Command, args: &CommandArgs) -> Result<Option<Operation>, CommandError> {
    let username = || required_string(args, "username");
    let key = || required_string(args, "key");
    let days = || required_integer(args, "days");

    let operation = match command {
        Command::User => Operation::QueryUserInfo {
            username: username()?,
        },
        Command::Ban => Operation::BanUser {
            username: username()?,
            reason: optional_string(args, "reason"),
        },
        Command::Unban => Operation::UnbanUser {
            username: username()?,
        },
        Command::DeleteUser => Operation::DeleteUser {
            username: username()?,
        },
        Command::ResetHwid => Operation::ResetHardwareId {
            username: username()?,
        },
        Command::CreateLicense => Operation::CreateLicense {
            key: key()?,
            days: days()?,
        },
        Command::DeleteLicense => Operation::DeleteLicense { key: key()? },
        Command::ApplyLicense => Operation::ApplyLicense {
            key: key()?,
            username: username()?,
        },
        Command::ExtendSub => Operation::ExtendSubscription {
            username: username()?,
            subscription: required_string(args, "subscription")?,
            days: days()?,
        },
        Command::Stats => Operation::GetStatistics,
        Command::SetWebhook => Operation::SetWebhook {
            webhook: required_string(args, "webhook")?,
        },
        Command::AddChannel => Operation::AddChannel {
            channel: required_string(args, "channel")?,
        },
        Command::DelChannel => Operation::DeleteChannel {
            channel: required_string(args, "channel")?,
        },
        Command::Help => return Ok(None),
    };

    Ok(Some(operation))
}

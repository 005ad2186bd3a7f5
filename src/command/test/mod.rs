use std::sync::{Arc, Mutex};

use serde_json::json;
use serenity::async_trait;

use crate::{
    command::{
        dispatch::CommandDispatcher,
        spec::{CommandSpec, OptionKind, COMMANDS},
    },
    error::api::ApiError,
    model::{
        admin::AdminSet,
        api::{ApiResponse, ApiResult},
        command::{CommandArgs, CommandInvocation},
        notification::NotificationKind,
    },
    service::keyauth::{operation::Operation, LicenseApi},
};

mod schema;
mod validation;

const ADMIN_ID: u64 = 100;
const OUTSIDER_ID: u64 = 200;

/// Licensing API stand-in that records every executed operation.
struct RecordingApi {
    response: ApiResponse,
    calls: Mutex<Vec<Operation>>,
}

impl RecordingApi {
    fn new() -> Arc<Self> {
        Self::with_response(json!({ "success": true }))
    }

    fn with_response(body: serde_json::Value) -> Arc<Self> {
        Arc::new(Self {
            response: serde_json::from_value(body).unwrap(),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<Operation> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LicenseApi for RecordingApi {
    async fn execute(&self, operation: &Operation) -> Result<ApiResult, ApiError> {
        self.calls.lock().unwrap().push(operation.clone());
        Ok(ApiResult::decode(
            operation.info_kind(),
            self.response.clone(),
        ))
    }
}

fn dispatcher(api: Arc<dyn LicenseApi>) -> CommandDispatcher {
    CommandDispatcher::new(AdminSet::new([ADMIN_ID]), api)
}

/// Arguments satisfying every declared option of a command.
fn valid_args(spec: &CommandSpec) -> CommandArgs {
    spec.options
        .iter()
        .fold(CommandArgs::new(), |args, option| match option.kind {
            OptionKind::String => args.with_string(option.name, format!("{}-value", option.name)),
            OptionKind::Integer => args.with_integer(option.name, 30),
        })
}

fn invocation(name: &str, caller_id: u64, args: CommandArgs) -> CommandInvocation {
    CommandInvocation::new(name, caller_id, args)
}

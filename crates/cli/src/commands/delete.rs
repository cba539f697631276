//! delete command - Remove one object

use clap::Args;
use s3drop_core::{DeleteResult, TransferEngine};

use super::Context;
use crate::exit_code::ExitCode;

/// Delete an object
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Object key to delete
    pub key: String,
}

/// Execute the delete command
pub async fn execute(args: DeleteArgs, ctx: &Context) -> ExitCode {
    let formatter = ctx.formatter();

    let (config, client) = match ctx.connect(&formatter).await {
        Ok(c) => c,
        Err(code) => return code,
    };
    let engine = TransferEngine::new(config, client);
    let result = engine.delete(&args.key).await;

    if formatter.is_json() {
        formatter.json(&result);
    } else {
        match &result {
            DeleteResult::Success { key, message } => formatter.success(&format!("{message}: {key}")),
            DeleteResult::Failure(f) => formatter.error(&f.error),
        }
    }

    ExitCode::from_success(result.is_success())
}

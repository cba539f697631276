//! upload command - Upload a local file
//!
//! Uploads one file and prints its public URL.

use std::path::PathBuf;

use clap::Args;
use s3drop_core::{TransferEngine, UploadOptions};

use super::{AclArgs, Context, report_transfer};
use crate::exit_code::ExitCode;
use crate::output::ProgressBar;

/// Upload a local file
#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Local file to upload
    pub path: PathBuf,

    /// Full object key, used as given (overrides --folder)
    #[arg(long)]
    pub key: Option<String>,

    /// Folder to upload into; the filename is appended
    #[arg(long)]
    pub folder: Option<String>,

    #[command(flatten)]
    pub acl: AclArgs,
}

/// Execute the upload command
pub async fn execute(args: UploadArgs, ctx: &Context) -> ExitCode {
    let formatter = ctx.formatter();

    let (config, client) = match ctx.connect(&formatter).await {
        Ok(c) => c,
        Err(code) => return code,
    };
    let options = UploadOptions {
        destination_path: args.key,
        folder: args.folder,
        make_public: args.acl.make_public(ctx.provider),
    };
    let engine = TransferEngine::new(config, client);

    let spinner = ProgressBar::spinner(&ctx.output, &format!("Uploading {}", args.path.display()));
    let result = engine.upload_local(&args.path, &options).await;
    spinner.finish_and_clear();

    report_transfer(&formatter, result)
}

//! upload-url command - Download a URL and upload it
//!
//! The download is spooled to a scratch file that is always removed.

use std::sync::Arc;

use clap::Args;
use s3drop_core::{TransferEngine, UploadOptions};
use s3drop_s3::HttpSource;

use super::{AclArgs, Context, report_transfer};
use crate::exit_code::ExitCode;
use crate::output::ProgressBar;

/// Download a URL and upload it
#[derive(Args, Debug)]
pub struct UploadUrlArgs {
    /// URL to download
    pub url: String,

    /// Filename to store under (default: last URL path segment)
    #[arg(long)]
    pub filename: Option<String>,

    /// Full object key, used as given (overrides --folder)
    #[arg(long)]
    pub key: Option<String>,

    /// Folder to upload into; the filename is appended
    #[arg(long)]
    pub folder: Option<String>,

    #[command(flatten)]
    pub acl: AclArgs,
}

/// Execute the upload-url command
pub async fn execute(args: UploadUrlArgs, ctx: &Context) -> ExitCode {
    let formatter = ctx.formatter();

    let (config, client) = match ctx.connect(&formatter).await {
        Ok(c) => c,
        Err(code) => return code,
    };
    let source = match HttpSource::new() {
        Ok(s) => s,
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::from_error(&e);
        }
    };

    let options = UploadOptions {
        destination_path: args.key,
        folder: args.folder,
        make_public: args.acl.make_public(ctx.provider),
    };
    let engine = TransferEngine::new(config, client).with_remote_source(Arc::new(source));

    let spinner = ProgressBar::spinner(&ctx.output, &format!("Transferring {}", args.url));
    let result = engine
        .upload_from_url(&args.url, args.filename.as_deref(), &options)
        .await;
    spinner.finish_and_clear();

    report_transfer(&formatter, result)
}

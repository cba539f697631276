//! CLI command definitions and execution
//!
//! Every command resolves the backend the same way: config file first, then
//! environment variables on top, then the `--provider` flag picks which set
//! of variables is read.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand, ValueEnum};
use s3drop_core::{BackendConfig, Config, ConfigManager, Provider, TransferResult};
use s3drop_s3::S3Client;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

mod completions;
mod delete;
mod list;
mod upload;
mod upload_url;

/// s3drop - upload files to S3-compatible storage
///
/// Uploads local files or remote URLs to Amazon S3, DigitalOcean Spaces
/// and other S3-compatible services, and prints the public URL.
#[derive(Parser, Debug)]
#[command(name = "s3drop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Storage provider whose environment variables are read
    #[arg(long, global = true, value_enum, env = "S3DROP_PROVIDER")]
    pub provider: Option<ProviderArg>,

    /// Path to the config file
    #[arg(long, global = true, env = "S3DROP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: human-readable or JSON
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true, default_value = "false")]
    pub no_color: bool,

    /// Disable progress spinner
    #[arg(long, global = true, default_value = "false")]
    pub no_progress: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true, default_value = "false")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a local file
    Upload(upload::UploadArgs),

    /// Download a URL and upload it
    UploadUrl(upload_url::UploadUrlArgs),

    /// List stored objects
    List(list::ListArgs),

    /// Delete an object
    Delete(delete::DeleteArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Provider selection on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderArg {
    /// Amazon S3 or any S3-compatible endpoint
    S3,
    /// DigitalOcean Spaces
    Spaces,
}

impl From<ProviderArg> for Provider {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::S3 => Provider::S3,
            ProviderArg::Spaces => Provider::Spaces,
        }
    }
}

/// Object visibility flags shared by the upload commands
#[derive(Args, Debug, Default)]
pub struct AclArgs {
    /// Make the object publicly readable
    #[arg(long, conflicts_with = "private")]
    pub public: bool,

    /// Keep the object private
    #[arg(long)]
    pub private: bool,
}

impl AclArgs {
    /// Explicit flag wins; otherwise the provider default applies
    pub fn make_public(&self, provider: Provider) -> bool {
        if self.public {
            true
        } else if self.private {
            false
        } else {
            provider.default_public()
        }
    }
}

/// Settings shared by every backend command
#[derive(Debug)]
pub struct Context {
    pub provider: Provider,
    pub file: Config,
    pub output: OutputConfig,
}

impl Context {
    pub fn formatter(&self) -> Formatter {
        Formatter::new(self.output.clone())
    }

    /// Resolve the backend configuration from the environment
    pub fn backend_config(&self) -> s3drop_core::Result<BackendConfig> {
        BackendConfig::resolve(self.provider, &self.file, |name| std::env::var(name).ok())
    }

    /// Resolve configuration and build the S3 client
    ///
    /// Reports the failure through `formatter` and returns the exit code to
    /// use when anything is missing.
    pub async fn connect(
        &self,
        formatter: &Formatter,
    ) -> Result<(BackendConfig, Arc<S3Client>), ExitCode> {
        let config = match self.backend_config() {
            Ok(c) => c,
            Err(e) => {
                formatter.error(&e.to_string());
                return Err(ExitCode::from_error(&e));
            }
        };

        match S3Client::new(&config).await {
            Ok(client) => Ok((config, Arc::new(client))),
            Err(e) => {
                formatter.error(&format!("Failed to create S3 client: {e}"));
                Err(ExitCode::from_error(&e))
            }
        }
    }
}

/// Execute the CLI command and return an exit code
pub async fn execute(cli: Cli) -> ExitCode {
    let mut output_config = OutputConfig {
        json: cli.json,
        no_color: cli.no_color,
        no_progress: cli.no_progress,
        quiet: cli.quiet,
    };

    let args = match cli.command {
        Commands::Completions(args) => return completions::execute(args),
        command => command,
    };

    let file = match load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            Formatter::new(output_config).error(&e.to_string());
            return ExitCode::from_error(&e);
        }
    };

    if file.defaults.output == "json" {
        output_config.json = true;
    }

    let ctx = Context {
        provider: cli.provider.map(Provider::from).unwrap_or(file.defaults.provider),
        file,
        output: output_config,
    };
    tracing::debug!(provider = %ctx.provider, "resolved provider");

    match args {
        Commands::Upload(args) => upload::execute(args, &ctx).await,
        Commands::UploadUrl(args) => upload_url::execute(args, &ctx).await,
        Commands::List(args) => list::execute(args, &ctx).await,
        Commands::Delete(args) => delete::execute(args, &ctx).await,
        Commands::Completions(args) => completions::execute(args),
    }
}

/// Load the config file; a missing config directory means no file
fn load_config(path: Option<PathBuf>) -> s3drop_core::Result<Config> {
    let manager = match path {
        Some(p) => ConfigManager::with_path(p),
        None => match ConfigManager::new() {
            Ok(m) => m,
            Err(e) => {
                tracing::debug!(error = %e, "no config directory, using defaults");
                return Ok(Config::default());
            }
        },
    };

    tracing::debug!(path = %manager.config_path().display(), "loading config");
    manager.load()
}

/// Print an upload outcome and map it to an exit code
pub(crate) fn report_transfer(
    formatter: &Formatter,
    result: s3drop_core::Result<TransferResult>,
) -> ExitCode {
    let result = match result {
        Ok(r) => r,
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::from_error(&e);
        }
    };

    if formatter.is_json() {
        formatter.json(&result);
    } else {
        match &result {
            TransferResult::Success(s) => {
                formatter.success(&format!("Uploaded {} to {}/{}", s.filename, s.bucket, s.key));
                formatter.println(&format!("  URL:  {}", s.url));
                formatter.println(&format!(
                    "  Size: {} ({})",
                    humansize::format_size(s.size_bytes, humansize::BINARY),
                    s.content_type
                ));
                if let Some(source) = &s.source_url {
                    formatter.println(&format!("  From: {source}"));
                }
            }
            TransferResult::Failure(f) => formatter.error(&f.error),
        }
    }

    ExitCode::from_success(result.is_success())
}

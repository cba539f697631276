//! s3drop - upload files to S3-compatible storage
//!
//! Uploads local files or remote URLs to Amazon S3 or DigitalOcean Spaces
//! and prints the resulting public URL.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;
mod exit_code;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() {
    // Credentials may live in a .env file next to the invocation
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("Warning: failed to load .env file: {e}");
    }

    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("s3drop=debug,s3drop_core=debug,s3drop_s3=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let exit_code = commands::execute(cli).await;

    std::process::exit(exit_code.as_i32());
}

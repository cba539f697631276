//! list command - List stored objects
//!
//! Shows key, size, modification time and public URL for each object.

use clap::Args;
use comfy_table::{ContentArrangement, Table, presets};
use s3drop_core::{Lister, Listing};

use super::Context;
use crate::exit_code::ExitCode;

/// List stored objects
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Key prefix to list (default: the configured prefix)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Maximum number of entries (default: 100)
    #[arg(long)]
    pub max: Option<usize>,
}

/// Execute the list command
pub async fn execute(args: ListArgs, ctx: &Context) -> ExitCode {
    let formatter = ctx.formatter();

    let (config, client) = match ctx.connect(&formatter).await {
        Ok(c) => c,
        Err(code) => return code,
    };

    let max = args.max.unwrap_or(ctx.file.defaults.max_results);
    let lister = Lister::new(config, client);
    let listing = lister.list(args.prefix.as_deref(), max).await;

    if formatter.is_json() {
        formatter.json(&listing);
    } else if let Some(error) = &listing.error {
        formatter.error(error);
    } else if listing.is_empty() {
        formatter.println("No files found.");
    } else {
        formatter.println(&render_table(&listing, formatter.colors_enabled()));
        formatter.println(&format!("{} file(s)", listing.len()));
    }

    ExitCode::from_success(listing.is_ok())
}

fn render_table(listing: &Listing, styled: bool) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_BORDERS_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Key", "Size", "Last Modified", "URL"]);
    if !styled {
        table.force_no_tty();
    }

    for entry in &listing.entries {
        let modified = entry
            .last_modified
            .map(|t| t.strftime("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();
        table.add_row(vec![
            entry.key.clone(),
            humansize::format_size(entry.size_bytes, humansize::BINARY),
            modified,
            entry.url.clone(),
        ]);
    }

    table.to_string()
}

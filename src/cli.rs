use anyhow::{Context, Result};
use clap::Parser;

use crate::plan::UserInput;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the user input JSON file
    #[arg(short, long)]
    pub input_file: String,

    /// Pretty-print the generated plan
    #[arg(long)]
    pub pretty: bool,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Reads and decodes a plan request. Structural problems (unreadable file,
/// malformed JSON, missing fields) surface here, before the core is invoked.
pub async fn read_user_input(path: &str) -> Result<UserInput> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read user input file '{}'", path))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to decode user input JSON from '{}'", path))
}

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Subcommand;
use tracing::info;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    /// JSON schema of the scenario file format
    JsonSchema {
        /// Write the schema to this file instead of stdout
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },
}

fn write_schema(writer: &mut impl Write) -> Result<(), anyhow::Error> {
    let schema = rentit_fleet::json::schema::generate_json_schema()?;
    writeln!(writer, "{schema}")?;
    Ok(())
}

fn write_schema_file(out: &Path) -> Result<(), anyhow::Error> {
    if let Some(parent) = out.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let mut file =
        fs::File::create(out).with_context(|| format!("Failed to create {}", out.display()))?;
    write_schema(&mut file)?;
    info!("Scenario schema written to {}", out.display());

    Ok(())
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::JsonSchema { out: Some(out) } => write_schema_file(&out),
        GenerateSubcommands::JsonSchema { out: None } => write_schema(&mut io::stdout().lock()),
    }
}

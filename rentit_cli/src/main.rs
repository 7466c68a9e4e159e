use clap::{CommandFactory, Parser, Subcommand};

use crate::{demo::DemoArgs, generate::GenerateSubcommands, run::RunArgs};

mod demo;
mod file_utils;
mod generate;
mod report;
mod run;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one of the built-in fleet demonstrations
    Demo {
        #[command(flatten)]
        args: DemoArgs,
    },
    /// Run scenario files
    Run {
        #[command(flatten)]
        args: RunArgs,
    },
    /// Generate artifacts derived from the scenario format
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Demo { args }) => demo::run(args)?,
        Some(Commands::Run { args }) => run::run(args)?,
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        None => Cli::command().print_help()?,
    }

    Ok(())
}

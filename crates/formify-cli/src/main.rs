//! Formify CLI - generate forms from field descriptions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod check;
mod config;
mod generate;
mod templates;

use config::Config;

#[derive(Parser)]
#[command(name = "formify")]
#[command(author, version, about = "Generate HTML forms and React components from field descriptions", long_about = None)]
struct Cli {
    /// Config file (defaults to ./formify.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate form code from a field description
    Generate {
        /// Output format: html or react (jsx/tsx accepted)
        #[arg(short, long)]
        format: Option<String>,

        /// Field description file (reads stdin when omitted)
        #[arg(short, long, conflicts_with = "template")]
        input: Option<PathBuf>,

        /// Write the generated code here (templates default to <KEY>.<html|tsx>, descriptions to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Use a built-in template instead of a description
        #[arg(short, long)]
        template: Option<String>,

        /// React component name
        #[arg(short = 'n', long)]
        component_name: Option<String>,

        /// Reject fields whose state keys collide
        #[arg(long)]
        strict: bool,
    },

    /// List the built-in templates
    Templates,

    /// Parse a field description and print the fields and validation rules as JSON
    Check {
        /// Field description file (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8, quiet: bool) {
    let filter = match (quiet, verbose) {
        (true, _) => EnvFilter::new("error"),
        (false, 0) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        (false, 1) => EnvFilter::new("debug"),
        (false, _) => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    execute(cli)
}

fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            format,
            input,
            output,
            template,
            component_name,
            strict,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            generate::run(
                generate::GenerateArgs {
                    format,
                    input,
                    output,
                    template,
                    component_name,
                    strict,
                },
                &config,
            )
        }
        Commands::Templates => templates::run(),
        Commands::Check { input } => check::run(input.as_deref()),
    }
}

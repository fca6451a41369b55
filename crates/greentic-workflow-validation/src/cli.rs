use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cmd::{self, describe::DescribeArgs, evaluate::EvaluateArgs, outcomes::OutcomesArgs};
use crate::i18n::Localizer;

#[derive(Parser, Debug)]
#[command(
    name = "greentic-workflow-validation",
    about = "Run Greentic workflow validation activities against form submissions",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    #[arg(long = "locale", value_name = "LOCALE", global = true)]
    locale: Option<String>,

    /// Log rule decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the required-when-checked rule against a submission
    Evaluate(EvaluateArgs),
    /// List the outcomes the rule can produce
    Outcomes(OutcomesArgs),
    /// Print the activity descriptor
    Describe(DescribeArgs),
}

pub fn main() -> Result<()> {
    let cli = Cli::try_parse().unwrap_or_else(|err| err.exit());
    init_tracing(cli.verbose);
    let localizer = Localizer::new(cli.locale.as_deref());
    match cli.command {
        Commands::Evaluate(args) => cmd::evaluate::run(args, &localizer),
        Commands::Outcomes(args) => cmd::outcomes::run(args, &localizer),
        Commands::Describe(args) => cmd::describe::run(args, &localizer),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "greentic_workflow_validation=debug,workflow_validation=debug"
    } else {
        "greentic_workflow_validation=warn,workflow_validation=warn"
    };
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}

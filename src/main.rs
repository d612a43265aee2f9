use anyhow::Result;
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use fxconv::cli::ui::{StyleType, style_text};
use fxconv::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List the currencies supported by the provider
    Currencies,
    /// Convert at the latest rate and chart the rate trend
    Latest {
        /// Amount in the source currency
        #[arg(short, long)]
        amount: Option<f64>,
        /// Source currency code
        #[arg(short, long)]
        from: Option<String>,
        /// Target currency code
        #[arg(short, long)]
        to: Option<String>,
        /// Skip fetching and drawing the trend chart
        #[arg(long)]
        no_chart: bool,
    },
    /// Convert at the rate of a past date
    Convert {
        /// Amount in the source currency
        #[arg(short, long)]
        amount: Option<f64>,
        /// Source currency code
        #[arg(short, long)]
        from: Option<String>,
        /// Target currency code
        #[arg(short, long)]
        to: Option<String>,
        /// Date of the rate (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// Compute the inverse of a rate
    Inverse {
        /// Rate to invert
        #[arg(allow_negative_numbers = true)]
        rate: f64,
    },
}

impl From<Commands> for fxconv::AppCommand {
    fn from(cmd: Commands) -> fxconv::AppCommand {
        match cmd {
            Commands::Currencies => fxconv::AppCommand::Currencies,
            Commands::Latest {
                amount,
                from,
                to,
                no_chart,
            } => fxconv::AppCommand::Latest {
                amount,
                from,
                to,
                show_chart: !no_chart,
            },
            Commands::Convert {
                amount,
                from,
                to,
                date,
            } => fxconv::AppCommand::Convert {
                amount,
                from,
                to,
                date,
            },
            Commands::Inverse { rate } => fxconv::AppCommand::Inverse { rate },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxconv::cli::setup::setup(),
        Some(cmd) => fxconv::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = ?e, "Application failed");
        eprintln!("{}", style_text(&format!("{e:#}"), StyleType::Error));
        std::process::exit(1);
    }
    Ok(())
}

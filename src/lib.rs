pub mod cli;
pub mod core;
pub mod providers;

use anyhow::Result;
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::core::config::AppConfig;

pub enum AppCommand {
    Currencies,
    Latest {
        amount: Option<f64>,
        from: Option<String>,
        to: Option<String>,
        show_chart: bool,
    },
    Convert {
        amount: Option<f64>,
        from: Option<String>,
        to: Option<String>,
        date: Option<NaiveDate>,
    },
    Inverse {
        rate: f64,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    // Pure arithmetic, no config or network needed.
    if let AppCommand::Inverse { rate } = command {
        return cli::inverse::run(rate);
    }

    info!("fxconv starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let provider = providers::FrankfurterProvider::new(&config.providers.frankfurter)?;

    match command {
        AppCommand::Currencies => cli::currencies::run(&provider).await,
        AppCommand::Latest {
            amount,
            from,
            to,
            show_chart,
        } => {
            let args = cli::latest::LatestArgs {
                amount,
                from,
                to,
                show_chart,
            };
            cli::latest::run(&provider, &config, args).await
        }
        AppCommand::Convert {
            amount,
            from,
            to,
            date,
        } => {
            let args = cli::convert::ConvertArgs {
                amount,
                from,
                to,
                date,
            };
            cli::convert::run(&provider, &config, args).await
        }
        AppCommand::Inverse { rate } => cli::inverse::run(rate),
    }
}

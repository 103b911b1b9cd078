mod cli;
mod commands;

use agecalc::config::Config;
use agecalc::render::{JsonPresenter, TerminalPresenter};
use agecalc::{Clock, FixedClock, Form, SystemClock, Validator};
use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    // Flags win over the environment.
    let mut config = Config::from_env().context("Invalid AGECALC_* configuration")?;
    if let Some(today) = cli.today {
        config.today = Some(today);
    }
    if let Some(ceiling) = cli.year_ceiling {
        config.year_ceiling = ceiling;
    }
    if cli.no_animate {
        config.animate = false;
    }

    let clock: Box<dyn Clock> = match config.today {
        Some(today) => Box::new(FixedClock(today)),
        None => Box::new(SystemClock),
    };
    let validator = Validator::new(config.year_ceiling, clock.today());
    let form = Form::new(validator, clock);

    if cli.json {
        let presenter = JsonPresenter::new(io::stdout());
        commands::execute(cli.command, io::stdin().lock(), form, presenter, true).await
    } else {
        let stdout = io::stdout();
        let animation = (config.animate && stdout.is_terminal()).then_some(config.animation);
        let presenter = TerminalPresenter::new(stdout, animation);
        commands::execute(cli.command, io::stdin().lock(), form, presenter, false).await
    }
}

use crate::cli::{Commands, DateArgs};
use agecalc::render::JsonOut;
use agecalc::render::Presenter;
use agecalc::{Clock, Field, Form, format_date_string};
use anyhow::{Context, Result, bail};
use std::io::BufRead;
use std::process::ExitCode;

/// Exit status for input that failed validation.
pub const EXIT_INVALID: u8 = 2;

/// Runs one command. `input` feeds the `form` event loop.
///
/// The presenter is always finished, also when the command fails part way.
pub async fn execute<C: Clock, P: Presenter>(
    command: Commands,
    input: impl BufRead,
    mut form: Form<C>,
    mut presenter: P,
    json: bool,
) -> Result<ExitCode> {
    let outcome = match command {
        Commands::Calc { date } => calc(&date, &mut form, &mut presenter),
        Commands::Check { date } => check(&date, &mut form, &mut presenter),
        Commands::Form => run_events(input, &mut form, &mut presenter).await,
        Commands::Format { date } => format(&date, json),
    };
    presenter.finish().await;
    outcome
}

fn calc<C: Clock, P: Presenter>(
    date: &DateArgs,
    form: &mut Form<C>,
    presenter: &mut P,
) -> Result<ExitCode> {
    form.fill(date.triple());
    match form.submit() {
        Ok(submission) => {
            presenter.show_age(&submission)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => {
            presenter.show_errors(&errors)?;
            Ok(ExitCode::from(EXIT_INVALID))
        }
    }
}

/// Types the three fields in order and reports what the form shows.
fn check<C: Clock, P: Presenter>(
    date: &DateArgs,
    form: &mut Form<C>,
    presenter: &mut P,
) -> Result<ExitCode> {
    form.input(Field::Day, &date.day);
    form.input(Field::Month, &date.month);
    let errors = *form.input(Field::Year, &date.year);
    presenter.show_errors(&errors)?;
    if errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_INVALID))
    }
}

/// One event per line: `day <text>`, `month <text>`, `year <text>` or `submit`.
/// Blank lines are skipped. An age finishes drawing before the next line is read.
async fn run_events<C: Clock, P: Presenter>(
    input: impl BufRead,
    form: &mut Form<C>,
    presenter: &mut P,
) -> Result<ExitCode> {
    let mut code = ExitCode::SUCCESS;
    for (n, line) in input.lines().enumerate() {
        let line = line.context("Failed to read form events from stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (name, text) = line.split_once(' ').unwrap_or((line, ""));
        let field = match name {
            "submit" => {
                code = match form.submit() {
                    Ok(submission) => {
                        presenter.show_age(&submission)?;
                        presenter.finish().await;
                        ExitCode::SUCCESS
                    }
                    Err(errors) => {
                        presenter.show_errors(&errors)?;
                        ExitCode::from(EXIT_INVALID)
                    }
                };
                continue;
            }
            "day" => Field::Day,
            "month" => Field::Month,
            "year" => Field::Year,
            other => bail!("line {}: unknown event `{other}`", n + 1),
        };
        let errors = *form.input(field, text);
        presenter.show_errors(&errors)?;
    }
    Ok(code)
}

fn format(date: &DateArgs, json: bool) -> Result<ExitCode> {
    let Some(formatted) = format_date_string(&date.triple()) else {
        eprintln!("day, month and year must all be numbers");
        return Ok(ExitCode::from(EXIT_INVALID));
    };
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: formatted
            })?
        );
    } else {
        println!("{formatted}");
    }
    Ok(ExitCode::SUCCESS)
}

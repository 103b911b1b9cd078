use agecalc::config::parse_date;
use agecalc::{DateTriple, YearCeiling};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "agecalc", version, about = "Age in years, months and days from a date of birth")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        value_parser = parse_date,
        help = "Use this date (YYYY-MM-DD) as today instead of the system date"
    )]
    pub today: Option<NaiveDate>,
    #[arg(
        long,
        global = true,
        help = "When the latest accepted year is read: startup or per-call"
    )]
    pub year_ceiling: Option<YearCeiling>,
    #[arg(long, global = true, help = "Print the age without the count-up animation")]
    pub no_animate: bool,
    #[command(subcommand)]
    pub command: Commands,
}

/// Raw text of the three form inputs. Omitted flags are blank fields.
#[derive(Args, Debug)]
pub struct DateArgs {
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub day: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub month: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub year: String,
}

impl DateArgs {
    pub fn triple(&self) -> DateTriple {
        DateTriple::parse(&self.day, &self.month, &self.year)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit the form and print the age.
    Calc {
        #[command(flatten)]
        date: DateArgs,
    },
    /// Validate the fields as they would be while typing.
    Check {
        #[command(flatten)]
        date: DateArgs,
    },
    /// Read `<field> <value>` and `submit` events from stdin.
    Form,
    /// Print the date as YYYY-MM-DD.
    Format {
        #[command(flatten)]
        date: DateArgs,
    },
}

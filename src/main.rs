mod commands;
mod render;

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use deskcal_core::config::DeskcalConfig;
use deskcal_core::{CalendarSession, Category, CategoryFilter, DateKey, YearMonth};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "deskcal")]
#[command(about = "Keep per-day events, browse months and search your calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show this month's grid and today's events
    Today {
        /// Only count events in this category ("all" for every category)
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,
    },
    /// Show a month grid
    Month {
        /// Month to show (YYYY-MM, defaults to the current month)
        month: Option<YearMonth>,

        /// Only count events in this category ("all" for every category)
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,
    },
    /// List the events of a day, sorted by time
    Day {
        /// Day to show (YYYY-MM-DD, defaults to today)
        date: Option<DateKey>,

        /// Only list events in this category ("all" for every category)
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Add an event
    Add {
        text: String,

        /// Day of the event (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<DateKey>,

        /// Time of the event (HH:MM, defaults to default_time from config)
        #[arg(short, long)]
        time: Option<String>,

        /// personal, work, holiday or birthday (defaults to default_category from config)
        #[arg(short, long)]
        category: Option<Category>,
    },
    /// Delete an event by its id
    Delete {
        /// Day the event is on (YYYY-MM-DD)
        date: DateKey,

        /// Event id, as shown by `day` and `search`
        id: i64,
    },
    /// Find events whose text contains QUERY (case-insensitive)
    Search {
        query: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the US federal holidays of a year
    Holidays {
        /// Year to list (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Show config and data locations
    Config,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = DeskcalConfig::load().context("Failed to load config")?;

    if let Commands::Config = cli.command {
        return commands::config::run(&config);
    }

    let today = DateKey::new(Local::now().date_naive())
        .context("Today's date is outside the years 0000-9999")?;
    let storage = config.storage()?;
    tracing::debug!(dir = %storage.dir().display(), "opening event store");
    let mut session = CalendarSession::open(storage, today);

    match cli.command {
        Commands::Today { category } => commands::day::today(&mut session, category),
        Commands::Month { month, category } => {
            commands::month::run(&mut session, month, category)
        }
        Commands::Day {
            date,
            category,
            json,
        } => commands::day::run(&mut session, date, category, json),
        Commands::Add {
            text,
            date,
            time,
            category,
        } => commands::add::run(&mut session, &config, text, date, time, category),
        Commands::Delete { date, id } => commands::delete::run(&mut session, date, id),
        Commands::Search { query, json } => {
            commands::search::run(&mut session, query, json)
        }
        Commands::Holidays { year } => {
            let year = year.unwrap_or_else(|| today.date().year());
            commands::holidays::run(session.holidays(), year)
        }
        Commands::Config => commands::config::run(&config),
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_category_defaults_to_all_sentinel() {
        let cli = Cli::try_parse_from(["deskcal", "day", "2025-07-04"]).unwrap();
        match cli.command {
            Commands::Day {
            date,
            category,
            json,
        } => {
                assert_eq!(date, Some(DateKey::parse("2025-07-04").unwrap()));
                assert_eq!(category, CategoryFilter::All);
                assert!(!json);
            }
            _ => panic!("expected day command"),
        }
    }

    #[test]
    fn test_add_parses_typed_arguments() {
        let cli = Cli::try_parse_from([
            "deskcal",
            "add",
            "Picnic",
            "--date",
            "2025-07-04",
            "--time",
            "12:00",
            "-c",
            "personal",
        ])
        .unwrap();

        match cli.command {
            Commands::Add {
                text,
                date,
                time,
                category,
            } => {
                assert_eq!(text, "Picnic");
                assert_eq!(date.unwrap().to_string(), "2025-07-04");
                assert_eq!(time.as_deref(), Some("12:00"));
                assert_eq!(category, Some(Category::Personal));
            }
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn test_bad_date_is_rejected_by_parser() {
        assert!(Cli::try_parse_from(["deskcal", "day", "2025-7-4"]).is_err());
        let args = ["deskcal", "month", "--category", "meetings"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}

use anyhow::{Context, Result};
use deskcal_core::config::DeskcalConfig;
use deskcal_core::event::parse_time;
use deskcal_core::{CalendarSession, Category, DateKey, Storage};
use owo_colors::OwoColorize;

use crate::render::{Render, format_long_date};

/// Fields for a new event after applying config defaults.
#[derive(Debug, PartialEq)]
pub struct NewEvent {
    pub date: DateKey,
    pub time: String,
    pub category: Category,
}

pub fn resolve(
    config: &DeskcalConfig,
    today: DateKey,
    date: Option<DateKey>,
    time: Option<String>,
    category: Option<Category>,
) -> Result<NewEvent> {
    // default_time is already checked when the config is loaded
    let time = match time {
        Some(time) => {
            parse_time(&time).with_context(|| format!("Invalid --time '{}'", time))?
        }
        None => config.default_time.clone(),
    };

    Ok(NewEvent {
        date: date.unwrap_or(today),
        time,
        category: category.unwrap_or(config.default_category),
    })
}

pub fn run<S: Storage>(
    session: &mut CalendarSession<S>,
    config: &DeskcalConfig,
    text: String,
    date: Option<DateKey>,
    time: Option<String>,
    category: Option<Category>,
) -> Result<()> {
    let new = resolve(config, session.today(), date, time, category)?;

    match session.add_event_on(new.date, &text, &new.time, new.category)? {
        Some(event) => {
            println!(
                "{} {} on {}",
                "+".green(),
                event.render(),
                format_long_date(&new.date)
            );
        }
        None => println!("{}", "Nothing added: event text is empty".dimmed()),
    }

    Ok(())
}

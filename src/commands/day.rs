use anyhow::{Context, Result};
use deskcal_core::{CalendarSession, CategoryFilter, DateKey, Storage};

use crate::render::Render;

pub fn run<S: Storage>(
    session: &mut CalendarSession<S>,
    date: Option<DateKey>,
    filter: CategoryFilter,
    json: bool,
) -> Result<()> {
    session.set_filter(filter);
    match date {
        Some(date) => session.select_date(date),
        None => session.go_to_today(),
    }

    let agenda = session.day_agenda();

    if json {
        let out =
            serde_json::to_string_pretty(&agenda).context("Failed to serialize agenda")?;
        println!("{}", out);
    } else {
        println!("{}", agenda.render());
    }

    Ok(())
}

/// Month grid followed by today's agenda.
pub fn today<S: Storage>(
    session: &mut CalendarSession<S>,
    filter: CategoryFilter,
) -> Result<()> {
    session.set_filter(filter);
    session.go_to_today();

    println!("{}", session.month_grid().render());
    println!();
    println!("{}", session.day_agenda().render());
    Ok(())
}

use anyhow::Result;
use deskcal_core::{CalendarSession, DateKey, Storage};
use owo_colors::OwoColorize;

pub fn run<S: Storage>(
    session: &mut CalendarSession<S>,
    date: DateKey,
    id: i64,
) -> Result<()> {
    if session.delete_event(&date, id) {
        println!("{} Deleted #{} from {}", "-".red(), id, date);
    } else {
        println!("{}", format!("No event #{} on {}", id, date).dimmed());
    }
    Ok(())
}

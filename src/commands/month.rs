use anyhow::Result;
use deskcal_core::{CalendarSession, CategoryFilter, Storage, YearMonth};

use crate::render::Render;

pub fn run<S: Storage>(
    session: &mut CalendarSession<S>,
    month: Option<YearMonth>,
    filter: CategoryFilter,
) -> Result<()> {
    session.set_filter(filter);
    if let Some(month) = month {
        session.show_month(month);
    }

    println!("{}", session.month_grid().render());
    Ok(())
}

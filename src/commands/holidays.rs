use anyhow::Result;
use deskcal_core::HolidayTable;
use owo_colors::OwoColorize;

use crate::render::format_long_date;

pub fn run(holidays: &HolidayTable, year: i32) -> Result<()> {
    let listed = holidays.in_year(year);

    if listed.is_empty() {
        println!("{}", format!("No holidays known for {}", year).dimmed());
        return Ok(());
    }

    println!("{}", format!("Holidays {}", year).bold());
    for (date, name) in listed {
        println!("  {:<30} {}", format_long_date(&date), name.red());
    }
    Ok(())
}

//! Terminal rendering for deskcal types.
//!
//! Extension traits that add colored output to deskcal-core types using
//! owo_colors.

use deskcal_core::month::DAY_NAMES;
use deskcal_core::{Category, DateKey, DayAgenda, DayCell, Event, MonthGrid, SearchHit};
use owo_colors::{OwoColorize, Style};

/// Width of one month-grid column, in terminal cells.
const CELL_WIDTH: usize = 6;

pub trait Render {
    fn render(&self) -> String;
}

fn category_style(category: Category) -> Style {
    match category {
        Category::Personal => Style::new().blue(),
        Category::Work => Style::new().yellow(),
        Category::Holiday => Style::new().red(),
        Category::Birthday => Style::new().magenta(),
    }
}

impl Render for Category {
    fn render(&self) -> String {
        format!("[{}]", self)
            .style(category_style(*self))
            .to_string()
    }
}

impl Render for Event {
    fn render(&self) -> String {
        format!(
            "{} {} {} {}",
            self.time.bold(),
            self.text,
            self.category.render(),
            format!("#{}", self.id).dimmed()
        )
    }
}

impl Render for DayCell {
    fn render(&self) -> String {
        let mut style = Style::new();
        if self.holiday.is_some() {
            style = style.red();
        } else if self.is_weekend {
            style = style.dimmed();
        }
        if self.is_today {
            style = style.bold().reversed();
        }
        if self.is_selected {
            style = style.underline();
        }

        let number = format!("{:>2}", self.day);
        let dots = format!("{:<3}", "•".repeat(self.dots()));

        format!(" {}{}", number.style(style), dots.cyan())
    }
}

impl Render for MonthGrid {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        let title = self.month.to_string();
        lines.push(
            format!("{:^width$}", title, width = CELL_WIDTH * 7)
                .bold()
                .to_string(),
        );

        let header: String = DAY_NAMES
            .iter()
            .map(|name| format!(" {:<width$}", name, width = CELL_WIDTH - 1))
            .collect();
        lines.push(header.dimmed().to_string());

        for week in self.weeks() {
            let row: String = week
                .iter()
                .map(|slot| match slot {
                    Some(cell) => cell.render(),
                    None => " ".repeat(CELL_WIDTH),
                })
                .collect();
            lines.push(row.trim_end().to_string());
        }

        let holidays: Vec<&DayCell> = self
            .cells
            .iter()
            .filter(|c| c.holiday.is_some())
            .collect();
        if !holidays.is_empty() {
            lines.push(String::new());
            for cell in holidays {
                if let Some(name) = &cell.holiday {
                    let date = format_short_date(&cell.date);
                    lines.push(format!("  {} {}", date.dimmed(), name.red()));
                }
            }
        }

        lines.join("\n")
    }
}

impl Render for DayAgenda {
    fn render(&self) -> String {
        let mut lines = vec![format_long_date(&self.date).bold().to_string()];

        if let Some(holiday) = &self.holiday {
            lines.push(format!("🎉 {}", holiday).red().to_string());
        }

        if self.is_empty() {
            lines.push("   No events scheduled".dimmed().to_string());
            lines.push("   Run `deskcal add` to create one".dimmed().to_string());
        } else if self.events.is_empty() {
            if let Some(holiday) = &self.holiday {
                lines.push(format!("   It's {}!", holiday));
            }
        }

        for event in &self.events {
            lines.push(format!("   {}", event.render()));
        }

        lines.join("\n")
    }
}

impl Render for SearchHit {
    fn render(&self) -> String {
        format!(
            "{}  {}",
            format!("{:<12}", format_short_date(&self.date)).dimmed(),
            self.event.render()
        )
    }
}

/// Render search results under a count header.
pub fn render_search(hits: &[SearchHit]) -> String {
    let mut lines = vec![format!("Search Results ({})", hits.len()).bold().to_string()];

    if hits.is_empty() {
        lines.push("   No events found".dimmed().to_string());
    }

    lines.extend(hits.iter().map(|hit| format!("   {}", hit.render())));
    lines.join("\n")
}

/// e.g. "Friday, July 4, 2025"
pub fn format_long_date(date: &DateKey) -> String {
    date.date().format("%A, %B %-d, %Y").to_string()
}

/// e.g. "Jul 4, 2025"
pub fn format_short_date(date: &DateKey) -> String {
    date.date().format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskcal_core::{CategoryFilter, EventStore, HolidayTable, YearMonth};

    fn key(s: &str) -> DateKey {
        DateKey::parse(s).unwrap()
    }

    #[test]
    fn test_date_formats() {
        assert_eq!(format_long_date(&key("2025-07-04")), "Friday, July 4, 2025");
        assert_eq!(format_short_date(&key("2025-07-04")), "Jul 4, 2025");
    }

    #[test]
    fn test_month_render_has_title_header_and_weeks() {
        let grid = MonthGrid::build(
            YearMonth::new(2025, 7).unwrap(),
            key("2025-07-15"),
            key("2025-07-15"),
            &EventStore::new(),
            CategoryFilter::All,
            &HolidayTable::default(),
        );

        let out = grid.render();
        assert!(out.contains("July 2025"));
        assert!(out.contains("Sun"));
        assert!(out.contains("31"));
        assert!(out.contains("Independence Day"));
    }

    #[test]
    fn test_agenda_empty_state() {
        let agenda = DayAgenda {
            date: key("2025-03-12"),
            holiday: None,
            events: vec![],
        };
        assert!(agenda.render().contains("No events scheduled"));
    }

    #[test]
    fn test_agenda_holiday_only() {
        let agenda = DayAgenda {
            date: key("2025-12-25"),
            holiday: Some("Christmas Day".to_string()),
            events: vec![],
        };

        let out = agenda.render();
        assert!(out.contains("It's Christmas Day!"));
        assert!(!out.contains("No events scheduled"));
    }

    #[test]
    fn test_search_render_counts_hits() {
        let mut store = EventStore::new();
        let date = key("2025-02-03");
        store.add_event_at(date, "Team Meeting", "10:00", Category::Work, 42);

        let out = render_search(&store.search("meet"));
        assert!(out.contains("Search Results (1)"));
        assert!(out.contains("Team Meeting"));
        assert!(out.contains("#42"));

        assert!(render_search(&[]).contains("No events found"));
    }
}

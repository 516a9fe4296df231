//! The state a calendar front-end owns between user actions.

use serde::Serialize;

use crate::date_key::DateKey;
use crate::error::DeskcalResult;
use crate::event::{Category, CategoryFilter, Event, parse_time};
use crate::holidays::HolidayTable;
use crate::month::{MonthGrid, YearMonth};
use crate::storage::{self, Storage};
use crate::store::{EventStore, SearchHit, filter_by_category, sort_by_time};

/// What the day panel shows for the selected date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayAgenda {
    pub date: DateKey,
    pub holiday: Option<String>,
    /// Filtered by the active category, sorted by time
    pub events: Vec<Event>,
}

impl DayAgenda {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.holiday.is_none()
    }
}

/// Event store plus navigation, filter and search state.
///
/// Every successful add and every delete writes the whole store back to
/// `storage` before returning.
pub struct CalendarSession<S: Storage> {
    storage: S,
    store: EventStore,
    holidays: HolidayTable,
    today: DateKey,
    month: YearMonth,
    selected: DateKey,
    filter: CategoryFilter,
    query: String,
}

impl<S: Storage> CalendarSession<S> {
    /// Load the persisted store and start on `today`.
    pub fn open(storage: S, today: DateKey) -> Self {
        let store = storage::load(&storage);

        CalendarSession {
            storage,
            store,
            holidays: HolidayTable::default(),
            today,
            month: YearMonth::of(today),
            selected: today,
            filter: CategoryFilter::All,
            query: String::new(),
        }
    }

    pub fn with_holidays(mut self, holidays: HolidayTable) -> Self {
        self.holidays = holidays;
        self
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn holidays(&self) -> &HolidayTable {
        &self.holidays
    }

    pub fn today(&self) -> DateKey {
        self.today
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn selected(&self) -> DateKey {
        self.selected
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn previous_month(&mut self) {
        self.month = self.month.previous();
    }

    pub fn next_month(&mut self) {
        self.month = self.month.next();
    }

    pub fn show_month(&mut self, month: YearMonth) {
        self.month = month;
    }

    pub fn go_to_today(&mut self) {
        self.month = YearMonth::of(self.today);
        self.selected = self.today;
    }

    /// Show the month containing `date` and select it.
    pub fn select_date(&mut self, date: DateKey) {
        self.month = YearMonth::of(date);
        self.selected = date;
    }

    /// Show and select the date typed as `YYYY-MM-DD`.
    ///
    /// Returns false and changes nothing when the input is not a date.
    pub fn jump_to(&mut self, input: &str) -> bool {
        match DateKey::parse(input.trim()) {
            Ok(date) => {
                self.select_date(date);
                true
            }
            Err(e) => {
                tracing::debug!("ignoring jump: {}", e);
                false
            }
        }
    }

    /// Select a day of the displayed month. Days the month lacks are ignored.
    pub fn select_day(&mut self, day: u32) -> bool {
        match self.month.day(day) {
            Some(date) => {
                self.selected = date;
                true
            }
            None => false,
        }
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add an event on the selected date. Blank text adds nothing.
    ///
    /// `time` is stored as zero-padded `HH:MM`; anything that is not a
    /// 24-hour time is an error.
    pub fn add_event(
        &mut self,
        text: &str,
        time: &str,
        category: Category,
    ) -> DeskcalResult<Option<Event>> {
        self.add_event_on(self.selected, text, time, category)
    }

    pub fn add_event_on(
        &mut self,
        date: DateKey,
        text: &str,
        time: &str,
        category: Category,
    ) -> DeskcalResult<Option<Event>> {
        let time = parse_time(time)?;

        let Some(event) = self.store.add_event(date, text, &time, category) else {
            return Ok(None);
        };
        storage::persist(&mut self.storage, &self.store);
        Ok(Some(event))
    }

    pub fn delete_event(&mut self, date: &DateKey, id: i64) -> bool {
        let removed = self.store.delete_event(date, id);
        storage::persist(&mut self.storage, &self.store);
        removed
    }

    // =========================================================================
    // Views
    // =========================================================================

    pub fn day_agenda(&self) -> DayAgenda {
        self.agenda_for(self.selected)
    }

    pub fn agenda_for(&self, date: DateKey) -> DayAgenda {
        let filtered = filter_by_category(self.store.events_on(&date), self.filter);

        DayAgenda {
            date,
            holiday: self.holidays.get(&date).map(str::to_string),
            events: sort_by_time(&filtered),
        }
    }

    pub fn search_results(&self) -> Vec<SearchHit> {
        self.store.search(&self.query)
    }

    pub fn month_grid(&self) -> MonthGrid {
        MonthGrid::build(
            self.month,
            self.today,
            self.selected,
            &self.store,
            self.filter,
            &self.holidays,
        )
    }
}

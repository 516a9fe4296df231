/// Storage slot holding the serialized event store.
pub const EVENTS_KEY: &str = "ubuntu_calendar_events";

/// Time pre-filled for new events.
pub const DEFAULT_EVENT_TIME: &str = "09:00";

/// Most event markers drawn in a single month-grid cell.
pub const MAX_EVENT_DOTS: usize = 3;

/// Years covered by the built-in holiday table.
pub const HOLIDAY_FIRST_YEAR: i32 = 2024;
pub const HOLIDAY_LAST_YEAR: i32 = 2026;

//! Core types for deskcal.
//!
//! This crate holds everything the terminal front-end drives:
//! - `EventStore` and its date-keyed events
//! - `storage` for mirroring the store into a single string slot
//! - `HolidayTable` and `MonthGrid` for the month view
//! - `CalendarSession`, the state object the front-end owns

pub mod config;
pub mod constants;
pub mod date_key;
pub mod error;
pub mod event;
pub mod holidays;
pub mod month;
pub mod session;
pub mod storage;
pub mod store;

pub use date_key::DateKey;
pub use error::{DeskcalError, DeskcalResult};
pub use event::{Category, CategoryFilter, Event};
pub use holidays::HolidayTable;
pub use month::{DayCell, MonthGrid, YearMonth};
pub use session::{CalendarSession, DayAgenda};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{EventStore, SearchHit};

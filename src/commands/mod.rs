pub mod add;
pub mod config;
pub mod day;
pub mod delete;
pub mod holidays;
pub mod month;
pub mod search;

//! Calendar transformations: flattening the month buckets of a response,
//! ordering events by date and grouping them back into month sections.

pub mod group;
pub mod sort;

pub use group::{group_by_month, treatment_for, MonthGroup, MonthOrder, Treatment};
pub use sort::{flatten_calendar, sort_by_scheduled_date};

pub mod daily_entry;
pub mod year_month;

pub mod date;
pub mod formatting;
pub mod table;
pub mod time;

pub use formatting::{display_value, time_only};

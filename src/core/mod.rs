pub mod calendar;
pub mod lanes;
pub mod loader;
pub mod pagination;
pub mod reminders;
pub mod session;

pub use lanes::assign_lanes;
pub use loader::{LoadOutcome, LoadStatus, PageLoader, PageView};
pub use pagination::{PageQuery, PageResult, TablePager, total_pages};

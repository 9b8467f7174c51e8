pub mod config;
pub mod init;
pub mod layout;
pub mod reminders;
pub mod session;
pub mod timesheets;

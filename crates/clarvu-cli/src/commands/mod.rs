pub mod activity;
pub mod config;
pub mod reminder;
pub mod session;

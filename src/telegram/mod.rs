pub mod bot;
pub mod commands;
pub mod documents;
pub mod formatters;

pub use bot::run_telegram_bot;

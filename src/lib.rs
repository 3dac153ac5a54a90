pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod output;
pub mod sheet;
pub mod telegram;
pub mod utils;

pub use config::Config;
pub use converter::{convert, Categorized, Category, PushEntry};
pub use error::{ConverterError, Result, StructureIssue};
pub use sheet::SourceSheet;

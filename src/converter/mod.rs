pub mod flat;
pub mod layout;
pub mod models;
mod validate;

pub use flat::convert;
pub use layout::build_push_documents;
pub use models::{Categorized, Category, Push, PushDocument, PushEntry, Translations};

use crate::error::Result;
use crate::sheet::SourceSheet;

/// Check a sheet's structure without building any output.
///
/// Returns the language codes found, in sheet order.
pub fn check(sheet: &SourceSheet) -> Result<SheetSummary> {
    let layout = validate::read_layout(sheet)?;
    Ok(SheetSummary {
        languages: layout.languages,
        categories: layout.categories.into_iter().map(|c| c.name).collect(),
        blocks: layout.blocks.len(),
        duplicates: layout.duplicates,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSummary {
    pub languages: Vec<String>,
    pub categories: Vec<String>,
    /// Title/message pairs in the sheet.
    pub blocks: usize,
    pub duplicates: Vec<String>,
}

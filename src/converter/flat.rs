use tracing::{debug, warn};

use crate::converter::models::{Categorized, Category};
use crate::converter::validate::read_layout;
use crate::error::Result;
use crate::sheet::SourceSheet;

/// Convert a push sheet into one language map per category column.
///
/// A language code repeated within the sheet overwrites its earlier
/// title/message in every category.
pub fn convert(sheet: &SourceSheet) -> Result<Categorized<Category>> {
    let layout = read_layout(sheet)?;

    if !layout.duplicates.is_empty() {
        warn!(
            "Repeated language codes, later rows win: {}",
            layout.duplicates.join(", ")
        );
    }

    let mut result = Categorized::new();
    for column in &layout.categories {
        let mut category = Category::new(column.name.clone());
        for block in &layout.blocks {
            category.translations.insert(block.entry(column.index));
        }
        debug!(
            "Category '{}': {} languages",
            category.name,
            category.translations.len()
        );
        result.push(column.name.clone(), category);
    }

    Ok(result)
}

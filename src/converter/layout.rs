use tracing::debug;

use crate::converter::models::{Categorized, Push, PushDocument};
use crate::converter::validate::read_layout;
use crate::error::Result;
use crate::sheet::SourceSheet;

/// Build numbered push documents for every category column.
///
/// The sheet's first language opens each push: whenever that code shows up
/// again a new `push_NNN` starts. Inside one push a repeated code replaces
/// the earlier entry.
pub fn build_push_documents(sheet: &SourceSheet) -> Result<Categorized<PushDocument>> {
    let layout = read_layout(sheet)?;
    let lead = layout.languages.first().cloned().unwrap_or_default();

    let mut result = Categorized::new();
    for column in &layout.categories {
        let mut pushes: Vec<Push> = Vec::new();
        let mut current = Push::new(1);

        for block in &layout.blocks {
            if block.code == lead && !current.translations.is_empty() {
                let next = Push::new(pushes.len() + 2);
                debug!("{} starts at row {}", next.id, block.row);
                pushes.push(std::mem::replace(&mut current, next));
            }
            current.translations.insert(block.entry(column.index));
        }
        if !current.translations.is_empty() {
            pushes.push(current);
        }

        debug!("Category '{}': {} pushes", column.name, pushes.len());
        result.push(
            column.name.clone(),
            PushDocument {
                languages: layout.languages.clone(),
                pushes,
            },
        );
    }

    Ok(result)
}

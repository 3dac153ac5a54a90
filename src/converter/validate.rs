use std::collections::HashSet;

use crate::converter::models::PushEntry;
use crate::error::StructureIssue;
use crate::output::category_key;
use crate::sheet::SourceSheet;

/// Sheet rows are reported 1-based; with no rows above the header the first
/// data row is row 2.
const FIRST_DATA_ROW: usize = 2;

/// A title row and its message row.
#[derive(Debug)]
pub(crate) struct LanguageBlock<'a> {
    pub code: String,
    pub row: usize,
    title: &'a [String],
    message: &'a [String],
}

impl LanguageBlock<'_> {
    pub fn entry(&self, column: usize) -> PushEntry {
        PushEntry::new(
            self.code.clone(),
            SourceSheet::cell(self.title, column),
            SourceSheet::cell(self.message, column),
        )
    }
}

#[derive(Debug)]
pub(crate) struct CategoryColumn {
    pub index: usize,
    pub name: String,
}

/// Validated shape of a push sheet.
#[derive(Debug)]
pub(crate) struct SheetLayout<'a> {
    pub categories: Vec<CategoryColumn>,
    pub blocks: Vec<LanguageBlock<'a>>,
    /// Distinct language codes, first appearance order.
    pub languages: Vec<String>,
    /// Codes that occur in more than one block.
    pub duplicates: Vec<String>,
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|c| c.trim().is_empty())
}

pub(crate) fn read_layout(sheet: &SourceSheet) -> Result<SheetLayout<'_>, StructureIssue> {
    let mut data = sheet.rows();
    while let Some((last, rest)) = data.split_last() {
        if !is_blank(last) {
            break;
        }
        data = rest;
    }

    if data.is_empty() {
        return Err(StructureIssue::EmptySheet);
    }

    let width = sheet.width();
    if width < 2 {
        return Err(StructureIssue::MissingCategoryColumns);
    }

    let mut categories: Vec<CategoryColumn> = Vec::new();
    for index in 1..width {
        let name = SourceSheet::cell(sheet.header(), index).trim();
        if name.is_empty() {
            let column_has_data = data
                .iter()
                .any(|row| !SourceSheet::cell(row, index).trim().is_empty());
            if column_has_data {
                return Err(StructureIssue::BlankCategoryHeader { column: index + 1 });
            }
            continue;
        }
        let key = category_key(name);
        if let Some(existing) = categories.iter().find(|c| category_key(&c.name) == key) {
            return Err(StructureIssue::DuplicateCategory {
                name: name.to_string(),
                existing: existing.name.clone(),
            });
        }
        categories.push(CategoryColumn {
            index,
            name: name.to_string(),
        });
    }

    if categories.is_empty() {
        return Err(StructureIssue::MissingCategoryColumns);
    }

    let first_data_row = FIRST_DATA_ROW + sheet.row_offset();
    let mut blocks = Vec::with_capacity(data.len() / 2);
    let mut languages: Vec<String> = Vec::new();
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    for (pair_idx, pair) in data.chunks(2).enumerate() {
        let row = first_data_row + pair_idx * 2;
        let title = &pair[0];

        let code = SourceSheet::cell(title, 0).trim();
        if code.is_empty() {
            return Err(StructureIssue::MissingLanguageCode { row });
        }

        let message = match pair.get(1) {
            Some(message) => message,
            None => {
                return Err(StructureIssue::IncompleteLanguageBlock {
                    code: code.to_string(),
                    row,
                })
            }
        };

        let next_code = SourceSheet::cell(message, 0).trim();
        if !next_code.is_empty() {
            return Err(StructureIssue::UnexpectedLanguageCode {
                previous: code.to_string(),
                code: next_code.to_string(),
                row: row + 1,
            });
        }

        if seen.insert(code.to_string()) {
            languages.push(code.to_string());
        } else if !duplicates.iter().any(|d| d == code) {
            duplicates.push(code.to_string());
        }

        blocks.push(LanguageBlock {
            code: code.to_string(),
            row,
            title,
            message,
        });
    }

    Ok(SheetLayout {
        categories,
        blocks,
        languages,
        duplicates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(rows: Vec<Vec<&str>>) -> SourceSheet {
        SourceSheet::from_rows(rows)
    }

    #[test]
    fn test_header_only_is_empty() {
        let s = sheet(vec![vec!["lang", "promo"]]);
        assert_eq!(read_layout(&s).unwrap_err(), StructureIssue::EmptySheet);
    }

    #[test]
    fn test_trailing_blank_rows_ignored() {
        let s = sheet(vec![
            vec!["lang", "promo"],
            vec!["en", "Hi"],
            vec!["", "There"],
            vec!["", ""],
            vec!["  ", ""],
        ]);
        let layout = read_layout(&s).unwrap();
        assert_eq!(layout.blocks.len(), 1);
    }

    #[test]
    fn test_blank_message_row_still_pairs() {
        let s = sheet(vec![
            vec!["lang", "promo"],
            vec!["en", "Hi"],
            vec!["", ""],
            vec!["de", "Hallo"],
            vec!["", "Willkommen"],
        ]);
        let layout = read_layout(&s).unwrap();
        assert_eq!(layout.languages, ["en", "de"]);
        assert_eq!(layout.blocks[0].entry(1).message, "");
        assert_eq!(layout.blocks[1].row, 4);
    }

    #[test]
    fn test_single_column_rejected() {
        let s = sheet(vec![vec!["lang"], vec!["en"], vec![""]]);
        assert_eq!(
            read_layout(&s).unwrap_err(),
            StructureIssue::MissingCategoryColumns
        );
    }

    #[test]
    fn test_blank_header_with_data_rejected() {
        let s = sheet(vec![
            vec!["lang", "promo", ""],
            vec!["en", "Hi", "x"],
            vec!["", "There", "y"],
        ]);
        assert_eq!(
            read_layout(&s).unwrap_err(),
            StructureIssue::BlankCategoryHeader { column: 3 }
        );
    }

    #[test]
    fn test_blank_empty_column_skipped() {
        let s = sheet(vec![
            vec!["lang", "", "promo"],
            vec!["en", "", "Hi"],
            vec!["", "", "There"],
        ]);
        let layout = read_layout(&s).unwrap();
        assert_eq!(layout.categories.len(), 1);
        assert_eq!(layout.categories[0].index, 2);
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let s = sheet(vec![
            vec!["lang", "promo", "promo"],
            vec!["en", "a", "b"],
            vec!["", "c", "d"],
        ]);
        assert!(matches!(
            read_layout(&s).unwrap_err(),
            StructureIssue::DuplicateCategory { .. }
        ));
    }

    #[test]
    fn test_categories_differing_only_in_case_collide() {
        let s = sheet(vec![
            vec!["lang", "Promo", "promo"],
            vec!["en", "a", "b"],
            vec!["", "c", "d"],
        ]);
        assert_eq!(
            read_layout(&s).unwrap_err(),
            StructureIssue::DuplicateCategory {
                name: "promo".into(),
                existing: "Promo".into(),
            }
        );
    }

    #[test]
    fn test_ampersand_spelling_collides() {
        let s = sheet(vec![
            vec!["lang", "Sport & Bets", "sport and bets"],
            vec!["en", "a", "b"],
            vec!["", "c", "d"],
        ]);
        assert!(matches!(
            read_layout(&s).unwrap_err(),
            StructureIssue::DuplicateCategory { .. }
        ));
    }

    #[test]
    fn test_missing_code_on_title_row() {
        let s = sheet(vec![
            vec!["lang", "promo"],
            vec!["en", "Hi"],
            vec!["", "There"],
            vec!["", "Orphan"],
            vec!["", "Row"],
        ]);
        assert_eq!(
            read_layout(&s).unwrap_err(),
            StructureIssue::MissingLanguageCode { row: 4 }
        );
    }

    #[test]
    fn test_row_numbers_include_offset() {
        let s = sheet(vec![
            vec!["lang", "promo"],
            vec!["en", "Hi"],
            vec!["", "There"],
            vec!["", "Orphan"],
            vec!["", "Row"],
        ])
        .with_row_offset(3);
        assert_eq!(
            read_layout(&s).unwrap_err(),
            StructureIssue::MissingLanguageCode { row: 7 }
        );
    }

    #[test]
    fn test_code_where_message_expected() {
        let s = sheet(vec![
            vec!["lang", "promo"],
            vec!["en", "Hi"],
            vec!["de", "Hallo"],
        ]);
        assert_eq!(
            read_layout(&s).unwrap_err(),
            StructureIssue::UnexpectedLanguageCode {
                previous: "en".into(),
                code: "de".into(),
                row: 3,
            }
        );
    }

    #[test]
    fn test_odd_row_count() {
        let s = sheet(vec![
            vec!["lang", "promo"],
            vec!["en", "Hi"],
            vec!["", "There"],
            vec!["de", "Hallo"],
        ]);
        assert_eq!(
            read_layout(&s).unwrap_err(),
            StructureIssue::IncompleteLanguageBlock {
                code: "de".into(),
                row: 4,
            }
        );
    }

    #[test]
    fn test_duplicates_recorded_once() {
        let s = sheet(vec![
            vec!["lang", "promo"],
            vec!["en", "1"],
            vec!["", "a"],
            vec!["en", "2"],
            vec!["", "b"],
            vec!["en", "3"],
            vec!["", "c"],
        ]);
        let layout = read_layout(&s).unwrap();
        assert_eq!(layout.languages, ["en"]);
        assert_eq!(layout.duplicates, ["en"]);
        assert_eq!(layout.blocks.len(), 3);
    }
}

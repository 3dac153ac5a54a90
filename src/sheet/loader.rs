use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Reader, Sheets};
use tracing::debug;

use crate::error::{ConverterError, Result};
use crate::sheet::{cell_text, SourceSheet};

impl SourceSheet {
    /// Read the first worksheet of a workbook on disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening workbook {}", path.display());
        let mut workbook = open_workbook_auto(path)?;
        Self::from_workbook(&mut workbook)
    }

    /// Read the first worksheet of an in-memory workbook (xlsx, xls, xlsb, ods).
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        debug!("Reading workbook from {} bytes", bytes.len());
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
        Self::from_workbook(&mut workbook)
    }

    fn from_workbook<RS: Read + Seek>(workbook: &mut Sheets<RS>) -> Result<Self> {
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ConverterError::Workbook("workbook has no sheets".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;

        // calamine trims leading empty rows and columns; pad the columns back
        // so the language column stays at index 0, remember the rows.
        let (leading_rows, leading_cols) = range
            .start()
            .map(|(row, col)| (row as usize, col as usize))
            .unwrap_or((0, 0));

        let rows = range.rows().map(|row| {
            std::iter::repeat(String::new())
                .take(leading_cols)
                .chain(row.iter().map(cell_text))
                .collect::<Vec<String>>()
        });

        let sheet = SourceSheet::from_rows(rows).with_row_offset(leading_rows);
        debug!(
            "Sheet '{}': {} columns, {} data rows",
            sheet_name,
            sheet.width(),
            sheet.rows().len()
        );
        Ok(sheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_workbook_error() {
        let err = SourceSheet::from_bytes(b"definitely not a spreadsheet".to_vec()).unwrap_err();
        assert!(matches!(err, ConverterError::Workbook(_)));
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(SourceSheet::open("/nonexistent/push.xlsx").is_err());
    }
}

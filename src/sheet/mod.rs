pub mod cell;
pub mod loader;

pub use cell::cell_text;

/// A worksheet flattened to text. Row 0 is the header, the rest is data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceSheet {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    /// Worksheet rows above the header that were not read.
    row_offset: usize,
}

impl SourceSheet {
    /// Build a sheet from raw rows; the first row becomes the header.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = Vec<C>>,
        C: Into<String>,
    {
        let mut iter = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect::<Vec<String>>());

        let header = iter.next().unwrap_or_default();
        Self {
            header,
            rows: iter.collect(),
            row_offset: 0,
        }
    }

    /// Record how many worksheet rows sit above the header, so reported
    /// row numbers match what the user sees.
    pub fn with_row_offset(mut self, row_offset: usize) -> Self {
        self.row_offset = row_offset;
        self
    }

    pub fn row_offset(&self) -> usize {
        self.row_offset
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows below the header.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Widest row in the sheet, header included.
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0)
    }

    /// Cell text, empty when the row is shorter than `col`.
    pub fn cell(row: &[String], col: usize) -> &str {
        row.get(col).map(String::as_str).unwrap_or("")
    }
}

use thiserror::Error;

/// Why a sheet does not follow the language/title/message layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureIssue {
    #[error("the sheet has no data rows")]
    EmptySheet,

    #[error("the sheet needs a language column and at least one category column")]
    MissingCategoryColumns,

    #[error("category column {column} has no header")]
    BlankCategoryHeader { column: usize },

    #[error("category '{name}' would write the same file as '{existing}'")]
    DuplicateCategory { name: String, existing: String },

    #[error("row {row}: language code missing in the first column")]
    MissingLanguageCode { row: usize },

    #[error("language '{code}' (row {row}) is not followed by a message row")]
    IncompleteLanguageBlock { code: String, row: usize },

    #[error("row {row}: expected the message row for '{previous}', found language '{code}'")]
    UnexpectedLanguageCode {
        previous: String,
        code: String,
        row: usize,
    },
}

#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("Invalid sheet structure: {0}")]
    InvalidStructure(#[from] StructureIssue),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Download failed: {0}")]
    Download(#[from] teloxide::DownloadError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<calamine::Error> for ConverterError {
    fn from(e: calamine::Error) -> Self {
        ConverterError::Workbook(e.to_string())
    }
}

impl ConverterError {
    /// True for problems the user can fix by uploading a corrected file.
    pub fn is_user_error(&self) -> bool {
        matches!(self, ConverterError::InvalidStructure(_) | ConverterError::Workbook(_))
    }
}

pub type Result<T> = std::result::Result<T, ConverterError>;

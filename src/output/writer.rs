use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::converter::{build_push_documents, convert};
use crate::error::Result;
use crate::sheet::SourceSheet;

/// Shape of each category's JSON file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputLayout {
    /// `{ "<lang>": { "title", "message" } }`
    #[default]
    Flat,
    /// `{ "languages": [...], "pushes": [{ "id", "translations" }] }`
    Pushes,
}

/// One rendered category document, ready to be written or sent.
#[derive(Debug, Clone)]
pub struct CategoryFile {
    pub category: String,
    pub file_name: String,
    pub json: String,
    /// Number of pushes; the flat layout has none.
    pub pushes: Option<usize>,
    pub languages: usize,
}

/// Normalized category name used in file names. Two categories with the
/// same key would write the same file.
pub fn category_key(category: &str) -> String {
    category
        .trim()
        .to_lowercase()
        .replace('&', "and")
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// File name for a category: `betting_push.json` for category "Betting"
/// from `push.xlsx`.
pub fn category_file_name(category: &str, source_file_name: &str) -> String {
    let base = source_file_name.split('.').next().unwrap_or_default();
    format!("{}_{}.json", category_key(category), base)
}

/// Convert a sheet and serialize every category with the chosen layout.
pub fn render(
    sheet: &SourceSheet,
    layout: OutputLayout,
    source_file_name: &str,
) -> Result<Vec<CategoryFile>> {
    let mut files = Vec::new();

    match layout {
        OutputLayout::Flat => {
            for (name, category) in convert(sheet)?.iter() {
                let languages = category.translations.len();
                files.push(CategoryFile {
                    category: name.to_string(),
                    file_name: category_file_name(name, source_file_name),
                    json: serde_json::to_string_pretty(category)?,
                    pushes: None,
                    languages,
                });
            }
        }
        OutputLayout::Pushes => {
            for (name, document) in build_push_documents(sheet)?.iter() {
                files.push(CategoryFile {
                    category: name.to_string(),
                    file_name: category_file_name(name, source_file_name),
                    json: serde_json::to_string_pretty(document)?,
                    pushes: Some(document.pushes.len()),
                    languages: document.languages.len(),
                });
            }
        }
    }

    debug!("Rendered {} category files ({:?})", files.len(), layout);
    Ok(files)
}

/// Write rendered files into `dir`, creating it if needed.
pub fn write_all(dir: impl AsRef<Path>, files: &[CategoryFile]) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(&file.file_name);
        fs::write(&path, &file.json)?;
        info!("Saved category '{}' to {}", file.category, path.display());
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> SourceSheet {
        SourceSheet::from_rows(vec![
            vec!["lang", "Dating & Chat", "Webcam"],
            vec!["en", "Hey", "Live now"],
            vec!["", "Someone waves", "Join the stream"],
            vec!["ru", "Привет", "В эфире"],
            vec!["", "Вам помахали", "Присоединяйтесь"],
        ])
    }

    #[test]
    fn test_category_file_name() {
        assert_eq!(category_file_name("Betting", "push.xlsx"), "betting_push.json");
        assert_eq!(
            category_file_name("Dating Adult", "march.push.xls"),
            "dating_adult_march.json"
        );
        assert_eq!(category_file_name("Sport & Bets", "p.xlsx"), "sport_and_bets_p.json");
        assert_eq!(category_file_name("promo", "noext"), "promo_noext.json");
    }

    #[test]
    fn test_render_flat_keeps_unicode() {
        let files = render(&sheet(), OutputLayout::Flat, "push.xlsx").unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].file_name, "dating_and_chat_push.json");
        assert!(files[0].json.contains("Привет"));
        assert!(files[0].json.starts_with("{\n  \"en\": {"));
        assert_eq!(files[1].languages, 2);
    }

    #[test]
    fn test_render_pushes_counts() {
        let files = render(&sheet(), OutputLayout::Pushes, "push.xlsx").unwrap();
        assert_eq!(files[1].category, "Webcam");
        assert_eq!(files[1].pushes, Some(1));
        assert_eq!(files[1].languages, 2);
        let value: serde_json::Value = serde_json::from_str(&files[1].json).unwrap();
        assert_eq!(value["pushes"][0]["translations"]["ru"]["message"], "Присоединяйтесь");
    }

    #[test]
    fn test_flat_layout_has_no_push_count() {
        let files = render(&sheet(), OutputLayout::Flat, "push.xlsx").unwrap();
        assert!(files.iter().all(|f| f.pushes.is_none()));
    }

    #[test]
    fn test_path_separators_stay_in_file_name() {
        assert_eq!(category_file_name("Dating/Adult", "push.xlsx"), "dating_adult_push.json");
        assert_eq!(category_file_name("../etc", "push.xlsx"), ".._etc_push.json");
        assert_eq!(category_file_name("a\\b:c?", "push.xlsx"), "a_b_c__push.json");
    }

    #[test]
    fn test_slash_category_written_inside_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let sheet = SourceSheet::from_rows(vec![
            vec!["lang", "Dating/Adult", "../Escape"],
            vec!["en", "Hey", "Out"],
            vec!["", "Someone waves", "Nope"],
        ]);
        let files = render(&sheet, OutputLayout::Flat, "push.xlsx").unwrap();
        let written = write_all(dir.path(), &files).unwrap();

        assert_eq!(written.len(), 2);
        for path in &written {
            assert_eq!(path.parent(), Some(dir.path()));
            assert!(path.is_file());
        }
        assert!(dir.path().join("dating_adult_push.json").is_file());
    }

    #[test]
    fn test_colliding_file_names_rejected() {
        let sheet = SourceSheet::from_rows(vec![
            vec!["lang", "Promo", "promo", "Sport & Bets", "sport and bets"],
            vec!["en", "a", "b", "c", "d"],
            vec!["", "e", "f", "g", "h"],
        ]);
        let err = render(&sheet, OutputLayout::Flat, "push.xlsx").unwrap_err();
        assert!(matches!(
            err,
            crate::error::ConverterError::InvalidStructure(
                crate::error::StructureIssue::DuplicateCategory { .. }
            )
        ));
    }

    #[test]
    fn test_write_all_creates_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let files = render(&sheet(), OutputLayout::Flat, "push.xlsx").unwrap();

        let written = write_all(&out, &files).unwrap();
        assert_eq!(written.len(), 2);
        let body = std::fs::read_to_string(out.join("webcam_push.json")).unwrap();
        assert!(body.contains("Join the stream"));
    }

    #[test]
    fn test_layout_from_config_value() {
        #[derive(Deserialize)]
        struct Wrapper {
            layout: OutputLayout,
        }
        let w: Wrapper = toml::from_str("layout = \"pushes\"").unwrap();
        assert_eq!(w.layout, OutputLayout::Pushes);
    }
}

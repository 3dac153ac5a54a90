use teloxide::utils::markdown::{bold, code_inline, escape, italic};

use crate::converter::SheetSummary;
use crate::output::CategoryFile;

/// Extensions accepted as uploads.
pub const EXCEL_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

pub fn is_excel_file_name(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| {
            EXCEL_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

pub fn welcome_message() -> String {
    format!(
        "🎯 {}\n\n{}\n\n{}\n1️⃣ {}\n2️⃣ {}\n\n{}",
        bold(&escape("Push Notifications Converter Bot")),
        italic(&escape(
            "Hi! I convert Excel sheets with push notifications into JSON."
        )),
        bold(&escape("How to use:")),
        escape("Send an Excel file (.xlsx or .xls)"),
        escape("Get one JSON file per category back ✨"),
        escape("Use /help to see the expected sheet layout."),
    )
}

pub fn help_message(max_file_size_mb: u32) -> String {
    format!(
        "📖 {}\n\n{}\n{}\n{}\n{}\n\n{}\n{}\n{}\n\n{}\n{}",
        bold(&escape("Sheet layout")),
        escape("• Column A: language codes (en, ar, de, es, fr, ...)"),
        escape("• Other columns: one category each (Betting, Gambling, Dating, ...)"),
        escape("• Every language takes two rows: the title row carries the code, the message row below leaves column A empty"),
        escape("• Row 1 is the header with the category names"),
        bold(&escape("Limits")),
        escape("• Formats: .xlsx, .xls"),
        escape(&format!("• Maximum size: {} MB", max_file_size_mb)),
        bold(&escape("Output")),
        escape("Each category comes back as its own JSON file mapping language code to title and message."),
    )
}

pub fn send_file_hint() -> String {
    format!(
        "📤 {}\n\n{}",
        bold(&escape("Send an Excel file")),
        escape("To convert push notifications, send an .xlsx or .xls file. Need help? Use /help."),
    )
}

pub fn processing_message() -> String {
    format!(
        "🔄 {}\n\n{}",
        bold(&escape("Processing file...")),
        italic(&escape("Converting the sheet into JSON, this may take a few seconds ⏳")),
    )
}

pub fn too_large_message(max_file_size_mb: u32) -> String {
    format!(
        "❌ {}\n\n{}",
        bold(&escape("File too large")),
        escape(&format!("Maximum size: {} MB", max_file_size_mb)),
    )
}

pub fn unsupported_format_message(file_name: &str) -> String {
    format!(
        "❌ {}\n\n{} {}\n{}",
        bold(&escape("Unsupported file")),
        code_inline(file_name),
        escape("is not an Excel file."),
        escape("Send an .xlsx or .xls file."),
    )
}

pub fn invalid_file_message(reason: &str) -> String {
    format!(
        "❌ {}\n\n{}\n\n{}",
        bold(&escape("Invalid file")),
        escape(reason),
        escape("Fix the sheet and send it again. Use /help for the expected layout 💡"),
    )
}

pub fn failure_message() -> String {
    format!(
        "❌ {}\n\n{}",
        bold(&escape("Unexpected error")),
        escape("Try sending the file again. If the problem persists, contact the administrator 🛠️"),
    )
}

pub fn completion_message(file_name: &str, summary: &SheetSummary, file_count: usize) -> String {
    format!(
        "✅ {}\n\n📁 {} {}\n📊 {} {}\n📋 {} {}\n\n🌍 {} {}\n\n📦 {} {}\n{}",
        bold(&escape("Conversion complete!")),
        bold(&escape("Source file:")),
        escape(file_name),
        bold(&escape("Languages:")),
        summary.languages.len(),
        bold(&escape("Categories:")),
        summary.categories.len(),
        bold(&escape("Codes:")),
        escape(&summary.languages.join(", ")),
        bold(&escape("Files:")),
        file_count,
        italic(&escape("Sending one JSON file per category... 🚀")),
    )
}

pub fn category_caption(file: &CategoryFile) -> String {
    let mut caption = format!(
        "📋 {} {}\n\n",
        bold(&escape("Category:")),
        escape(&file.category),
    );
    if let Some(pushes) = file.pushes {
        caption.push_str(&format!("🎯 {} {}\n", bold(&escape("Pushes:")), pushes));
    }
    caption.push_str(&format!("🌍 {} {}", bold(&escape("Languages:")), file.languages));
    caption
}

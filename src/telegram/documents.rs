use std::sync::Arc;

use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::{Document, InputFile, ParseMode};
use tracing::{error, info, warn};

use crate::converter::{self, SheetSummary};
use crate::error::{ConverterError, Result};
use crate::output::{self, CategoryFile, OutputLayout};
use crate::sheet::SourceSheet;
use crate::telegram::bot::BotState;
use crate::telegram::formatters;

const FALLBACK_FILE_NAME: &str = "push.xlsx";

/// Handle an uploaded document: size check, download, convert, reply with
/// one JSON file per category.
pub async fn handle_document(
    bot: Bot,
    msg: Message,
    doc: Document,
    state: Arc<BotState>,
) -> ResponseResult<()> {
    let file_name = doc
        .file_name
        .clone()
        .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string());

    if !formatters::is_excel_file_name(&file_name) {
        info!("Rejected '{}' from chat {}: not an Excel file", file_name, msg.chat.id);
        bot.send_message(msg.chat.id, formatters::unsupported_format_message(&file_name))
            .parse_mode(ParseMode::MarkdownV2)
            .await?;
        return Ok(());
    }

    let max_size = state.config.max_file_size_bytes();
    if u64::from(doc.file.size) > max_size {
        info!(
            "Rejected '{}' from chat {}: {} bytes exceeds limit",
            file_name, msg.chat.id, doc.file.size
        );
        bot.send_message(
            msg.chat.id,
            formatters::too_large_message(state.config.telegram.max_file_size_mb),
        )
        .parse_mode(ParseMode::MarkdownV2)
        .await?;
        return Ok(());
    }

    info!("Converting '{}' for chat {}", file_name, msg.chat.id);

    let progress = bot
        .send_message(msg.chat.id, formatters::processing_message())
        .parse_mode(ParseMode::MarkdownV2)
        .await?;

    let outcome = match download(&bot, &doc).await {
        Ok(bytes) => {
            convert_upload(bytes, state.config.output.layout, file_name.clone()).await
        }
        Err(e) => Err(e),
    };

    match outcome {
        Ok((summary, files)) => {
            bot.edit_message_text(
                msg.chat.id,
                progress.id,
                formatters::completion_message(&file_name, &summary, files.len()),
            )
            .parse_mode(ParseMode::MarkdownV2)
            .await?;

            for file in files {
                let caption = formatters::category_caption(&file);
                bot.send_document(
                    msg.chat.id,
                    InputFile::memory(file.json.into_bytes()).file_name(file.file_name),
                )
                .caption(caption)
                .parse_mode(ParseMode::MarkdownV2)
                .await?;
            }

            info!(
                "Sent {} category files for '{}' to chat {}",
                summary.categories.len(),
                file_name,
                msg.chat.id
            );
        }
        Err(e) if e.is_user_error() => {
            warn!("Invalid upload '{}' from chat {}: {}", file_name, msg.chat.id, e);
            bot.edit_message_text(
                msg.chat.id,
                progress.id,
                formatters::invalid_file_message(&e.to_string()),
            )
            .parse_mode(ParseMode::MarkdownV2)
            .await?;
        }
        Err(e) => {
            error!("Failed to process '{}' from chat {}: {}", file_name, msg.chat.id, e);
            bot.edit_message_text(msg.chat.id, progress.id, formatters::failure_message())
                .parse_mode(ParseMode::MarkdownV2)
                .await?;
        }
    }

    Ok(())
}

/// Anything that is neither a command nor a document.
pub async fn handle_text(bot: Bot, msg: Message) -> ResponseResult<()> {
    bot.send_message(msg.chat.id, formatters::send_file_hint())
        .parse_mode(ParseMode::MarkdownV2)
        .await?;
    Ok(())
}

async fn download(bot: &Bot, doc: &Document) -> Result<Vec<u8>> {
    let file = bot.get_file(&doc.file.id).await?;
    let mut bytes = Vec::with_capacity(doc.file.size as usize);
    bot.download_file(&file.path, &mut bytes).await?;
    Ok(bytes)
}

/// Workbook parsing is CPU bound, keep it off the dispatcher threads.
async fn convert_upload(
    bytes: Vec<u8>,
    layout: OutputLayout,
    file_name: String,
) -> Result<(SheetSummary, Vec<CategoryFile>)> {
    tokio::task::spawn_blocking(move || -> Result<(SheetSummary, Vec<CategoryFile>)> {
        let sheet = SourceSheet::from_bytes(bytes)?;
        let summary = converter::check(&sheet)?;
        let files = output::render(&sheet, layout, &file_name)?;
        Ok((summary, files))
    })
    .await
    .map_err(|e| ConverterError::Other(anyhow::anyhow!("conversion task failed: {}", e)))?
}

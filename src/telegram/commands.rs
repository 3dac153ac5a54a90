use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tracing::debug;

use crate::telegram::bot::{BotState, Command};
use crate::telegram::formatters;

pub async fn answer(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: Arc<BotState>,
) -> ResponseResult<()> {
    debug!("Command from chat {}", msg.chat.id);

    let text = match cmd {
        Command::Start => formatters::welcome_message(),
        Command::Help => formatters::help_message(state.config.telegram.max_file_size_mb),
    };

    bot.send_message(msg.chat.id, text)
        .parse_mode(ParseMode::MarkdownV2)
        .await?;

    Ok(())
}

use std::sync::Arc;

use teloxide::{prelude::*, utils::command::BotCommands};
use tracing::info;

use crate::config::Config;

/// State shared across all bot handlers
pub struct BotState {
    pub config: Config,
}

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "Start interaction with the bot")]
    Start,
    #[command(description = "Show the sheet format and usage")]
    Help,
}

pub async fn run_telegram_bot(config: Config) -> crate::error::Result<()> {
    let token = config
        .bot_token()
        .map_err(|e| crate::error::ConverterError::Config(e.to_string()))?
        .to_string();

    info!(
        "Starting Telegram bot (max upload {} MB, layout {:?})...",
        config.telegram.max_file_size_mb, config.output.layout
    );

    let bot = Bot::new(token);
    let state = Arc::new(BotState { config });

    let handler = Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(crate::telegram::commands::answer),
        )
        .branch(Message::filter_document().endpoint(crate::telegram::documents::handle_document))
        .branch(dptree::endpoint(crate::telegram::documents::handle_text));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Telegram bot stopped");
    Ok(())
}

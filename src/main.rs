use std::path::Path;

use clap::Parser;
use colored::*;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use push_converter::cli::{Cli, Commands};
use push_converter::config::Config;
use push_converter::output::{self, OutputLayout};
use push_converter::{converter, error, telegram, utils, SourceSheet};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("push_converter=debug,info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Bot => {
            info!("Starting Telegram bot interface...");
            telegram::run_telegram_bot(config).await
        }

        Commands::Convert { file, out_dir, layout, verbose } => {
            let layout = layout.unwrap_or(config.output.layout);
            info!("Converting {} ({:?} layout)", file.display(), layout);
            convert_file(&file, &out_dir, layout, verbose)
        }

        Commands::Check { file } => {
            info!("Checking {}", file.display());
            check_file(&file)
        }

        Commands::Init { path, yes } => initialize(&path, yes),
    };

    if let Err(e) = result {
        error!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn source_file_name(file: &Path) -> String {
    file.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "push.xlsx".to_string())
}

fn convert_file(file: &Path, out_dir: &Path, layout: OutputLayout, verbose: bool) -> error::Result<()> {
    let sheet = SourceSheet::open(file)?;
    let summary = converter::check(&sheet)?;
    let files = output::render(&sheet, layout, &source_file_name(file))?;
    let written = output::write_all(out_dir, &files)?;

    println!("{}", "✓ Conversion complete".green());
    println!("Categories: {}", summary.categories.len());
    println!("Languages:  {}", summary.languages.join(", "));
    if !summary.duplicates.is_empty() {
        println!(
            "{}",
            format!("Repeated codes (later rows kept): {}", summary.duplicates.join(", ")).yellow()
        );
    }

    println!("\n{}", "=== Category Files ===".cyan().bold());
    utils::print_table_border(80);
    utils::print_table_row(&["Category", "Pushes", "Languages", "File"], &[24, 8, 10, 30]);
    utils::print_table_border(80);
    for (file, path) in files.iter().zip(&written) {
        utils::print_table_row(
            &[
                &utils::truncate(&file.category, 24),
                &file.pushes.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string()),
                &file.languages.to_string(),
                &path.display().to_string(),
            ],
            &[24, 8, 10, 30],
        );
    }
    utils::print_table_border(80);

    if verbose {
        if let Some(first) = files.first() {
            println!("\n{} {}", "Category:".cyan(), first.category);
            println!("{}", first.json);
        }
    }

    Ok(())
}

fn check_file(file: &Path) -> error::Result<()> {
    let sheet = SourceSheet::open(file)?;
    let summary = converter::check(&sheet)?;

    println!("{}", "✓ Sheet structure is valid".green());
    println!("Language blocks: {}", summary.blocks);
    println!("Languages:       {}", summary.languages.join(", "));
    println!("Categories:      {}", summary.categories.join(", "));
    if !summary.duplicates.is_empty() {
        warn!("Repeated language codes: {}", summary.duplicates.join(", "));
    }
    Ok(())
}

fn initialize(path: &Path, yes: bool) -> error::Result<()> {
    if path.exists()
        && !yes
        && !utils::confirm_action(&format!("{} exists, overwrite?", path.display()))
    {
        println!("Cancelled");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, Config::default_toml()?)?;

    println!("{}", format!("✓ Configuration written to {}", path.display()).green());
    println!("\n{}", "Next steps:".cyan());
    println!("  {} in .env or the environment", "TELEGRAM_BOT_TOKEN=...".yellow());
    println!("  {} to start the bot", "push-converter bot".yellow());
    println!("  {} to convert locally", "push-converter convert push.xlsx".yellow());
    Ok(())
}

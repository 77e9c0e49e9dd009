use anyhow::{anyhow, Result};
use clap::Parser;
use clipcopy::cli::{Cli, Commands};
use clipcopy::clipboard::SystemClipboard;
use clipcopy::config::Config;
use clipcopy::document::{Document, MarkdownDocument};
use clipcopy::ClipboardCopier;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let path = document_path(cli.file, &config)?;
    let document = MarkdownDocument::load(&path)?;

    match cli.command {
        Commands::Copy { id } => {
            let notify = cli.notify.unwrap_or(config.notify);
            let copier = ClipboardCopier::new(
                Arc::new(document),
                Arc::new(SystemClipboard::with_hold(Duration::from_millis(config.hold_ms))),
                notify.notifier(),
            )
            .with_message(config.message);

            copier.on_ready();
            copier.copy_text_by_id(&id).wait().await;
        }
        Commands::Show { id } => {
            handle_show(&document, &id);
        }
        Commands::List { json } => {
            handle_list(&document, json)?;
        }
    }

    Ok(())
}

fn document_path(file: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    file.or_else(|| config.document.clone())
        .ok_or_else(|| anyhow!("No document given; pass --file or set `document` in the config"))
}

fn handle_show(document: &MarkdownDocument, id: &str) {
    if let Some(element) = document.find_by_id(id) {
        let text = element.visible_text();
        if !text.is_empty() {
            println!("{text}");
        }
    }
}

fn handle_list(document: &MarkdownDocument, json: bool) -> Result<()> {
    let ids = document.ids();

    if json {
        println!("{}", serde_json::to_string_pretty(&ids)?);
        return Ok(());
    }

    if ids.is_empty() {
        println!("No addressable sections. Tag a heading with {{#id}} to add one.");
        return Ok(());
    }

    for id in ids {
        println!("{id}");
    }

    Ok(())
}

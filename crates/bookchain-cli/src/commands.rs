use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use bookchain_crypto::BookIdHasher;
use bookchain_ledger::Ledger;
use bookchain_server::{BookchainServer, BoundServer, ServerConfig};
use colored::Colorize;
use serde_json::json;

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::BookId(args) => cmd_book_id(args, &cli.format),
    }
}

fn resolve_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = &args.bind {
        config.bind_addr = bind
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid bind address {bind}"))?;
    }
    Ok(config)
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;
    let ledger = Arc::new(Ledger::new().context("creating genesis block")?);
    let bound = bind_server(config, ledger).await?;
    println!(
        "{} Bookchain listening on {}",
        "✓".green().bold(),
        bound.local_addr().to_string().bold()
    );
    bound.run().await?;
    Ok(())
}

async fn bind_server(config: ServerConfig, ledger: Arc<Ledger>) -> anyhow::Result<BoundServer> {
    let addr = config.bind_addr;
    BookchainServer::new(config, ledger)
        .bind()
        .await
        .with_context(|| format!("binding {addr}"))
}

fn cmd_book_id(args: BookIdArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let id = BookIdHasher::derive(&args.isbn, &args.publish_date);
    match format {
        OutputFormat::Text => {
            println!("{}", id.yellow());
        }
        OutputFormat::Json => {
            let value = json!({
                "isbn": args.isbn,
                "publishdate": args.publish_date,
                "id": id,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

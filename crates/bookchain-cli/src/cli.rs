use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bookchain",
    about = "Bookchain: tamper-evident ledger of book checkouts",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the Bookchain HTTP server
    Serve(ServeArgs),
    /// Derive a book identifier from its ISBN and publish date
    BookId(BookIdArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on; overrides the config file
    #[arg(long)]
    pub bind: Option<String>,
    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct BookIdArgs {
    #[arg(long)]
    pub isbn: String,
    #[arg(long)]
    pub publish_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_serve_defaults() {
        let cli = Cli::try_parse_from(["bookchain", "serve"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert!(args.bind.is_none());
            assert!(args.config.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_serve() {
        let cli = Cli::try_parse_from([
            "bookchain", "serve", "--bind", "0.0.0.0:8080", "--config", "bookchain.toml",
        ])
        .unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.bind, Some("0.0.0.0:8080".into()));
            assert_eq!(args.config, Some(PathBuf::from("bookchain.toml")));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_book_id() {
        let cli = Cli::try_parse_from([
            "bookchain", "book-id", "--isbn", "9780441013593", "--publish-date", "1965-08-01",
        ])
        .unwrap();
        if let Command::BookId(args) = cli.command {
            assert_eq!(args.isbn, "9780441013593");
            assert_eq!(args.publish_date, "1965-08-01");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn book_id_requires_isbn() {
        assert!(Cli::try_parse_from(["bookchain", "book-id", "--publish-date", "x"]).is_err());
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["bookchain", "--verbose", "serve"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from([
            "bookchain", "--format", "json", "book-id", "--isbn", "1", "--publish-date", "2",
        ])
        .unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}

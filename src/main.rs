//! # Scripture Spotlight CLI (`spot`)
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `spot decode <text>` | Print the link a command resolves to |
//! | `spot open <text>` | Resolve a command and open the link |
//! | `spot verse <book>` | Build a verse link from structured book/chapter/verse |
//! | `spot topic <term>` | Show the Insight document a term resolves to |
//! | `spot books` | List the canonical book table |
//! | `spot prompt` | Read commands from stdin and open each one |
//!
//! ## Examples
//!
//! ```bash
//! spot decode John 3:16
//! spot open wt sep 2025
//! spot verse "1 Peter" --chapter 2 --verse 9
//! spot topic respect --config ./config/spot.toml
//! ```

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use scripture_spotlight::books::{BibleBook, BOOKS};
use scripture_spotlight::config::{self, Config};
use scripture_spotlight::decoder::Decoder;
use scripture_spotlight::open::{Launcher, SystemOpener};
use scripture_spotlight::structured::{Source, StructuredRequest};
use scripture_spotlight::topics::TopicIndex;

/// Scripture Spotlight: resolve short references into JW Library links.
#[derive(Parser)]
#[command(
    name = "spot",
    about = "Scripture Spotlight: resolve short references into JW Library links",
    version,
    long_about = "Resolves commands such as `John 3:16`, `1 pet 2:9`, `wt sep 2025`, \
    `i respect`, `wol grace`, `dt` or `help` into a single JW Library deep link."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/spot.toml`. A missing file means defaults.
    #[arg(long, global = true, default_value = "./config/spot.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the link a command resolves to.
    ///
    /// Exits with a non-zero status when nothing matches.
    Decode {
        /// The command, e.g. `John 3:16`. Multiple words are joined.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Resolve a command and open the link.
    Open {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Build a verse link from an already-structured reference.
    ///
    /// Chapter is clamped to the book's chapter count and verse to 200.
    Verse {
        /// Book name (`1 Peter`) or ordinal (`60`).
        book: String,

        #[arg(long, allow_negative_numbers = true)]
        chapter: Option<i64>,

        #[arg(long, allow_negative_numbers = true)]
        verse: Option<i64>,

        /// Only `bible` resolves.
        #[arg(long, value_enum, default_value = "bible")]
        source: Source,

        /// Open the link instead of printing it.
        #[arg(long)]
        open: bool,
    },

    /// Show the Insight document a term resolves to.
    Topic {
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },

    /// List the canonical book table.
    Books,

    /// Read commands from stdin, one per line, and open each one.
    Prompt,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Commands::Books = cli.command {
        list_books();
        return Ok(());
    }

    let cfg = config::load_or_minimal(&cli.config)?;
    let decoder = Decoder::new(Arc::new(TopicIndex::new(cfg.topic_sources())));

    match cli.command {
        Commands::Decode { text } => match decoder.decode(&text.join(" ")) {
            Some(url) => println!("{}", url),
            None => bail!("no match for '{}'", text.join(" ")),
        },
        Commands::Open { text } => {
            let launcher = launcher(&cfg, decoder);
            if !launcher.launch(&text.join(" ")) {
                bail!("no match for '{}'", text.join(" "));
            }
        }
        Commands::Verse {
            book,
            chapter,
            verse,
            source,
            open,
        } => {
            let Some(entry) = parse_book(&book) else {
                bail!("unknown book: {}", book);
            };
            let request = StructuredRequest {
                source,
                book: Some(entry.ordinal),
                chapter,
                verse,
            };
            let Some(url) = request.build() else {
                bail!("source '{:?}' has no structured links", source);
            };
            if open {
                launcher(&cfg, decoder).open(&url);
            } else {
                println!("{}", url);
            }
        }
        Commands::Topic { term } => {
            let term = term.join(" ");
            match decoder.topics().lookup(&term) {
                Some(doc) => println!("{}\t{}", doc.document_id, doc.title),
                None => bail!(
                    "no topic matches '{}' ({} documents indexed)",
                    term,
                    decoder.topics().len()
                ),
            }
        }
        Commands::Prompt => {
            let launcher = launcher(&cfg, decoder);
            for line in std::io::stdin().lock().lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                if !launcher.launch(&line) {
                    eprintln!("no match: {}", line.trim());
                }
            }
        }
        Commands::Books => unreachable!(),
    }

    Ok(())
}

fn launcher(cfg: &Config, decoder: Decoder) -> Launcher<SystemOpener> {
    Launcher::new(decoder, SystemOpener::from_config(cfg))
}

fn parse_book(text: &str) -> Option<&'static BibleBook> {
    match text.trim().parse::<u8>() {
        Ok(ordinal) => BibleBook::from_ordinal(ordinal),
        Err(_) => BibleBook::from_name(text),
    }
}

fn list_books() {
    println!("{:<4} {:<18} CHAPTERS", "#", "BOOK");
    for book in BOOKS.iter() {
        println!("{:<4} {:<18} {}", book.ordinal, book.name, book.chapters);
    }
}

//! Command-line memorization trainer.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::thread;

use core::time::Duration;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deck_memorizer::{
    Associations, Card, Presentation, RecallOutcome, Session, SessionOptions, SessionState, Suit,
    SuitSelector,
};

#[derive(Parser)]
#[command(name = "deck-memorizer", about = "Memorize a shuffled run of playing cards", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Memorize a deck
    Memorize(MemorizeArgs),
}

#[derive(Args)]
struct MemorizeArgs {
    /// Maximum number of cards
    #[arg(short = 's', long)]
    max_deck_size: Option<usize>,

    /// Show associations
    #[arg(long)]
    show_associations: bool,

    /// Select card suits: D for diamond, H for heart, S for spade, C for club
    #[arg(long = "select", value_name = "CODE")]
    selectors: Vec<String>,

    /// Path to the associations map file
    #[arg(long, default_value = "mapping.json")]
    associations_file: PathBuf,

    /// Show each card for this many milliseconds instead of waiting for Enter
    #[arg(long)]
    learn_delay_ms: Option<u64>,

    /// Seed for a reproducible shuffle
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "deck_memorizer=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Memorize(args) => memorize(&args),
    }
}

fn memorize(args: &MemorizeArgs) -> anyhow::Result<()> {
    let selector = args
        .selectors
        .iter()
        .map(String::as_str)
        .map(SuitSelector::parse)
        .collect::<Result<SuitSelector, _>>()
        .context("memorize execute failed")?;
    if selector.is_none() {
        bail!("no cards selected, pass at least one --select D|H|S|C");
    }

    let options = SessionOptions::default()
        .with_selector(selector)
        .with_max_deck_size(args.max_deck_size)
        .with_show_associations(args.show_associations)
        .with_learn_delay(Duration::from_millis(args.learn_delay_ms.unwrap_or(0)));
    let associations = read_associations(&args.associations_file)?;

    let mut session = match args.seed {
        Some(seed) => Session::with_seed(options, associations, seed),
        None => Session::fresh(options, associations),
    };
    info!(cards = session.total(), "starting session");

    while let Some(presentation) = session.present()? {
        clear_terminal();
        println!("{}", format_presentation(&presentation));
        if options.learn_delay.is_zero() {
            if prompt_line("").is_none() {
                return Ok(());
            }
        } else {
            thread::sleep(options.learn_delay);
        }
    }
    clear_terminal();

    if session.state() == SessionState::Finished {
        println!("No cards to recall.");
        return Ok(());
    }

    println!("Recall");
    while session.state() == SessionState::Recalling {
        let position = session.summary().recalled + 1;
        let Some(guess) = prompt_card(&format!("{position}/{}: ", session.total())) else {
            return Ok(());
        };
        println!("{}", format_outcome(&session.recall(guess)?));
    }

    let summary = session.summary();
    println!("\nRecalled {}/{} correctly.", summary.correct, summary.total);
    Ok(())
}

fn read_associations(path: &Path) -> anyhow::Result<Associations> {
    let associations = Associations::load(path)
        .with_context(|| format!("could not load associations from {}", path.display()))?;
    info!(path = %path.display(), count = associations.len(), "associations ready");
    Ok(associations)
}

fn clear_terminal() {
    print!("\u{1b}[2J\u{1b}[H");
    let _ = io::stdout().flush();
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn prompt_card(prompt: &str) -> Option<Card> {
    loop {
        let input = prompt_line(prompt)?;
        match input.parse::<Card>() {
            Ok(card) => return Some(card),
            Err(err) => println!("{err}"),
        }
    }
}

fn format_presentation(presentation: &Presentation) -> String {
    let card = format_card(&presentation.card);
    match &presentation.association {
        Some(word) => format!("{card} {word}"),
        None => card,
    }
}

fn format_outcome(outcome: &RecallOutcome) -> String {
    if outcome.correct {
        colorize("correct", "32")
    } else {
        format!(
            "{} (was {})",
            colorize("wrong", "31"),
            format_card(&outcome.expected)
        )
    }
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Heart | Suit::Diamond => "31",
        Suit::Club => "32",
        Suit::Spade => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

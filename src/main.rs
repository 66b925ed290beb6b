use buzzword_translator::phrasebook::load_phrase_book_from_file;
use buzzword_translator::{
    BuzzwordGenerator, Direction, MessageKind, PhraseBook, TranslationEngine, TranslatorError,
};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::env;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DICTIONARY_ENV: &str = "BUZZWORD_DICTIONARY";

fn cli() -> Command {
    Command::new("buzzword-translator")
        .version("0.1.0")
        .about("Translate between corporate speak and honest speak")
        .subcommand_required(true)
        .arg(
            Arg::new("dictionary")
                .long("dictionary")
                .short('d')
                .global(true)
                .help("JSON phrase book to use instead of the built-in one"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Show detailed translation process")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("translate")
                .about("Translate text (use - to read from stdin)")
                .arg(Arg::new("text").help("Text to translate").required(true).index(1))
                .arg(
                    Arg::new("to-corporate")
                        .long("to-corporate")
                        .short('c')
                        .help("Translate honest speak into corporate speak")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the full result as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("score")
                .about("Rate how much corporate jargon a text contains (0-100)")
                .arg(Arg::new("text").help("Text to score").required(true).index(1))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the score as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("message")
                .about("Print a witty status message")
                .arg(
                    Arg::new("kind")
                        .help("Message kind")
                        .required(true)
                        .value_parser(["loading", "error", "empty"])
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate buzzwords or a buzzword-laden phrase")
                .arg(
                    Arg::new("count")
                        .long("count")
                        .short('n')
                        .help("Number of buzzwords to list")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("5"),
                )
                .arg(
                    Arg::new("phrase")
                        .long("phrase")
                        .short('p')
                        .help("Generate a full phrase instead of a list")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn load_book(matches: &ArgMatches) -> Result<PhraseBook, TranslatorError> {
    let path = matches
        .get_one::<String>("dictionary")
        .cloned()
        .or_else(|| env::var(DICTIONARY_ENV).ok());

    match path {
        Some(path) => {
            info!("Loading phrase book from {}", path);
            load_phrase_book_from_file(Path::new(&path))
        }
        None => Ok(PhraseBook::builtin()),
    }
}

fn read_text(matches: &ArgMatches) -> Result<String, Box<dyn std::error::Error>> {
    let text = matches
        .get_one::<String>("text")
        .ok_or("missing text argument")?;
    if text == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(text.clone())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();
    let verbose = matches.get_flag("verbose");
    init_tracing(verbose)?;

    let book = match load_book(&matches) {
        Ok(book) => book,
        Err(e) => {
            eprintln!("❌ Failed to load phrase book: {}", e);
            return Err(e.into());
        }
    };
    let engine = TranslationEngine::new(book)?;

    match matches.subcommand() {
        Some(("translate", sub)) => {
            let text = read_text(sub)?;
            let direction = if sub.get_flag("to-corporate") {
                Direction::HonestToCorporate
            } else {
                Direction::CorporateToHonest
            };
            debug!(%direction, chars = text.chars().count(), "translate requested");

            let (result, stats) = engine.translate_with_stats(&text, direction);

            if sub.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            if result.output.is_empty() {
                println!("{}", engine.random_witty_message(MessageKind::Empty));
                return Ok(());
            }

            if verbose {
                println!("🔁 {}", direction);
                println!(
                    "🔍 {} substitutions ({} exact)",
                    stats.translation_count, stats.exact_matches
                );
                if result.is_easter_egg {
                    println!("🥚 Easter egg!");
                }
            }
            println!("{}", result.output);
            println!("Confidence: {}%", result.confidence);

            if !result.suggestions.is_empty() {
                println!("Suggestions:");
                for suggestion in &result.suggestions {
                    let marker = if suggestion.is_exact { " (exact)" } else { "" };
                    println!(
                        "  - {} [{}%]{}",
                        suggestion.text, suggestion.confidence, marker
                    );
                }
            }
        }
        Some(("score", sub)) => {
            let text = read_text(sub)?;
            let level = engine.calculate_bullshit_level(&text);
            if sub.get_flag("json") {
                println!("{}", serde_json::json!({ "bullshitLevel": level }));
            } else {
                println!("Bullshit level: {}%", level);
            }
        }
        Some(("message", sub)) => {
            let kind: MessageKind = sub
                .get_one::<String>("kind")
                .map(String::as_str)
                .unwrap_or("loading")
                .parse()?;
            println!("{}", engine.random_witty_message(kind));
        }
        Some(("generate", sub)) => {
            let generator = BuzzwordGenerator::new();
            if sub.get_flag("phrase") {
                println!("{}", generator.random_phrase());
            } else {
                let count = sub.get_one::<usize>("count").copied().unwrap_or(5);
                for word in generator.random_buzzwords(count) {
                    println!("{}", word);
                }
            }
        }
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}

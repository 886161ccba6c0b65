//! Thicket CLI
//!
//! Inspect how a selector is scanned and parsed.

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use thicket_select::{ScanMode, Scanner, ast};

/// Thicket - selector scanner and parser inspector
#[derive(Parser, Debug)]
#[command(name = "thicket")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Show the token stream, with the scanner mode after each token
    thicket tokens "a[href^=http] > img"

    # Render the parsed selector back to selector syntax
    thicket parse "div a > img, p"

    # Show the structure of each alternative
    thicket parse --tree "div a > img"

    # Dump the syntax tree as JSON
    thicket parse --json "ul.menu > li"
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the token stream of a selector
    Tokens {
        /// Selector to scan
        selector: String,
    },
    /// Parse a selector and print the result
    Parse {
        /// Selector to parse
        selector: String,

        /// Print the syntax tree as JSON
        #[arg(long, conflicts_with = "tree")]
        json: bool,

        /// Print the bracketed structural dump
        #[arg(long)]
        tree: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli.command) {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(command: &Command) -> anyhow::Result<()> {
    match command {
        Command::Tokens { selector } => print_tokens(selector),
        Command::Parse {
            selector,
            json,
            tree,
        } => print_selector(selector, *json, *tree),
    }
}

/// Print one token per line with the end position and the scanner mode it
/// leaves behind. Tokens before a lexical error are still printed.
fn print_tokens(input: &str) -> anyhow::Result<()> {
    let mut scanner = Scanner::new(input);
    loop {
        let token = scanner.next_token()?;
        let rendered = token.to_string();
        let mode = scanner.mode().to_string();
        let mode = match scanner.mode() {
            ScanMode::Default => mode.dimmed().to_string(),
            ScanMode::AfterAssign => mode.cyan().to_string(),
        };
        println!("{:>4}  {rendered:<28} {mode}", scanner.position());
        if token.is_end() {
            return Ok(());
        }
    }
}

fn print_selector(input: &str, json: bool, tree: bool) -> anyhow::Result<()> {
    let selector = thicket_select::parse(input)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&selector)?);
    } else if tree {
        println!("{}", ast::dump(&selector));
    } else {
        println!("{selector}");
    }
    Ok(())
}

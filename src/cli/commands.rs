//! CLI command implementations

use anyhow::Result;
use colored::Colorize;

use crate::classify::DigitClass;
use crate::encoder::encode;

use super::args::Commands;

/// Execute a CLI command
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Encode { word } => cmd_encode(&word),
        Commands::Compare { first, second } => cmd_compare(&first, &second),
        Commands::Table => cmd_table(),
    }
}

/// Encode command
fn cmd_encode(word: &str) -> Result<()> {
    println!("{}", encode(word)?);

    Ok(())
}

/// Compare command
fn cmd_compare(first: &str, second: &str) -> Result<()> {
    let first_code = encode(first)?;
    let second_code = encode(second)?;

    let width = first.chars().count().max(second.chars().count());
    println!("  {:<width$}  {}", first, first_code.green());
    println!("  {:<width$}  {}", second, second_code.green());
    println!();

    if first_code == second_code {
        println!("{}", "Soundex match".green().bold());
    } else {
        println!("{}", "No match".yellow());
    }

    Ok(())
}

/// Table command
fn cmd_table() -> Result<()> {
    println!("{}", "Soundex Digit Classes".bold().underline());
    println!();

    for class in DigitClass::ALL {
        println!(
            "  {}  {:<8}  {}",
            class.digit().to_string().green(),
            class.name(),
            class.letters().cyan()
        );
    }

    println!();
    println!(
        "  Vowels ({}) are never coded but separate repeated digits.",
        "aeiou".cyan()
    );
    println!("  The letters {} are skipped entirely.", "hwy".cyan());
    println!();

    Ok(())
}

//! CLI argument definitions

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "soundex")]
#[command(about = "American Soundex phonetic encoding for words and surnames")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode a word as a four-character Soundex code
    Encode {
        /// Word to encode
        word: String,
    },

    /// Compare two words by Soundex code
    Compare {
        /// First word
        first: String,

        /// Second word
        second: String,
    },

    /// Display the digit classes and the letters they cover
    Table,
}

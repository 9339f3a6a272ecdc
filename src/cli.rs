//! CLI argument definitions for the `scc` command.
//!
//! One flat flag set, no subcommands: scc is a filter. `-h` and `-V`
//! are clap's built-in help and version.

use std::path::PathBuf;

use clap::Parser;

use crate::standard::Standard;

/// Strip comments from C and C++ source.
#[derive(Parser)]
#[command(
    name = "scc",
    version,
    about = "Strip C comments: remove or extract comments from C/C++ source",
    long_about = "\
Remove every comment from C or C++ source, replacing each C-style
comment with a single space, or print only the comments (-c). Reads the
named files, or standard input when no file (or `-`) is given, and
writes the transformed source to standard output.

Scanning follows the translation-phase rules of the selected standard:
backslash-newline splicing may interrupt comment markers, literals, and
identifiers; character constants, string literals, raw strings, and
numeric literals are scanned precisely so their contents are never
mistaken for comments. Constructs a standard does not permit are
warned about on stderr and scanned anyway."
)]
pub struct Cli {
    /// Files to process; `-` or no arguments means standard input
    pub files: Vec<PathBuf>,

    /// Print comments and not the code
    #[arg(short = 'c', long = "comments")]
    pub comments: bool,

    /// Print the feature set in effect, then continue
    #[arg(short = 'f', long = "features")]
    pub features: bool,

    /// Keep newlines from stripped content (preserves line numbering)
    #[arg(short = 'n', long = "newlines")]
    pub newlines: bool,

    /// Replace the body of character constants with REP (a single byte)
    #[arg(short = 'q', long = "char-replace", value_name = "REP", value_parser = parse_replacement)]
    pub quote_rep: Option<u8>,

    /// Replace the body of string literals with REP (a single byte)
    #[arg(short = 's', long = "string-replace", value_name = "REP", value_parser = parse_replacement)]
    pub string_rep: Option<u8>,

    /// Warn about nested C-style comments and stray end markers
    #[arg(short = 'w', long = "warn-comments")]
    pub warn_comments: bool,

    /// Language standard: C, C++, C89, C90, C94, C99, C11, C++98,
    /// C++03, C++11, C++14, C++17 (case-insensitive)
    #[arg(
        short = 'S',
        long = "std",
        value_name = "STD",
        default_value = "C11",
        value_parser = Standard::from_arg
    )]
    pub standard: Standard,

    /// Print the -f feature report as JSON
    #[arg(long, requires = "features")]
    pub json: bool,
}

/// `-s`/`-q` take exactly one byte.
fn parse_replacement(arg: &str) -> Result<u8, String> {
    match arg.as_bytes() {
        [b] => Ok(*b),
        _ => Err(format!("replacement must be a single byte, got {arg:?}")),
    }
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

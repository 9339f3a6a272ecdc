//! `scc`: strip C comments.
//!
//! A streaming filter in the classic mold: every file named on the
//! command line (stdin for `-` or no names) is scanned once, and the
//! source minus its comments (or, with `-c`, just the comments) goes
//! to stdout. Warnings about lexical anomalies and standard-feature
//! misuse go to stderr, tagged `scc: file:line: message`.
//!
//! Configuration is fixed before any scanning starts and never mutated;
//! scanner state is rebuilt per file, so files cannot affect each other.

/// CLI argument definitions using `clap` derive macros.
mod cli;
/// Diagnostic sink: program-prefixed warnings on stderr.
mod diag;
/// File-iteration driver (`-` = stdin, skip-and-continue on open errors).
mod filter;
/// Language standards and their permitted feature sets.
mod standard;
/// The comment-stripping lexer itself.
mod strip;

use std::io::{self, Write};
use std::process;

use clap::Parser;

use cli::Cli;
use diag::{DiagSink, PROGRAM};
use standard::Features;
use strip::Config;

fn main() {
    let cli = Cli::parse();
    let features = Features::for_standard(cli.standard);

    if cli.features {
        if cli.json {
            if let Err(err) = standard::print_features_json(cli.standard, &features) {
                eprintln!("{PROGRAM}: {err}");
                process::exit(1);
            }
        } else {
            standard::print_features(cli.standard, &features);
        }
    }

    let cfg = Config {
        emit_comments: cli.comments,
        keep_newlines: cli.newlines,
        warn_nested: cli.warn_comments,
        quote_rep: cli.quote_rep,
        string_rep: cli.string_rep,
        features,
        standard: cli.standard,
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut diag = DiagSink::new(PROGRAM, io::stderr());

    filter::filter(&cli.files, &mut diag, |input, name, diag| {
        strip::strip(input, name, &cfg, &mut out, diag)
    });

    if let Err(err) = out.flush() {
        eprintln!("{PROGRAM}: {err}");
        process::exit(1);
    }
}

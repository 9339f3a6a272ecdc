//! Classic file-filter driver: run a function over every input stream
//! named on the command line.
//!
//! No argument means standard input, as does the name `-`. A file that
//! fails to open is reported and skipped; processing continues with the
//! next argument. Streams are processed strictly in argument order, one
//! at a time, and each is closed before the next is opened.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::diag::DiagSink;

/// Display name used for standard input.
pub const STDIN_NAME: &str = "(standard input)";

/// Run `each` over every input named in `files` (or stdin when empty).
///
/// `each` receives the stream, its display name, and the diagnostic
/// sink. Errors it returns are reported as remarks and do not stop the
/// remaining files from being processed.
pub fn filter<D, F>(files: &[PathBuf], diag: &mut DiagSink<D>, mut each: F)
where
    D: Write,
    F: FnMut(&mut dyn BufRead, &str, &mut DiagSink<D>) -> io::Result<()>,
{
    if files.is_empty() {
        run_stdin(diag, &mut each);
        return;
    }
    for path in files {
        if path.as_os_str() == "-" {
            run_stdin(diag, &mut each);
            continue;
        }
        let name = path.display().to_string();
        match File::open(path) {
            Ok(file) => {
                let mut reader = BufReader::new(file);
                if let Err(err) = each(&mut reader, &name, diag) {
                    diag.remark(&format!("{name}: {err}"));
                }
            }
            Err(err) => {
                diag.remark(&format!("failed to open file {name}: {err}"));
            }
        }
    }
}

fn run_stdin<D, F>(diag: &mut DiagSink<D>, each: &mut F)
where
    D: Write,
    F: FnMut(&mut dyn BufRead, &str, &mut DiagSink<D>) -> io::Result<()>,
{
    let stdin = io::stdin();
    let mut lock = stdin.lock();
    if let Err(err) = each(&mut lock, STDIN_NAME, diag) {
        diag.remark(&format!("{STDIN_NAME}: {err}"));
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use super::filter;
use crate::diag::DiagSink;

fn temp_with(content: &[u8]) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(content).unwrap();
    tmp.flush().unwrap();
    tmp
}

#[test]
fn processes_files_in_argument_order() {
    let a = temp_with(b"first\n");
    let b = temp_with(b"second\n");
    let files = vec![a.path().to_path_buf(), b.path().to_path_buf()];

    let mut seen = Vec::new();
    let mut errs = Vec::new();
    let mut diag = DiagSink::new("scc", &mut errs);
    filter(&files, &mut diag, |input, name, _diag| {
        let mut content = String::new();
        std::io::Read::read_to_string(input, &mut content)?;
        seen.push((name.to_string(), content));
        Ok(())
    });

    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].1, "first\n");
    assert_eq!(seen[1].1, "second\n");
    assert!(errs.is_empty());
}

#[test]
fn missing_file_is_reported_and_skipped() {
    let real = temp_with(b"content\n");
    let files = vec![
        PathBuf::from("/no/such/file.c"),
        real.path().to_path_buf(),
    ];

    let mut count = 0;
    let mut errs = Vec::new();
    let mut diag = DiagSink::new("scc", &mut errs);
    filter(&files, &mut diag, |_input, _name, _diag| {
        count += 1;
        Ok(())
    });

    assert_eq!(count, 1, "the real file is still processed");
    let report = String::from_utf8(errs).unwrap();
    assert!(
        report.starts_with("scc: failed to open file /no/such/file.c:"),
        "unexpected report: {report}"
    );
}

#[test]
fn processing_error_is_reported_and_does_not_stop_later_files() {
    let a = temp_with(b"a\n");
    let b = temp_with(b"b\n");
    let files = vec![a.path().to_path_buf(), b.path().to_path_buf()];

    let mut calls = 0;
    let mut errs = Vec::new();
    let mut diag = DiagSink::new("scc", &mut errs);
    filter(&files, &mut diag, |_input, _name, _diag| {
        calls += 1;
        if calls == 1 {
            Err(std::io::Error::other("scan failed"))
        } else {
            Ok(())
        }
    });

    assert_eq!(calls, 2);
    let report = String::from_utf8(errs).unwrap();
    assert!(report.contains("scan failed"), "unexpected report: {report}");
}

#[test]
fn scanner_warnings_reach_the_sink() {
    let file = temp_with(b"int x; /* open\n");
    let files = vec![file.path().to_path_buf()];

    let mut out = Vec::new();
    let mut errs = Vec::new();
    let mut diag = DiagSink::new("scc", &mut errs);
    let cfg = crate::strip::Config::default();
    filter(&files, &mut diag, |input, name, diag| {
        crate::strip::strip(input, name, &cfg, &mut out, diag)
    });

    assert_eq!(out, b"int x; ");
    let report = String::from_utf8(errs).unwrap();
    assert!(
        report.ends_with(":2: unterminated C-style comment\n"),
        "unexpected report: {report}"
    );
}

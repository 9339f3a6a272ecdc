use std::io::Cursor;

use crate::diag::DiagSink;
use crate::standard::Standard;
use crate::strip::{Config, strip};

fn run(cfg: &Config, input: &str) -> (String, Vec<String>) {
    let mut out = Vec::new();
    let mut errs = Vec::new();
    let mut diag = DiagSink::new("scc", &mut errs);
    strip(Cursor::new(input.as_bytes()), "test.c", cfg, &mut out, &mut diag).unwrap();
    let warnings = String::from_utf8(errs)
        .unwrap()
        .lines()
        .map(String::from)
        .collect();
    (String::from_utf8(out).unwrap(), warnings)
}

fn clean(standard: Standard, text: &str) {
    let (out, warnings) = run(&Config::with_standard(standard), text);
    assert_eq!(out, text);
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
}

fn warned(standard: Standard, text: &str, expected: &[&str]) {
    let (out, warnings) = run(&Config::with_standard(standard), text);
    assert_eq!(out, text);
    assert_eq!(warnings, expected);
}

#[test]
fn plain_identifiers_pass_through() {
    clean(Standard::C11, "int under_score = abc123;\n");
}

#[test]
fn identifier_starting_with_prefix_letter() {
    clean(Standard::C11, "int Label = unsigned_value;\n");
}

#[test]
fn wide_string_prefix_is_fine_in_every_standard() {
    clean(Standard::C89, "wchar_t *w = L\"wide\";\n");
    clean(Standard::Cxx98, "wchar_t c = L'x';\n");
}

#[test]
fn unicode_string_prefixes_warn_in_cxx98() {
    warned(
        Standard::Cxx98,
        "s = u\"a\";\n",
        &["scc: test.c:1: Unicode feature used but not supported in C++98"],
    );
    warned(
        Standard::Cxx98,
        "s = u8\"a\";\n",
        &["scc: test.c:1: Unicode feature used but not supported in C++98"],
    );
}

#[test]
fn unicode_string_prefixes_accepted_in_c11() {
    clean(Standard::C11, "a = u\"x\"; b = U\"x\"; c = u8\"x\";\n");
}

#[test]
fn prefixed_char_constant_is_not_validated() {
    // u8'c' is not a real prefix form, but it scans the same way.
    clean(Standard::C11, "a = u'c'; b = U'c'; c = u8'c';\n");
}

#[test]
fn prefix_before_char_constant_keeps_contents_opaque() {
    clean(Standard::C11, "c = L'/*';\n");
}

#[test]
fn raw_prefix_variants_scan_as_raw_strings() {
    clean(Standard::Cxx11, "a = LR\"(x)\"; b = uR\"(x)\"; c = u8R\"(x)\";\n");
}

#[test]
fn r_prefix_before_single_quote_is_plain_char() {
    // R'x' is not a raw literal; the prefix is emitted and the
    // character constant scanned normally.
    clean(Standard::Cxx11, "c = R'x';\n");
}

#[test]
fn invalid_prefix_before_string_scans_as_two_tokens() {
    // LU is not a recognised prefix; the quote opens a plain string.
    clean(Standard::Cxx11, "s = LU\"text\";\n");
}

#[test]
fn long_prefix_run_becomes_identifier() {
    clean(Standard::Cxx11, "int RRRR = LLLL;\n");
}

#[test]
fn prefix_letters_followed_by_word_bytes_are_identifiers() {
    clean(Standard::Cxx11, "int u8x = R2D2;\n");
}

#[test]
fn prefix_identifier_at_eof_is_emitted() {
    let (out, warnings) = run(&Config::with_standard(Standard::C11), "L");
    assert_eq!(out, "L");
    assert!(warnings.is_empty());
}

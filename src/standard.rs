//! Language standards and the lexical features each one permits.
//!
//! The selected standard fixes a set of feature flags (raw strings,
//! binary literals, digit separators, ...) that the scanners consult.
//! Using a feature outside its standard produces a warning but never
//! stops scanning.

use std::error::Error;
use std::fmt;

use serde::Serialize;

/// A C or C++ language standard selectable with `-S`.
///
/// `C` and `Cxx` track the current revisions (aliases for C11 and C++11
/// feature-wise, except that `C` also enables Unicode literals).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standard {
    C,
    C89,
    C90,
    C94,
    C99,
    C11,
    Cxx,
    Cxx98,
    Cxx03,
    Cxx11,
    Cxx14,
    Cxx17,
}

impl Standard {
    /// All standards, in the order they are listed in help text.
    pub const ALL: [Standard; 12] = [
        Standard::C,
        Standard::C89,
        Standard::C90,
        Standard::C94,
        Standard::C99,
        Standard::C11,
        Standard::Cxx,
        Standard::Cxx98,
        Standard::Cxx03,
        Standard::Cxx11,
        Standard::Cxx14,
        Standard::Cxx17,
    ];

    /// The display name used in warnings and the `-f` report.
    pub fn name(self) -> &'static str {
        match self {
            Standard::C => "C",
            Standard::C89 => "C89",
            Standard::C90 => "C90",
            Standard::C94 => "C94",
            Standard::C99 => "C99",
            Standard::C11 => "C11",
            Standard::Cxx => "C++",
            Standard::Cxx98 => "C++98",
            Standard::Cxx03 => "C++03",
            Standard::Cxx11 => "C++11",
            Standard::Cxx14 => "C++14",
            Standard::Cxx17 => "C++17",
        }
    }

    /// Parse a `-S` argument, case-insensitively.
    pub fn from_arg(arg: &str) -> Result<Standard, String> {
        let upper = arg.to_ascii_uppercase();
        Standard::ALL
            .into_iter()
            .find(|std| std.name() == upper)
            .ok_or_else(|| format!("unrecognized standard name {arg:?}"))
    }
}

impl Default for Standard {
    fn default() -> Self {
        Standard::C11
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The lexical features a standard permits.
///
/// Flags are independently settable so tests (and any future override
/// flags) can deviate from the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Features {
    /// `//` line comments.
    pub double_slash: bool,
    /// C++11 raw strings `R"delim(...)delim"`.
    pub raw_string: bool,
    /// Unicode literal prefixes `u`, `U`, `u8`.
    pub unicode_literal: bool,
    /// Binary constants `0b0101`.
    pub binary_literal: bool,
    /// Hexadecimal floats `0x2.34P-12`.
    pub hex_float: bool,
    /// Digit separators `0x1234'5678`.
    pub num_punct: bool,
    /// Universal character names `\uXXXX` and `\UXXXXXXXX`.
    pub universal_char_names: bool,
}

impl Features {
    /// The feature set a standard permits.
    pub fn for_standard(standard: Standard) -> Features {
        let mut f = Features::default();
        match standard {
            Standard::C89 | Standard::C90 | Standard::C94 => {}
            Standard::C99 => {
                f.double_slash = true;
                f.hex_float = true;
                f.universal_char_names = true;
            }
            Standard::C | Standard::C11 => {
                f.double_slash = true;
                f.unicode_literal = true;
                f.hex_float = true;
                f.universal_char_names = true;
            }
            Standard::Cxx98 | Standard::Cxx03 => {
                f.double_slash = true;
                f.universal_char_names = true;
            }
            Standard::Cxx | Standard::Cxx11 => {
                f.double_slash = true;
                f.raw_string = true;
                f.unicode_literal = true;
                f.universal_char_names = true;
            }
            Standard::Cxx14 => {
                f.double_slash = true;
                f.raw_string = true;
                f.unicode_literal = true;
                f.binary_literal = true;
                f.num_punct = true;
                f.universal_char_names = true;
            }
            Standard::Cxx17 => {
                f.double_slash = true;
                f.raw_string = true;
                f.unicode_literal = true;
                f.binary_literal = true;
                f.hex_float = true;
                f.num_punct = true;
                f.universal_char_names = true;
            }
        }
        f
    }
}

/// A single feature, for standard-misuse warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    DoubleSlash,
    RawString,
    UnicodeLiteral,
    BinaryLiteral,
    HexFloat,
    NumPunct,
    UniversalCharNames,
}

impl Feature {
    /// Warning prefix; the standard name is appended by the caller.
    pub fn unsupported_message(self) -> &'static str {
        match self {
            Feature::DoubleSlash => "Double slash comment used but not supported in",
            Feature::RawString => "Raw string used but not supported in",
            Feature::UnicodeLiteral => "Unicode feature used but not supported in",
            Feature::BinaryLiteral => "Binary literal feature used but not supported in",
            Feature::HexFloat => "Hexadecimal floating point constant used but not supported in",
            Feature::NumPunct => "Numeric punctuation feature used but not supported in",
            Feature::UniversalCharNames => {
                "Universal character names feature used but not supported in"
            }
        }
    }
}

/// Print the resolved feature set for `-f`.
pub fn print_features(standard: Standard, f: &Features) {
    println!("Standard: {standard}");
    if f.double_slash {
        println!("Feature:  // comments");
    }
    if f.raw_string {
        println!("Feature:  Raw strings");
    }
    if f.unicode_literal {
        println!("Feature:  Unicode strings (u\"A\", U\"A\", u8\"A\")");
    }
    if f.binary_literal {
        println!("Feature:  Binary constants 0b0101");
    }
    if f.hex_float {
        println!("Feature:  Hexadecimal floats 0x2.34P-12");
    }
    if f.num_punct {
        println!("Feature:  Numeric punctuation 0x1234'5678");
    }
    if f.universal_char_names {
        println!("Feature:  Universal character names \\uXXXX and \\Uxxxxxxxx");
    }
}

#[derive(Serialize)]
struct FeatureReport<'a> {
    standard: &'a str,
    features: &'a Features,
}

/// Print the resolved feature set for `-f --json`.
pub fn print_features_json(standard: Standard, features: &Features) -> Result<(), Box<dyn Error>> {
    let report = FeatureReport {
        standard: standard.name(),
        features,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
#[path = "standard_test.rs"]
mod tests;

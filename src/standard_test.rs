use super::*;

#[test]
fn default_standard_is_c11() {
    assert_eq!(Standard::default(), Standard::C11);
}

#[test]
fn names_round_trip_through_from_arg() {
    for std in Standard::ALL {
        assert_eq!(Standard::from_arg(std.name()), Ok(std));
    }
}

#[test]
fn from_arg_is_case_insensitive() {
    assert_eq!(Standard::from_arg("c99"), Ok(Standard::C99));
    assert_eq!(Standard::from_arg("c++14"), Ok(Standard::Cxx14));
    assert_eq!(Standard::from_arg("C++03"), Ok(Standard::Cxx03));
    assert_eq!(Standard::from_arg("c"), Ok(Standard::C));
}

#[test]
fn from_arg_rejects_unknown_names() {
    assert!(Standard::from_arg("c123").is_err());
    assert!(Standard::from_arg("").is_err());
    assert!(Standard::from_arg("C+11").is_err());
}

#[test]
fn display_uses_the_classic_names() {
    assert_eq!(Standard::Cxx.to_string(), "C++");
    assert_eq!(Standard::Cxx17.to_string(), "C++17");
    assert_eq!(Standard::C90.to_string(), "C90");
}

#[test]
fn pre_c99_standards_have_no_features() {
    for std in [Standard::C89, Standard::C90, Standard::C94] {
        assert_eq!(Features::for_standard(std), Features::default());
    }
}

#[test]
fn c99_features() {
    let f = Features::for_standard(Standard::C99);
    assert!(f.double_slash && f.hex_float && f.universal_char_names);
    assert!(!f.unicode_literal && !f.raw_string && !f.binary_literal && !f.num_punct);
}

#[test]
fn c11_adds_unicode_to_c99() {
    let f = Features::for_standard(Standard::C11);
    assert!(f.double_slash && f.hex_float && f.universal_char_names && f.unicode_literal);
    assert!(!f.raw_string && !f.binary_literal && !f.num_punct);
    assert_eq!(f, Features::for_standard(Standard::C));
}

#[test]
fn cxx98_and_cxx03_match() {
    let f = Features::for_standard(Standard::Cxx98);
    assert!(f.double_slash && f.universal_char_names);
    assert!(!f.raw_string && !f.unicode_literal && !f.hex_float);
    assert_eq!(f, Features::for_standard(Standard::Cxx03));
}

#[test]
fn cxx11_features() {
    let f = Features::for_standard(Standard::Cxx11);
    assert!(f.double_slash && f.raw_string && f.unicode_literal && f.universal_char_names);
    assert!(!f.binary_literal && !f.hex_float && !f.num_punct);
    assert_eq!(f, Features::for_standard(Standard::Cxx));
}

#[test]
fn cxx14_adds_binary_and_punctuation() {
    let f = Features::for_standard(Standard::Cxx14);
    assert!(f.binary_literal && f.num_punct && f.raw_string);
    assert!(!f.hex_float);
}

#[test]
fn cxx17_has_everything() {
    let f = Features::for_standard(Standard::Cxx17);
    assert_eq!(
        f,
        Features {
            double_slash: true,
            raw_string: true,
            unicode_literal: true,
            binary_literal: true,
            hex_float: true,
            num_punct: true,
            universal_char_names: true,
        }
    );
}

#[test]
fn feature_report_serializes() {
    let f = Features::for_standard(Standard::C99);
    let json = serde_json::to_value(f).unwrap();
    assert_eq!(json["double_slash"], true);
    assert_eq!(json["raw_string"], false);
    assert_eq!(json["hex_float"], true);
}

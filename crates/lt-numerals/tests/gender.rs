//! Tests for gender names, endings and parse errors.

use lt_numerals::{Gender, ParseGenderError, cardinal_ending, ordinal_ending};

// =========================================================================
// Parsing
// =========================================================================

#[test]
fn parses_english_and_lithuanian_names() {
    for name in ["masculine", "masc", "m", "vyriškoji", "vyr"] {
        assert_eq!(name.parse::<Gender>(), Ok(Gender::Masculine), "{name}");
    }
    for name in ["feminine", "fem", "f", "moteriškoji", "mot"] {
        assert_eq!(name.parse::<Gender>(), Ok(Gender::Feminine), "{name}");
    }
}

#[test]
fn parsing_ignores_case_and_padding() {
    assert_eq!(" Feminine ".parse::<Gender>(), Ok(Gender::Feminine));
    assert_eq!("VYRIŠKOJI".parse::<Gender>(), Ok(Gender::Masculine));
}

#[test]
fn neuter_is_rejected_as_unsupported() {
    let err = "neuter".parse::<Gender>().unwrap_err();
    assert_eq!(
        err,
        ParseGenderError::Unsupported {
            name: "neuter".to_string()
        }
    );
    assert!(err.to_string().contains("masculine or feminine"));
    assert!("bevardė".parse::<Gender>().is_err());
}

#[test]
fn unknown_name_suggests_close_matches() {
    let err = "femnine".parse::<Gender>().unwrap_err();
    match &err {
        ParseGenderError::Unknown { name, suggestions } => {
            assert_eq!(name, "femnine");
            assert_eq!(suggestions, &vec!["feminine".to_string()]);
        }
        ParseGenderError::Unsupported { .. } => panic!("expected unknown gender"),
    }
    assert_eq!(
        err.to_string(),
        "unknown gender 'femnine', did you mean: feminine?"
    );
}

#[test]
fn unknown_name_without_matches_has_no_hint() {
    let err = "plural".parse::<Gender>().unwrap_err();
    assert_eq!(err.to_string(), "unknown gender 'plural'");
}

// =========================================================================
// Names and serialization
// =========================================================================

#[test]
fn display_and_tags() {
    assert_eq!(Gender::Masculine.to_string(), "masculine");
    assert_eq!(Gender::Feminine.tag(), "fem");
    assert_eq!(Gender::ALL, [Gender::Masculine, Gender::Feminine]);
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(
        serde_json::to_string(&Gender::Feminine).unwrap(),
        "\"feminine\""
    );
    let gender: Gender = serde_json::from_str("\"masculine\"").unwrap();
    assert_eq!(gender, Gender::Masculine);
}

// =========================================================================
// Endings
// =========================================================================

#[test]
fn ordinal_endings() {
    assert_eq!(ordinal_ending(Gender::Masculine), "as");
    assert_eq!(ordinal_ending(Gender::Feminine), "a");
}

#[test]
fn cardinal_endings_by_digit() {
    let expected = [
        (1, "as", "a"),
        (2, "u", "vi"),
        (3, "ys", "ejos"),
        (4, "i", "ios"),
        (9, "i", "ios"),
        (0, "", ""),
        (10, "", ""),
        (15, "", ""),
    ];
    for (n, masculine, feminine) in expected {
        assert_eq!(cardinal_ending(Gender::Masculine, n), masculine, "{n}");
        assert_eq!(cardinal_ending(Gender::Feminine, n), feminine, "{n}");
    }
}

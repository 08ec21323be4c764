//! Tests for numeral agreement classes and group noun selection.

use icu_locale_core::locale;
use icu_plurals::{PluralRuleType, PluralRules};
use lt_numerals::{GrammaticalNumber, HUNDRED, MAGNITUDE_GROUPS, MILLION, THOUSAND, magnitude_group};

#[test]
fn classify_last_two_digits() {
    assert_eq!(GrammaticalNumber::classify(1), GrammaticalNumber::SingularAgreeing);
    assert_eq!(GrammaticalNumber::classify(11), GrammaticalNumber::SpecialCase);
    assert_eq!(GrammaticalNumber::classify(21), GrammaticalNumber::SingularAgreeing);
    assert_eq!(GrammaticalNumber::classify(2), GrammaticalNumber::PluralAgreeing);
    assert_eq!(GrammaticalNumber::classify(12), GrammaticalNumber::SpecialCase);
    assert_eq!(GrammaticalNumber::classify(100), GrammaticalNumber::SpecialCase);
    assert_eq!(GrammaticalNumber::classify(101), GrammaticalNumber::SingularAgreeing);
}

#[test]
fn classify_zero_teens_and_round_tens() {
    for n in [0, 10, 13, 19, 20, 30, 90, 110, 111, 119, 1000] {
        assert_eq!(
            GrammaticalNumber::classify(n),
            GrammaticalNumber::SpecialCase,
            "n = {n}"
        );
    }
    for n in [22, 29, 102, 1_000_004] {
        assert_eq!(
            GrammaticalNumber::classify(n),
            GrammaticalNumber::PluralAgreeing,
            "n = {n}"
        );
    }
}

#[test]
fn classify_matches_cldr_lithuanian_rules() {
    let rules = PluralRules::try_new(locale!("lt").into(), PluralRuleType::Cardinal.into())
        .expect("lt plural rules should be available");
    for n in 0..=10_000_i64 {
        let class = GrammaticalNumber::classify(n.unsigned_abs());
        assert_eq!(class.plural_category(), rules.category_for(n), "n = {n}");
    }
}

#[test]
fn select_picks_form_by_class() {
    let pick = |n| GrammaticalNumber::classify(n).select("obuolys", "obuoliai", "obuolių");
    assert_eq!(pick(1), "obuolys");
    assert_eq!(pick(3), "obuoliai");
    assert_eq!(pick(15), "obuolių");
}

#[test]
fn serializes_as_snake_case() {
    let json = serde_json::to_string(&GrammaticalNumber::SingularAgreeing).unwrap();
    assert_eq!(json, "\"singular_agreeing\"");
    assert_eq!(GrammaticalNumber::SpecialCase.label(), "special");
    assert_eq!(GrammaticalNumber::PluralAgreeing.cldr_name(), "few");
}

// =============================================================================
// Magnitude groups
// =============================================================================

#[test]
fn groups_run_from_largest_power_down() {
    let powers: Vec<u32> = MAGNITUDE_GROUPS.iter().map(|g| g.power).collect();
    assert_eq!(powers, vec![18, 15, 12, 9, 6, 3, 2]);
}

#[test]
fn group_noun_for_count() {
    let thousand = magnitude_group(3).unwrap();
    assert_eq!(thousand.divisor(), 1000);
    assert_eq!(thousand.noun_for(1), "tūkstantis");
    assert_eq!(thousand.noun_for(4), "tūkstančiai");
    assert_eq!(thousand.noun_for(17), "tūkstančių");
    assert_eq!(thousand.noun_for(31), "tūkstantis");
    assert!(magnitude_group(4).is_none());
}

#[test]
fn named_groups_match_their_powers() {
    assert_eq!(MILLION.divisor(), 1_000_000);
    assert_eq!(MILLION.singular, "milijonas");
    assert_eq!(THOUSAND.divisor(), 1000);
    assert_eq!(HUNDRED.divisor(), 100);
    assert_eq!(magnitude_group(6), Some(&MILLION));
    assert_eq!(magnitude_group(3), Some(&THOUSAND));
    assert_eq!(magnitude_group(2), Some(&HUNDRED));
}

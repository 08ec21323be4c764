//! Fixed Lithuanian word lists.
//!
//! Each table is indexed by the value it spells. Unit words 1-9 and ordinal
//! stems are stems only: the converter appends a gender ending to them.

/// Zero as a cardinal.
pub const ZERO: &str = "nulis";

/// Prefix for negative values.
pub const MINUS: &str = "minus";

/// Cardinal stems 1-9 and full words 0 and 10-19.
pub const UNITS: [&str; 20] = [
    "nulis",
    "vien",
    "d",
    "tr",
    "ketur",
    "penk",
    "šeš",
    "septyn",
    "aštuon",
    "devyn",
    "dešimt",
    "vienuolika",
    "dvylika",
    "trylika",
    "keturiolika",
    "penkiolika",
    "šešiolika",
    "septyniolika",
    "aštuoniolika",
    "devyniolika",
];

/// Tens words, indexed by the tens digit. Only 2-9 are ever spelled.
pub const TENS: [&str; 10] = [
    "nulis",
    "dešimt",
    "dvidešimt",
    "trisdešimt",
    "keturiasdešimt",
    "penkiasdešimt",
    "šešiasdešimt",
    "septyniasdešimt",
    "aštuoniasdešimt",
    "devyniasdešimt",
];

/// Whole hundreds, indexed by the hundreds digit.
pub const HUNDREDS: [&str; 10] = [
    "nulis",
    "šimtas",
    "du šimtai",
    "trys šimtai",
    "keturi šimtai",
    "penki šimtai",
    "šeši šimtai",
    "septyni šimtai",
    "aštuoni šimtai",
    "devyni šimtai",
];

/// Ordinal stems 0-20.
pub const ORDINAL_STEMS: [&str; 21] = [
    "nulin",
    "pirm",
    "antr",
    "treč",
    "ketvirt",
    "penkt",
    "šešt",
    "septint",
    "aštunt",
    "devint",
    "dešimt",
    "vienuolikt",
    "dvylikt",
    "trylikt",
    "keturiolikt",
    "penkiolikt",
    "šešiolikt",
    "septyniolikt",
    "aštuoniolikt",
    "devyniolikt",
    "dvidešimt",
];

/// Older spelling of an ordinal of exactly one million.
pub const LEGACY_MILLION_SINGULAR: &str = "miljonas";

/// Older spelling of the noun after a count of millions in ordinals.
pub const LEGACY_MILLION_PLURAL: &str = "miljonai";

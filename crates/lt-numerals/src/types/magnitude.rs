use super::GrammaticalNumber;

/// A power-of-ten bucket with the three noun forms a count can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagnitudeGroup {
    /// Exponent of ten this group counts.
    pub power: u32,
    /// Form after a count ending in 1, also used bare for a count of exactly one.
    pub singular: &'static str,
    /// Form after a count ending in 2-9.
    pub plural: &'static str,
    /// Genitive plural, after 0, 10-20 and multiples of ten.
    pub special_case: &'static str,
}

impl MagnitudeGroup {
    /// `10^power`.
    pub const fn divisor(&self) -> u64 {
        10_u64.pow(self.power)
    }

    /// The noun form that agrees with `count`.
    pub fn noun_for(&self, count: u64) -> &'static str {
        GrammaticalNumber::classify(count).select(self.singular, self.plural, self.special_case)
    }
}

/// Group nouns from the largest power to the smallest.
pub const MAGNITUDE_GROUPS: [MagnitudeGroup; 7] = [
    MagnitudeGroup {
        power: 18,
        singular: "kvintilijonas",
        plural: "kvintilijonai",
        special_case: "kvintilijonų",
    },
    MagnitudeGroup {
        power: 15,
        singular: "kvadrilijonas",
        plural: "kvadrilijonai",
        special_case: "kvadrilijonų",
    },
    MagnitudeGroup {
        power: 12,
        singular: "trilijonas",
        plural: "trilijonai",
        special_case: "trilijonų",
    },
    MagnitudeGroup {
        power: 9,
        singular: "milijardas",
        plural: "milijardai",
        special_case: "milijardų",
    },
    MagnitudeGroup {
        power: 6,
        singular: "milijonas",
        plural: "milijonai",
        special_case: "milijonų",
    },
    MagnitudeGroup {
        power: 3,
        singular: "tūkstantis",
        plural: "tūkstančiai",
        special_case: "tūkstančių",
    },
    MagnitudeGroup {
        power: 2,
        singular: "šimtas",
        plural: "šimtai",
        special_case: "šimtų",
    },
];

/// The millions group.
pub const MILLION: MagnitudeGroup = MAGNITUDE_GROUPS[4];

/// The thousands group.
pub const THOUSAND: MagnitudeGroup = MAGNITUDE_GROUPS[5];

/// The hundreds group.
pub const HUNDRED: MagnitudeGroup = MAGNITUDE_GROUPS[6];

/// Look up the group counting `10^power`.
pub fn magnitude_group(power: u32) -> Option<&'static MagnitudeGroup> {
    MAGNITUDE_GROUPS.iter().find(|group| group.power == power)
}

//! The closed geo-political catalog.
//!
//! All states, continents, unions, and languages are enumerated here.
//! State metadata (display name, continent, language mappings, census
//! group) is stored in a compile-time lookup table indexed by the `State`
//! enum discriminant, so every derivation is a total function over the
//! closed variant set.

/// The number of states in the catalog.
pub const STATE_COUNT: usize = 11;

/// A continent a state belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Continent {
    Africa,
    Europe,
    Asia,
    America,
}

impl Continent {
    /// Returns the lowercase name of this continent.
    pub const fn name(self) -> &'static str {
        match self {
            Continent::Africa => "africa",
            Continent::Europe => "europe",
            Continent::Asia => "asia",
            Continent::America => "america",
        }
    }

    /// Parses a continent from its lowercase name.
    pub fn from_name(name: &str) -> Option<Continent> {
        match name {
            "africa" => Some(Continent::Africa),
            "europe" => Some(Continent::Europe),
            "asia" => Some(Continent::Asia),
            "america" => Some(Continent::America),
            _ => None,
        }
    }
}

/// A political or economic union a nation can be a member of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Union {
    Eu,
    Au,
    Cau,
    Nau,
    Unasur,
}

/// All union variants.
pub const ALL_UNIONS: [Union; 5] = [Union::Eu, Union::Au, Union::Cau, Union::Nau, Union::Unasur];

impl Union {
    /// Returns the treaty acronym for this union.
    pub const fn name(self) -> &'static str {
        match self {
            Union::Eu => "EU",
            Union::Au => "AU",
            Union::Cau => "CAU",
            Union::Nau => "NAU",
            Union::Unasur => "UNASUR",
        }
    }

    /// Parses a union from its treaty acronym.
    pub fn from_name(name: &str) -> Option<Union> {
        match name {
            "EU" => Some(Union::Eu),
            "AU" => Some(Union::Au),
            "CAU" => Some(Union::Cau),
            "NAU" => Some(Union::Nau),
            "UNASUR" => Some(Union::Unasur),
            _ => None,
        }
    }
}

/// A language spoken in one or more states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Mandarin,
    English,
    Deutsche,
    Italian,
    Latin,
    Spanish,
    French,
    Portuguese,
    Welsh,
    Scots,
    Irish,
    Cornish,
}

/// All language variants.
pub const ALL_LANGUAGES: [Language; 12] = [
    Language::Mandarin,
    Language::English,
    Language::Deutsche,
    Language::Italian,
    Language::Latin,
    Language::Spanish,
    Language::French,
    Language::Portuguese,
    Language::Welsh,
    Language::Scots,
    Language::Irish,
    Language::Cornish,
];

impl Language {
    /// Returns the lowercase name of this language.
    pub const fn name(self) -> &'static str {
        match self {
            Language::Mandarin => "mandarin",
            Language::English => "english",
            Language::Deutsche => "deutsche",
            Language::Italian => "italian",
            Language::Latin => "latin",
            Language::Spanish => "spanish",
            Language::French => "french",
            Language::Portuguese => "portuguese",
            Language::Welsh => "welsh",
            Language::Scots => "scots",
            Language::Irish => "irish",
            Language::Cornish => "cornish",
        }
    }

    /// Parses a language from its lowercase name.
    pub fn from_name(name: &str) -> Option<Language> {
        ALL_LANGUAGES.iter().find(|l| l.name() == name).copied()
    }
}

/// A political subdivision in the catalog.
///
/// Variants are in alphabetical order. The `#[repr(u8)]` attribute
/// enables use as an array index into [`STATE_INFO`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum State {
    Brazil = 0,
    China = 1,
    England = 2,
    Germany = 3,
    Italy = 4,
    Nigeria = 5,
    NorthernIreland = 6,
    Scotland = 7,
    SouthAfrica = 8,
    UnitedStates = 9,
    Wales = 10,
}

/// All state variants in index order.
pub const ALL_STATES: [State; STATE_COUNT] = [
    State::Brazil,
    State::China,
    State::England,
    State::Germany,
    State::Italy,
    State::Nigeria,
    State::NorthernIreland,
    State::Scotland,
    State::SouthAfrica,
    State::UnitedStates,
    State::Wales,
];

impl State {
    /// Returns the display name for this state.
    pub const fn name(self) -> &'static str {
        STATE_INFO[self as usize].name
    }

    /// Returns the continent this state belongs to.
    ///
    /// The mapping is fixed in the catalog table; a state cannot be
    /// constructed on the wrong continent.
    pub const fn continent(self) -> Continent {
        STATE_INFO[self as usize].continent
    }

    /// Returns the single official language of this state.
    pub const fn official_language(self) -> Language {
        STATE_INFO[self as usize].official_language
    }

    /// Returns the additional recognized languages of this state.
    ///
    /// Most states recognize none; the slice is empty for those.
    pub const fn recognized_languages(self) -> &'static [Language] {
        STATE_INFO[self as usize].recognized_languages
    }

    /// Returns true if this state is part of the British Isles census
    /// group, which carries a fixed ethnic breakdown.
    pub const fn in_british_isles(self) -> bool {
        STATE_INFO[self as usize].british_isles
    }

    /// Looks up a state by its display name.
    pub fn from_name(name: &str) -> Option<State> {
        ALL_STATES.iter().find(|s| s.name() == name).copied()
    }
}

/// Static metadata for a state.
pub struct StateInfo {
    pub name: &'static str,
    pub continent: Continent,
    pub official_language: Language,
    pub recognized_languages: &'static [Language],
    pub british_isles: bool,
}

/// Compile-time lookup table: index by `State as usize`.
pub static STATE_INFO: [StateInfo; STATE_COUNT] = [
    // 0: Brazil
    StateInfo { name: "Brazil", continent: Continent::America, official_language: Language::Portuguese, recognized_languages: &[], british_isles: false },
    // 1: China
    StateInfo { name: "China", continent: Continent::Asia, official_language: Language::Mandarin, recognized_languages: &[], british_isles: false },
    // 2: England
    StateInfo { name: "England", continent: Continent::Europe, official_language: Language::English, recognized_languages: &[Language::Cornish], british_isles: true },
    // 3: Germany
    StateInfo { name: "Germany", continent: Continent::Europe, official_language: Language::Deutsche, recognized_languages: &[], british_isles: false },
    // 4: Italy
    StateInfo { name: "Italy", continent: Continent::Europe, official_language: Language::Italian, recognized_languages: &[Language::Latin], british_isles: false },
    // 5: Nigeria
    StateInfo { name: "Nigeria", continent: Continent::Africa, official_language: Language::English, recognized_languages: &[], british_isles: false },
    // 6: Northern Ireland
    StateInfo { name: "Northern Ireland", continent: Continent::Europe, official_language: Language::English, recognized_languages: &[Language::Irish], british_isles: true },
    // 7: Scotland
    StateInfo { name: "Scotland", continent: Continent::Europe, official_language: Language::English, recognized_languages: &[Language::Scots], british_isles: true },
    // 8: South Africa
    StateInfo { name: "South Africa", continent: Continent::Africa, official_language: Language::English, recognized_languages: &[], british_isles: false },
    // 9: United States
    StateInfo { name: "United States", continent: Continent::America, official_language: Language::English, recognized_languages: &[], british_isles: false },
    // 10: Wales
    StateInfo { name: "Wales", continent: Continent::Europe, official_language: Language::English, recognized_languages: &[Language::Welsh], british_isles: true },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_indices_are_sequential() {
        for (i, s) in ALL_STATES.iter().enumerate() {
            assert_eq!(*s as usize, i, "State {:?} has wrong index", s);
        }
    }

    #[test]
    fn official_language_is_total() {
        // Every state resolves to exactly one language; spot-check the
        // non-english mappings and that the rest default to english.
        for s in ALL_STATES {
            let lang = s.official_language();
            match s {
                State::Brazil => assert_eq!(lang, Language::Portuguese),
                State::China => assert_eq!(lang, Language::Mandarin),
                State::Germany => assert_eq!(lang, Language::Deutsche),
                State::Italy => assert_eq!(lang, Language::Italian),
                _ => assert_eq!(lang, Language::English),
            }
        }
    }

    #[test]
    fn recognized_languages_mapping() {
        assert_eq!(State::NorthernIreland.recognized_languages(), &[Language::Irish]);
        assert_eq!(State::Wales.recognized_languages(), &[Language::Welsh]);
        assert_eq!(State::Scotland.recognized_languages(), &[Language::Scots]);
        assert_eq!(State::Italy.recognized_languages(), &[Language::Latin]);
        assert_eq!(State::England.recognized_languages(), &[Language::Cornish]);

        for s in [State::Brazil, State::China, State::Germany, State::Nigeria,
                  State::SouthAfrica, State::UnitedStates] {
            assert!(s.recognized_languages().is_empty(), "{:?} recognizes none", s);
        }
    }

    #[test]
    fn british_isles_group() {
        let group: Vec<State> = ALL_STATES.iter().filter(|s| s.in_british_isles()).copied().collect();
        assert_eq!(
            group,
            vec![State::England, State::NorthernIreland, State::Scotland, State::Wales]
        );
    }

    #[test]
    fn continent_table() {
        assert_eq!(State::Brazil.continent(), Continent::America);
        assert_eq!(State::UnitedStates.continent(), Continent::America);
        assert_eq!(State::China.continent(), Continent::Asia);
        assert_eq!(State::Nigeria.continent(), Continent::Africa);
        assert_eq!(State::SouthAfrica.continent(), Continent::Africa);

        let european = ALL_STATES.iter().filter(|s| s.continent() == Continent::Europe).count();
        assert_eq!(european, 6);
    }

    #[test]
    fn state_name_roundtrip() {
        for s in ALL_STATES {
            assert_eq!(State::from_name(s.name()), Some(s));
        }
        assert_eq!(State::from_name("Atlantis"), None);
    }

    #[test]
    fn union_name_roundtrip() {
        for u in ALL_UNIONS {
            assert_eq!(Union::from_name(u.name()), Some(u));
        }
        assert_eq!(Union::from_name("NATO"), None);
    }

    #[test]
    fn language_name_roundtrip() {
        for l in ALL_LANGUAGES {
            assert_eq!(Language::from_name(l.name()), Some(l));
        }
        assert_eq!(Language::from_name("esperanto"), None);
    }

    #[test]
    fn continent_name_roundtrip() {
        for c in [Continent::Africa, Continent::Europe, Continent::Asia, Continent::America] {
            assert_eq!(Continent::from_name(c.name()), Some(c));
        }
        assert_eq!(Continent::from_name("oceania"), None);
    }
}

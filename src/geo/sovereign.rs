//! Capability traits and the sovereign-entity abstraction.
//!
//! Each trait exposes one narrow concern so a consumer can depend on the
//! capability it needs rather than on a monolithic country interface.
//! [`SovereignEntity`] composes all four, and [`Nation`] is its one
//! concrete implementation.

use super::catalog::{Language, State, Union};
use super::ethnic::{ethnic_breakdown, Ethnic};

/// A named territory: member states and population.
pub trait Country {
    fn name(&self) -> &str;
    fn states(&self) -> &[State];
    /// Population count. Non-negative expected, not enforced.
    fn population(&self) -> f64;
}

/// Membership in a political or economic union.
pub trait Community {
    fn member(&self) -> Union;
}

/// Official and additional languages.
pub trait Lingua {
    fn official_language(&self) -> Language;
    fn other_languages(&self) -> Vec<Language>;
}

/// Derived ethnic composition.
pub trait Ethnicity {
    fn ethnic_groups(&self) -> Vec<Ethnic>;
}

/// Every country derives its ethnic composition from its member states,
/// so the capability comes for free with `Country`. The breakdown is
/// recomputed on every access; the state list is immutable once built.
impl<C: Country> Ethnicity for C {
    fn ethnic_groups(&self) -> Vec<Ethnic> {
        ethnic_breakdown(self.states())
    }
}

/// A state speaks its catalog languages directly.
impl Lingua for State {
    fn official_language(&self) -> Language {
        State::official_language(*self)
    }

    fn other_languages(&self) -> Vec<Language> {
        self.recognized_languages().to_vec()
    }
}

/// The composed abstraction representing a country in full: territory,
/// union membership, languages, and derived ethnic composition.
pub trait SovereignEntity: Country + Community + Lingua + Ethnicity {
    /// Constructs an entity from its constituent facts.
    fn new(
        name: String,
        states: Vec<State>,
        population: f64,
        official_language: Language,
        member: Union,
    ) -> Self
    where
        Self: Sized;
}

/// A concrete sovereign entity. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Nation {
    name: String,
    states: Vec<State>,
    population: f64,
    official_language: Language,
    member: Union,
}

impl Country for Nation {
    fn name(&self) -> &str {
        &self.name
    }

    fn states(&self) -> &[State] {
        &self.states
    }

    fn population(&self) -> f64 {
        self.population
    }
}

impl Community for Nation {
    fn member(&self) -> Union {
        self.member
    }
}

impl Lingua for Nation {
    /// The official language is supplied at construction, never derived
    /// from the member states.
    fn official_language(&self) -> Language {
        self.official_language
    }

    /// Concatenation of each member state's recognized-language list, in
    /// state order. Duplicates are preserved, never deduplicated.
    fn other_languages(&self) -> Vec<Language> {
        self.states
            .iter()
            .flat_map(|s| s.recognized_languages().iter().copied())
            .collect()
    }
}

impl SovereignEntity for Nation {
    fn new(
        name: String,
        states: Vec<State>,
        population: f64,
        official_language: Language,
        member: Union,
    ) -> Self {
        Nation {
            name,
            states,
            population,
            official_language,
            member,
        }
    }
}

//! Geo-political model.
//!
//! Contains the closed catalog of states, continents, unions, and
//! languages, the ethnic-composition derivation, and the capability
//! traits composed into the sovereign-entity abstraction.

pub mod catalog;
pub mod ethnic;
pub mod sovereign;

pub use catalog::{
    Continent, Language, State, StateInfo, Union, ALL_LANGUAGES, ALL_STATES, ALL_UNIONS,
    STATE_COUNT, STATE_INFO,
};
pub use ethnic::{ethnic_breakdown, Ethnic, BRITISH_ISLES_BREAKDOWN};
pub use sovereign::{Community, Country, Ethnicity, Lingua, Nation, SovereignEntity};

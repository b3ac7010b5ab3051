//! Ethnic composition derivation.
//!
//! States in the British Isles census group carry a fixed four-entry
//! breakdown; every other state reports no data. The figures are
//! illustrative and deliberately do not sum to 100.

use super::catalog::State;

/// An ethnic subgroup share, or the marker for a state with no census
/// data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ethnic {
    Caucasian { percentage: f32 },
    Black { percentage: f32 },
    Asian { percentage: f32 },
    Mixed { percentage: f32 },
    Others { percentage: f32 },
    NoData,
}

impl Ethnic {
    /// Returns the subgroup share, or `None` for the no-data marker.
    pub const fn percentage(self) -> Option<f32> {
        match self {
            Ethnic::Caucasian { percentage }
            | Ethnic::Black { percentage }
            | Ethnic::Asian { percentage }
            | Ethnic::Mixed { percentage }
            | Ethnic::Others { percentage } => Some(percentage),
            Ethnic::NoData => None,
        }
    }
}

/// The fixed breakdown every British Isles state contributes.
pub const BRITISH_ISLES_BREAKDOWN: [Ethnic; 4] = [
    Ethnic::Caucasian { percentage: 81.9 },
    Ethnic::Black { percentage: 13.0 },
    Ethnic::Asian { percentage: 8.0 },
    Ethnic::Others { percentage: 3.0 },
];

/// Derives the ethnic composition of a state list.
///
/// Folds over the slice in order: a British Isles state contributes the
/// fixed four-entry breakdown, any other state contributes a single
/// [`Ethnic::NoData`] entry rather than being skipped. Pure function of
/// the input; callers recompute on every access.
pub fn ethnic_breakdown(states: &[State]) -> Vec<Ethnic> {
    let mut groups = Vec::new();
    for state in states {
        if state.in_british_isles() {
            groups.extend_from_slice(&BRITISH_ISLES_BREAKDOWN);
        } else {
            groups.push(Ethnic::NoData);
        }
    }
    groups
}

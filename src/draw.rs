use crate::error::Result;
use crate::groups::{assign_groups, Entrant, Group, GroupLabel, Shuffle};
use crate::io::{DrawSink, EntrantSource};
use crate::pairings::{cross_group_pairings, intra_group_pairings, Pairing};
use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use tracing::{debug, info};

/// A complete draw: the groups and the ordered list of matches.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct Draw {
    #[serde(rename = "buckets")]
    groups: Vec<Group>,
    matches: Vec<Pairing>,
}

impl Draw {
    /// The groups, in label order.
    #[inline]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    #[inline]
    pub fn group(&self, label: GroupLabel) -> Option<&Group> {
        self.groups.iter().find(|group| group.label() == label)
    }

    /// The matches, in generation order.
    #[inline]
    pub fn matches(&self) -> &[Pairing] {
        &self.matches
    }

    /// Number of matches of every entrant, in group order.
    pub fn matches_per_entrant(&self) -> IndexMap<&Entrant, usize> {
        let mut counts: IndexMap<_, _> = self
            .groups
            .iter()
            .flat_map(Group::entrants)
            .map(|entrant| (entrant, 0))
            .collect();

        for pairing in &self.matches {
            *counts.entry(&pairing.home).or_default() += 1;
            *counts.entry(&pairing.away).or_default() += 1;
        }

        counts
    }
}

impl Display for Draw {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for group in &self.groups {
            writeln!(f, "Bucket {}:", group.label())?;
            for entrant in group.entrants() {
                writeln!(f, "{entrant}")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Matches:")?;
        for pairing in &self.matches {
            writeln!(f, "{pairing}")?;
        }

        Ok(())
    }
}

/// Generates a draw from the provided entrants.
///
/// Matches are generated inside every group first (A to D), then between every couple of groups,
/// in the order `(A, B)`, `(A, C)`, `(A, D)`, `(B, C)`, `(B, D)`, `(C, D)`.
pub fn generate_draw<S: Shuffle + ?Sized>(
    entrants: Vec<Entrant>,
    shuffler: &mut S,
) -> Result<Draw> {
    let groups = assign_groups(entrants, shuffler)?;

    let mut matches: Vec<_> = groups.iter().flat_map(intra_group_pairings).collect();
    for (primary, secondary) in groups.iter().tuple_combinations() {
        debug!(primary = %primary.label(), secondary = %secondary.label(), "pairing groups");
        matches.extend(cross_group_pairings(primary, secondary));
    }

    Ok(Draw { groups, matches })
}

/// Reads the entrants from `source`, generates a draw and writes it to `sink`.
///
/// Nothing is written if the entrants are invalid.
pub fn run<S: Shuffle + ?Sized>(
    source: &impl EntrantSource,
    sink: &mut impl DrawSink,
    shuffler: &mut S,
) -> Result<Draw> {
    let entrants = source.entrants()?;
    info!("read {} entrants", entrants.len());

    let draw = generate_draw(entrants, shuffler)?;
    info!(groups = draw.groups.len(), matches = draw.matches.len(), "draw generated");
    for (entrant, count) in draw.matches_per_entrant() {
        debug!(%entrant, count, "matches per entrant");
    }

    sink.write_draw(&draw)?;
    Ok(draw)
}

use crate::groups::{Entrant, Group};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Number of entrants of a triple inside a group.
pub const TRIPLE_SIZE: usize = 3;

/// A match between two entrants.
///
/// The match is unordered: `home` and `away` only record the order the entrants were paired in,
/// which is the order they are reported in.
#[derive(Serialize, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Pairing {
    pub home: Entrant,
    pub away: Entrant,
}

impl Pairing {
    #[inline]
    pub fn new(home: &Entrant, away: &Entrant) -> Pairing {
        Pairing {
            home: home.clone(),
            away: away.clone(),
        }
    }

    /// Returns the opponent of `entrant`, or [`None`] if it doesn't play this match.
    pub fn opponent_of(&self, entrant: &Entrant) -> Option<&Entrant> {
        if self.home == *entrant {
            Some(&self.away)
        } else if self.away == *entrant {
            Some(&self.home)
        } else {
            None
        }
    }

    /// Whether both matches are between the same two entrants, in any order.
    pub fn same_teams(&self, other: &Pairing) -> bool {
        (self.home == other.home && self.away == other.away)
            || (self.home == other.away && self.away == other.home)
    }
}

impl Display for Pairing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.home, self.away)
    }
}

/// Generates the matches inside a group.
///
/// The group is split in three consecutive triples and every triple plays a round-robin,
/// so that `(x, y, z)` yields `x - y`, `z - x` and `y - z`.
pub fn intra_group_pairings(group: &Group) -> Vec<Pairing> {
    group
        .entrants()
        .chunks_exact(TRIPLE_SIZE)
        .flat_map(|triple| match triple {
            [x, y, z] => [Pairing::new(x, y), Pairing::new(z, x), Pairing::new(y, z)],
            _ => unreachable!(), // chunks_exact only yields triples
        })
        .collect()
}

/// Generates the matches between two groups.
///
/// The entrant at position `i` of `primary` plays the entrants at positions `i` and `i + 1`
/// (wrapping around) of `secondary`. Swapping the groups gives different matches.
pub fn cross_group_pairings(primary: &Group, secondary: &Group) -> Vec<Pairing> {
    let next = secondary.entrants().iter().cycle().skip(1);

    primary
        .entrants()
        .iter()
        .zip(secondary.entrants())
        .zip(next)
        .flat_map(|((entrant, aligned), offset)| {
            [Pairing::new(entrant, aligned), Pairing::new(offset, entrant)]
        })
        .collect()
}

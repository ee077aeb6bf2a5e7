use crate::error::{DrawError, Result};
use crate::{RandGen, ENTRANT_COUNT, GROUP_COUNT, GROUP_SIZE};
use rand::prelude::SliceRandom;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::ops::Index;
use tracing::debug;

/// An entrant of the draw, identified by its name.
#[derive(Serialize, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[serde(transparent)]
pub struct Entrant(String);

impl Entrant {
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Entrant(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Entrant {
    #[inline]
    fn from(name: &str) -> Self {
        Entrant::new(name)
    }
}

impl From<String> for Entrant {
    #[inline]
    fn from(name: String) -> Self {
        Entrant(name)
    }
}

impl AsRef<str> for Entrant {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Entrant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Label of a group (bucket).
#[derive(Serialize, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum GroupLabel {
    A,
    B,
    C,
    D,
}

impl GroupLabel {
    /// Every label, in draw order.
    pub const ALL: [GroupLabel; GROUP_COUNT] =
        [GroupLabel::A, GroupLabel::B, GroupLabel::C, GroupLabel::D];
}

impl Display for GroupLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            GroupLabel::A => "A",
            GroupLabel::B => "B",
            GroupLabel::C => "C",
            GroupLabel::D => "D",
        };
        f.write_str(label)
    }
}

/// A group of exactly [`GROUP_SIZE`] entrants. The order of the entrants is significant.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct Group {
    label: GroupLabel,
    entrants: Vec<Entrant>,
}

impl Group {
    /// Creates a new group, checking it has exactly [`GROUP_SIZE`] entrants.
    pub fn new(label: GroupLabel, entrants: Vec<Entrant>) -> Result<Group> {
        if entrants.len() != GROUP_SIZE {
            return Err(DrawError::GroupSize {
                label,
                expected: GROUP_SIZE,
                found: entrants.len(),
            });
        }

        Ok(Group { label, entrants })
    }

    #[inline]
    pub fn label(&self) -> GroupLabel {
        self.label
    }

    /// The entrants of the group, in their assigned order.
    #[inline]
    pub fn entrants(&self) -> &[Entrant] {
        &self.entrants
    }

    #[inline]
    pub fn contains(&self, entrant: &Entrant) -> bool {
        self.entrants.contains(entrant)
    }
}

impl Index<usize> for Group {
    type Output = Entrant;

    #[inline]
    fn index(&self, index: usize) -> &Entrant {
        &self.entrants[index]
    }
}

/// A source of permutations for the entrants.
pub trait Shuffle {
    /// Permutes the entrants in place.
    fn shuffle_entrants(&mut self, entrants: &mut [Entrant]);
}

impl Shuffle for RandGen {
    #[inline]
    fn shuffle_entrants(&mut self, entrants: &mut [Entrant]) {
        entrants.shuffle(self);
    }
}

/// Identity permutation: the entrants keep the order they were provided in.
#[derive(Copy, Clone, Default, Debug)]
pub struct KeepOrder;

impl Shuffle for KeepOrder {
    #[inline(always)]
    fn shuffle_entrants(&mut self, _: &mut [Entrant]) {}
}

impl<S: Shuffle + ?Sized> Shuffle for &mut S {
    #[inline]
    fn shuffle_entrants(&mut self, entrants: &mut [Entrant]) {
        (**self).shuffle_entrants(entrants);
    }
}

/// Randomly partitions exactly [`ENTRANT_COUNT`] entrants into [`GROUP_COUNT`] groups
/// labeled from A to D.
///
/// The entrants are shuffled once and then split in consecutive chunks of [`GROUP_SIZE`].
/// Duplicate entrants are not detected.
pub fn assign_groups<S: Shuffle + ?Sized>(
    mut entrants: Vec<Entrant>,
    shuffler: &mut S,
) -> Result<Vec<Group>> {
    if entrants.len() != ENTRANT_COUNT {
        return Err(DrawError::EntrantCount {
            expected: ENTRANT_COUNT,
            found: entrants.len(),
        });
    }

    shuffler.shuffle_entrants(&mut entrants);

    let mut entrants = entrants.into_iter();
    let groups = GroupLabel::ALL
        .into_iter()
        .map(|label| Group::new(label, entrants.by_ref().take(GROUP_SIZE).collect()))
        .collect::<Result<Vec<_>>>()?;

    for group in &groups {
        debug!(group = %group.label(), entrants = ?group.entrants(), "group assigned");
    }

    Ok(groups)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gen_seed, make_rng};
    use std::collections::HashSet;

    fn numbered_entrants(count: usize) -> Vec<Entrant> {
        (1..=count).map(|i| Entrant::new(format!("T{i}"))).collect()
    }

    #[derive(Default)]
    struct CountingShuffle(usize);

    impl Shuffle for CountingShuffle {
        fn shuffle_entrants(&mut self, entrants: &mut [Entrant]) {
            self.0 += 1;
            entrants.reverse();
        }
    }

    #[test]
    fn groups_partition_the_entrants() {
        for _ in 0..50 {
            let entrants = numbered_entrants(ENTRANT_COUNT);
            let groups = assign_groups(entrants.clone(), &mut make_rng(gen_seed())).unwrap();

            assert_eq!(groups.len(), GROUP_COUNT);
            let mut seen = HashSet::new();
            for (group, label) in groups.iter().zip(GroupLabel::ALL) {
                assert_eq!(group.label(), label);
                assert_eq!(group.entrants().len(), GROUP_SIZE);
                for entrant in group.entrants() {
                    assert!(seen.insert(entrant.clone()), "{entrant} is in two groups");
                }
            }
            assert_eq!(seen, entrants.into_iter().collect::<HashSet<_>>());
        }
    }

    #[test]
    fn keep_order_slices_consecutively() {
        let groups = assign_groups(numbered_entrants(ENTRANT_COUNT), &mut KeepOrder).unwrap();

        for (g, group) in groups.iter().enumerate() {
            let expected: Vec<_> = (1..=GROUP_SIZE)
                .map(|i| Entrant::new(format!("T{}", g * GROUP_SIZE + i)))
                .collect();
            assert_eq!(group.entrants(), expected.as_slice());
        }
    }

    #[test]
    fn shuffles_exactly_once() {
        let mut shuffler = CountingShuffle::default();
        let groups = assign_groups(numbered_entrants(ENTRANT_COUNT), &mut shuffler).unwrap();

        assert_eq!(shuffler.0, 1);
        assert_eq!(groups[0][0], Entrant::from("T36"));
        assert_eq!(groups[3][8], Entrant::from("T1"));
    }

    #[test]
    fn wrong_entrant_count() {
        for count in [0, 1, 35, 37, 72] {
            let mut shuffler = CountingShuffle::default();
            let result = assign_groups(numbered_entrants(count), &mut shuffler);

            assert!(matches!(
                result,
                Err(DrawError::EntrantCount { expected: ENTRANT_COUNT, found }) if found == count
            ));
            assert_eq!(shuffler.0, 0, "randomness consumed on invalid input");
        }
    }

    #[test]
    fn duplicates_are_not_rejected() {
        let mut entrants = numbered_entrants(ENTRANT_COUNT);
        entrants[1] = entrants[0].clone();

        assert!(assign_groups(entrants, &mut KeepOrder).is_ok());
    }

    #[test]
    fn group_size_is_checked() {
        for size in [0, 8, 10] {
            let result = Group::new(GroupLabel::C, numbered_entrants(size));
            assert!(matches!(
                result,
                Err(DrawError::GroupSize { label: GroupLabel::C, expected: GROUP_SIZE, found })
                    if found == size
            ));
        }
        assert!(Group::new(GroupLabel::C, numbered_entrants(GROUP_SIZE)).is_ok());
    }

    #[test]
    fn test_reproducibility() {
        // Execute a bunch of times to test against different seeds
        for _ in 0..20 {
            let seed = gen_seed();
            let groups =
                assign_groups(numbered_entrants(ENTRANT_COUNT), &mut make_rng(seed)).unwrap();

            for _ in 0..10 {
                let again =
                    assign_groups(numbered_entrants(ENTRANT_COUNT), &mut make_rng(seed)).unwrap();
                assert_eq!(groups, again);
            }
        }
    }

    #[test]
    fn shuffle_reaches_every_group() {
        // T1 should land in every group over enough seeds
        let mut labels = HashSet::new();
        for seed in 0..200 {
            let groups =
                assign_groups(numbered_entrants(ENTRANT_COUNT), &mut make_rng(seed)).unwrap();
            let first = Entrant::from("T1");
            let group = groups.iter().find(|g| g.contains(&first)).unwrap();
            labels.insert(group.label());
        }
        assert_eq!(labels.len(), GROUP_COUNT);
    }
}

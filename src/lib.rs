#![forbid(unsafe_code)]

use rand::{thread_rng, Rng};

pub mod config;
pub mod draw;
pub mod error;
pub mod groups;
pub mod io;
pub mod logger;
pub mod pairings;

pub use draw::{generate_draw, run, Draw};
pub use error::{DrawError, Result};
pub use groups::{assign_groups, Entrant, Group, GroupLabel, KeepOrder, Shuffle};
pub use pairings::{cross_group_pairings, intra_group_pairings, Pairing};

/// Number of groups of a draw.
pub const GROUP_COUNT: usize = 4;

/// Number of entrants per group.
pub const GROUP_SIZE: usize = 9;

/// Number of entrants a draw requires.
pub const ENTRANT_COUNT: usize = GROUP_COUNT * GROUP_SIZE;

/// The random generator used to shuffle the entrants.
pub type RandGen = rand_pcg::Pcg64;

/// Seeder for [`RandGen`].
pub type Seeder = rand_seeder::Seeder;

/// Generates a fresh random seed.
#[inline]
pub fn gen_seed() -> u64 {
    thread_rng().gen()
}

/// Makes a [`RandGen`] from the provided seed.
#[inline]
pub fn make_rng(seed: u64) -> RandGen {
    Seeder::from(seed).make_rng()
}

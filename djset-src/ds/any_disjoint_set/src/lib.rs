//! Runtime selection among the four strategies.

use std::{fmt, str::FromStr};

use disjoint_set::{DisjointSet, Result};
use log::debug;
use path_compression::PathCompression;
use quick_find::QuickFind;
use quick_union::QuickUnion;
use thiserror::Error;
use union_by_rank::UnionByRank;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Strategy {
    QuickFind,
    QuickUnion,
    #[default]
    UnionByRank,
    PathCompression,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::QuickFind,
        Strategy::QuickUnion,
        Strategy::UnionByRank,
        Strategy::PathCompression,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::QuickFind => "quick-find",
            Strategy::QuickUnion => "quick-union",
            Strategy::UnionByRank => "union-by-rank",
            Strategy::PathCompression => "path-compression",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error(
    "unknown strategy `{0}`; expected one of quick-find, quick-union, \
     union-by-rank, path-compression"
)]
pub struct ParseStrategyError(String);

/// Accepts the names printed by `Display`, ignoring ASCII case and treating
/// `_` as `-`.
///
/// ```
/// # use any_disjoint_set::Strategy;
/// assert_eq!("Union_By_Rank".parse(), Ok(Strategy::UnionByRank));
/// assert!("quick".parse::<Strategy>().is_err());
/// ```
impl FromStr for Strategy {
    type Err = ParseStrategyError;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == key)
            .ok_or_else(|| ParseStrategyError(s.to_owned()))
    }
}

#[derive(Clone, Debug)]
pub enum AnyDisjointSet {
    QuickFind(QuickFind),
    QuickUnion(QuickUnion),
    UnionByRank(UnionByRank),
    PathCompression(PathCompression),
}

macro_rules! dispatch {
    ( $self:expr, $ds:ident => $e:expr ) => {
        match $self {
            AnyDisjointSet::QuickFind($ds) => $e,
            AnyDisjointSet::QuickUnion($ds) => $e,
            AnyDisjointSet::UnionByRank($ds) => $e,
            AnyDisjointSet::PathCompression($ds) => $e,
        }
    };
}

impl AnyDisjointSet {
    pub fn with_strategy(strategy: Strategy, len: usize) -> Self {
        debug!("new {strategy} disjoint set over {len} elements");
        match strategy {
            Strategy::QuickFind => Self::QuickFind(QuickFind::new(len)),
            Strategy::QuickUnion => Self::QuickUnion(QuickUnion::new(len)),
            Strategy::UnionByRank => Self::UnionByRank(UnionByRank::new(len)),
            Strategy::PathCompression => {
                Self::PathCompression(PathCompression::new(len))
            }
        }
    }
    pub fn strategy(&self) -> Strategy {
        match self {
            Self::QuickFind(_) => Strategy::QuickFind,
            Self::QuickUnion(_) => Strategy::QuickUnion,
            Self::UnionByRank(_) => Strategy::UnionByRank,
            Self::PathCompression(_) => Strategy::PathCompression,
        }
    }
}

impl DisjointSet for AnyDisjointSet {
    fn new(len: usize) -> Self { Self::with_strategy(Strategy::default(), len) }
    fn len(&self) -> usize { dispatch!(self, ds => ds.len()) }
    fn find(&mut self, x: usize) -> Result<usize> {
        dispatch!(self, ds => ds.find(x))
    }
    fn union(&mut self, x: usize, y: usize) -> Result<()> {
        dispatch!(self, ds => ds.union(x, y))
    }
    fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        dispatch!(self, ds => ds.connected(x, y))
    }
}

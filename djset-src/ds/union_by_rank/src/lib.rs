//! Weighted union: the root with the larger rank adopts the other.
//!
//! Ranks start at `1` and grow only when two roots of equal rank merge, so a
//! tree of rank `r` holds at least `2^(r - 1)` elements and every path has
//! fewer than `r` edges.

use std::cmp::Ordering::{Equal, Greater, Less};

use disjoint_set::{check_index, singletons, DisjointSet, Result};
use log::trace;

#[derive(Clone, Debug)]
pub struct UnionByRank {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionByRank {
    pub fn root(&self, x: usize) -> Result<usize> {
        let mut x = check_index(x, self.parent.len())?;
        while self.parent[x] != x {
            x = self.parent[x];
        }
        Ok(x)
    }
    /// The rank of the root of `x`'s group.
    pub fn rank(&self, x: usize) -> Result<usize> {
        self.root(x).map(|r| self.rank[r])
    }
}

impl DisjointSet for UnionByRank {
    fn new(len: usize) -> Self {
        Self { parent: singletons(len), rank: vec![1; len] }
    }
    fn len(&self) -> usize { self.parent.len() }
    fn find(&mut self, x: usize) -> Result<usize> { self.root(x) }
    fn union(&mut self, x: usize, y: usize) -> Result<()> {
        let (rx, ry) = self.distinct_roots(x, y)?;
        let (par, child) = match self.rank[rx].cmp(&self.rank[ry]) {
            Greater => (rx, ry),
            Less => (ry, rx),
            Equal => {
                self.rank[rx] += 1;
                (rx, ry)
            }
        };
        self.parent[child] = par;
        trace!(
            "union-by-rank: union({x}, {y}) attached {} under {} (rank {})",
            child, par, self.rank[par]
        );
        Ok(())
    }
}

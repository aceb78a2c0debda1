//! Quick-find: every element stores its group id directly.
//!
//! `find` is a lookup; `union` relabels the whole absorbed group with a
//! scan over the universe. Suited to query-heavy workloads.

use disjoint_set::{check_index, singletons, DisjointSet, Result};
use log::trace;

#[derive(Clone, Debug)]
pub struct QuickFind(Vec<usize>);

impl QuickFind {
    pub fn group_id(&self, x: usize) -> Result<usize> {
        Ok(self.0[check_index(x, self.0.len())?])
    }
}

impl DisjointSet for QuickFind {
    fn new(len: usize) -> Self { Self(singletons(len)) }
    fn len(&self) -> usize { self.0.len() }
    fn find(&mut self, x: usize) -> Result<usize> { self.group_id(x) }
    fn union(&mut self, x: usize, y: usize) -> Result<()> {
        let (rx, ry) = self.distinct_roots(x, y)?;
        let mut relabeled = 0;
        for id in self.0.iter_mut().filter(|id| **id == ry) {
            *id = rx;
            relabeled += 1;
        }
        trace!(
            "quick-find: union({x}, {y}) relabeled {} from {} to {}",
            relabeled, ry, rx
        );
        Ok(())
    }
}

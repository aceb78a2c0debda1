//! Quick-union: a forest of parent pointers with no balancing.
//!
//! The root of the first argument of `union` always survives, so a chain of
//! unions such as `union(1, 0), union(2, 1), ...` builds a path of depth
//! `len - 1` and `find` degrades to linear time.

use disjoint_set::{check_index, singletons, DisjointSet, Result};
use log::trace;

#[derive(Clone, Debug)]
pub struct QuickUnion(Vec<usize>);

impl QuickUnion {
    pub fn root(&self, x: usize) -> Result<usize> {
        let mut x = check_index(x, self.0.len())?;
        while self.0[x] != x {
            x = self.0[x];
        }
        Ok(x)
    }
    pub fn depth(&self, x: usize) -> Result<usize> {
        let mut x = check_index(x, self.0.len())?;
        let mut depth = 0;
        while self.0[x] != x {
            x = self.0[x];
            depth += 1;
        }
        Ok(depth)
    }
}

impl DisjointSet for QuickUnion {
    fn new(len: usize) -> Self { Self(singletons(len)) }
    fn len(&self) -> usize { self.0.len() }
    fn find(&mut self, x: usize) -> Result<usize> { self.root(x) }
    fn union(&mut self, x: usize, y: usize) -> Result<()> {
        let (rx, ry) = self.distinct_roots(x, y)?;
        self.0[ry] = rx;
        trace!("quick-union: union({x}, {y}) attached {ry} under {rx}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use disjoint_set::DisjointSetError;

    use crate::*;

    #[test]
    fn sanity_check() {
        let mut qu = QuickUnion::new(10);
        for (x, y) in [(1, 2), (2, 5), (5, 6), (6, 7), (3, 8), (8, 9)] {
            assert_eq!(qu.union(x, y), Ok(()));
        }
        assert_eq!(qu.connected(1, 5), Ok(true));
        assert_eq!(qu.connected(5, 7), Ok(true));
        assert_eq!(qu.connected(4, 9), Ok(false));

        assert_eq!(qu.union(9, 4), Ok(()));
        assert_eq!(qu.connected(4, 9), Ok(true));
        assert!(matches!(
            qu.union(4, 9),
            Err(DisjointSetError::AlreadyUnioned { x: 4, y: 9, .. })
        ));
        assert_eq!(qu.count_groups(), 3);
    }

    #[test]
    fn first_argument_root_survives() {
        let mut qu = QuickUnion::new(4);
        qu.union(2, 3).unwrap();
        qu.union(0, 1).unwrap();
        qu.union(3, 1).unwrap();
        assert_eq!(qu.0, [2, 0, 2, 2]);
        assert_eq!(qu.find(1), Ok(2));
        assert_eq!(qu.depth(1), Ok(2));
    }

    #[test]
    fn chain_is_linear() {
        let n = 1000;
        let mut qu = QuickUnion::new(n);
        for i in 1..n {
            qu.union(i, i - 1).unwrap();
        }
        assert_eq!(qu.find(0), Ok(n - 1));
        assert_eq!(qu.depth(0), Ok(n - 1));
        assert_eq!(qu.count_groups(), 1);
    }

    #[test]
    fn rejected_union_keeps_parents() {
        let mut qu = QuickUnion::new(3);
        qu.union(0, 1).unwrap();
        qu.union(1, 2).unwrap();
        let before = qu.0.clone();
        assert!(qu.union(2, 0).is_err());
        assert!(qu.union(7, 0).is_err());
        assert!(qu.union(0, 7).is_err());
        assert_eq!(qu.0, before);
    }
}

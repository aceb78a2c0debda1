//! Quick-union whose `find` flattens every path it walks.
//!
//! Compression runs in two passes, the first locating the root and the second
//! pointing each node of the path directly at it, so the resulting forest is
//! the same as that of the recursive formulation and no call stack is
//! consumed however deep the path is.

use disjoint_set::{check_index, singletons, DisjointSet, Result};
use log::trace;

#[derive(Clone, Debug)]
pub struct PathCompression(Vec<usize>);

impl DisjointSet for PathCompression {
    fn new(len: usize) -> Self { Self(singletons(len)) }
    fn len(&self) -> usize { self.0.len() }
    fn find(&mut self, x: usize) -> Result<usize> {
        let x = check_index(x, self.0.len())?;

        let mut root = x;
        while self.0[root] != root {
            root = self.0[root];
        }

        // nodes whose parent is already `root` are left as they are
        let mut v = x;
        let mut rewritten = 0_usize;
        while self.0[v] != root {
            let next = self.0[v];
            self.0[v] = root;
            v = next;
            rewritten += 1;
        }
        if rewritten > 0 {
            trace!(
                "path-compression: find({x}) rewrote {} pointers to {}",
                rewritten, root
            );
        }
        Ok(root)
    }
    fn union(&mut self, x: usize, y: usize) -> Result<()> {
        let (rx, ry) = self.distinct_roots(x, y)?;
        self.0[ry] = rx;
        trace!("path-compression: union({x}, {y}) attached {ry} under {rx}");
        Ok(())
    }
}

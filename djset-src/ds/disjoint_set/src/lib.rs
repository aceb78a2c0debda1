//! The contract shared by every disjoint-set strategy.
//!
//! A universe of `len` elements is fixed at construction; elements are the
//! indices `0..len`. Every element starts as the root of its own group, and
//! groups only ever merge.

use log::debug;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum DisjointSetError {
    #[error("index {index} out of range for universe of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("{x} and {y} are already in the same group (root {root})")]
    AlreadyUnioned { x: usize, y: usize, root: usize },
}

pub type Result<T> = std::result::Result<T, DisjointSetError>;

/// Returns `index` unchanged if it names an element of a universe of length
/// `len`.
///
/// ```
/// # use disjoint_set::{check_index, DisjointSetError};
/// assert_eq!(check_index(3, 4), Ok(3));
/// assert_eq!(
///     check_index(4, 4),
///     Err(DisjointSetError::IndexOutOfBounds { index: 4, len: 4 }),
/// );
/// ```
pub fn check_index(index: usize, len: usize) -> Result<usize> {
    if index < len {
        Ok(index)
    } else {
        Err(DisjointSetError::IndexOutOfBounds { index, len })
    }
}

/// The identity mapping: every element is its own parent.
pub fn singletons(len: usize) -> Vec<usize> { (0..len).collect() }

pub trait DisjointSet {
    fn new(len: usize) -> Self
    where
        Self: Sized;

    fn len(&self) -> usize;
    fn is_empty(&self) -> bool { self.len() == 0 }

    /// The representative of the group containing `x`.
    fn find(&mut self, x: usize) -> Result<usize>;

    /// Merges the groups containing `x` and `y`.
    ///
    /// Fails with [`DisjointSetError::AlreadyUnioned`] if they are already
    /// the same group; a failed union leaves the groups untouched.
    fn union(&mut self, x: usize, y: usize) -> Result<()>;

    fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        check_index(x, self.len())?;
        check_index(y, self.len())?;
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Resolves the roots of `x` and `y` for a union, rejecting the pair if
    /// the roots coincide.
    ///
    /// Both indices are checked before either `find` runs, so an
    /// out-of-range argument is reported before a compressing `find` has
    /// touched anything. Implementations of [`DisjointSet::union`] call this
    /// first and mutate only on `Ok`.
    fn distinct_roots(
        &mut self,
        x: usize,
        y: usize,
    ) -> Result<(usize, usize)> {
        check_index(x, self.len())?;
        check_index(y, self.len())?;
        let rx = self.find(x)?;
        let ry = self.find(y)?;
        if rx == ry {
            debug!("rejected union({x}, {y}): both in the group of {rx}");
            return Err(DisjointSetError::AlreadyUnioned { x, y, root: rx });
        }
        Ok((rx, ry))
    }

    /// The number of groups, i.e. the number of elements representing
    /// themselves.
    fn count_groups(&mut self) -> usize {
        let len = self.len();
        (0..len).filter(|&x| self.find(x) == Ok(x)).count()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn check_index_bounds() {
        assert_eq!(check_index(0, 1), Ok(0));
        assert_eq!(check_index(9, 10), Ok(9));
        assert_eq!(
            check_index(10, 10),
            Err(DisjointSetError::IndexOutOfBounds { index: 10, len: 10 })
        );
        assert!(check_index(0, 0).is_err());
        assert!(check_index(usize::MAX, 3).is_err());
    }

    #[test]
    fn singletons_is_identity() {
        assert_eq!(singletons(0), Vec::<usize>::new());
        assert_eq!(singletons(4), [0, 1, 2, 3]);
    }

    #[test]
    fn error_messages() {
        let oob = DisjointSetError::IndexOutOfBounds { index: 12, len: 10 };
        assert_eq!(
            oob.to_string(),
            "index 12 out of range for universe of length 10"
        );
        let dup = DisjointSetError::AlreadyUnioned { x: 4, y: 9, root: 3 };
        assert_eq!(
            dup.to_string(),
            "4 and 9 are already in the same group (root 3)"
        );
    }

    // Minimal implementation exercising the provided methods.
    struct Labels(Vec<usize>);

    impl DisjointSet for Labels {
        fn new(len: usize) -> Self { Self(singletons(len)) }
        fn len(&self) -> usize { self.0.len() }
        fn find(&mut self, x: usize) -> Result<usize> {
            Ok(self.0[check_index(x, self.0.len())?])
        }
        fn union(&mut self, x: usize, y: usize) -> Result<()> {
            let (rx, ry) = self.distinct_roots(x, y)?;
            self.0.iter_mut().filter(|r| **r == ry).for_each(|r| *r = rx);
            Ok(())
        }
    }

    #[test]
    fn provided_methods() {
        let mut ds = Labels::new(5);
        assert!(!ds.is_empty());
        assert_eq!(ds.count_groups(), 5);
        assert_eq!(ds.union(0, 1), Ok(()));
        assert_eq!(ds.union(1, 2), Ok(()));
        assert_eq!(ds.count_groups(), 3);
        assert_eq!(ds.connected(0, 2), Ok(true));
        assert_eq!(ds.connected(0, 3), Ok(false));
        assert_eq!(
            ds.union(2, 0),
            Err(DisjointSetError::AlreadyUnioned { x: 2, y: 0, root: 0 })
        );
        assert_eq!(
            ds.connected(3, 5),
            Err(DisjointSetError::IndexOutOfBounds { index: 5, len: 5 })
        );
        assert_eq!(ds.distinct_roots(1, 3), Ok((0, 3)));
        assert_eq!(
            ds.distinct_roots(9, 0),
            Err(DisjointSetError::IndexOutOfBounds { index: 9, len: 5 })
        );
        assert!(Labels::new(0).is_empty());
    }

    #[test]
    fn object_safe() {
        let mut ds: Box<dyn DisjointSet> = Box::new(Labels::new(3));
        assert_eq!(ds.union(2, 1), Ok(()));
        assert_eq!(ds.find(1), Ok(2));
    }
}

//! Disjoint sets over a fixed universe `0..len`, in four strategies:
//! [`QuickFind`], [`QuickUnion`], [`UnionByRank`] and [`PathCompression`].
//! All of them implement [`DisjointSet`]; [`AnyDisjointSet`] picks one at
//! runtime from a [`Strategy`].
//!
//! ```
//! use djset::{AnyDisjointSet, DisjointSet, DisjointSetError, Strategy};
//!
//! let mut ds = AnyDisjointSet::with_strategy(Strategy::PathCompression, 10);
//! ds.union(1, 2)?;
//! ds.union(2, 5)?;
//! assert!(ds.connected(1, 5)?);
//! assert!(!ds.connected(4, 9)?);
//! assert!(matches!(
//!     ds.union(5, 1),
//!     Err(DisjointSetError::AlreadyUnioned { .. })
//! ));
//! # Ok::<(), DisjointSetError>(())
//! ```

use inner::doc_inline_reexport;

doc_inline_reexport! {
    ds,
    #[cfg(feature = "graph")]
    graph,
    naive,
}

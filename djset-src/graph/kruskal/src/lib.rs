use std::ops::Add;

use disjoint_set::{DisjointSet, DisjointSetError, Result};

pub struct SpanningForest<W> {
    /// Indices into the input edge list, in the order they were taken.
    pub edges: Vec<usize>,
    pub weight: W,
}

/// Kruskal's algorithm over a universe of `len` vertices, with `D` tracking
/// which vertices are already joined.
///
/// Edges of equal weight are taken in input order. An edge whose endpoints
/// are already connected is skipped; an endpoint outside `0..len` is an
/// error.
///
/// ```
/// # use kruskal::minimum_spanning_forest;
/// # use union_by_rank::UnionByRank;
/// let edges = [(0, 1, 4), (1, 2, 1), (0, 2, 2), (3, 4, 7)];
/// let forest =
///     minimum_spanning_forest::<UnionByRank, _>(5, &edges, 0).unwrap();
/// assert_eq!(forest.edges, [1, 2, 3]);
/// assert_eq!(forest.weight, 10);
/// ```
pub fn minimum_spanning_forest<D, W>(
    len: usize,
    edges: &[(usize, usize, W)],
    zero: W,
) -> Result<SpanningForest<W>>
where
    D: DisjointSet,
    W: Add<Output = W> + Ord + Clone,
{
    let mut order: Vec<_> = (0..edges.len()).collect();
    order.sort_by(|&i, &j| edges[i].2.cmp(&edges[j].2));

    let mut ds = D::new(len);
    let mut taken = vec![];
    let mut weight = zero;
    for i in order {
        let (u, v, w) = &edges[i];
        match ds.union(*u, *v) {
            Ok(()) => {
                taken.push(i);
                weight = weight + w.clone();
            }
            Err(DisjointSetError::AlreadyUnioned { .. }) => {}
            Err(e) => return Err(e),
        }
    }
    Ok(SpanningForest { edges: taken, weight })
}

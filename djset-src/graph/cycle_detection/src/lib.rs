use disjoint_set::{DisjointSet, DisjointSetError, Result};

/// The index of the first edge that closes a cycle in the undirected graph
/// on `0..len`, or `None` if the edges form a forest.
///
/// A self-loop closes a cycle on its own.
pub fn first_cycle_edge<D: DisjointSet>(
    len: usize,
    edges: &[(usize, usize)],
) -> Result<Option<usize>> {
    let mut ds = D::new(len);
    for (i, &(u, v)) in edges.iter().enumerate() {
        match ds.union(u, v) {
            Ok(()) => {}
            Err(DisjointSetError::AlreadyUnioned { .. }) => return Ok(Some(i)),
            Err(e) => return Err(e),
        }
    }
    Ok(None)
}

use std::collections::VecDeque;

/// Connectivity by breadth-first search over every edge ever added.
pub struct EdgeList(Vec<Vec<usize>>);

impl EdgeList {
    pub fn new(n: usize) -> Self { Self(vec![vec![]; n]) }
    pub fn add_edge(&mut self, u: usize, v: usize) {
        self.0[u].push(v);
        self.0[v].push(u);
    }
    pub fn equiv(&self, u: usize, v: usize) -> bool {
        self.reachable(u)[v]
    }
    pub fn count(&self) -> usize {
        let n = self.0.len();
        let mut seen = vec![false; n];
        let mut count = 0;
        for u in 0..n {
            if seen[u] {
                continue;
            }
            count += 1;
            for (v, r) in self.reachable(u).into_iter().enumerate() {
                seen[v] |= r;
            }
        }
        count
    }
    fn reachable(&self, src: usize) -> Vec<bool> {
        let mut seen = vec![false; self.0.len()];
        let mut queue = VecDeque::from([src]);
        seen[src] = true;
        while let Some(u) = queue.pop_front() {
            for &v in &self.0[u] {
                if !seen[v] {
                    seen[v] = true;
                    queue.push_back(v);
                }
            }
        }
        seen
    }
}

#[test]
fn sanity_check() {
    let mut g = EdgeList::new(6);
    assert_eq!(g.count(), 6);
    g.add_edge(0, 1);
    g.add_edge(2, 1);
    g.add_edge(4, 4);
    assert!(g.equiv(0, 2));
    assert!(g.equiv(3, 3));
    assert!(!g.equiv(0, 3));
    assert_eq!(g.count(), 4);
    g.add_edge(0, 2);
    assert_eq!(g.count(), 4);
}

use std::ops::Range;

use rand::{
    distributions::{Distribution, Uniform},
    seq::SliceRandom,
    Rng,
};

pub trait Gen {
    type Output;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output;
}

/// `count` pairs of elements drawn uniformly from `0..len`, repeats and
/// self-pairs included.
pub struct Pairs {
    pub len: usize,
    pub count: usize,
}

/// `len - 1` pairs over `0..len` that, applied in order, merge everything
/// into one group without ever naming two elements of the same group.
pub struct SpanningPairs {
    pub len: usize,
}

impl Gen for Range<usize> {
    type Output = usize;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let between = Uniform::from(self.clone());
        between.sample(rng)
    }
}

impl Gen for Pairs {
    type Output = Vec<(usize, usize)>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let Self { len, count } = *self;
        (0..count)
            .map(|_| ((0..len).generate(rng), (0..len).generate(rng)))
            .collect()
    }
}

impl Gen for SpanningPairs {
    type Output = Vec<(usize, usize)>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let mut order: Vec<_> = (0..self.len).collect();
        order.shuffle(rng);
        // each new element is joined to a random one already placed
        (1..self.len)
            .map(|i| {
                let fresh = order[i];
                let placed = order[(0..i).generate(rng)];
                if rng.gen() { (fresh, placed) } else { (placed, fresh) }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use edge_list::EdgeList;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use crate::*;

    #[test]
    fn pairs_in_range() {
        let mut rng = ChaCha20Rng::from_seed([0; 32]);
        let pairs = Pairs { len: 7, count: 1000 }.generate(&mut rng);
        assert_eq!(pairs.len(), 1000);
        assert!(pairs.iter().all(|&(x, y)| x < 7 && y < 7));
        assert!((0..7).all(|x| pairs.iter().any(|&(y, _)| x == y)));
    }

    #[test]
    fn spanning_pairs_form_a_tree() {
        let mut rng = ChaCha20Rng::from_seed([1; 32]);
        for len in [0, 1, 2, 10, 100] {
            let pairs = SpanningPairs { len }.generate(&mut rng);
            assert_eq!(pairs.len(), len.saturating_sub(1));
            let mut g = EdgeList::new(len);
            for (x, y) in pairs {
                assert!(!g.equiv(x, y));
                g.add_edge(x, y);
            }
            assert_eq!(g.count(), len.min(1));
        }
    }
}

use crate::{Ranks, Result};
use std::hash::Hash;

pub trait PageRank<K: Ord + Hash> {
    type Output: PageRankResult<K>;

    fn calc(&mut self) -> Result<Self::Output>;
}

pub trait PageRankResult<K: Ord + Hash> {
    fn page_rank(&self) -> &Ranks<K>;

    fn sorted(&self) -> Vec<(&K, f64)> {
        let mut xs: Vec<_> = self.page_rank().iter().map(|(k, v)| (k, *v)).collect();
        xs.sort_unstable_by(|a, b| a.0.cmp(b.0));
        xs
    }
}

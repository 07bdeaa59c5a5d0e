use crate::{Error, Result};
use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

pub type Links<K> = HashSet<K, ahash::RandomState>;

pub type Corpus<K> = HashMap<K, Links<K>, ahash::RandomState>;

pub type Ranks<K> = HashMap<K, f64, ahash::RandomState>;

pub type Distribution<K> = HashMap<K, f64, ahash::RandomState>;

pub fn norm_inf(v: &[f64]) -> f64 {
    v.iter().map(|x| x.abs()).fold(0.0, f64::max)
}

/// Pages of `corpus` in ascending order.
///
/// Estimators walk pages in this order rather than in hash order, so that
/// seeded sampling is reproducible and iterated sums are bit-identical.
pub fn sorted_pages<K: Ord + Hash>(corpus: &Corpus<K>) -> Vec<&K> {
    let mut pages: Vec<_> = corpus.keys().collect();
    pages.sort_unstable();
    pages
}

pub fn validate<K>(corpus: &Corpus<K>) -> Result<()>
where
    K: Eq + Hash + std::fmt::Debug,
{
    if corpus.is_empty() {
        return Err(Error::invalid("corpus is empty"));
    }
    for (page, links) in corpus.iter() {
        for link in links.iter() {
            if link == page {
                return Err(Error::invalid(format!("{page:?} links to itself")));
            }
            if !corpus.contains_key(link) {
                return Err(Error::invalid(format!(
                    "{page:?} links to {link:?}, which is not in the corpus"
                )));
            }
        }
    }
    Ok(())
}

pub fn check_damping(damping: f64) -> Result<()> {
    if (0.0..=1.0).contains(&damping) {
        Ok(())
    } else {
        Err(Error::invalid(format!("damping={damping}")))
    }
}

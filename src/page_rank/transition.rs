use crate::*;
use std::{fmt::Debug, hash::Hash};

pub struct TransitionModel<'a, K> {
    corpus: &'a Corpus<K>,
    damping: f64,
    pages: Vec<&'a K>,
}

impl<'a, K> TransitionModel<'a, K>
where
    K: Eq + Hash + Ord + Clone + Debug,
{
    pub fn new(corpus: &'a Corpus<K>, damping: f64) -> Result<Self> {
        check_damping(damping)?;
        validate(corpus)?;
        Ok(Self {
            corpus,
            damping,
            pages: sorted_pages(corpus),
        })
    }

    pub fn pages(&self) -> &[&'a K] {
        &self.pages
    }

    pub fn distribution(&self, page: &K) -> Result<Distribution<K>> {
        if !self.corpus.contains_key(page) {
            return Err(Error::invalid(format!("{page:?} is not in the corpus")));
        }
        Ok(self
            .pages
            .iter()
            .zip(self.weights(page))
            .map(|(p, w)| ((*p).clone(), w))
            .collect())
    }

    /// Probabilities of the next page, aligned with [`Self::pages`].
    pub(crate) fn weights(&self, page: &K) -> Vec<f64> {
        let n = self.pages.len() as f64;
        match self.corpus.get(page) {
            Some(links) if !links.is_empty() => {
                let base = (1.0 - self.damping) / n;
                let unit = self.damping / (links.len() as f64);
                self.pages
                    .iter()
                    .map(|p| if links.contains(*p) { base + unit } else { base })
                    .collect()
            }
            _ => vec![1.0 / n; self.pages.len()],
        }
    }
}

pub fn transition<K>(corpus: &Corpus<K>, page: &K, damping: f64) -> Result<Distribution<K>>
where
    K: Eq + Hash + Ord + Clone + Debug,
{
    TransitionModel::new(corpus, damping)?.distribution(page)
}

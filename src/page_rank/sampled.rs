use super::*;
use crate::*;
use rand::{
    distr::{weighted::WeightedIndex, Distribution as _},
    Rng,
};
use std::{collections::HashMap, fmt::Debug, hash::Hash};

/// The last page drawn is never tallied, so `samples` draws produce
/// `samples - 1` visits and the ranks sum to `(samples - 1) / samples`.
pub struct SampledPageRank<'a, K, R> {
    model: TransitionModel<'a, K>,
    samples: usize,
    rng: R,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            samples: 10_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Output<K> {
    pub page_rank: Ranks<K>,
    pub visits: HashMap<K, usize, ahash::RandomState>,
    pub samples: usize,
}

impl<'a, K, R> SampledPageRank<'a, K, R>
where
    K: Eq + Hash + Ord + Clone + Debug,
    R: Rng,
{
    pub fn new(corpus: &'a Corpus<K>, config: &Config, rng: R) -> Result<Self> {
        if config.samples == 0 {
            return Err(Error::invalid("samples=0"));
        }
        let model = TransitionModel::new(corpus, config.damping)?;
        Ok(Self {
            model,
            samples: config.samples,
            rng,
        })
    }
}

impl<K, R> PageRank<K> for SampledPageRank<'_, K, R>
where
    K: Eq + Hash + Ord + Clone + Debug,
    R: Rng,
{
    type Output = self::Output<K>;

    fn calc(&mut self) -> Result<Self::Output> {
        let pages = self.model.pages();
        let mut visits = vec![0usize; pages.len()];
        let mut cur = self.rng.random_range(0..pages.len());
        for _ in 1..self.samples {
            visits[cur] += 1;
            let next = WeightedIndex::new(self.model.weights(pages[cur]))
                .map_err(|e| Error::invalid(format!("transition from {:?}: {e}", pages[cur])))?;
            cur = next.sample(&mut self.rng);
        }

        let n = self.samples as f64;
        let page_rank: Ranks<K> = pages
            .iter()
            .zip(visits.iter())
            .map(|(p, c)| ((*p).clone(), *c as f64 / n))
            .collect();
        let visits = pages
            .iter()
            .zip(visits.iter())
            .map(|(p, c)| ((*p).clone(), *c))
            .collect();
        tracing::debug!(pages = pages.len(), samples = self.samples, "sampled page rank");
        Ok(Self::Output {
            page_rank,
            visits,
            samples: self.samples,
        })
    }
}

impl<K: Ord + Hash> PageRankResult<K> for self::Output<K> {
    fn page_rank(&self) -> &Ranks<K> {
        &self.page_rank
    }
}

pub fn sample_pagerank<K, R>(
    corpus: &Corpus<K>,
    damping: f64,
    n: usize,
    rng: &mut R,
) -> Result<Ranks<K>>
where
    K: Eq + Hash + Ord + Clone + Debug,
    R: Rng + ?Sized,
{
    let config = Config {
        damping,
        samples: n,
    };
    let mut spr = SampledPageRank::new(corpus, &config, rng)?;
    Ok(spr.calc()?.page_rank)
}

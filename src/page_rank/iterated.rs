use super::*;
use crate::*;
use std::{
    collections::{BTreeMap, HashMap},
    fmt::Debug,
    hash::Hash,
};

// A page without links spreads its rank over the whole corpus, itself included.
pub struct IteratedPageRank<'a, K> {
    pages: Vec<&'a K>,
    damping: f64,
    tolerance: f64,
    max_iterations: usize,
    transitions: BTreeMap<(usize, usize), f64>,
    dangling: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: 0.001,
            max_iterations: 10_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Output<K> {
    pub page_rank: Ranks<K>,
    pub delta: HashMap<K, f64, ahash::RandomState>,
    pub iterations: usize,
    pub converged: bool,
}

impl<'a, K> IteratedPageRank<'a, K>
where
    K: Eq + Hash + Ord + Clone + Debug,
{
    pub fn new(corpus: &'a Corpus<K>, config: &Config) -> Result<Self> {
        let damping = config.damping;
        check_damping(damping)?;
        let tolerance = config.tolerance;
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(Error::invalid(format!("tolerance={tolerance}")));
        }
        if config.max_iterations == 0 {
            return Err(Error::invalid("max_iterations=0"));
        }
        validate(corpus)?;

        let pages = sorted_pages(corpus);
        let index: HashMap<&K, usize, ahash::RandomState> =
            pages.iter().enumerate().map(|(i, p)| (*p, i)).collect();
        let mut transitions = BTreeMap::new();
        let mut dangling = vec![];
        for (u, page) in pages.iter().enumerate() {
            let links = &corpus[*page];
            if links.is_empty() {
                dangling.push(u);
                continue;
            }
            let unit = damping / (links.len() as f64);
            for link in links.iter() {
                transitions.insert((u, index[link]), unit);
            }
        }
        Ok(Self {
            pages,
            damping,
            tolerance,
            max_iterations: config.max_iterations,
            transitions,
            dangling,
        })
    }
}

impl<K> PageRank<K> for IteratedPageRank<'_, K>
where
    K: Eq + Hash + Ord + Clone + Debug,
{
    type Output = self::Output<K>;

    fn calc(&mut self) -> Result<Self::Output> {
        let n = self.pages.len() as f64;
        let teleport = (1.0 - self.damping) / n;
        let mut p = vec![1.0 / n; self.pages.len()];
        let mut r = vec![0.0; self.pages.len()];
        let mut delta = vec![0.0; self.pages.len()];
        let mut iterations = 0;
        let converged = loop {
            iterations += 1;

            let dangling: f64 = self.dangling.iter().map(|u| p[*u]).sum();
            r.fill(teleport + self.damping * dangling / n);
            for ((u, v), w) in self.transitions.iter() {
                r[*v] += p[*u] * w;
            }

            for ((d, a), b) in delta.iter_mut().zip(p.iter()).zip(r.iter()) {
                *d = b - a;
            }
            let change = norm_inf(&delta);
            tracing::trace!(iterations, change, "page rank sweep");

            std::mem::swap(&mut p, &mut r);
            if change <= self.tolerance {
                break true;
            }
            if iterations >= self.max_iterations {
                tracing::warn!(
                    iterations,
                    change,
                    tolerance = self.tolerance,
                    "page rank did not converge"
                );
                break false;
            }
        };
        tracing::debug!(pages = self.pages.len(), iterations, "iterated page rank");

        let collect = |xs: &[f64]| -> Ranks<K> {
            self.pages
                .iter()
                .zip(xs.iter())
                .map(|(k, x)| ((*k).clone(), *x))
                .collect()
        };
        Ok(Self::Output {
            page_rank: collect(&p),
            delta: collect(&delta),
            iterations,
            converged,
        })
    }
}

impl<K: Ord + Hash> PageRankResult<K> for self::Output<K> {
    fn page_rank(&self) -> &Ranks<K> {
        &self.page_rank
    }
}

pub fn iterate_pagerank<K>(corpus: &Corpus<K>, damping: f64, tolerance: f64) -> Result<Ranks<K>>
where
    K: Eq + Hash + Ord + Clone + Debug,
{
    let config = Config {
        damping,
        tolerance,
        ..Config::default()
    };
    let mut ipr = IteratedPageRank::new(corpus, &config)?;
    Ok(ipr.calc()?.page_rank)
}

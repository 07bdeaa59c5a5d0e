//! Rank the pages of an HTML corpus by sampling and by iteration.

use anyhow::{Context, Result};
use clap::Parser;
use pagerank::page_rank::{
    iterated, sampled, IteratedPageRank, PageRank, PageRankResult, SampledPageRank,
};
use rand::{rngs::SmallRng, SeedableRng};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pagerank", version, about)]
struct Cli {
    /// Directory holding the `.html` pages of the corpus
    corpus: PathBuf,

    /// Probability of following a link rather than jumping to a random page
    #[arg(long, env = "PAGERANK_DAMPING", default_value_t = 0.85)]
    damping: f64,

    /// Number of random-surfer draws
    #[arg(long, env = "PAGERANK_SAMPLES", default_value_t = 10_000)]
    samples: usize,

    /// Largest per-page change at which iteration stops
    #[arg(long, env = "PAGERANK_TOLERANCE", default_value_t = 0.001)]
    tolerance: f64,

    /// Seed for the random surfer; taken from the OS when absent
    #[arg(long, env = "PAGERANK_SEED")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();
    let corpus = pagerank::crawl(&cli.corpus)
        .with_context(|| format!("failed to crawl {}", cli.corpus.display()))?;

    let rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let config = sampled::Config {
        damping: cli.damping,
        samples: cli.samples,
    };
    let ranks = SampledPageRank::new(&corpus, &config, rng)?.calc()?;
    println!("PageRank Results from Sampling (n = {})", cli.samples);
    print_ranks(&ranks);

    let config = iterated::Config {
        damping: cli.damping,
        tolerance: cli.tolerance,
        ..iterated::Config::default()
    };
    let ranks = IteratedPageRank::new(&corpus, &config)?.calc()?;
    println!("PageRank Results from Iteration");
    print_ranks(&ranks);

    Ok(())
}

fn print_ranks<R: PageRankResult<String>>(ranks: &R) {
    for (page, rank) in ranks.sorted() {
        println!("  {page}: {rank:.4}");
    }
}

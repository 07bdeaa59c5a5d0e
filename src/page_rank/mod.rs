mod traits;
pub use self::traits::*;
pub mod iterated;
pub mod sampled;
pub mod transition;

pub use self::iterated::{iterate_pagerank, IteratedPageRank};
pub use self::sampled::{sample_pagerank, SampledPageRank};
pub use self::transition::{transition, TransitionModel};

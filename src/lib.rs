mod common;
pub use self::common::*;
mod error;
pub use self::error::{Error, Result};

pub mod corpus;
pub use self::corpus::crawl;
pub mod page_rank;

#[cfg(test)]
mod arbitrary;

//! Trait seams between the engines.

mod pair_scorer;

pub use pair_scorer::IPairScorer;

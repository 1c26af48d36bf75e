//! PageRank for directed link graphs.
//!
//! Two independent estimators share one random-surfer model: a Monte-Carlo
//! walk ([`page_rank::sampled`]) and a fixed-point iteration
//! ([`page_rank::iterated`]). Build a [`LinkGraph`] (directly, or from a
//! directory of HTML pages with [`corpus::build_graph`]) and call
//! [`sample_pagerank`] or [`iterate_pagerank`].

mod common;
pub use self::common::*;
pub mod corpus;
mod error;
pub use self::error::{Error, Result};
pub mod graph;
pub use self::graph::LinkGraph;
pub mod page_rank;
pub use self::page_rank::{
    iterate_pagerank, iterate_pagerank_with, sample_pagerank, transition, Ranks,
};

#[cfg(test)]
mod arbitrary;

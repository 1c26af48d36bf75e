//! PageRank estimators.
//!
//! [`transition`] describes where the random surfer goes next, [`sampled`]
//! estimates ranks by walking that chain, and [`iterated`] solves the
//! fixed-point equation directly. The estimators work on any
//! [`QueryableGraph`]; the free functions at the bottom of this module are the
//! keyed entry points for a [`LinkGraph`].

pub mod iterated;
pub mod sampled;
mod traits;
pub mod transition;
pub use self::traits::*;

use crate::{graph::LinkGraph, Error, Result};
use algograph::graph::{QueryableGraph, VertexId};
use std::{
    collections::{BTreeSet, HashMap},
    fmt::Debug,
    hash::Hash,
};

/// Ranks keyed by node token.
pub type Ranks<K> = HashMap<K, f64, ahash::RandomState>;

/// Dense, index-based view of a graph's out-sets.
///
/// Vertices are numbered in `iter_vertices` order, so everything derived from
/// an `Adjacency` is reproducible for a given graph.
pub(crate) struct Adjacency {
    pub vertices: Vec<VertexId>,
    pub index: HashMap<VertexId, usize, ahash::RandomState>,
    /// Sorted and deduplicated.
    pub out: Vec<Vec<usize>>,
}

impl Adjacency {
    pub fn new<G: QueryableGraph>(g: &G) -> Result<Self> {
        let vertices: Vec<_> = g.iter_vertices().collect();
        if vertices.is_empty() {
            return Err(Error::EmptyGraph);
        }
        let index: HashMap<_, _, ahash::RandomState> = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (*v, i))
            .collect();
        let out = vertices
            .iter()
            .map(|u| {
                let sinks: BTreeSet<usize> = g
                    .out_edges(u)
                    .filter_map(|e| index.get(&e.sink).copied())
                    .collect();
                sinks.into_iter().collect()
            })
            .collect();
        Ok(Self {
            vertices,
            index,
            out,
        })
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// For each vertex, the vertices linking to it, in ascending order.
    pub fn referrers(&self) -> Vec<Vec<usize>> {
        let mut referrers = vec![vec![]; self.len()];
        for (t, sinks) in self.out.iter().enumerate() {
            for x in sinks.iter() {
                referrers[*x].push(t);
            }
        }
        referrers
    }

    pub fn to_map(&self, values: &[f64]) -> HashMap<VertexId, f64, ahash::RandomState> {
        self.vertices
            .iter()
            .copied()
            .zip(values.iter().copied())
            .collect()
    }
}

/// Probability of each page being visited next from `page`.
pub fn transition<K>(graph: &LinkGraph<K>, page: &K, damping: f64) -> Result<Ranks<K>>
where
    K: Clone + Eq + Hash + Ord + Debug,
{
    let v = graph
        .vertex(page)
        .ok_or_else(|| Error::UnknownNode(format!("{page:?}")))?;
    let model = transition::TransitionModel::new(graph.graph(), damping)?;
    let dist = model.distribution(&v)?;
    Ok(graph.resolve(&dist))
}

/// Monte-Carlo estimate from a walk of `samples` steps.
pub fn sample_pagerank<K>(graph: &LinkGraph<K>, damping: f64, samples: usize) -> Result<Ranks<K>>
where
    K: Clone + Eq + Hash + Ord + Debug,
{
    let config = sampled::Config { damping, samples };
    let res = sampled::SampledPageRank::new(graph.graph(), &config)?.calc()?;
    Ok(graph.resolve(res.page_rank()))
}

/// Fixed-point estimate with the default threshold and iteration cap.
pub fn iterate_pagerank<K>(graph: &LinkGraph<K>, damping: f64) -> Result<Ranks<K>>
where
    K: Clone + Eq + Hash + Ord + Debug,
{
    let config = iterated::Config {
        damping,
        ..Default::default()
    };
    iterate_pagerank_with(graph, &config)
}

/// Fixed-point estimate with a caller-chosen threshold, cap and normalization.
pub fn iterate_pagerank_with<K>(
    graph: &LinkGraph<K>,
    config: &iterated::Config,
) -> Result<Ranks<K>>
where
    K: Clone + Eq + Hash + Ord + Debug,
{
    let res = iterated::IteratedPageRank::new(graph.graph(), config)?.calc()?;
    Ok(graph.resolve(res.page_rank()))
}

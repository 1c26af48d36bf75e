use super::transition::TransitionModel;
use super::*;
use algograph::graph::{QueryableGraph, VertexId};
use rand::Rng;
use std::collections::HashMap;

/// Monte-Carlo PageRank: the share of steps a random surfer spends on each
/// vertex over a walk of `samples` steps.
pub struct SampledPageRank {
    model: TransitionModel,
    samples: usize,
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
pub struct Result {
    pub page_rank: HashMap<VertexId, f64, ahash::RandomState>,
    pub visits: HashMap<VertexId, usize, ahash::RandomState>,
}

impl SampledPageRank {
    pub fn new<G: QueryableGraph>(g: &G, config: &Config) -> crate::Result<Self> {
        if config.samples == 0 {
            return Err(Error::NoSamples);
        }
        let model = TransitionModel::new(g, config.damping)?;
        Ok(Self {
            model,
            samples: config.samples,
        })
    }

    /// Runs the walk with a caller-supplied generator, e.g. a seeded one.
    pub fn calc_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> self::Result {
        let adjacency = self.model.adjacency();
        let n = adjacency.len();
        tracing::debug!(
            vertices = n,
            samples = self.samples,
            damping = self.model.damping(),
            "sampling page rank"
        );

        let mut visits = vec![0usize; n];
        let mut cur = rng.random_range(0..n);
        visits[cur] += 1;
        for _ in 1..self.samples {
            cur = self.model.step(cur).sample(rng);
            visits[cur] += 1;
        }

        let total = self.samples as f64;
        let ranks: Vec<f64> = visits.iter().map(|c| *c as f64 / total).collect();
        self::Result {
            page_rank: adjacency.to_map(&ranks),
            visits: adjacency
                .vertices
                .iter()
                .copied()
                .zip(visits.iter().copied())
                .collect(),
        }
    }
}

impl PageRank for SampledPageRank {
    type Result = self::Result;

    fn calc(&self) -> crate::Result<Self::Result> {
        Ok(self.calc_with_rng(&mut rand::rng()))
    }
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &HashMap<VertexId, f64, ahash::RandomState> {
        &self.page_rank
    }

    fn debug<'a, G: QueryableGraph>(&'a self, graph: &'a G) -> impl std::fmt::Debug + 'a {
        ResultDebug {
            graph,
            result: self,
        }
    }
}

pub struct ResultDebug<'a, G: QueryableGraph> {
    graph: &'a G,
    result: &'a self::Result,
}

impl<G: QueryableGraph> std::fmt::Debug for ResultDebug<'_, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.graph.iter_vertices() {
            let p = self.result.page_rank.get(&v).copied().unwrap_or_default();
            let c = self.result.visits.get(&v).copied().unwrap_or_default();
            writeln!(f, "{v:?}: {p:?}, {c}")?;
        }
        Ok(())
    }
}

use super::*;
use crate::common::{check_damping, max_change, norm_1};
use algograph::graph::{QueryableGraph, VertexId};
use std::collections::HashMap;

/// Fixed-point PageRank.
///
/// Every sweep recomputes each vertex from the previous sweep's ranks:
/// `(1 - d) / N + d * sink_mass / N + d * sum(rank(t) / out_degree(t))` over
/// the referrers `t`. Sinks are treated as linking to every vertex, the same
/// as in the transition model, so total mass stays at one.
pub struct IteratedPageRank {
    damping: f64,
    epsilon: f64,
    max_iterations: usize,
    normalize: bool,
    adjacency: Adjacency,
    referrers: Vec<Vec<usize>>,
    sinks: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    /// Stop once no vertex moves by more than this between sweeps.
    pub epsilon: f64,
    /// Sweep cap; `None` derives it from `damping` and `epsilon` with
    /// [`sweep_bound`].
    pub max_iterations: Option<usize>,
    /// Rescale the converged ranks to sum to exactly one.
    pub normalize: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            epsilon: 0.001,
            max_iterations: None,
            normalize: false,
        }
    }
}

/// Sweeps after which a contraction by `damping` is guaranteed to have
/// brought the per-sweep change down to `epsilon`, never less than 1000.
///
/// The L1 distance between successive sweeps shrinks by at least `damping`
/// each time and starts at most at 2, so `2 * damping^k <= epsilon` suffices.
pub fn sweep_bound(damping: f64, epsilon: f64) -> usize {
    const FLOOR: usize = 1_000;
    const SLACK: usize = 100;
    if damping <= 0.0 || damping >= 1.0 {
        return FLOOR;
    }
    let k = ((epsilon / 2.0).ln() / damping.ln()).ceil();
    (k as usize).saturating_add(SLACK).max(FLOOR)
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: HashMap<VertexId, f64, ahash::RandomState>,
    pub delta: HashMap<VertexId, f64, ahash::RandomState>,
    pub iterations: usize,
}

impl IteratedPageRank {
    pub fn new<G: QueryableGraph>(g: &G, config: &Config) -> crate::Result<Self> {
        let damping = config.damping;
        check_damping(damping)?;
        let epsilon = config.epsilon;
        if epsilon.is_nan() || epsilon <= 0.0 {
            return Err(Error::InvalidEpsilon(epsilon));
        }
        let max_iterations = match config.max_iterations {
            Some(0) => return Err(Error::NoIterations),
            Some(cap) => cap,
            None => sweep_bound(damping, epsilon),
        };
        let adjacency = Adjacency::new(g)?;
        let referrers = adjacency.referrers();
        let sinks = adjacency
            .out
            .iter()
            .enumerate()
            .filter_map(|(i, out)| out.is_empty().then_some(i))
            .collect();
        Ok(Self {
            damping,
            epsilon,
            max_iterations,
            normalize: config.normalize,
            adjacency,
            referrers,
            sinks,
        })
    }

    fn sweep(&self, p: &[f64], r: &mut [f64]) {
        let n = self.adjacency.len() as f64;
        let d = self.damping;
        let sink_mass: f64 = self.sinks.iter().map(|t| p[*t]).sum();
        let base = (1.0 - d) / n + d * sink_mass / n;
        for (x, refs) in self.referrers.iter().enumerate() {
            let mut follow = 0.0;
            for t in refs.iter() {
                follow += p[*t] / self.adjacency.out[*t].len() as f64;
            }
            r[x] = base + d * follow;
        }
    }

    fn finish(&self, mut p: Vec<f64>, delta: &[f64], iterations: usize) -> self::Result {
        let mut page_rank = self.adjacency.to_map(&p);
        if self.normalize {
            let total = norm_1(&page_rank);
            if total > 0.0 {
                p.iter_mut().for_each(|w| *w /= total);
                page_rank = self.adjacency.to_map(&p);
            }
        }
        self::Result {
            page_rank,
            delta: self.adjacency.to_map(delta),
            iterations,
        }
    }
}

impl PageRank for IteratedPageRank {
    type Result = self::Result;

    fn calc(&self) -> crate::Result<Self::Result> {
        let n = self.adjacency.len();
        if n == 1 {
            return Ok(self.finish(vec![1.0], &[0.0], 0));
        }

        let mut p = vec![1.0 / n as f64; n];
        let mut r = vec![0.0; n];
        let mut last = f64::INFINITY;
        for iteration in 1..=self.max_iterations {
            self.sweep(&p, &mut r);
            last = max_change(&p, &r);
            tracing::trace!(iteration, delta = last, "page rank sweep");
            if last <= self.epsilon {
                tracing::debug!(
                    vertices = n,
                    iterations = iteration,
                    delta = last,
                    "page rank converged"
                );
                let delta: Vec<f64> = p.iter().zip(r.iter()).map(|(a, b)| a - b).collect();
                return Ok(self.finish(r, &delta, iteration));
            }
            std::mem::swap(&mut p, &mut r);
        }
        tracing::warn!(
            vertices = n,
            iterations = self.max_iterations,
            delta = last,
            "page rank did not converge"
        );
        Err(Error::NotConverged {
            iterations: self.max_iterations,
            delta: last,
        })
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
            let d = self.result.delta.get(&v).copied().unwrap_or_default();
            writeln!(f, "{v:?}: {p:?}, {d:?}")?;
        }
        Ok(())
    }
}

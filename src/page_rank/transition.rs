//! The random surfer's next-step distribution.
//!
//! From a page with `L > 0` links, a linked page `y` is reached with
//! probability `damping / L + (1 - damping) / N` and any other page with
//! `(1 - damping) / N`. A sink (`L == 0`) is treated as linking to every page,
//! which makes its distribution uniform.

use super::Adjacency;
use crate::common::check_damping;
use crate::{Error, Result};
use algograph::graph::{QueryableGraph, VertexId};
use rand::Rng;
use std::collections::HashMap;

pub struct TransitionModel {
    damping: f64,
    adjacency: Adjacency,
}

impl TransitionModel {
    pub fn new<G: QueryableGraph>(g: &G, damping: f64) -> Result<Self> {
        check_damping(damping)?;
        let adjacency = Adjacency::new(g)?;
        Ok(Self { damping, adjacency })
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Full distribution over every vertex for a surfer standing on `u`.
    pub fn distribution(
        &self,
        u: &VertexId,
    ) -> Result<HashMap<VertexId, f64, ahash::RandomState>> {
        let i = *self
            .adjacency
            .index
            .get(u)
            .ok_or_else(|| Error::UnknownNode(format!("{u:?}")))?;
        let step = self.step(i);
        let probs: Vec<f64> = (0..self.adjacency.len())
            .map(|j| step.probability(j))
            .collect();
        Ok(self.adjacency.to_map(&probs))
    }

    pub(crate) fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    pub(crate) fn step(&self, i: usize) -> Step<'_> {
        Step {
            n: self.adjacency.len(),
            damping: self.damping,
            links: &self.adjacency.out[i],
        }
    }
}

/// Next-step distribution out of one vertex, in dense indices.
pub(crate) struct Step<'a> {
    n: usize,
    damping: f64,
    links: &'a [usize],
}

impl Step<'_> {
    pub fn probability(&self, j: usize) -> f64 {
        let n = self.n as f64;
        if self.links.is_empty() {
            return 1.0 / n;
        }
        let teleport = (1.0 - self.damping) / n;
        if self.links.binary_search(&j).is_ok() {
            self.damping / self.links.len() as f64 + teleport
        } else {
            teleport
        }
    }

    /// Draws the next vertex.
    ///
    /// Follows a uniformly chosen link with probability `damping`, otherwise
    /// jumps to a uniformly chosen vertex. The jump may land on a linked
    /// vertex too, so the mixture has exactly the law of [`Self::probability`].
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        if !self.links.is_empty() && rng.random_bool(self.damping) {
            self.links[rng.random_range(0..self.links.len())]
        } else {
            rng.random_range(0..self.n)
        }
    }
}

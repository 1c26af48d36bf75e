//! Keyed link graph.
//!
//! [`LinkGraph`] maps caller-chosen node tokens (page names, ids, ...) onto the
//! vertices of a directed [`algograph`] graph. It is built once, checked for
//! the closed-universe invariant, and never mutated afterwards.

use crate::{Error, Result};
use algograph::graph::*;
use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fmt::Debug,
    hash::Hash,
};

pub struct LinkGraph<K> {
    graph: directed::TreeBackedGraph,
    vertices: HashMap<K, VertexId, ahash::RandomState>,
    keys: HashMap<VertexId, K, ahash::RandomState>,
}

impl<K> LinkGraph<K>
where
    K: Clone + Eq + Hash + Ord + Debug,
{
    /// Builds a graph from `(node, outbound links)` pairs.
    ///
    /// Every link target must itself be listed as a node. Self-links and
    /// repeated nodes are rejected; repeated targets within one out-list
    /// collapse into one link.
    pub fn from_links<I, L>(links: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, L)>,
        L: IntoIterator<Item = K>,
    {
        let mut out_sets: BTreeMap<K, BTreeSet<K>> = BTreeMap::new();
        for (node, targets) in links {
            if out_sets.contains_key(&node) {
                return Err(Error::DuplicateNode(format!("{node:?}")));
            }
            let targets: BTreeSet<K> = targets.into_iter().collect();
            out_sets.insert(node, targets);
        }

        let mut graph = directed::TreeBackedGraph::new();
        let mut vertices = HashMap::with_hasher(ahash::RandomState::new());
        let mut keys = HashMap::with_hasher(ahash::RandomState::new());
        for node in out_sets.keys() {
            let v = graph.add_vertex();
            vertices.insert(node.clone(), v);
            keys.insert(v, node.clone());
        }
        for (node, targets) in out_sets.iter() {
            let u = vertices[node];
            for target in targets.iter() {
                if target == node {
                    return Err(Error::SelfLink(format!("{node:?}")));
                }
                let Some(v) = vertices.get(target) else {
                    return Err(Error::UnknownTarget {
                        from: format!("{node:?}"),
                        to: format!("{target:?}"),
                    });
                };
                graph.add_edge(u, *v);
            }
        }
        tracing::debug!(
            nodes = graph.vertex_size(),
            links = graph.edge_size(),
            "link graph built"
        );
        Ok(Self {
            graph,
            vertices,
            keys,
        })
    }

    pub fn len(&self) -> usize {
        self.graph.vertex_size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn graph(&self) -> &directed::TreeBackedGraph {
        &self.graph
    }

    pub fn vertex(&self, key: &K) -> Option<VertexId> {
        self.vertices.get(key).copied()
    }

    pub fn key(&self, v: &VertexId) -> Option<&K> {
        self.keys.get(v)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.vertices.contains_key(key)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &K> + '_ {
        self.graph.iter_vertices().filter_map(|v| self.keys.get(&v))
    }

    /// Targets linked to by `key`, or `None` if `key` is not a node.
    pub fn out_links(&self, key: &K) -> Option<BTreeSet<&K>> {
        let u = self.vertex(key)?;
        let links = self
            .graph
            .out_edges(&u)
            .filter_map(|e| self.keys.get(&e.sink))
            .collect();
        Some(links)
    }

    /// Re-keys a vertex-indexed distribution by node token.
    pub fn resolve(
        &self,
        ranks: &HashMap<VertexId, f64, ahash::RandomState>,
    ) -> HashMap<K, f64, ahash::RandomState> {
        ranks
            .iter()
            .filter_map(|(v, w)| self.keys.get(v).map(|k| (k.clone(), *w)))
            .collect()
    }
}

impl<K: Debug> Debug for LinkGraph<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for u in self.graph.iter_vertices() {
            let sinks: Vec<_> = self
                .graph
                .out_edges(&u)
                .filter_map(|e| self.keys.get(&e.sink))
                .collect();
            if let Some(k) = self.keys.get(&u) {
                map.entry(k, &sinks);
            }
        }
        map.finish()
    }
}

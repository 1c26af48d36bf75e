use algograph::graph::*;
use quickcheck::{Arbitrary, Gen};

/// Small directed graph with at least one vertex and no self-loops.
#[derive(Debug, Clone)]
pub struct RandomGraph {
    pub graph: directed::TreeBackedGraph,
}

impl Arbitrary for RandomGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        const N: usize = 10;

        let n: usize = usize::arbitrary(g) % N + 1;
        let mut graph = directed::TreeBackedGraph::new();
        let vertices: Vec<_> = (0..n).map(|_| graph.add_vertex()).collect();
        for _ in 0..(n * 2) {
            let v0 = vertices[usize::arbitrary(g) % vertices.len()];
            let v1 = vertices[usize::arbitrary(g) % vertices.len()];
            if v0 != v1 {
                graph.add_edge(v0, v1);
            }
        }
        Self { graph }
    }
}

/// Damping factor in `[0, 0.95]`.
#[derive(Debug, Clone, Copy)]
pub struct Damping(pub f64);

impl Arbitrary for Damping {
    fn arbitrary(g: &mut Gen) -> Self {
        Self((u8::arbitrary(g) % 96) as f64 / 100.0)
    }
}

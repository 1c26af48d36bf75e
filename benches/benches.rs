use algograph::graph::*;
use criterion::*;
use link_rank::page_rank::{iterated, sampled, PageRank};
use rand::{prelude::*, rngs::SmallRng};

criterion_main!(benches);
criterion_group!(benches, clique, ring, random_graph, walk_length);

fn clique(c: &mut Criterion) {
    let mut group = c.benchmark_group("Clique");
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);
    const SIZES: &[usize] = &[10usize, 20usize, 40usize, 80usize, 160usize];
    for n in SIZES.iter() {
        let mut g = directed::TreeBackedGraph::new();
        add_clique(&mut g, *n);
        bench_both(&mut group, &g, *n);
    }
    group.finish();
}

fn ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("Ring");
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);
    const SIZES: &[usize] = &[10usize, 20usize, 40usize, 80usize, 160usize, 320usize];
    for n in SIZES.iter() {
        let mut g = directed::TreeBackedGraph::new();
        let vs: Vec<_> = (0..*n).map(|_| g.add_vertex()).collect();
        for i in 0..*n {
            g.add_edge(vs[i], vs[(i + 1) % *n]);
        }
        bench_both(&mut group, &g, *n);
    }
    group.finish();
}

fn random_graph(c: &mut Criterion) {
    const V_SIZE: &[usize] = &[10usize, 20usize, 40usize, 80usize, 160usize];
    const E_POW: &[f64] = &[1.0, 1.25, 1.5];
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    let mut rng = SmallRng::seed_from_u64(3407);
    for e_m in E_POW.iter() {
        let mut group = c.benchmark_group(format!("RandomGraph_{e_m:.2}"));
        group.plot_config(plot_config.clone());
        for v_n in V_SIZE.iter() {
            let e_n = (*v_n as f64).powf(*e_m) as usize;
            let g = gen_random_graph(&mut rng, *v_n, e_n);
            bench_both(&mut group, &g, *v_n);
        }
        group.finish();
    }
}

fn walk_length(c: &mut Criterion) {
    const SAMPLES: &[usize] = &[1_000usize, 10_000usize, 100_000usize];
    let mut group = c.benchmark_group("WalkLength");
    let mut rng = SmallRng::seed_from_u64(3407);
    let g = gen_random_graph(&mut rng, 100, 400);
    for samples in SAMPLES.iter() {
        let config = sampled::Config {
            samples: *samples,
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::new("Sampled", samples), samples, |b, _| {
            let spr = sampled::SampledPageRank::new(&g, &config).unwrap();
            let mut rng = SmallRng::seed_from_u64(3407);
            b.iter(|| black_box(spr.calc_with_rng(&mut rng)))
        });
    }
    group.finish();
}

fn bench_both<M: measurement::Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    g: &directed::TreeBackedGraph,
    n: usize,
) {
    group.bench_with_input(BenchmarkId::new("Iterated", n), &n, |b, _| {
        b.iter(|| {
            let ipr = iterated::IteratedPageRank::new(g, &iterated::Config::default()).unwrap();
            black_box(ipr.calc().unwrap())
        })
    });
    group.bench_with_input(BenchmarkId::new("Sampled", n), &n, |b, _| {
        let mut rng = SmallRng::seed_from_u64(3407);
        b.iter(|| {
            let spr = sampled::SampledPageRank::new(g, &sampled::Config::default()).unwrap();
            black_box(spr.calc_with_rng(&mut rng))
        })
    });
}

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn add_clique<G: GrowableGraph>(g: &mut G, n: usize) -> Vec<VertexId> {
    assert!(n > 0, "{n}");
    let vs: Vec<_> = (0..n).map(|_| g.add_vertex()).collect();
    for v1 in vs.iter() {
        for v2 in vs.iter() {
            if v1 != v2 {
                g.add_edge(*v1, *v2);
            }
        }
    }
    vs
}

fn gen_random_graph<R>(rng: &mut R, v_n: usize, e_n: usize) -> directed::TreeBackedGraph
where
    R: SeedableRng + Rng,
{
    let mut g = directed::TreeBackedGraph::new();
    let vs: Vec<_> = (0..v_n).map(|_| g.add_vertex()).collect();
    for _ in 0..e_n {
        let u = *vs.choose(rng).unwrap();
        let v = *vs.choose(rng).unwrap();
        if u != v {
            g.add_edge(u, v);
        }
    }
    g
}

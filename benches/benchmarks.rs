//! Criterion benchmarks for route-graph.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use route_graph::graph::RouteGraph;
use route_graph::types::{City, CityId};

/// Build a large graph using from_parts for fast construction.
fn make_large_graph(city_count: usize, routes_per_city: usize) -> RouteGraph {
    let mut rng = rand::thread_rng();
    let mut cities: Vec<City> = Vec::with_capacity(city_count);
    for i in 0..city_count {
        let mut city = City::new(i as CityId, &format!("city_{}", i));
        for _ in 0..routes_per_city {
            let target = rng.gen_range(0..city_count) as CityId;
            if target != city.id && !city.has_route_to(target) {
                city.routes.push(target);
            }
        }
        cities.push(city);
    }
    RouteGraph::from_parts(cities).unwrap()
}

/// Build a small graph through add_city/add_route (for benchmarking those operations).
fn make_small_graph(city_count: usize, routes_per_city: usize) -> RouteGraph {
    let mut rng = rand::thread_rng();
    let mut graph = RouteGraph::new();
    for i in 0..city_count {
        graph.add_city(i as CityId, &format!("city_{}", i)).unwrap();
    }
    for i in 0..city_count {
        for _ in 0..routes_per_city {
            let target = rng.gen_range(0..city_count);
            let _ = graph.add_route(i as CityId, target as CityId);
        }
    }
    graph
}

fn bench_add_city(c: &mut Criterion) {
    let mut graph = make_small_graph(10_000, 3);
    let mut next_id: CityId = 10_000;

    c.bench_function("add_city_to_10k", |b| {
        b.iter(|| {
            let _ = graph.add_city(next_id, "bench city");
            next_id += 1;
        })
    });
}

fn bench_add_remove_route(c: &mut Criterion) {
    let mut graph = make_small_graph(10_000, 3);
    graph.add_city(-1, "source").unwrap();

    c.bench_function("add_remove_route_10k", |b| {
        b.iter(|| {
            let _ = graph.add_route(-1, 5_000);
            let _ = graph.remove_route(-1, 5_000);
        })
    });
}

fn bench_can_reach_100k(c: &mut Criterion) {
    let graph = make_large_graph(100_000, 4);
    let mut rng = rand::thread_rng();

    c.bench_function("can_reach_100k", |b| {
        b.iter(|| {
            let to = rng.gen_range(0..100_000) as CityId;
            graph.can_reach(0, to)
        })
    });
}

fn bench_shortest_route_100k(c: &mut Criterion) {
    let graph = make_large_graph(100_000, 4);
    let mut rng = rand::thread_rng();

    c.bench_function("shortest_route_100k", |b| {
        b.iter(|| {
            let to = rng.gen_range(0..100_000) as CityId;
            graph.shortest_route(0, to)
        })
    });
}

fn bench_describe_10k(c: &mut Criterion) {
    let graph = make_large_graph(10_000, 4);

    c.bench_function("describe_10k", |b| b.iter(|| graph.describe()));
}

criterion_group!(
    benches,
    bench_add_city,
    bench_add_remove_route,
    bench_can_reach_100k,
    bench_shortest_route_100k,
    bench_describe_10k,
);
criterion_main!(benches);

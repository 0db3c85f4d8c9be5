use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use scentsearch::catalog::{Catalog, DEFAULT_SEARCH_LIMIT, PerfumeId, PerfumeRecord};
use scentsearch::vibes::derive_vibes;

const BRANDS: [&str; 5] = ["Creed", "Dior", "Chanel", "Hermes", "Guerlain"];
const ACCORDS: [&str; 5] = ["woody", "fresh citrus", "floral sweet", "spicy", "leather"];

fn catalog(n: u32) -> Catalog {
    let records = (0..n)
        .map(|i| PerfumeRecord {
            id: PerfumeId(i),
            name: format!("Perfume No. {i}"),
            brand: BRANDS[i as usize % BRANDS.len()].to_string(),
            year: None,
            gender: "unisex".to_string(),
            rating_value: Some(4.0),
            main_accord: ACCORDS[i as usize % ACCORDS.len()].to_string(),
            image_url: String::new(),
        })
        .collect();
    Catalog::from_records(records).unwrap()
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Search");
    // 与真实数据规模相近
    let catalog = catalog(70_000);

    group.throughput(Throughput::Elements(catalog.len() as u64));
    group.bench_function("search_by_name_sparse", |b| {
        b.iter(|| catalog.search_by_name(black_box("No. 6999"), DEFAULT_SEARCH_LIMIT).unwrap())
    });
    group.bench_function("search_by_name_no_match", |b| {
        b.iter(|| catalog.search_by_name(black_box("zzzz"), DEFAULT_SEARCH_LIMIT).unwrap())
    });
    group.finish();
}

fn bench_vibes(c: &mut Criterion) {
    c.bench_function("derive_vibes", |b| {
        b.iter(|| derive_vibes(black_box("Spicy Woody Floral Vanilla")))
    });
}

criterion_group!(benches, bench_search, bench_vibes);
criterion_main!(benches);

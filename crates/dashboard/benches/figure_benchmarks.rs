use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockview_core::Sku;
use stockview_dashboard::{build_figure, Series, SortMode, ViewSelection};
use stockview_inventory::{InventoryRecord, InventoryTable};

const FAMILIES: [&str; 4] = ["PUMP", "BOLT", "VALVE", "SEAL"];

fn synthetic_table(n: usize) -> InventoryTable {
    let records = (0..n)
        .map(|i| {
            let family = FAMILIES[i % FAMILIES.len()];
            let sku = Sku::new(format!("{family}-{i:06}")).unwrap();
            let psl = ((i * 37) % 500) as u64;
            InventoryRecord::new(sku, format!("{family} part {i}"), psl / 2, psl / 5, psl, psl / 3)
        })
        .collect();
    InventoryTable::new(records).unwrap()
}

fn bench_build_figure(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_figure");

    for n in [100usize, 1_000, 10_000] {
        let table = synthetic_table(n);
        group.throughput(Throughput::Elements(n as u64));

        let all_series = ViewSelection::default().with_sort(SortMode::PslDesc);
        group.bench_with_input(BenchmarkId::new("all_series_psl_desc", n), &table, |b, t| {
            b.iter(|| build_figure(black_box(t), black_box(&all_series)))
        });

        let prefix_only = ViewSelection::default()
            .with_series([Series::OnOrder])
            .with_prefixes(["PUMP", "SEAL"]);
        group.bench_with_input(BenchmarkId::new("prefix_filter", n), &table, |b, t| {
            b.iter(|| build_figure(black_box(t), black_box(&prefix_only)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_figure);
criterion_main!(benches);

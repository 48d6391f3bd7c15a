use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use firemat_catalog::{ProductDraft, ProductStatus};
use firemat_core::ProductId;
use firemat_ledger::{MovementDraft, MovementKind};
use firemat_store::{InventoryStore, ReportFilter, ReportScope, build_report};

fn fecha() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
}

fn store_with_product() -> (InventoryStore, ProductId) {
    let mut store = InventoryStore::new();
    let draft = ProductDraft {
        code: "FM-CT-001".to_string(),
        sku: "SKU-CT-001".to_string(),
        name: "Metacaulk 1200".to_string(),
        category: "Cintas / Wraps".to_string(),
        min_stock: 30,
        location: "B1 - Rack A2".to_string(),
        status: ProductStatus::Active,
        doc_ref: String::new(),
        image_url: String::new(),
    };
    let id = store.create_product(&draft, 1_000_000, fecha()).unwrap();
    (store, id)
}

fn store_with_movements(count: usize) -> InventoryStore {
    let (mut store, id) = store_with_product();
    for i in 0..count {
        let tipo = if i % 2 == 0 { MovementKind::Entrada } else { MovementKind::Salida };
        store
            .record_movement(id, &MovementDraft::new(tipo, (i as i64 % 50) + 1, fecha()))
            .unwrap();
    }
    store
}

fn bench_record_movements(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_movements");
    for count in [100usize, 1_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let (mut store, id) = store_with_product();
                for i in 0..count {
                    store
                        .record_movement(
                            id,
                            &MovementDraft::new(MovementKind::Entrada, (i as i64 % 50) + 1, fecha()),
                        )
                        .unwrap();
                }
                black_box(store.summary())
            });
        });
    }
    group.finish();
}

fn bench_build_report(c: &mut Criterion) {
    let store = store_with_movements(1_000);
    c.bench_function("build_report_movimientos_1000", |b| {
        b.iter(|| {
            black_box(build_report(
                &store,
                ReportScope::Movimientos,
                &ReportFilter::default(),
            ))
        });
    });
}

criterion_group!(benches, bench_record_movements, bench_build_report);
criterion_main!(benches);

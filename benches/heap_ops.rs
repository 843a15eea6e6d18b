use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use indexed_heap::IndexedMinHeap;

fn filled(n: usize) -> IndexedMinHeap {
    let mut heap = IndexedMinHeap::new(n);
    for id in 0..n {
        heap.insert(((id * 7919) % n) as i64, id).unwrap();
    }
    heap
}

fn heap_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed_min_heap");
    for &n in &[64usize, 1024, 16384] {
        group.bench_with_input(BenchmarkId::new("insert", n), &n, |b, &n| {
            b.iter(|| black_box(filled(n)));
        });

        group.bench_with_input(BenchmarkId::new("update", n), &n, |b, &n| {
            let mut heap = filled(n);
            let mut round = 0i64;
            b.iter(|| {
                round += 1;
                for id in (0..n).step_by(4) {
                    let key = if round % 2 == 0 { -(id as i64) } else { id as i64 * 3 };
                    heap.update(key, id).unwrap();
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("drain", n), &n, |b, &n| {
            b.iter(|| {
                let mut heap = filled(n);
                while let Ok(id) = heap.remove_min() {
                    black_box(id);
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, heap_ops);
criterion_main!(benches);

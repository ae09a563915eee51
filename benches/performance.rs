use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dynarray::DynamicArray;

fn bench_sequential_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_push");

    for size in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("integers", size), size, |b, &size| {
            b.iter(|| {
                let mut array = DynamicArray::new();

                for i in 0..size {
                    black_box(array.push_back(i).unwrap());
                }

                black_box(array.len())
            });
        });
        group.bench_with_input(BenchmarkId::new("strings", size), size, |b, &size| {
            b.iter(|| {
                let mut array = DynamicArray::new();

                for i in 0..size {
                    array.push_back(format!("element_{}", i)).unwrap();
                }

                black_box(array.len())
            });
        });
    }
    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("get_operations", size), size, |b, &size| {
            let array: DynamicArray<usize> = (0..size).collect();

            b.iter(|| {
                for i in 0..size {
                    black_box(array.get(i));
                }
            });
        });
    }
    group.finish();
}

fn bench_sorted_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorted_insertion");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("one_by_one", size), size, |b, &size| {
            b.iter(|| {
                let mut array = DynamicArray::new();

                // odd multiplier spreads the values over the whole range
                for i in 0..size {
                    let value = (i * 7919) % size;
                    let idx = array.get_insert_idx(&value);
                    array.insert_before(idx, value).unwrap();
                }

                black_box(array.len())
            });
        });
        group.bench_with_input(BenchmarkId::new("batch", size), size, |b, &size| {
            let base: DynamicArray<usize> = (0..size).map(|i| i * 2).collect();
            let values: Vec<usize> = (0..size).map(|i| i * 2 + 1).collect();

            b.iter(|| {
                let mut array = base.clone();
                let mut idxs = DynamicArray::new();
                array.get_insert_idxs(&values, &mut idxs).unwrap();

                for (i, value) in values.iter().enumerate() {
                    array.insert_before(idxs[i] + i, *value).unwrap();
                }

                black_box(array.len())
            });
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [1000, 10000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        let array: DynamicArray<usize> = (0..*size).map(|i| i * 2).collect();

        group.bench_with_input(BenchmarkId::new("binary_search", size), size, |b, &size| {
            b.iter(|| {
                for i in 0..size {
                    black_box(array.binary_search(&i));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("find", size), size, |b, &size| {
            b.iter(|| {
                for i in (0..size).step_by(size / 10) {
                    black_box(array.find(&i));
                }
            });
        });
    }
    group.finish();
}

fn bench_erase_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("erase");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("erase_front", size), size, |b, &size| {
            let base: DynamicArray<String> = (0..size).map(|i| format!("element_{}", i)).collect();

            b.iter(|| {
                let mut array = base.clone();

                while !array.is_empty() {
                    black_box(array.erase(0).unwrap());
                }
            });
        });
    }
    group.finish();
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("copy", size), size, |b, &size| {
            let other: DynamicArray<usize> = (0..size).collect();

            b.iter(|| {
                let mut array = DynamicArray::new();
                for _ in 0..10 {
                    array.append_vector(&other).unwrap();
                }
                black_box(array.len())
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sequential_push,
    bench_random_access,
    bench_sorted_insertion,
    bench_search,
    bench_erase_front,
    bench_append
);
criterion_main!(benches);

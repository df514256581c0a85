use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use narray::{add, Kernels, NArray, ScalarKernels};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
use narray::SimdKernels;

fn random_buffer(rng: &mut StdRng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.gen::<f64>() * 2.0 - 1.0).collect()
}

fn bench_kernel_add(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("kernel_add");
    for n in [1_000usize, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(n as u64));
        let base = random_buffer(&mut rng, n);
        let x = random_buffer(&mut rng, n);
        let mut out = base.clone();

        group.bench_with_input(BenchmarkId::new("scalar", n), &n, |b, _| {
            b.iter(|| {
                out.copy_from_slice(&base);
                ScalarKernels::add_assign(&mut out, &x);
            })
        });

        #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
        group.bench_with_input(BenchmarkId::new("simd", n), &n, |b, _| {
            b.iter(|| {
                out.copy_from_slice(&base);
                SimdKernels::add_assign(&mut out, &x);
            })
        });
    }
    group.finish();
}

fn bench_kernel_scale(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("kernel_scale");
    for n in [1_000usize, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(n as u64));
        let base = random_buffer(&mut rng, n);
        let mut out = base.clone();

        group.bench_with_input(BenchmarkId::new("scalar", n), &n, |b, _| {
            b.iter(|| {
                out.copy_from_slice(&base);
                ScalarKernels::scale(&mut out, 1.0001);
            })
        });

        #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
        group.bench_with_input(BenchmarkId::new("simd", n), &n, |b, _| {
            b.iter(|| {
                out.copy_from_slice(&base);
                SimdKernels::scale(&mut out, 1.0001);
            })
        });
    }
    group.finish();
}

fn bench_kernel_scans(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("kernel_scans");
    for n in [1_000usize, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(n as u64));
        let data = random_buffer(&mut rng, n);

        group.bench_with_input(BenchmarkId::new("sum_scalar", n), &n, |b, _| {
            b.iter(|| ScalarKernels::sum(&data))
        });
        group.bench_with_input(BenchmarkId::new("max_scalar", n), &n, |b, _| {
            b.iter(|| ScalarKernels::max_value(&data))
        });

        #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
        {
            group.bench_with_input(BenchmarkId::new("sum_simd", n), &n, |b, _| {
                b.iter(|| SimdKernels::sum(&data))
            });
            group.bench_with_input(BenchmarkId::new("max_simd", n), &n, |b, _| {
                b.iter(|| SimdKernels::max_value(&data))
            });
        }
    }
    group.finish();
}

fn bench_array_add(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("array_add");
    for size in [100usize, 500, 1000] {
        let elements = size * size;
        group.throughput(Throughput::Elements(elements as u64));

        let a = NArray::from_fn(&[size, size], |_| rng.gen::<f64>());
        let b = NArray::from_fn(&[size, size], |_| rng.gen::<f64>());
        let cc = NArray::from_fn(&[size, size], |_| rng.gen::<f64>());

        group.bench_with_input(BenchmarkId::new("three_way", size), &size, |bch, _| {
            bch.iter(|| match add(&[&a, &b, &cc]) {
                Ok(out) => out,
                Err(err) => panic!("add failed: {err}"),
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_kernel_add,
    bench_kernel_scale,
    bench_kernel_scans,
    bench_array_add
);
criterion_main!(benches);

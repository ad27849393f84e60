use std::collections::VecDeque;
use std::hint::black_box;

use criterion::Criterion;
use criterion::Throughput;
use ref_kit::RefIterable;
use ref_kit::RefIterator;

fn benchmark_increment(criterion: &mut Criterion, name: &str, len: usize) {
    let name = format!("increment/{name}");
    let values: Vec<u64> = (0..len as u64).collect();

    criterion
        .benchmark_group(&name)
        .throughput(Throughput::Elements(len as u64))
        .bench_function("iter_mut", {
            let mut values = values.clone();
            move |b| {
                b.iter(|| {
                    for value in &mut values {
                        *value = value.wrapping_add(1);
                    }
                    black_box(&values);
                });
            }
        })
        .bench_function("ref_cursor", {
            let mut values = values.clone();
            move |b| {
                b.iter(|| {
                    let mut cursor = values.ref_iter();
                    while let Some(value) = cursor.next_ref() {
                        *value = value.wrapping_add(1);
                    }
                    cursor.dispose();
                    black_box(&values);
                });
            }
        })
        .bench_function("for_each_ref", {
            let mut values = values.clone();
            move |b| {
                b.iter(|| {
                    values.for_each_ref(|value| *value = value.wrapping_add(1));
                    black_box(&values);
                });
            }
        })
        .bench_function("deque_cursor", {
            let mut values: VecDeque<u64> = values.iter().copied().collect();
            move |b| {
                b.iter(|| {
                    values.for_each_ref(|value| *value = value.wrapping_add(1));
                    black_box(&values);
                });
            }
        });
}

fn main() {
    let mut criterion = Criterion::default().configure_from_args();

    benchmark_increment(&mut criterion, "small", 16);
    benchmark_increment(&mut criterion, "medium", 1_024);
    benchmark_increment(&mut criterion, "large", 65_536);

    criterion.final_summary();
}

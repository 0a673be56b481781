use fpseq::sequence::{filter, filter_indexed, map, map_indexed, reduce, reduce_indexed};
use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use std::hint::black_box;

fn setup_values() -> Vec<u64> {
    (0..1_000).collect()
}

#[library_benchmark]
#[bench::thousand(setup_values())]
fn map_1000(values: Vec<u64>) -> Vec<u64> {
    black_box(map(|element| element.wrapping_mul(3), &values))
}

#[library_benchmark]
#[bench::thousand(setup_values())]
fn map_indexed_1000(values: Vec<u64>) -> Vec<u64> {
    black_box(map_indexed(
        |element, index| element.wrapping_mul(index as u64),
        &values,
    ))
}

#[library_benchmark]
#[bench::thousand(setup_values())]
fn filter_1000(values: Vec<u64>) -> Vec<u64> {
    black_box(filter(|element| element % 3 == 0, &values))
}

#[library_benchmark]
#[bench::thousand(setup_values())]
fn filter_indexed_1000(values: Vec<u64>) -> Vec<u64> {
    black_box(filter_indexed(
        |element, index| element % 2 == 0 || index % 2 != 0,
        &values,
    ))
}

#[library_benchmark]
#[bench::thousand(setup_values())]
fn reduce_1000(values: Vec<u64>) -> u64 {
    black_box(reduce(
        |accumulator: u64, element| accumulator.wrapping_add(*element),
        0,
        &values,
    ))
}

#[library_benchmark]
#[bench::thousand(setup_values())]
fn reduce_indexed_1000(values: Vec<u64>) -> u64 {
    black_box(reduce_indexed(
        |accumulator: u64, element, index| {
            accumulator.wrapping_add(*element).wrapping_add(index as u64)
        },
        0,
        &values,
    ))
}

library_benchmark_group!(
    name = transform_group;
    benchmarks = map_1000, map_indexed_1000
);

library_benchmark_group!(
    name = select_group;
    benchmarks = filter_1000, filter_indexed_1000
);

library_benchmark_group!(
    name = accumulate_group;
    benchmarks = reduce_1000, reduce_indexed_1000
);

main!(library_benchmark_groups = transform_group, select_group, accumulate_group);

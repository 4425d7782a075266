use criterion::*;

use reversi_board::{capture_table, test_utils};

fn criterion_perft(c: &mut Criterion) {
    capture_table::init();

    let mut group = c.benchmark_group("perft");
    group.sample_size(50);

    for depth in 1..6 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| test_utils::run_perft(black_box(depth)))
        });
    }

    group.finish();
}

fn criterion_capture_table(c: &mut Criterion) {
    c.bench_function("capture_table_build", |b| {
        b.iter(capture_table::CaptureTable::build)
    });
}

criterion_group!(perft, criterion_perft, criterion_capture_table);
criterion_main!(perft);

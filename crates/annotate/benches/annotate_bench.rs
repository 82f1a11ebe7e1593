use annotate::{annotate, AnnotateConfig, EntityMatcher};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

const NOTE: &str = "The patient was prescribed metformin 500mg twice daily for type 2 diabetes \
mellitus. After two weeks, she developed nausea, vomiting, and abdominal pain. Laboratory tests \
showed elevated lactate levels at 8.2 mmol/L, indicating lactic acidosis. ";

fn bench_find_matches(c: &mut Criterion) {
    let matcher = EntityMatcher::builtin().expect("builtin matcher");
    let mut group = c.benchmark_group("find_matches");

    for repeat in [1usize, 16, 256] {
        let text = NOTE.repeat(repeat);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("x{repeat}"), |b| {
            b.iter(|| matcher.find_matches(black_box(&text)))
        });
    }
    group.finish();
}

fn bench_annotate(c: &mut Criterion) {
    let matcher = EntityMatcher::builtin().expect("builtin matcher");
    let cfg = AnnotateConfig::default();
    let text = NOTE.repeat(16);

    c.bench_function("annotate_x16", |b| {
        b.iter(|| annotate(black_box(&text), &matcher, &cfg).expect("annotate"))
    });
}

criterion_group!(benches, bench_find_matches, bench_annotate);
criterion_main!(benches);

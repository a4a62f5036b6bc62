use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use omfl::{parse, parse_with_options, ParseOptions};

fn generate_document(sections: usize) -> String {
    let mut text = String::from("# generated\nname = \"bench\"\n");
    for i in 0..sections {
        text.push_str(&format!(
            "\n[service.s{i}]\nport = {}\nratio = {i}.125\nhost = \"host-{i}.local\"\nflags = [true, false, {i}, \"x\\t{i}\"]\n",
            8000 + i
        ));
    }
    text
}

fn benchmark_parse_small(c: &mut Criterion) {
    let input = "[server]\nport = 8080\nhosts = [\"a\", \"b\"]\nratio = 0.75";

    c.bench_function("parse_small_document", |b| {
        b.iter(|| parse(black_box(input)))
    });
}

fn benchmark_parse_sections(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_sections");

    for size in [10, 50, 100, 500].iter() {
        let input = generate_document(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| parse(black_box(input)))
        });
    }
    group.finish();
}

fn benchmark_scalars(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalars");

    let integers = format!(
        "v = [{}]",
        (0..100).map(|i| i.to_string()).collect::<Vec<_>>().join(", ")
    );
    let floats = format!(
        "v = [{}]",
        (0..100).map(|i| format!("{i}.5")).collect::<Vec<_>>().join(", ")
    );
    let strings = format!(
        "v = [{}]",
        (0..100)
            .map(|i| format!("\"item\\x20{i}\\n\""))
            .collect::<Vec<_>>()
            .join(", ")
    );

    group.bench_function("integer_array", |b| b.iter(|| parse(black_box(&integers))));
    group.bench_function("float_array", |b| b.iter(|| parse(black_box(&floats))));
    group.bench_function("escaped_strings", |b| b.iter(|| parse(black_box(&strings))));

    group.finish();
}

fn benchmark_queries(c: &mut Criterion) {
    let doc = parse(&generate_document(100));

    c.bench_function("query_nested_path", |b| {
        b.iter(|| doc.get(black_box("service.s57.port")).as_int_or(0))
    });

    c.bench_function("query_missing_path", |b| {
        b.iter(|| doc.get(black_box("service.s999.port")).is_nothing())
    });
}

fn benchmark_collect_all(c: &mut Criterion) {
    let input: String = (0..200)
        .map(|i| {
            if i % 10 == 0 {
                format!("k{i} = @\n")
            } else {
                format!("k{i} = {i}\n")
            }
        })
        .collect();

    c.bench_function("collect_all_diagnostics", |b| {
        b.iter(|| parse_with_options(black_box(&input), ParseOptions::collect_all()))
    });
}

criterion_group!(
    benches,
    benchmark_parse_small,
    benchmark_parse_sections,
    benchmark_scalars,
    benchmark_queries,
    benchmark_collect_all
);
criterion_main!(benches);

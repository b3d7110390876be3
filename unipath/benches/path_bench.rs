use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use unipath::path::PathRelationship;
use unipath::UniPath;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (name, text) in [
        ("absolute", "/absolute/path/to/file"),
        ("relative", "relative/path/to/file.txt"),
        ("with_dots", "/a/b/../c/./d"),
        ("backslashes", "C:\\Users\\me\\Documents\\report.docx"),
        ("padded", "  spaced / out  /  segments  "),
    ] {
        group.bench_with_input(BenchmarkId::new("parse", name), &text, |b, &text| {
            b.iter(|| UniPath::parse(black_box(text)));
        });
    }

    let long = (0..64).map(|i| format!("segment{i}")).collect::<Vec<_>>().join("/");
    group.bench_function("long_path", |b| {
        b.iter(|| UniPath::parse(black_box(&long)));
    });

    group.bench_function("multi_component_build", |b| {
        b.iter(|| UniPath::build(black_box("user"), black_box(["..", "other", ".", "file.txt"])));
    });

    group.finish();
}

fn bench_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("algebra");

    let base = UniPath::parse("/users/test/projects/unipath").unwrap();
    let target = UniPath::parse("/users/test/other/docs/readme.md").unwrap();
    let relative = UniPath::parse("src/path/scanner.rs").unwrap();

    group.bench_function("resolve", |b| {
        b.iter(|| black_box(&base).resolve(black_box(&relative)));
    });

    group.bench_function("relativize", |b| {
        b.iter(|| black_box(&base).relativize(black_box(&target)));
    });

    group.bench_function("concat_str", |b| {
        b.iter(|| black_box(&base).concat_str(black_box("../../etc/passwd")));
    });

    group.bench_function("hash_code", |b| {
        b.iter(|| black_box(&target).hash_code());
    });

    group.bench_function("eq_ignore_case", |b| {
        let upper = UniPath::parse("/USERS/TEST/OTHER/DOCS/README.MD").unwrap();
        b.iter(|| black_box(&target).eq_ignore_case(black_box(&upper)));
    });

    group.finish();
}

fn bench_relationship(c: &mut Criterion) {
    let mut group = c.benchmark_group("relationship");

    let ancestor = UniPath::parse("/users/test/projects/unipath").unwrap();
    let descendant = UniPath::parse("/users/test/projects/unipath/src/path").unwrap();
    let unrelated = UniPath::parse("/users/test/projects/other").unwrap();

    group.bench_function("ancestor", |b| {
        b.iter(|| PathRelationship::between(black_box(&ancestor), black_box(&descendant)));
    });

    group.bench_function("unrelated", |b| {
        b.iter(|| PathRelationship::between(black_box(&ancestor), black_box(&unrelated)));
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_algebra, bench_relationship);
criterion_main!(benches);

//! Benchmarks for the figvar pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use figvar::{
    build_collections, parse_token_source, variables_json, Theme, TokenSetBuilder, Transforms,
    ValidationResult,
};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

// -- Parsing benchmarks --

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let base = load_fixture("base.json");
    let semantic = load_fixture("semantic.json");

    let small = r##"{ "color": { "primary": { "$type": "color", "$value": "#FF0000" } } }"##;

    group.bench_function("parse_small", |b| {
        b.iter(|| {
            parse_token_source(black_box(small), Path::new("small.json"), Theme::Light).unwrap()
        })
    });

    group.bench_function("parse_base", |b| {
        b.iter(|| {
            parse_token_source(black_box(&base), Path::new("base.json"), Theme::Light).unwrap()
        })
    });

    group.bench_function("parse_semantic", |b| {
        b.iter(|| {
            parse_token_source(black_box(&semantic), Path::new("semantic.json"), Theme::Light)
                .unwrap()
        })
    });

    group.finish();
}

// -- Resolution and export benchmarks --

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");

    let base = load_fixture("base.json");
    let semantic = load_fixture("semantic.json");
    let dark = load_fixture("base.dark.json");

    let tokens = || {
        let mut all =
            parse_token_source(&base, Path::new("base.json"), Theme::Light).unwrap();
        all.extend(
            parse_token_source(&semantic, Path::new("semantic.json"), Theme::Light).unwrap(),
        );
        all.extend(parse_token_source(&dark, Path::new("base.dark.json"), Theme::Dark).unwrap());
        all
    };

    group.bench_function("resolve", |b| {
        let parsed = tokens();
        b.iter(|| {
            let mut builder = TokenSetBuilder::new();
            builder.add_tokens(black_box(parsed.clone()));
            builder.build()
        })
    });

    group.bench_function("build_collections", |b| {
        let mut builder = TokenSetBuilder::new();
        builder.add_tokens(tokens());
        let set = builder.build();
        let transforms = Transforms::standard();
        b.iter(|| {
            let mut diags = ValidationResult::new();
            build_collections(black_box(&set), &transforms, &mut diags)
        })
    });

    group.bench_function("serialize", |b| {
        let mut builder = TokenSetBuilder::new();
        builder.add_tokens(tokens());
        let set = builder.build();
        let mut diags = ValidationResult::new();
        let collections = build_collections(&set, &Transforms::standard(), &mut diags);
        b.iter(|| variables_json(black_box(&collections)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_export);
criterion_main!(benches);

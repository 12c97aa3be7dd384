use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rill_check::{parse, validate, Parser, Tokenizer};
use serde_json::Value;

// A "medium" document using only objects, strings and keywords.
const MEDIUM_JSON: &str = r#"
{
    "name": "Babbage",
    "admin": true,
    "deleted": false,
    "manager": null,
    "address": { "street": "Dorset Street", "city": "London" },
    "tasks": {
        "first": { "title": "Parse JSON", "done": false },
        "second": { "title": "Write docs", "done": true }
    },
    "nested": {"a": {"b": {"c": {"d": "deep"}}}}
}
"#;

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("JSON Validation");

    group.bench_function("rill_check::validate", |b| {
        b.iter(|| validate(black_box(MEDIUM_JSON)).unwrap())
    });

    group.bench_function("rill_check::parse", |b| {
        b.iter(|| {
            let root = parse(black_box(MEDIUM_JSON)).unwrap();
            black_box(root);
        })
    });

    group.bench_function("serde_json::from_str", |b| {
        b.iter(|| {
            let _: Value = serde_json::from_str(black_box(MEDIUM_JSON)).unwrap();
        })
    });

    group.finish();
}

fn bench_tokenizer(c: &mut Criterion) {
    c.bench_function("Tokenizer only", |b| {
        b.iter(|| Tokenizer::new(black_box(MEDIUM_JSON)).count())
    });

    c.bench_function("Parser over pre-lexed tokens", |b| {
        let tokens: Vec<_> = Tokenizer::new(MEDIUM_JSON).collect();
        b.iter(|| {
            Parser::new(black_box(tokens.clone()).into_iter())
                .validate()
                .unwrap()
        })
    });
}

fn bench_rendering(c: &mut Criterion) {
    let root = parse(MEDIUM_JSON).unwrap();
    let serde_value: Value = serde_json::from_str(MEDIUM_JSON).unwrap();

    let mut group = c.benchmark_group("JSON Rendering");
    group.bench_function("Element::stringify", |b| b.iter(|| root.stringify()));
    group.bench_function("serde_json::to_string", |b| {
        b.iter(|| serde_json::to_string(&serde_value).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_validation, bench_tokenizer, bench_rendering);
criterion_main!(benches);

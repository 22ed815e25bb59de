use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hcl_tokens::escape::escape;
use hcl_tokens::format::format;
use hcl_tokens::taskdef::{locals_body, TaskDefinition};
use hcl_tokens::{
    hcl, to_string, to_tokens, to_value, FormatOptions, SerializerOptions, Value, ValueMap,
};
use serde::Serialize;

#[derive(Serialize, Clone)]
struct KeyValuePair {
    name: String,
    value: String,
}

fn env_list(size: usize) -> Value {
    let env: Vec<KeyValuePair> = (0..size)
        .map(|i| KeyValuePair {
            name: format!("VAR_{}", i),
            value: format!("value-{}", i),
        })
        .collect();
    to_value(&env).unwrap()
}

fn benchmark_tokens_scalar(c: &mut Criterion) {
    let value = hcl!("postgres://db.internal:5432/app");

    c.bench_function("tokens_scalar_string", |b| {
        b.iter(|| to_tokens(black_box(&value)))
    });
}

fn benchmark_tokens_env_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokens_env_list");

    for size in [10, 50, 100, 500].iter() {
        let value = env_list(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| to_tokens(black_box(value)))
        });
    }
    group.finish();
}

fn benchmark_format_env_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_env_list");
    let options = FormatOptions::default();

    for size in [10, 50, 100, 500].iter() {
        let tokens = to_tokens(&env_list(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &tokens, |b, tokens| {
            b.iter(|| format(black_box(tokens), &options))
        });
    }
    group.finish();
}

fn benchmark_nested_maps(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_string_nested");

    for depth in [8, 32, 96].iter() {
        let mut value = hcl!({ "leaf" => true });
        for i in 0..*depth {
            let mut map = ValueMap::with_capacity(2);
            map.push("level", i);
            map.push("child", value);
            value = Value::Map(map);
        }
        group.bench_with_input(BenchmarkId::from_parameter(depth), &value, |b, value| {
            b.iter(|| to_string(black_box(value)))
        });
    }
    group.finish();
}

fn benchmark_escape(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape");

    let plain = "The quick brown fox jumps over the lazy dog. ".repeat(20);
    group.bench_function("plain", |b| b.iter(|| escape(black_box(&plain))));

    let special = "line\n\"quoted\" ${template} %{directive} \u{200b}\t".repeat(20);
    group.bench_function("special", |b| b.iter(|| escape(black_box(&special))));

    let unicode = "café naïve 日本語 🦀 ".repeat(20);
    group.bench_function("unicode", |b| b.iter(|| escape(black_box(&unicode))));

    group.finish();
}

fn benchmark_task_definition(c: &mut Criterion) {
    let json = include_str!("../tests/fixtures/task-definition.json");
    let options = SerializerOptions::new();

    c.bench_function("task_definition_locals", |b| {
        b.iter(|| {
            let task = TaskDefinition::from_json(black_box(json)).unwrap();
            locals_body(&task, None, &options)
                .unwrap()
                .render(&options.format)
        })
    });
}

criterion_group!(
    benches,
    benchmark_tokens_scalar,
    benchmark_tokens_env_list,
    benchmark_format_env_list,
    benchmark_nested_maps,
    benchmark_escape,
    benchmark_task_definition
);
criterion_main!(benches);

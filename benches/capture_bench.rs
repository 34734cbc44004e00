// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use netcapt::capture::CapturedBody;
use netcapt::sink::{LogEntry, ResponseRecord};

fn json_formatting_benchmark(c: &mut Criterion) {
    let body = br#"[
        {"userId": 1, "id": 1, "title": "sunt aut facere", "body": "quia et suscipit"},
        {"userId": 1, "id": 2, "title": "qui est esse", "body": "est rerum tempore"},
        {"userId": 1, "id": 3, "title": "ea molestias", "body": "et iusto sed quo"}
    ]"#;

    c.bench_function("classify_render_json", |b| {
        b.iter(|| black_box(CapturedBody::classify(Some(black_box(&body[..]))).render()))
    });
}

fn binary_formatting_benchmark(c: &mut Criterion) {
    let body = vec![0xffu8; 64 * 1024];

    c.bench_function("classify_render_binary", |b| {
        b.iter(|| black_box(CapturedBody::classify(Some(black_box(&body[..]))).render()))
    });
}

fn entry_render_benchmark(c: &mut Criterion) {
    let url = url::Url::parse("https://reqres.in/api/users").unwrap();
    let entry = LogEntry::new(
        Some(url),
        reqwest::Method::POST,
        CapturedBody::classify(Some(&br#"{"name":"John Doe","job":"Tester"}"#[..])),
        ResponseRecord::Body(CapturedBody::classify(Some(&br#"{"id":"7","createdAt":"now"}"#[..]))),
    );

    c.bench_function("render_entry", |b| b.iter(|| black_box(entry.render())));
}

criterion_group!(
    benches,
    json_formatting_benchmark,
    binary_formatting_benchmark,
    entry_render_benchmark
);
criterion_main!(benches);

//! Sorting performance benchmarks.
//!
//! Measures one header activation (key building, ordering, marker update)
//! and full document parse-sort-render on growing tables.
//!
//! Run with: cargo bench --bench sort_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tablesort::document::{parse_document, render_document};
use tablesort::model::{Direction, Table, TableId};
use tablesort::registrar::TableRegistrar;
use tablesort::sort::{order_rows, Activation, SortController};

/// Three columns: a name, a number with many ties, a city with markup.
fn generate_rows(count: usize) -> Vec<Vec<String>> {
    (0..count)
        .map(|i| {
            vec![
                format!("name-{}", (i * 7919) % count),
                format!("{}", i % 50),
                format!("<b>city-{}</b>", i % 13),
            ]
        })
        .collect()
}

fn generate_table(count: usize) -> Table {
    Table::from_texts(
        TableId::new(0),
        &["Name", "Age", "City"].map(String::from),
        &generate_rows(count),
    )
}

fn generate_document(count: usize) -> String {
    let mut html = String::from(r#"<table class="sortable"><tr><th>Name</th><th>Age</th><th>City</th></tr>"#);
    for row in generate_rows(count) {
        html.push_str("<tr>");
        for cell in row {
            html.push_str("<td>");
            html.push_str(&cell);
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}

fn bench_activation(c: &mut Criterion) {
    let mut group = c.benchmark_group("header_activation");

    for &count in &[100, 1_000, 10_000] {
        let table = generate_table(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &table, |b, table| {
            b.iter_batched(
                || table.clone(),
                |mut table| {
                    let mut controller = SortController::new();
                    controller.handle_header_activation(&mut table, Activation::Cell(1));
                    black_box(table)
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_order_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_rows");

    for &count in &[1_000, 10_000] {
        let rows = generate_table(count).data_rows().to_vec();
        group.bench_with_input(BenchmarkId::from_parameter(count), &rows, |b, rows| {
            b.iter_batched(
                || rows.clone(),
                |rows| black_box(order_rows(rows, 2, Direction::Descending)),
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_document_round_trip(c: &mut Criterion) {
    let html = generate_document(5_000);

    c.bench_function("parse_sort_render_5000", |b| {
        b.iter(|| {
            let mut document = parse_document(black_box(html.as_str()));
            let mut registrar = TableRegistrar::default();
            registrar.register_document(&document);
            registrar.activate(&mut document, TableId::new(0), Activation::Cell(0));
            black_box(render_document(&document))
        });
    });
}

criterion_group!(benches, bench_activation, bench_order_rows, bench_document_round_trip);
criterion_main!(benches);

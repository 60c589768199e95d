// Baseline benchmarks for guard evaluation
// Run with: cargo bench -p formguard-validator

use criterion::{Criterion, criterion_group, criterion_main};
use formguard_validator::prelude::*;
use serde_json::{Value, json};
use std::hint::black_box;

fn company() -> CustomGuard {
    object(
        Schema::new()
            .field("name", string(rules![text_field_with_length(200)]))
            .field("inn", string(rules![inn_ul()]))
            .field("kpp", string(rules![kpp()]))
            .field("ogrn", string(rules![ogrn_ul()]))
            .field("email", optional(string(rules![email()])))
            .nested(
                "director",
                Schema::new()
                    .field("lastName", string(rules![person_name()]))
                    .field("snils", string(rules![snils()])),
            ),
    )
}

fn valid_input() -> Value {
    json!({
        "name": "ООО Ромашка",
        "inn": "7728168971",
        "kpp": "773301001",
        "ogrn": "1027700132195",
        "email": "office@example.ru",
        "director": { "lastName": "Иванов", "snils": "11223344595" }
    })
}

// ============================================================================
// Leaf rules
// ============================================================================

fn bench_identifier_rules(c: &mut Criterion) {
    let inn = inn_ul();
    let snils = snils();

    c.bench_function("inn_ul_valid", |b| {
        b.iter(|| inn.validate(black_box("7728168971")));
    });

    c.bench_function("snils_valid", |b| {
        b.iter(|| snils.validate(black_box("11223344595")));
    });
}

// ============================================================================
// Objects
// ============================================================================

fn bench_object_valid(c: &mut Criterion) {
    let guard = company();
    let input = valid_input();

    c.bench_function("object_valid", |b| {
        b.iter(|| guard.validate(black_box(&input)));
    });
}

/// Every field fails, so this measures error aggregation.
fn bench_object_all_missing(c: &mut Criterion) {
    let guard = company();
    let input = json!({});

    c.bench_function("object_all_missing", |b| {
        b.iter(|| {
            let error = guard.validate(black_box(&input));
            black_box(error)
        });
    });
}

fn bench_deep_partial(c: &mut Criterion) {
    let guard = deep_partial(company());
    let input = json!({ "director": { "snils": "11223344595" } });

    c.bench_function("deep_partial_patch", |b| {
        b.iter(|| guard.validate(black_box(&input)));
    });
}

// ============================================================================
// Arrays and reporting
// ============================================================================

fn bench_array_of_objects(c: &mut Criterion) {
    let guard = array(company());
    let input = Value::Array(vec![valid_input(); 100]);

    c.bench_function("array_100_objects", |b| {
        b.iter(|| guard.validate(black_box(&input)));
    });
}

fn bench_pretty_error(c: &mut Criterion) {
    let Err(error) = company().validate(&json!({ "director": {} })) else {
        return;
    };

    c.bench_function("to_pretty_error", |b| {
        b.iter(|| to_pretty_error(black_box(&error)));
    });
}

criterion_group!(
    benches,
    bench_identifier_rules,
    bench_object_valid,
    bench_object_all_missing,
    bench_deep_partial,
    bench_array_of_objects,
    bench_pretty_error,
);
criterion_main!(benches);

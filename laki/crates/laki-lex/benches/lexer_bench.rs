//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package laki-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use laki_lex::Lexer;

fn lexer_token_count(source: &str) -> usize {
    Lexer::new("<bench>", source)
        .tokenize()
        .map(|tokens| tokens.len())
        .unwrap_or(0)
}

fn bench_lexer_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "var total = 0\nfor i = 1 to 100 { total += i * i }\nprint(total)\n";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_var", |b| {
        b.iter(|| lexer_token_count(black_box("var x = 42")))
    });

    group.bench_function("loop_with_body", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_complex");

    let source = r#"
        func fib(n) -> {
            if n < 2 { return n }
            return fib(n - 1) + fib(n - 2)
        }

        // strings and lists
        var banner = 'fib\tresults:'
        var results = [fib(1), fib(2), fib(3)]
        print(banner)
        print(results)
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("function_and_literals", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    let repeated = source.repeat(100);
    group.throughput(Throughput::Bytes(repeated.len() as u64));
    group.bench_function("large_input", |b| {
        b.iter(|| lexer_token_count(black_box(&repeated)))
    });

    group.finish();
}

criterion_group!(benches, bench_lexer_simple, bench_lexer_complex);
criterion_main!(benches);

//! Benchmarks for the VDSH compiler
//!
//! Measures performance of:
//! - Lexer throughput
//! - Parser throughput
//! - Shell-script generation
//! - Full compilation pipeline

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use vdsh_lang::iter::SequenceCursor;
use vdsh_lang::lexer::{lex, tokenize};
use vdsh_lang::parser::Parser;
use vdsh_lang::pipeline::{compile, CodeGenerator};

/// Simple arithmetic expression
const SIMPLE_EXPR: &str = "1 + 2 * 3";

/// Nested arithmetic expression
const NESTED_EXPR: &str = "1 + 2 * 3 + 4 / 5 - 6 + 7 * 8 - 9 + 10";

/// Boolean expression exercising every precedence level
const BOOL_EXPR: &str = "1 != 2 && !flag || x <= 10 * 2 ** 3";

/// Parenthesized groups
const GROUPED_EXPR: &str = "(1 + 2) * (3 - 4) / (5 % 6)";

/// Function declaration statement
const FUNC_STMT: &str = "func add(a: number, b: number) { let x = a; x + b }";

fn bench_lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let test_cases = [
        ("simple", SIMPLE_EXPR),
        ("nested", NESTED_EXPR),
        ("boolean", BOOL_EXPR),
        ("grouped", GROUPED_EXPR),
        ("func", FUNC_STMT),
    ];

    for (name, source) in test_cases {
        group.bench_with_input(BenchmarkId::new("lex", name), source, |b, source| {
            b.iter(|| lex(black_box(source)).unwrap())
        });
    }

    group.finish();
}

fn bench_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");

    let test_cases = [
        ("simple", SIMPLE_EXPR),
        ("nested", NESTED_EXPR),
        ("boolean", BOOL_EXPR),
        ("grouped", GROUPED_EXPR),
    ];

    for (name, source) in test_cases {
        // Pre-lex for a parser-only measurement
        let tokens = lex(source).unwrap();

        group.bench_with_input(BenchmarkId::new("parse", name), &tokens, |b, tokens| {
            b.iter(|| {
                let mut parser = Parser::new(SequenceCursor::new(tokens.clone()));
                parser.parse().unwrap()
            })
        });
    }

    group.bench_with_input(BenchmarkId::new("parse", "func"), FUNC_STMT, |b, source| {
        b.iter(|| {
            let mut parser = Parser::new(tokenize(black_box(source)));
            parser.parse_statement().unwrap()
        })
    });

    group.finish();
}

fn bench_codegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("codegen");

    let test_cases = [
        ("simple", SIMPLE_EXPR),
        ("nested", NESTED_EXPR),
        ("boolean", BOOL_EXPR),
    ];

    for (name, source) in test_cases {
        // Pre-parse for a generation-only measurement
        let mut parser = Parser::new(tokenize(source));
        let ast = parser.parse().unwrap();

        group.bench_with_input(BenchmarkId::new("generate", name), &ast, |b, ast| {
            b.iter(|| CodeGenerator.transform(black_box(ast)))
        });
    }

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");

    let test_cases = [
        ("simple", SIMPLE_EXPR),
        ("nested", NESTED_EXPR),
        ("boolean", BOOL_EXPR),
        ("grouped", GROUPED_EXPR),
    ];

    for (name, source) in test_cases {
        group.bench_with_input(BenchmarkId::new("compile", name), source, |b, source| {
            b.iter(|| compile(black_box(source)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer,
    bench_parser,
    bench_codegen,
    bench_full_pipeline
);
criterion_main!(benches);

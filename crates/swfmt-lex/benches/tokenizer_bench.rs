//! Tokenizer benchmarks.
//!
//! Run with: `cargo bench --package swfmt-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use swfmt_lex::tokenize;

fn bench_tokenizer_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenizer");

    let source = "let x = 42\nfunc main() { let y = x + 1; return y }\n";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_let", |b| {
        b.iter(|| tokenize(black_box("let x = 42\n")).len())
    });

    group.bench_function("function_with_body", |b| {
        b.iter(|| tokenize(black_box(source)).len())
    });

    group.finish();
}

fn bench_tokenizer_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenizer_complex");

    let unit = r#"
import Foundation

/// Greets people.
struct Greeter {
    let names: Array<String>

    func greet(count: Int) -> [String] {
        var lines: [String] = []
        for i in 0 ..< count {
            switch i {
            case 0:
                lines.append("first: \(names[0])!")
            default:
                lines.append("then: \(names[i % names.count])")
            }
        }
        return lines
    }
}
"#;
    let source = unit.repeat(50);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("realistic_unit_x50", |b| {
        b.iter(|| tokenize(black_box(&source)).len())
    });

    group.bench_function("generics_and_comparisons", |b| {
        b.iter(|| {
            tokenize(black_box(
                "let a: Dictionary<String, Array<Int>> = [:]\nlet ok = a.count < 1 || b > 2\n",
            ))
            .len()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_tokenizer_simple, bench_tokenizer_complex);
criterion_main!(benches);

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use statfy::{AnalyzerConfig, BlankLineCounter, CommentPatternTable, FileAnalyzer, FileMeta, Language};

fn c_like_source(functions: usize) -> String {
    let mut src = String::from("/*\n * Generated fixture.\n */\n#include <stdio.h>\n\n");
    for i in 0..functions {
        src.push_str(&format!("// helper {i}\nint f{i}(int x) {{\n    return x * {i}; /* scale */\n}}\n\n"));
    }
    src
}

fn python_source(functions: usize) -> String {
    let mut src = String::from("\"\"\"Module docstring.\"\"\"\n\n");
    for i in 0..functions {
        src.push_str(&format!("def f{i}(x):\n    # scale\n    return x * {i}\n\n"));
    }
    src
}

fn benchmark_extraction(c: &mut Criterion) {
    let table = CommentPatternTable::new().unwrap();
    let c_src = c_like_source(500);
    let py_src = python_source(500);

    c.bench_function("extract_c_style", |b| b.iter(|| black_box(table.comment_size(Language::C, black_box(&c_src)))));
    c.bench_function("extract_python", |b| {
        b.iter(|| black_box(table.comment_size(Language::Python, black_box(&py_src))))
    });
}

fn benchmark_blank_lines(c: &mut Criterion) {
    let counter = BlankLineCounter::new().unwrap();
    let src = c_like_source(500);
    c.bench_function("count_blank_lines", |b| b.iter(|| black_box(counter.count(black_box(&src)))));
}

fn benchmark_measure(c: &mut Criterion) {
    let analyzer = FileAnalyzer::with_filesystem(AnalyzerConfig::default()).unwrap();
    let src = c_like_source(200);
    let meta = FileMeta::from_path("bench.c");
    c.bench_function("measure_c_file", |b| {
        b.iter(|| black_box(analyzer.measure(meta.clone(), Language::C, black_box(&src)).unwrap()))
    });
}

criterion_group!(benches, benchmark_extraction, benchmark_blank_lines, benchmark_measure);
criterion_main!(benches);

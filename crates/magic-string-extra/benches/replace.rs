use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use magic_string_extra::{MagicStringExtra, Pattern, Replacement, SourceMapOptions};
use regex::Regex;

fn large_source(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 48);
    for i in 0..line_count {
        out.push_str(&format!("const value_{i} = compute({i}, \"{i:06}\");\n"));
    }
    out
}

fn bench_global_template_replace(c: &mut Criterion) {
    let source = large_source(10_000);
    let pattern = Pattern::global(Regex::new(r"value_(\d+)").unwrap());
    c.bench_function("replace/global_template_10k_lines", |b| {
        b.iter_batched(
            || MagicStringExtra::new(source.as_str()),
            |mut s| {
                s.replace(pattern.clone(), "renamed_$1").unwrap();
                black_box(s.len());
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_callback_replace(c: &mut Criterion) {
    let source = large_source(10_000);
    let pattern = Pattern::global(Regex::new(r"compute\((\d+)").unwrap());
    c.bench_function("replace/callback_10k_lines", |b| {
        b.iter_batched(
            || MagicStringExtra::new(source.as_str()),
            |mut s| {
                s.replace(
                    pattern.clone(),
                    Replacement::callback(|m| format!("run({}", m.group(1).unwrap_or_default())),
                )
                .unwrap();
                black_box(s.has_changed());
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_rollup_result_with_map(c: &mut Criterion) {
    let source = large_source(10_000);
    let mut s = MagicStringExtra::new(source.as_str());
    s.replace(Pattern::global(Regex::new(r"\d{6}").unwrap()), "$&-x")
        .unwrap();
    let hires = SourceMapOptions::default().with_hires(true);

    c.bench_function("to_rollup_result/lores_10k_lines", |b| {
        b.iter(|| black_box(s.to_rollup_result(true, None)))
    });
    c.bench_function("to_rollup_result/hires_10k_lines", |b| {
        b.iter(|| black_box(s.to_rollup_result(true, Some(&hires))))
    });
}

criterion_group!(
    benches,
    bench_global_template_replace,
    bench_callback_replace,
    bench_rollup_result_with_map
);
criterion_main!(benches);

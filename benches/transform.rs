use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use filerev::file_handler::csv::{strip_delimiter, Delimiter};
use filerev::transform::{palindrome, reverse_lines, Comparison};

fn create_test_content(size_kb: usize) -> String {
    let target_size = size_kb * 1024;
    let mut content = String::with_capacity(target_size + 64);
    let mut line_num = 0;

    while content.len() < target_size {
        content.push_str(&format!(
            "ligne {};valeur {};utilisateur_{}\n",
            line_num,
            line_num * 7,
            line_num % 1000
        ));
        line_num += 1;
    }
    content
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");
    group.sample_size(20);

    for &size_kb in &[10, 100, 1000] {
        let content = create_test_content(size_kb);
        let label = format!("{}KB", size_kb);

        group.bench_with_input(BenchmarkId::new("reverse_lines", &label), &content, |b, content| {
            b.iter(|| reverse_lines(black_box(content)))
        });
        group.bench_with_input(BenchmarkId::new("palindrome", &label), &content, |b, content| {
            b.iter(|| palindrome(black_box(content)))
        });
        group.bench_with_input(BenchmarkId::new("strip_delimiter", &label), &content, |b, content| {
            b.iter(|| strip_delimiter(black_box(content), Delimiter::detect(content)))
        });
        group.bench_with_input(BenchmarkId::new("compare", &label), &content, |b, content| {
            b.iter(|| Comparison::of(black_box(content), black_box(content)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transforms);
criterion_main!(benches);

//! Performance benchmarks for mdblank
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mdblank::{BlankMarkup, MarkdownFilter, Options};

/// Sample Markdown documents of various sizes
mod samples {
    pub const SMALL: &str = r#"# Heading

This is a paragraph with *emphasis* and **strong** text.

- Item 1
- Item 2
- Item 3

`inline code` and [a link](https://example.com).
"#;

    /// Generate a large document by repeating sections
    pub fn large() -> String {
        let section = r#"
## Section Title

This paragraph contains inline elements like `code`, <kbd>Ctrl</kbd>
and <!-- a comment -->, plus a bare -> arrow.

- First bullet point with **bold** text
- Second bullet point with *italic* text
  continued on the next line
- Third point with `code`

> A blockquote that spans
> multiple lines.

```rust
fn example() {
    let x = 42;
    println!("{}", x);
}
```

    indented code after a blank line

[ref]: https://example.com "Title"

"#;
        section.repeat(50)
    }

    /// Prose with no syntax at all
    pub fn plain() -> String {
        "Hello, this is plain text without any special characters. ".repeat(100)
    }

    /// Document with deeply nested structures
    pub fn pathological_nested() -> String {
        "> ".repeat(100) + "deep\n"
    }

    /// Tags left open across many lines
    pub fn pathological_tags() -> String {
        "<a\n".repeat(500) + ">\n"
    }
}

fn bench_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtering");

    let inputs = [
        ("small", samples::SMALL.to_owned()),
        ("large", samples::large()),
        ("plain", samples::plain()),
    ];
    for (name, input) in &inputs {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("passthrough", name), input, |b, input| {
            b.iter(|| {
                let mut buf = input.as_bytes().to_vec();
                MarkdownFilter::new().process(black_box(&mut buf));
                buf
            })
        });
        group.bench_with_input(BenchmarkId::new("blank_markup", name), input, |b, input| {
            b.iter(|| {
                let mut buf = input.as_bytes().to_vec();
                MarkdownFilter::with_markup(Options::default(), BlankMarkup)
                    .process(black_box(&mut buf));
                buf
            })
        });
    }

    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming");

    // Same document, one buffer per line
    let large = samples::large();
    let lines: Vec<&str> = large.split_inclusive('\n').collect();
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("line_buffers", |b| {
        b.iter(|| {
            let mut filter = MarkdownFilter::new();
            for line in &lines {
                let mut buf = line.as_bytes().to_vec();
                filter.process(black_box(&mut buf));
            }
        })
    });

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(20); // Fewer samples for slow cases

    let nested = samples::pathological_nested();
    group.throughput(Throughput::Bytes(nested.len() as u64));
    group.bench_function("deep_nesting", |b| {
        b.iter(|| mdblank::blank_str(black_box(&nested)))
    });

    let tags = samples::pathological_tags();
    let options = Options {
        multiline_tags: true,
        ..Options::default()
    };
    group.throughput(Throughput::Bytes(tags.len() as u64));
    group.bench_function("multiline_tags", |b| {
        b.iter(|| {
            let mut buf = tags.as_bytes().to_vec();
            mdblank::blank_markdown_with_options(black_box(&mut buf), options.clone());
            buf
        })
    });

    group.finish();
}

criterion_group!(benches, bench_filtering, bench_streaming, bench_pathological);
criterion_main!(benches);

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use html5::parse;

const SMALL_BLOCKS: usize = 64;
const LARGE_BLOCKS: usize = 20_000;

fn make_blocks(count: usize) -> String {
    let mut out = String::with_capacity(count * 48);
    out.push_str("<!DOCTYPE html>");
    for index in 0..count {
        out.push_str("<div class=box><span>item ");
        out.push_str(&index.to_string());
        out.push_str(" &amp; more</span><img src=x></div>");
    }
    out
}

fn make_table(rows: usize) -> String {
    let mut out = String::with_capacity(rows * 40);
    out.push_str("<!DOCTYPE html><table>");
    for _ in 0..rows {
        out.push_str("<tr><td>a<td>b</tr>");
    }
    out.push_str("</table>");
    out
}

fn make_rawtext_adversarial(bytes: usize) -> String {
    let mut body = String::with_capacity(bytes + 32);
    body.push_str("<script>");
    while body.len() < bytes {
        body.push_str("</scri");
        body.push('<');
        body.push_str("pt");
    }
    body.push_str("</script>");
    body
}

fn make_misnested_formatting(pairs: usize) -> String {
    let mut out = String::with_capacity(pairs * 24);
    for _ in 0..pairs {
        out.push_str("<b>1<i>2</b>3</i>");
    }
    out
}

fn bench_parse_small(c: &mut Criterion) {
    let input = make_blocks(SMALL_BLOCKS);
    c.bench_function("bench_parse_small", |b| {
        b.iter(|| {
            let output = parse(black_box(input.as_bytes()));
            black_box(output.errors.len());
        });
    });
}

fn bench_parse_large(c: &mut Criterion) {
    let input = make_blocks(LARGE_BLOCKS);
    c.bench_function("bench_parse_large", |b| {
        b.iter(|| {
            let output = parse(black_box(input.as_bytes()));
            black_box(output.errors.len());
        });
    });
}

fn bench_parse_tables(c: &mut Criterion) {
    let input = make_table(10_000);
    c.bench_function("bench_parse_tables", |b| {
        b.iter(|| {
            let output = parse(black_box(input.as_bytes()));
            black_box(output.root);
        });
    });
}

fn bench_parse_rawtext_adversarial(c: &mut Criterion) {
    let input = make_rawtext_adversarial(512 * 1024);
    c.bench_function("bench_parse_rawtext_adversarial", |b| {
        b.iter(|| {
            let output = parse(black_box(input.as_bytes()));
            black_box(output.root);
        });
    });
}

fn bench_parse_adoption_agency(c: &mut Criterion) {
    let input = make_misnested_formatting(5_000);
    c.bench_function("bench_parse_adoption_agency", |b| {
        b.iter(|| {
            let output = parse(black_box(input.as_bytes()));
            black_box(output.errors.len());
        });
    });
}

criterion_group!(
    benches,
    bench_parse_small,
    bench_parse_large,
    bench_parse_tables,
    bench_parse_rawtext_adversarial,
    bench_parse_adoption_agency
);
criterion_main!(benches);

//! Generation benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use formify_codegen::{generate, OutputFormat};

const LOGIN: &str = "Email (email, required)\nPassword (password, required)";

const PROFILE: &str = "Avatar (file, optional)
FullName (text, required)
Bio (textarea, optional)
Website (url, optional)
Phone (tel, optional)
AcceptTerms (checkbox, required)";

fn generate_html(c: &mut Criterion) {
    c.bench_function("generate_html_login", |b| {
        b.iter(|| generate(black_box(LOGIN), OutputFormat::Html))
    });
}

fn generate_react(c: &mut Criterion) {
    c.bench_function("generate_react_login", |b| {
        b.iter(|| generate(black_box(LOGIN), OutputFormat::React))
    });
    c.bench_function("generate_react_profile", |b| {
        b.iter(|| generate(black_box(PROFILE), OutputFormat::React))
    });
}

criterion_group!(benches, generate_html, generate_react);
criterion_main!(benches);

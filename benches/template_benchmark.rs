use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glider_template_rs::{
    create_template, extract_schema,
    io::writer::write_template,
    template::catalog::{glider_template, primary_template},
};

pub fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("In-memory operations");

    group.bench_function("primary_template", |b| {
        b.iter(|| black_box(primary_template().unwrap()))
    });
    group.bench_function("glider_template", |b| {
        b.iter(|| black_box(glider_template().unwrap()))
    });

    group.finish();
}

pub fn benchmark_files(c: &mut Criterion) {
    let mut group = c.benchmark_group("File operations");
    group.sample_size(20);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("IOOS_Glider_NetCDF_Flat_v1.0.nc");
    let template = glider_template().unwrap();

    group.bench_function("write_template", |b| {
        b.iter(|| black_box(write_template(&template, &path).unwrap()))
    });

    create_template(&path).unwrap();
    group.bench_function("extract_schema", |b| {
        b.iter(|| black_box(extract_schema(&path).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, benchmark_build, benchmark_files);
criterion_main!(benches);

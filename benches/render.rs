use criterion::{criterion_group, criterion_main, Criterion};
use whitted::demo::demo_scene;
use whitted::{Lantern, Settings};

fn demo_renders(c: &mut Criterion) {
    let scene = demo_scene().unwrap();
    let parallel = Lantern::default();
    let sequential = Lantern::new(Settings {
        parallel: false,
        ..Default::default()
    });

    c.bench_function("demo 320x160 parallel", |b| b.iter(|| parallel.render(320, 160, &scene).unwrap()));
    c.bench_function("demo 320x160 sequential", |b| b.iter(|| sequential.render(320, 160, &scene).unwrap()));
}

criterion_group!(benches, demo_renders);
criterion_main!(benches);

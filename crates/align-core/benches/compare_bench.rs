use anyhow::Result;
use align_core::{compare, Figure, FigureOptions, Point, Quad};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn measured() -> [Point; 4] {
    [
        Point::new(30.5, 45.114),
        Point::new(258.921, 20.0),
        Point::new(65.518, 368.167),
        Point::new(294.44, 343.553),
    ]
}

fn bench_compare(c: &mut Criterion) {
    let design = Quad::a4();
    let actual = measured();
    c.bench_function("compare_a4", |b| {
        b.iter(|| compare(black_box(design.points()), black_box(&actual)))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    let cmp = compare(Quad::a4().points(), &measured()).expect("valid input");
    let fig = Figure::new(&cmp);
    for &(w, h) in &[(600, 500), (1200, 1000)] {
        group.bench_function(format!("{w}x{h}"), |b| {
            let opts = FigureOptions { width: w, height: h, draw_labels: false, ..FigureOptions::default() };
            b.iter(|| -> Result<()> {
                let bytes = fig.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compare, bench_render);
criterion_main!(benches);

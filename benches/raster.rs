use criterion::{black_box, criterion_group, criterion_main, Criterion};
use raster_curves::{
    draw_line, fill_gradient_triangle, sample_spline, smooth_c2, ColoredVertex, Point3,
    RenderingBuffer, Rgb, Rgb8,
};

fn spline_points() -> Vec<Point3> {
    (0..16)
        .map(|i| {
            let x = i as f64 * 2.0 - 20.0;
            Point3::new_2d(x, (x * 0.7).sin() * 10.0)
        })
        .collect()
}

fn lines(c: &mut Criterion) {
    let mut g = c.benchmark_group("line");
    let mut buf = RenderingBuffer::new(300, 300, Rgb8::default());

    g.bench_function("star", |b| {
        b.iter(|| {
            for i in 0..20 {
                let a = std::f64::consts::TAU * i as f64 / 20.0;
                let x2 = 150 + (100.0 * a.cos()) as i32;
                let y2 = 150 + (100.0 * a.sin()) as i32;
                draw_line(150, 150, black_box(x2), black_box(y2), Rgb::RED, &mut buf);
            }
        })
    });
    g.finish();
}

fn triangles(c: &mut Criterion) {
    let mut g = c.benchmark_group("triangle");
    let mut buf = RenderingBuffer::new(300, 300, Rgb8::default());

    g.bench_function("general", |b| {
        b.iter(|| {
            fill_gradient_triangle(
                black_box(ColoredVertex::new(150, 10, Rgb::RED)),
                ColoredVertex::new(20, 140, Rgb::GREEN),
                ColoredVertex::new(280, 290, Rgb::BLUE),
                &mut buf,
            )
        })
    });
    g.finish();
}

fn splines(c: &mut Criterion) {
    let mut g = c.benchmark_group("spline");
    let points = spline_points();

    g.bench_function("sample_20", |b| {
        b.iter(|| sample_spline(black_box(&points), 20))
    });
    g.bench_function("smooth_c2", |b| b.iter(|| smooth_c2(black_box(&points))));
    g.finish();
}

criterion_group!(benches, lines, triangles, splines);
criterion_main!(benches);

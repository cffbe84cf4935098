// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_compare::media;
use std::hint::black_box;

fn image_loading_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_loading");

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let png_path = dir.path().join("sample.png");
    image_rs::RgbaImage::from_fn(1920, 1080, |x, y| {
        image_rs::Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    })
    .save(&png_path)
    .expect("failed to write sample png");

    let svg_path = dir.path().join("sample.svg");
    std::fs::write(
        &svg_path,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="800" height="600">
<rect width="800" height="600" fill="#3366cc"/>
<circle cx="400" cy="300" r="200" fill="#ffcc00"/>
</svg>"#,
    )
    .expect("failed to write sample svg");

    group.bench_function("load_1080p_png", |b| {
        b.iter(|| {
            let _ = black_box(media::load_image(&png_path).expect("png loads"));
        });
    });

    group.bench_function("rasterize_svg", |b| {
        b.iter(|| {
            let _ = black_box(media::load_image(&svg_path).expect("svg loads"));
        });
    });

    group.finish();
}

criterion_group!(benches, image_loading_benchmark);
criterion_main!(benches);

//! Benchmarks for tile-grid geometry and render-layer composition.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tmxmap::{ImageLayer, Map, MapBuilder, TileLayer};

fn orthogonal_map(width: u32, height: u32) -> Map {
    let mut builder = MapBuilder::new();
    builder.format_version = "1.1.5".to_string();
    builder.orientation = Some("orthogonal".to_string());
    builder.width = width;
    builder.height = height;
    builder.tile_width = 32;
    builder.tile_height = 32;
    builder.finalize().unwrap()
}

fn hexagonal_map(width: u32, height: u32) -> Map {
    let mut builder = MapBuilder::new();
    builder.format_version = "1.1.5".to_string();
    builder.orientation = Some("hexagonal".to_string());
    builder.stagger_axis = Some("y".to_string());
    builder.stagger_index = Some("odd".to_string());
    builder.width = width;
    builder.height = height;
    builder.tile_width = 32;
    builder.tile_height = 32;
    builder.hex_side_length = 16;
    builder.finalize().unwrap()
}

// -- Geometry benchmarks --

fn bench_tile_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("tile_grid");

    let ortho_small = orthogonal_map(16, 16);
    let ortho_large = orthogonal_map(256, 256);
    let hex_small = hexagonal_map(16, 16);
    let hex_large = hexagonal_map(256, 256);

    group.bench_function("orthogonal_16", |b| {
        b.iter(|| black_box(&ortho_small).tile_grid())
    });

    group.bench_function("orthogonal_256", |b| {
        b.iter(|| black_box(&ortho_large).tile_grid())
    });

    group.bench_function("hexagonal_16", |b| {
        b.iter(|| black_box(&hex_small).tile_grid())
    });

    group.bench_function("hexagonal_256", |b| {
        b.iter(|| black_box(&hex_large).tile_grid())
    });

    group.bench_function("hexagonal_size_in_pixels_256", |b| {
        b.iter(|| black_box(&hex_large).size_in_pixels())
    });

    group.finish();
}

// -- Composition benchmarks --

fn bench_render_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_order");

    let mut map = orthogonal_map(64, 64);
    for i in 0..32 {
        map.add_tile_layer(TileLayer::new(format!("tiles-{}", i), 64 - i, 64, 64));
        map.add_image_layer(ImageLayer::new(
            format!("image-{}", i),
            i,
            format!("overlay-{}.png", i),
        ));
    }

    group.bench_function("compose_64_layers", |b| {
        b.iter(|| {
            let mut m = map.clone();
            m.add_tile_layer(TileLayer::new("probe", 0, 64, 64));
            black_box(m.render_layers().count())
        })
    });

    group.bench_function("iterate_64_layers", |b| {
        b.iter(|| black_box(&map).render_layers().map(|l| l.order()).sum::<i32>())
    });

    group.finish();
}

criterion_group!(benches, bench_tile_grid, bench_render_order);
criterion_main!(benches);

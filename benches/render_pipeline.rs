use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use mandelbrot_explorer::core::actions::generate_colour_field::generate_colour_field::generate_colour_field;
use mandelbrot_explorer::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use mandelbrot_explorer::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use mandelbrot_explorer::core::data::image_frame::ImageFrame;
use mandelbrot_explorer::core::data::iteration_field::IterationField;
use mandelbrot_explorer::core::data::resolution::Resolution;
use mandelbrot_explorer::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use mandelbrot_explorer::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use mandelbrot_explorer::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use mandelbrot_explorer::core::fractals::mandelbrot::mandelbrot_config::DEFAULT_REGION;
use mandelbrot_explorer::render;

const MAX_ITERATIONS: u32 = 100;

fn frame(width: u32, height: u32) -> ImageFrame {
    let resolution = Resolution::new(width, height).unwrap();
    ImageFrame::new(resolution, &DEFAULT_REGION)
}

fn bench_escape_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape_counts");

    for &(width, height) in &[(300, 200), (750, 500)] {
        let frame = frame(width, height);
        let algorithm = MandelbrotAlgorithm::new(&DEFAULT_REGION, &frame, MAX_ITERATIONS).unwrap();
        let label = format!("{}x{}", width, height);

        group.bench_with_input(BenchmarkId::new("serial", &label), &algorithm, |b, alg| {
            b.iter(|| generate_fractal_serial(frame.resolution(), black_box(alg)))
        });
        group.bench_with_input(BenchmarkId::new("rayon", &label), &algorithm, |b, alg| {
            b.iter(|| generate_fractal_parallel_rayon(frame.resolution(), black_box(alg)))
        });
    }

    group.finish();
}

fn bench_colouring(c: &mut Criterion) {
    let frame = frame(750, 500);
    let algorithm = MandelbrotAlgorithm::new(&DEFAULT_REGION, &frame, MAX_ITERATIONS).unwrap();
    let counts = generate_fractal_parallel_rayon(frame.resolution(), &algorithm);
    let field = IterationField::from_counts(frame.resolution(), MAX_ITERATIONS, counts).unwrap();

    let mut group = c.benchmark_group("colouring");
    for &kind in MandelbrotColourMapKinds::ALL {
        let colour_map = mandelbrot_colour_map_factory(kind, MAX_ITERATIONS);
        group.bench_function(kind.display_name(), |b| {
            b.iter(|| generate_colour_field(black_box(&field), colour_map.as_ref()).unwrap())
        });
    }
    group.finish();
}

fn bench_full_render(c: &mut Criterion) {
    let frame = frame(750, 500);

    c.bench_function("render_750x500", |b| {
        b.iter(|| render(black_box(DEFAULT_REGION), frame, MAX_ITERATIONS).unwrap())
    });
}

criterion_group!(benches, bench_escape_counts, bench_colouring, bench_full_render);
criterion_main!(benches);

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::resolution::Resolution;

/// Computes every pixel on the calling thread, row-major.
///
/// Reference ordering for the parallel generator.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    resolution: Resolution,
    algorithm: &Alg,
) -> Vec<Alg::Output> {
    (0..resolution.height())
        .flat_map(|row| (0..resolution.width()).map(move |col| (col, row)))
        .map(|(col, row)| algorithm.compute(col, row))
        .collect()
}

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::fractal_region::FractalRegion;
use crate::core::data::image_frame::ImageFrame;
use crate::core::fractals::mandelbrot::errors::{MandelbrotError, validate_max_iterations};

/// Escape-time count for `c`.
///
/// Iterates `z <- z² + c` from zero and returns the 0-based index of the
/// iteration whose result left the radius-2 disc, or `max_iterations` when
/// no iteration did.
#[must_use]
pub fn escape_count(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        z = z * z + c;
        if z.has_escaped() {
            return iteration;
        }
    }

    max_iterations
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    origin: Complex,
    x_step: f64,
    y_step: f64,
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    /// Samples `region` on the grid given by `frame`'s steps, starting from
    /// the top-left corner `(x0, y1)`.
    pub fn new(
        region: &FractalRegion,
        frame: &ImageFrame,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        let max_iterations = validate_max_iterations(max_iterations)?;

        Ok(Self {
            origin: Complex::new(region.min().real, region.max().imag),
            x_step: frame.x_step(),
            y_step: frame.y_step(),
            max_iterations,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn point_for_pixel(&self, col: u32, row: u32) -> Complex {
        Complex::new(
            self.origin.real + f64::from(col) * self.x_step,
            self.origin.imag - f64::from(row) * self.y_step,
        )
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Output = u32;

    fn compute(&self, col: u32, row: u32) -> Self::Output {
        escape_count(self.point_for_pixel(col, row), self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::resolution::Resolution;

    #[test]
    fn test_origin_never_escapes() {
        assert_eq!(escape_count(Complex::ZERO, 50), 50);
        assert_eq!(escape_count(Complex::new(-1.0, 0.0), 500), 500);
    }

    #[test]
    fn test_escape_index_is_zero_based() {
        // z1 = 3 escapes on the first iteration
        assert_eq!(escape_count(Complex::new(3.0, 0.0), 50), 0);
        // z1 = 2 stays on the boundary, z2 = 6 escapes
        assert_eq!(escape_count(Complex::new(2.0, 0.0), 50), 1);
    }

    #[test]
    fn test_count_never_exceeds_max() {
        for &c in &[Complex::new(0.25, 0.0), Complex::new(-0.75, 0.1), Complex::new(0.3, 0.5)] {
            assert!(escape_count(c, 20) <= 20);
        }
    }

    #[test]
    fn test_new_rejects_max_iterations_below_two() {
        let region = FractalRegion::from_bounds(-2.0, -1.5, 1.0, 1.5).unwrap();
        let frame = ImageFrame::new(Resolution::new(4, 3).unwrap(), &region);

        assert_eq!(
            MandelbrotAlgorithm::new(&region, &frame, 1),
            Err(MandelbrotError::InvalidMaxIterations { max_iterations: 1 })
        );
    }

    #[test]
    fn test_pixel_grid_starts_top_left_and_steps_down() {
        let region = FractalRegion::from_bounds(-2.0, -1.5, 1.0, 1.5).unwrap();
        let frame = ImageFrame::new(Resolution::new(400, 300).unwrap(), &region);
        let algorithm = MandelbrotAlgorithm::new(&region, &frame, 50).unwrap();

        assert_eq!(algorithm.point_for_pixel(0, 0), Complex::new(-2.0, 1.5));
        assert_eq!(
            algorithm.point_for_pixel(200, 150),
            Complex::new(-2.0 + 200.0 * 0.0075, 1.5 - 150.0 * 0.01)
        );
        assert!(algorithm.point_for_pixel(0, 299).imag < algorithm.point_for_pixel(0, 0).imag);
    }

    #[test]
    fn test_compute_in_set_pixel_returns_max() {
        let region = FractalRegion::from_bounds(-2.0, -1.5, 1.0, 1.5).unwrap();
        let frame = ImageFrame::new(Resolution::new(400, 300).unwrap(), &region);
        let algorithm = MandelbrotAlgorithm::new(&region, &frame, 50).unwrap();

        // (200, 150) samples very close to the origin
        assert_eq!(algorithm.compute(200, 150), 50);
        // top-left corner (-2 + 1.5i) escapes quickly
        assert!(algorithm.compute(0, 0) < 5);
    }
}

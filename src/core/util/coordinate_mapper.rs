use crate::core::data::complex::Complex;
use crate::core::data::fractal_region::FractalRegion;
use crate::core::data::image_point::ImagePoint;
use crate::core::data::resolution::Resolution;

// Pixel 0 sits on the near edge and pixel n-1 on the far edge, hence n - 1.
// Resolution guarantees n >= 2.
fn last_col(resolution: Resolution) -> f64 {
    f64::from(resolution.width() - 1)
}

fn last_row(resolution: Resolution) -> f64 {
    f64::from(resolution.height() - 1)
}

/// Maps an image position to the complex plane.
///
/// Image row 0 is the top of the image and corresponds to the region's
/// maximum imaginary value.
#[must_use]
pub fn image_to_fractal(
    region: &FractalRegion,
    resolution: Resolution,
    point: ImagePoint,
) -> Complex {
    let real = region.min().real + point.x * region.width() / last_col(resolution);
    let imag = region.max().imag - point.y * region.height() / last_row(resolution);

    Complex { real, imag }
}

/// Inverse of [`image_to_fractal`] for a single point.
#[must_use]
pub fn fractal_point_to_image(
    region: &FractalRegion,
    resolution: Resolution,
    point: Complex,
) -> ImagePoint {
    let x = (point.real - region.min().real) * last_col(resolution) / region.width();
    let y = (region.max().imag - point.imag) * last_row(resolution) / region.height();

    ImagePoint { x, y }
}

/// Inverse of [`image_to_fractal`] over many points at once.
#[must_use]
pub fn fractal_to_image(
    region: &FractalRegion,
    resolution: Resolution,
    points: &[Complex],
) -> Vec<ImagePoint> {
    points
        .iter()
        .map(|&point| fractal_point_to_image(region, resolution, point))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    fn square_region() -> FractalRegion {
        FractalRegion::from_bounds(-2.0, -1.0, 1.0, 1.0).unwrap()
    }

    fn square_resolution() -> Resolution {
        Resolution::new(101, 101).unwrap()
    }

    #[test]
    fn test_top_left_pixel_maps_to_min_real_max_imag() {
        let result =
            image_to_fractal(&square_region(), square_resolution(), ImagePoint::new(0.0, 0.0));

        assert_eq!(result, Complex::new(-2.0, 1.0));
    }

    #[test]
    fn test_bottom_right_pixel_maps_to_far_corner() {
        let result = image_to_fractal(
            &square_region(),
            square_resolution(),
            ImagePoint::new(100.0, 100.0),
        );

        assert_eq!(result, Complex::new(1.0, -1.0));
    }

    #[test]
    fn test_centre_pixel_maps_to_region_centre() {
        let region = FractalRegion::from_bounds(-1.0, -1.0, 1.0, 1.0).unwrap();
        let result = image_to_fractal(&region, square_resolution(), ImagePoint::new(50.0, 50.0));

        assert_eq!(result, Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_moving_down_the_image_decreases_imaginary_part() {
        let region = square_region();
        let upper = image_to_fractal(&region, square_resolution(), ImagePoint::new(10.0, 10.0));
        let lower = image_to_fractal(&region, square_resolution(), ImagePoint::new(10.0, 90.0));

        assert!(lower.imag < upper.imag);
        assert_eq!(lower.real, upper.real);
    }

    #[test]
    fn test_fractal_corners_map_to_image_corners() {
        let region = square_region();
        let points = fractal_to_image(
            &region,
            square_resolution(),
            &[region.min(), region.max()],
        );

        assert_eq!(points[0], ImagePoint::new(0.0, 100.0));
        assert_eq!(points[1], ImagePoint::new(100.0, 0.0));
    }

    #[test]
    fn test_round_trip_inside_image() {
        let region = FractalRegion::from_bounds(-2.2, -1.2, 1.2, 1.2).unwrap();
        let resolution = Resolution::new(450, 300).unwrap();

        for &(x, y) in &[(1.0, 1.0), (17.5, 250.25), (224.0, 149.0), (448.0, 298.0)] {
            let point = ImagePoint::new(x, y);
            let there = image_to_fractal(&region, resolution, point);
            let back = fractal_point_to_image(&region, resolution, there);

            assert_approx_eq(back.x, x);
            assert_approx_eq(back.y, y);
        }
    }

    #[test]
    fn test_vectorised_matches_single_point() {
        let region = square_region();
        let points = [Complex::new(0.0, 0.0), Complex::new(-0.5, 0.25), Complex::new(0.9, -0.9)];
        let mapped = fractal_to_image(&region, square_resolution(), &points);

        for (point, image_point) in points.iter().zip(mapped) {
            assert_eq!(
                image_point,
                fractal_point_to_image(&region, square_resolution(), *point)
            );
        }
    }
}

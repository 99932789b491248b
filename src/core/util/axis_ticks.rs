use crate::core::data::fractal_region::FractalRegion;
use crate::core::data::image_point::ImagePoint;
use crate::core::data::resolution::Resolution;
use crate::core::util::coordinate_mapper::image_to_fractal;

const MIN_TICKS: usize = 3;
const MAX_TICKS: usize = 101;

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// Pixel position along the axis.
    pub pixel: f64,
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTicks {
    pub real: Vec<AxisTick>,
    pub imag: Vec<AxisTick>,
}

/// Evenly spaced tick marks for both image axes.
///
/// The count is forced odd and clamped to `3..=101` so the middle tick lands on
/// the centre pixel. Ticks span pixel `0` to `n - 1` so they line up with
/// the coordinate mapping; imaginary labels read top to bottom.
#[must_use]
pub fn axis_ticks(region: &FractalRegion, resolution: Resolution, requested: usize) -> AxisTicks {
    let count = odd_tick_count(requested);

    let real = spaced(f64::from(resolution.width() - 1), count)
        .map(|pixel| {
            let value = image_to_fractal(region, resolution, ImagePoint::new(pixel, 0.0)).real;
            AxisTick {
                pixel,
                value,
                label: format_value(value),
            }
        })
        .collect();

    let imag = spaced(f64::from(resolution.height() - 1), count)
        .map(|pixel| {
            let value = image_to_fractal(region, resolution, ImagePoint::new(0.0, pixel)).imag;
            AxisTick {
                pixel,
                value,
                label: format!("{}i", format_value(value)),
            }
        })
        .collect();

    AxisTicks { real, imag }
}

fn odd_tick_count(requested: usize) -> usize {
    let count = requested.clamp(MIN_TICKS, MAX_TICKS);
    if count % 2 == 0 { count + 1 } else { count }
}

fn spaced(last: f64, count: usize) -> impl Iterator<Item = f64> {
    let divisor = (count - 1) as f64;
    (0..count).map(move |i| last * i as f64 / divisor)
}

fn format_value(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // avoid printing "-0.00"
    if rounded == 0.0 {
        "0.00".to_string()
    } else {
        format!("{:.2}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_view() -> (FractalRegion, Resolution) {
        (
            FractalRegion::from_bounds(-2.2, -1.2, 1.2, 1.2).unwrap(),
            Resolution::new(451, 301).unwrap(),
        )
    }

    #[test]
    fn test_tick_count_is_odd_and_at_least_three() {
        assert_eq!(odd_tick_count(0), 3);
        assert_eq!(odd_tick_count(3), 3);
        assert_eq!(odd_tick_count(4), 5);
        assert_eq!(odd_tick_count(9), 9);
        assert_eq!(odd_tick_count(100), 101);
        assert_eq!(odd_tick_count(usize::MAX), MAX_TICKS);
    }

    #[test]
    fn test_real_ticks_span_region_left_to_right() {
        let (region, resolution) = default_view();
        let ticks = axis_ticks(&region, resolution, 5);

        assert_eq!(ticks.real.len(), 5);
        assert_eq!(ticks.real[0].pixel, 0.0);
        assert_eq!(ticks.real[4].pixel, 450.0);
        assert_eq!(ticks.real[0].label, "-2.20");
        assert_eq!(ticks.real[4].label, "1.20");
    }

    #[test]
    fn test_imag_ticks_read_top_to_bottom() {
        let (region, resolution) = default_view();
        let ticks = axis_ticks(&region, resolution, 5);

        assert_eq!(ticks.imag[0].pixel, 0.0);
        assert_eq!(ticks.imag[0].label, "1.20i");
        assert_eq!(ticks.imag[2].label, "0.00i");
        assert_eq!(ticks.imag[4].pixel, 300.0);
        assert_eq!(ticks.imag[4].label, "-1.20i");
    }
}

use crate::core::data::complex::Complex;
use crate::core::data::fractal_region::FractalRegion;
use crate::core::data::image_point::ImagePoint;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::errors::{MandelbrotError, validate_max_iterations};
use crate::core::util::coordinate_mapper::{fractal_to_image, image_to_fractal};

/// Iterates produced for one seed, in order.
///
/// The first entry is the seed itself. When the orbit escapes, the escaping
/// iterate is the last entry and `escaped_at` holds its index.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitSequence {
    seed: Complex,
    iterates: Vec<Complex>,
    escaped_at: Option<usize>,
}

impl OrbitSequence {
    #[must_use]
    pub fn seed(&self) -> Complex {
        self.seed
    }

    #[must_use]
    pub fn iterates(&self) -> &[Complex] {
        &self.iterates
    }

    #[must_use]
    pub fn escaped_at(&self) -> Option<usize> {
        self.escaped_at
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.iterates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iterates.is_empty()
    }

    /// Image-space positions of every iterate. Escaped iterates usually land
    /// outside the image bounds.
    #[must_use]
    pub fn project(&self, region: &FractalRegion, resolution: Resolution) -> Vec<ImagePoint> {
        fractal_to_image(region, resolution, &self.iterates)
    }
}

// most orbits escape long before a large budget runs out
const ORBIT_CAPACITY_HINT: usize = 1024;

/// Follows `z <- z² + c` starting from `z = c`, for at most `max_iterations`
/// steps after the seed. Stops at the first iterate with `|z| > 2`.
#[must_use]
pub fn trace_orbit(seed: Complex, max_iterations: u32) -> OrbitSequence {
    let capacity = (max_iterations as usize).min(ORBIT_CAPACITY_HINT) + 1;
    let mut iterates = Vec::with_capacity(capacity);
    iterates.push(seed);

    if seed.has_escaped() {
        return OrbitSequence {
            seed,
            iterates,
            escaped_at: Some(0),
        };
    }

    let mut z = seed;
    for _ in 0..max_iterations {
        z = z * z + seed;
        iterates.push(z);

        if z.has_escaped() {
            return OrbitSequence {
                seed,
                escaped_at: Some(iterates.len() - 1),
                iterates,
            };
        }
    }

    OrbitSequence {
        seed,
        iterates,
        escaped_at: None,
    }
}

/// An orbit together with its path across the image.
#[derive(Debug, Clone, PartialEq)]
pub struct TracedOrbit {
    pub sequence: OrbitSequence,
    pub path: Vec<ImagePoint>,
}

/// Traces orbits against a fixed viewport snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitTracer {
    region: FractalRegion,
    resolution: Resolution,
    max_iterations: u32,
}

impl OrbitTracer {
    pub fn new(
        region: FractalRegion,
        resolution: Resolution,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        Ok(Self {
            region,
            resolution,
            max_iterations: validate_max_iterations(max_iterations)?,
        })
    }

    /// Traces the orbit seeded at the fractal point under `pixel`.
    ///
    /// Returns `None` when the pointer is off the surface.
    #[must_use]
    pub fn trace_pixel(&self, pixel: Option<ImagePoint>) -> Option<TracedOrbit> {
        let pixel = pixel.filter(|&p| self.resolution.contains_point(p))?;
        let seed = image_to_fractal(&self.region, self.resolution, pixel);
        let sequence = trace_orbit(seed, self.max_iterations);
        let path = sequence.project(&self.region, self.resolution);

        Some(TracedOrbit { sequence, path })
    }
}

use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::progress::{NoProgress, ProgressSink, ProgressTracker};
use crate::core::data::resolution::Resolution;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// For cancel-aware generation with progress, use
/// [`generate_fractal_parallel_rayon_cancelable`].
pub fn generate_fractal_parallel_rayon<Alg>(
    resolution: Resolution,
    algorithm: &Alg,
) -> Vec<Alg::Output>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Output: Send,
{
    let result =
        generate_fractal_parallel_rayon_cancelable(resolution, algorithm, &NeverCancel, &NoProgress);

    match result {
        Ok(values) => values,
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Generates fractal data in parallel with cancellation and progress support.
///
/// Rows are the unit of parallel work. Each row checks the token at its start
/// and every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels, and reports itself to
/// the progress sink once finished.
///
/// Results are row-major, identical to the serial generator. On cancellation
/// nothing is returned; partial rows are dropped.
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C, P>(
    resolution: Resolution,
    algorithm: &Alg,
    cancel: &C,
    progress: &P,
) -> Result<Vec<Alg::Output>, Cancelled>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Output: Send,
    C: CancelToken,
    P: ProgressSink + ?Sized,
{
    let width = resolution.width();
    let tracker = ProgressTracker::new(progress, resolution.height() as usize);

    let rows: Result<Vec<Vec<Alg::Output>>, Cancelled> = (0..resolution.height())
        .into_par_iter()
        .map(|row| {
            let mut values = Vec::with_capacity(width as usize);

            for col in 0..width {
                if col as usize % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(Cancelled);
                }

                values.push(algorithm.compute(col, row));
            }

            tracker.complete_units(1);
            Ok(values)
        })
        .collect();

    rows.map(|rows| rows.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Debug)]
    struct StubAlgorithm {}

    impl FractalAlgorithm for StubAlgorithm {
        type Output = u64;

        fn compute(&self, col: u32, row: u32) -> Self::Output {
            u64::from(col) + u64::from(row) * 1000
        }
    }

    #[test]
    fn test_rayon_generates_same_results_as_serial() {
        let resolution = Resolution::new(11, 9).unwrap();

        let serial = generate_fractal_serial(resolution, &StubAlgorithm {});
        let parallel = generate_fractal_parallel_rayon(resolution, &StubAlgorithm {});

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_rayon_with_smallest_dimensions() {
        let resolution = Resolution::new(2, 2).unwrap();

        assert_eq!(
            generate_fractal_parallel_rayon(resolution, &StubAlgorithm {}),
            vec![0, 1, 1000, 1001]
        );
    }

    #[test]
    fn test_rayon_with_large_resolution() {
        let resolution = Resolution::new(101, 101).unwrap();

        let serial = generate_fractal_serial(resolution, &StubAlgorithm {});
        let parallel = generate_fractal_parallel_rayon(resolution, &StubAlgorithm {});

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_cancelable_returns_cancelled_when_token_is_cancelled() {
        let resolution = Resolution::new(11, 9).unwrap();
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result = generate_fractal_parallel_rayon_cancelable(
            resolution,
            &StubAlgorithm {},
            &cancel_token,
            &NoProgress,
        );

        assert_eq!(result, Err(Cancelled));
    }

    #[test]
    fn test_cancelable_cancels_after_k_polls() {
        let resolution = Resolution::new(6, 6).unwrap();
        let poll_count = AtomicUsize::new(0);
        let cancel_after = 3;
        let cancel_token = || poll_count.fetch_add(1, Ordering::Relaxed) >= cancel_after;

        let result = generate_fractal_parallel_rayon_cancelable(
            resolution,
            &StubAlgorithm {},
            &cancel_token,
            &NoProgress,
        );

        assert_eq!(result, Err(Cancelled));
        assert!(poll_count.load(Ordering::Relaxed) >= cancel_after);
    }

    #[test]
    fn test_cancellation_polled_at_row_start() {
        // 2 pixels wide, 5 rows: one poll per row start
        let resolution = Resolution::new(2, 5).unwrap();
        let poll_count = AtomicUsize::new(0);
        let cancel_token = || {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        let result = generate_fractal_parallel_rayon_cancelable(
            resolution,
            &StubAlgorithm {},
            &cancel_token,
            &NoProgress,
        );

        assert!(result.is_ok());
        assert_eq!(poll_count.load(Ordering::Relaxed), 5);
    }

    #[test]
    fn test_cancellation_polled_multiple_times_on_wide_rows() {
        // 3000 wide: polls at 0, 1024 and 2048 on each of the 2 rows
        let resolution = Resolution::new(3000, 2).unwrap();
        let poll_count = AtomicUsize::new(0);
        let cancel_token = || {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        let result = generate_fractal_parallel_rayon_cancelable(
            resolution,
            &StubAlgorithm {},
            &cancel_token,
            &NoProgress,
        );

        assert!(result.is_ok());
        assert_eq!(poll_count.load(Ordering::Relaxed), 6);
    }

    #[test]
    fn test_progress_reaches_100_without_changing_output() {
        let resolution = Resolution::new(16, 40).unwrap();
        let seen = Mutex::new(Vec::new());
        let sink = |percent: u8| seen.lock().unwrap().push(percent);

        let with_progress =
            generate_fractal_parallel_rayon_cancelable(
                resolution,
                &StubAlgorithm {},
                &NeverCancel,
                &sink,
            )
                .unwrap();

        let seen = seen.into_inner().unwrap();
        assert_eq!(with_progress, generate_fractal_serial(resolution, &StubAlgorithm {}));
        assert_eq!(seen.last(), Some(&100));
        assert!(seen.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

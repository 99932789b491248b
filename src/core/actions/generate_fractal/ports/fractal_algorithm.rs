/// Per-pixel computation driven by the field generators.
///
/// Pixels are addressed by `(col, row)` with row 0 at the top of the image.
pub trait FractalAlgorithm {
    type Output;

    fn compute(&self, col: u32, row: u32) -> Self::Output;
}

//! Symmetric offsets that fan out markers sharing one categorical position.

/// Distance between neighbouring markers, in categorical axis units.
pub const OFFSET_STEP: f64 = 0.25;

/// `n` offsets, sorted ascending and symmetric about zero. Odd `n` puts an
/// exact zero at the median; even `n` skips zero.
///
/// ```
/// use coefplot::dotplot::offset_grid;
///
/// assert_eq!(offset_grid(4), vec![-0.5, -0.25, 0.25, 0.5]);
/// assert_eq!(offset_grid(5), vec![-0.5, -0.25, 0.0, 0.25, 0.5]);
/// ```
pub fn offset_grid(n: usize) -> Vec<f64> {
    let half: Vec<f64> = (1..=n / 2).map(|k| k as f64 * OFFSET_STEP).collect();

    let mut grid: Vec<f64> = half.iter().map(|v| -v).collect();
    if n % 2 == 1 {
        grid.push(0.0);
    }
    grid.extend_from_slice(&half);
    grid.sort_by(f64::total_cmp);
    grid
}

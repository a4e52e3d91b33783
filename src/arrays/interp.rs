//! arrays::interp — piecewise-linear interpolation and common-grid building.
//!
//! Purpose
//! -------
//! Provide the numeric kernels behind DataArray evaluation and resampling:
//! clamped linear interpolation on an ascending grid, and construction of
//! the uniform grid onto which two differently-sampled arrays are aligned.
//!
//! Key behaviors
//! -------------
//! - [`interp`] evaluates one point; points outside `[xp[0], xp[n-1]]` are
//!   clamped to the end values.
//! - [`interp_many`] maps [`interp`] over a grid.
//! - [`common_grid`] intersects two X ranges and samples the intersection
//!   with the smallest spacing found in either grid.
//!
//! Invariants & assumptions
//! ------------------------
//! - `xp` is strictly ascending and `xp.len() == fp.len() >= 2`; callers
//!   check this through `arrays::validation` before calling in.
//!
//! Conventions
//! -----------
//! - Interior points use `fp[i] + slope * (x - xp[i])` on the bracketing
//!   interval `xp[i] <= x < xp[i + 1]`, so sample points are reproduced
//!   exactly.
//! - The grid holds `floor((x_max - x_min) / step) + 1` points
//!   `x_min + k * step`, with a small relative slack on the quotient so
//!   rounding never drops `x_max`. No point lies above `x_max`.

use crate::arrays::errors::{ArrayError, ArrayResult};
use ndarray::{Array1, ArrayView1};

/// Linear interpolation of `(xp, fp)` at `x`, clamped at both ends.
pub fn interp(x: f64, xp: ArrayView1<f64>, fp: ArrayView1<f64>) -> f64 {
    let n = xp.len();
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[n - 1] {
        return fp[n - 1];
    }

    // Largest i with xp[i] <= x.
    let (mut lo, mut hi) = (0, n - 1);
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if xp[mid] <= x { lo = mid } else { hi = mid }
    }

    let slope = (fp[lo + 1] - fp[lo]) / (xp[lo + 1] - xp[lo]);
    slope * (x - xp[lo]) + fp[lo]
}

/// [`interp`] at every point of `xs`.
pub fn interp_many(xs: ArrayView1<f64>, xp: ArrayView1<f64>, fp: ArrayView1<f64>) -> Array1<f64> {
    xs.mapv(|x| interp(x, xp, fp))
}

/// Slack added to the span/step quotient before flooring.
const GRID_SLACK: f64 = 1e-9;

/// Uniform grid covering the overlap of two ascending X axes.
///
/// Parameters
/// ----------
/// - `a`, `b`: `ArrayView1<f64>`
///   Strictly ascending axes with at least two samples each.
///
/// Returns
/// -------
/// `ArrayResult<Array1<f64>>`
///   Points `x_min + k * step` with `x_min = max(a[0], b[0])`,
///   `x_max = min(a[-1], b[-1])` and `step` the smallest consecutive
///   difference in either axis.
///
/// Errors
/// ------
/// - `ArrayError::NoOverlap` when `x_min >= x_max`.
/// - `ArrayError::UnsortedArray` when the smallest spacing is not positive.
pub fn common_grid(a: ArrayView1<f64>, b: ArrayView1<f64>) -> ArrayResult<Array1<f64>> {
    let x_min = a[0].max(b[0]);
    let x_max = a[a.len() - 1].min(b[b.len() - 1]);
    if x_min >= x_max {
        return Err(ArrayError::NoOverlap { x_min, x_max });
    }

    let (step, index) = min_spacing(a).into_iter().chain(min_spacing(b)).fold(
        (f64::INFINITY, 0),
        |best, candidate| if candidate.0 < best.0 { candidate } else { best },
    );
    if !(step.is_finite() && step > 0.0) {
        return Err(ArrayError::UnsortedArray { index });
    }

    let count = ((x_max - x_min) / step + GRID_SLACK).floor() as usize + 1;
    let grid = Array1::from_iter((0..count).map(|k| (x_min + k as f64 * step).min(x_max)));

    #[cfg(feature = "obs_slog")]
    slog::debug!(
        crate::utils::term_logger(),
        "resampling grid";
        "x_min" => x_min,
        "x_max" => x_max,
        "step" => step,
        "points" => count
    );

    Ok(grid)
}

/// Smallest consecutive difference of `x` and the index where it ends.
fn min_spacing(x: ArrayView1<f64>) -> Option<(f64, usize)> {
    x.windows(2)
        .into_iter()
        .enumerate()
        .map(|(i, pair)| (pair[1] - pair[0], i + 1))
        .reduce(|best, candidate| if candidate.0 < best.0 { candidate } else { best })
}

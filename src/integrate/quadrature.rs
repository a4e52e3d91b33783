//! integrate::quadrature — the numeric integrator seam and its default.
//!
//! Purpose
//! -------
//! Define [`Quadrature`], the trait unit-aware integration delegates to, and
//! provide [`AdaptiveSimpson`], a recursive adaptive Simpson integrator
//! configured by [`QuadOptions`].
//!
//! Key behaviors
//! -------------
//! - Integrands and integrators exchange `anyhow::Result<f64>`, so any error
//!   raised by the integrand (including typed unit errors) travels through
//!   the integrator unchanged.
//! - Each interval is split until the Richardson error estimate
//!   `|S(left) + S(right) - S(whole)| / 15` falls below its share of the
//!   tolerance.
//!
//! Invariants & assumptions
//! ------------------------
//! - Tolerances are finite and strictly positive; the depth limit and the
//!   evaluation budget are non-zero (enforced by [`QuadOptions::new`]).
//! - Exhausting the depth or the evaluation budget, or meeting a non-finite
//!   estimate, is reported as [`IntegrateError::NotConvergent`].

use crate::integrate::errors::{IntegrateError, IntegrateResult};

/// Default absolute tolerance.
pub const DEFAULT_ABS_TOL: f64 = 1.49e-8;

/// Default relative tolerance.
pub const DEFAULT_REL_TOL: f64 = 1.49e-8;

/// Default maximum recursion depth.
pub const DEFAULT_MAX_DEPTH: usize = 50;

/// Default budget of integrand evaluations.
pub const DEFAULT_MAX_EVALS: usize = 100_000;

/// A one-dimensional numeric integrator.
pub trait Quadrature {
    /// Integrate `f` over `[a, b]` (`a > b` yields the negated integral).
    fn integrate(
        &self, f: &mut dyn FnMut(f64) -> anyhow::Result<f64>, a: f64, b: f64,
    ) -> anyhow::Result<f64>;
}

/// Tolerances and limits of [`AdaptiveSimpson`].
///
/// - `abs_tol`: absolute error target.
/// - `rel_tol`: error target relative to the first whole-interval estimate.
/// - `max_depth`: maximum bisection depth.
/// - `max_evals`: hard cap on integrand evaluations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadOptions {
    pub abs_tol: f64,
    pub rel_tol: f64,
    pub max_depth: usize,
    pub max_evals: usize,
}

impl QuadOptions {
    /// Construct validated options; `None` selects the default.
    ///
    /// # Errors
    /// - [`IntegrateError::InvalidTolerance`] for non-finite or non-positive
    ///   tolerances.
    /// - [`IntegrateError::InvalidMaxDepth`] / [`IntegrateError::InvalidMaxEvals`]
    ///   for zero limits.
    pub fn new(
        abs_tol: Option<f64>, rel_tol: Option<f64>, max_depth: Option<usize>,
        max_evals: Option<usize>,
    ) -> IntegrateResult<Self> {
        let abs_tol = verify_tol(abs_tol.unwrap_or(DEFAULT_ABS_TOL))?;
        let rel_tol = verify_tol(rel_tol.unwrap_or(DEFAULT_REL_TOL))?;
        let max_depth = max_depth.unwrap_or(DEFAULT_MAX_DEPTH);
        if max_depth == 0 {
            return Err(IntegrateError::InvalidMaxDepth {
                depth: max_depth,
                reason: "Maximum depth must be greater than zero.",
            });
        }
        let max_evals = max_evals.unwrap_or(DEFAULT_MAX_EVALS);
        if max_evals < 5 {
            return Err(IntegrateError::InvalidMaxEvals {
                evals: max_evals,
                reason: "At least five evaluations are needed for one refinement.",
            });
        }
        Ok(Self { abs_tol, rel_tol, max_depth, max_evals })
    }
}

impl Default for QuadOptions {
    fn default() -> Self {
        Self {
            abs_tol: DEFAULT_ABS_TOL,
            rel_tol: DEFAULT_REL_TOL,
            max_depth: DEFAULT_MAX_DEPTH,
            max_evals: DEFAULT_MAX_EVALS,
        }
    }
}

fn verify_tol(tol: f64) -> IntegrateResult<f64> {
    if !tol.is_finite() {
        return Err(IntegrateError::InvalidTolerance { tol, reason: "Tolerance must be finite." });
    }
    if tol <= 0.0 {
        return Err(IntegrateError::InvalidTolerance { tol, reason: "Tolerance must be positive." });
    }
    Ok(tol)
}

/// Recursive adaptive Simpson quadrature.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AdaptiveSimpson {
    pub opts: QuadOptions,
}

impl AdaptiveSimpson {
    pub fn new(opts: QuadOptions) -> Self {
        Self { opts }
    }
}

/// One Simpson panel: bounds and the integrand at both ends and midpoint.
#[derive(Clone, Copy)]
struct Panel {
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
}

impl Panel {
    fn estimate(&self) -> f64 {
        (self.b - self.a) / 6.0 * (self.fa + 4.0 * self.fm + self.fb)
    }
}

struct Run<'f> {
    f: &'f mut dyn FnMut(f64) -> anyhow::Result<f64>,
    opts: QuadOptions,
    evals: usize,
}

impl Run<'_> {
    fn eval(&mut self, x: f64) -> anyhow::Result<f64> {
        if self.evals >= self.opts.max_evals {
            let budget = self.opts.max_evals;
            return Err(not_convergent(format!("evaluation budget of {budget} exhausted")));
        }
        self.evals += 1;
        (self.f)(x)
    }

    fn refine(&mut self, panel: Panel, whole: f64, tol: f64, depth: usize) -> anyhow::Result<f64> {
        let m = 0.5 * (panel.a + panel.b);
        let (fml, fmr) = (self.eval(0.5 * (panel.a + m))?, self.eval(0.5 * (m + panel.b))?);
        let left = Panel { a: panel.a, b: m, fa: panel.fa, fm: fml, fb: panel.fm };
        let right = Panel { a: m, b: panel.b, fa: panel.fm, fm: fmr, fb: panel.fb };
        let (sl, sr) = (left.estimate(), right.estimate());
        let delta = sl + sr - whole;

        if !delta.is_finite() {
            let (a, b) = (panel.a, panel.b);
            return Err(not_convergent(format!("non-finite estimate on [{a}, {b}]")));
        }
        if delta.abs() <= 15.0 * tol {
            return Ok(sl + sr + delta / 15.0);
        }
        if depth == 0 {
            return Err(not_convergent(format!(
                "maximum depth {} reached on [{}, {}] (error estimate {:e})",
                self.opts.max_depth,
                panel.a,
                panel.b,
                delta.abs() / 15.0
            )));
        }
        let lhs = self.refine(left, sl, 0.5 * tol, depth - 1)?;
        let rhs = self.refine(right, sr, 0.5 * tol, depth - 1)?;
        Ok(lhs + rhs)
    }
}

fn not_convergent(message: String) -> anyhow::Error {
    anyhow::Error::new(IntegrateError::NotConvergent { message })
}

impl Quadrature for AdaptiveSimpson {
    fn integrate(
        &self, f: &mut dyn FnMut(f64) -> anyhow::Result<f64>, a: f64, b: f64,
    ) -> anyhow::Result<f64> {
        if a == b {
            return Ok(0.0);
        }
        let mut run = Run { f, opts: self.opts, evals: 0 };
        let fa = run.eval(a)?;
        let fm = run.eval(0.5 * (a + b))?;
        let fb = run.eval(b)?;
        let panel = Panel { a, b, fa, fm, fb };
        let whole = panel.estimate();
        let tol = self.opts.abs_tol.max(self.opts.rel_tol * whole.abs());

        let value = run.refine(panel, whole, tol, self.opts.max_depth)?;

        #[cfg(feature = "obs_slog")]
        slog::debug!(
            crate::utils::term_logger(),
            "adaptive simpson finished";
            "a" => a,
            "b" => b,
            "value" => value,
            "evals" => run.evals
        );

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Accuracy on smooth integrands and reversed bounds.
    // - Option validation.
    // - Propagation of integrand errors and non-convergence.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify accuracy on polynomial and trigonometric integrands.
    //
    // Given
    // -----
    // - ∫₀¹ x² dx, ∫₀^π sin x dx, and ∫₁⁰ x dx.
    //
    // Expect
    // ------
    // - 1/3, 2, -1/2.
    fn integrates_smooth_functions() {
        let quad = AdaptiveSimpson::default();

        let cube = quad.integrate(&mut |x| Ok(x * x), 0.0, 1.0).unwrap();
        let sine = quad.integrate(&mut |x| Ok(x.sin()), 0.0, PI).unwrap();
        let reversed = quad.integrate(&mut |x| Ok(x), 1.0, 0.0).unwrap();

        assert_relative_eq!(cube, 1.0 / 3.0, max_relative = 1e-10);
        assert_relative_eq!(sine, 2.0, max_relative = 1e-8);
        assert_relative_eq!(reversed, -0.5, max_relative = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Ensure `QuadOptions::new` rejects invalid settings.
    //
    // Given
    // -----
    // - abs_tol = 0, rel_tol = NaN, max_depth = 0, max_evals = 2.
    //
    // Expect
    // ------
    // - The matching `Invalid*` variant for each.
    fn quad_options_validate_inputs() {
        assert!(matches!(
            QuadOptions::new(Some(0.0), None, None, None),
            Err(IntegrateError::InvalidTolerance { .. })
        ));
        assert!(matches!(
            QuadOptions::new(None, Some(f64::NAN), None, None),
            Err(IntegrateError::InvalidTolerance { .. })
        ));
        assert!(matches!(
            QuadOptions::new(None, None, Some(0), None),
            Err(IntegrateError::InvalidMaxDepth { .. })
        ));
        assert!(matches!(
            QuadOptions::new(None, None, None, Some(2)),
            Err(IntegrateError::InvalidMaxEvals { .. })
        ));
        assert_eq!(QuadOptions::new(None, None, None, None).unwrap(), QuadOptions::default());
    }

    #[test]
    // Purpose
    // -------
    // A singular integrand exhausts the limits and reports non-convergence.
    //
    // Given
    // -----
    // - ∫₋₁¹ 1/x dx with max_depth = 5.
    //
    // Expect
    // ------
    // - An error that downcasts to `IntegrateError::NotConvergent`.
    fn singular_integrand_is_not_convergent() {
        let quad = AdaptiveSimpson::new(QuadOptions::new(None, None, Some(5), None).unwrap());

        let err = quad.integrate(&mut |x| Ok(1.0 / (x - 0.3)), -1.0, 1.0).unwrap_err();

        let typed = err.downcast::<IntegrateError>();
        assert!(matches!(typed, Ok(IntegrateError::NotConvergent { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Integrand errors propagate unchanged.
    //
    // Given
    // -----
    // - An integrand failing for x > 0.5.
    //
    // Expect
    // ------
    // - The integrand's message.
    fn integrand_errors_propagate() {
        let quad = AdaptiveSimpson::default();

        let mut failing = |x: f64| if x > 0.5 { anyhow::bail!("boom at {x}") } else { Ok(x) };

        let err = quad.integrate(&mut failing, 0.0, 1.0).unwrap_err();

        assert!(err.to_string().starts_with("boom"));
    }
}

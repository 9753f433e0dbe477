//! Von Neumann analysis of the three schemes.
//!
//! For a Fourier mode with Nyquist normalized wavenumber `q` the scheme
//! multiplies the mode by a complex amplification factor `lambda` each step.
//! With `log(lambda) = p + i q'` the exact advection operator would give
//! `p = 0` and `q' = 2 pi alpha q`, so `q'` is reported as the dispersion
//! and `-p` as the dissipation.

use crate::grid::*;
use crate::solver::Scheme;
use crate::util::*;
use std::f64::consts::PI;

pub fn amplification_factor(q_normalized: f64, alpha: f64, scheme: Scheme) -> Complex64 {
    let kappa = 2.0 * PI * q_normalized;
    match scheme {
        Scheme::Upwind => {
            Complex64::new(1.0, 0.0) - alpha * (1.0 - Complex64::new(0.0, kappa).exp())
        }
        Scheme::Lax => Complex64::new(kappa.cos(), alpha * kappa.sin()),
        Scheme::LaxWendroff => Complex64::new(
            1.0 - alpha * alpha * (1.0 - kappa.cos()),
            alpha * kappa.sin(),
        ),
    }
}

/// Returns `(dispersion, dissipation)`.
pub fn analyze(q_normalized: f64, alpha: f64, scheme: Scheme) -> (f64, f64) {
    let log_lambda = amplification_factor(q_normalized, alpha, scheme).ln();
    (log_lambda.im, -log_lambda.re)
}

/// Largest dispersion of the exact operator over `[0, 0.5]`.
pub fn ideal_dispersion_max(alpha: f64) -> f64 {
    2.0 * PI * alpha * 0.5
}

/// End points of the exact dispersion line, normalized like the curves.
pub fn ideal_dispersion() -> [(f64, f64); 2] {
    [(0.0, 0.0), (0.5, 1.0)]
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DispersionPoint {
    pub q: f64,
    pub dispersion: f64,
    pub dissipation: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DispersionCurve {
    pub scheme: Scheme,
    pub alpha: f64,
    pub points: Vec<DispersionPoint>,
}

impl DispersionCurve {
    /// Sample `i = 0 ..= nx / 2` at `q_i = i / (nx - 1)`.
    pub fn sample(grid: &GridParameters, scheme: Scheme) -> Self {
        let nx = grid.nx();
        let alpha = grid.alpha();
        let points = (0..=nx / 2)
            .map(|i| {
                let q = i as f64 / (nx - 1) as f64;
                let (dispersion, dissipation) = analyze(q, alpha, scheme);
                DispersionPoint {
                    q,
                    dispersion,
                    dissipation,
                }
            })
            .collect();
        DispersionCurve {
            scheme,
            alpha,
            points,
        }
    }

    /// Dispersion divided by `ideal_dispersion_max`, so the exact operator
    /// is the line from `(0, 0)` to `(0.5, 1)` whatever `alpha` is.
    pub fn normalized_dispersion(&self) -> Vec<(f64, f64)> {
        let ideal_max = ideal_dispersion_max(self.alpha);
        let scale = if ideal_max == 0.0 { 1.0 } else { 1.0 / ideal_max };
        self.points
            .iter()
            .map(|p| (p.q, p.dispersion * scale))
            .collect()
    }

    pub fn dissipation(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.q, p.dissipation)).collect()
    }
}

/// Curves for every scheme, in `Scheme::ALL` order.
pub fn dispersion_curves(grid: &GridParameters) -> [DispersionCurve; 3] {
    profiling::scope!("stability::dispersion_curves");
    Scheme::ALL.map(|scheme| DispersionCurve::sample(grid, scheme))
}

use crate::stencil::*;

/// Neighborhood shared by every scheme: left, middle, right.
pub const OFFSETS_3PT: [i32; 3] = [-1, 0, 1];

pub fn upwind(alpha: f64) -> Stencil<3> {
    Stencil::new(OFFSETS_3PT, move |args: &[f64; 3]| {
        let left = args[0];
        let middle = args[1];
        middle - alpha * (middle - left)
    })
}

pub fn lax_friedrichs(alpha: f64) -> Stencil<3> {
    Stencil::new(OFFSETS_3PT, move |args: &[f64; 3]| {
        let left = args[0];
        let right = args[2];
        0.5 * (right + left) - 0.5 * alpha * (right - left)
    })
}

pub fn lax_wendroff(alpha: f64) -> Stencil<3> {
    Stencil::new(OFFSETS_3PT, move |args: &[f64; 3]| {
        let left = args[0];
        let middle = args[1];
        let right = args[2];
        let alpha_sq = alpha * alpha;
        (1.0 - alpha_sq) * middle - 0.5 * alpha * (right - left)
            + 0.5 * alpha_sq * (right + left)
    })
}

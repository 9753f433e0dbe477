use crate::util::*;

/// For linear stencils, we can extract the weight for a neighbor
/// by passing in 1.0 for that neighbor and 0.0 for the others.
pub fn extract_weights<
    const NEIGHBORHOOD_SIZE: usize,
    F: Fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64,
>(
    f: F,
) -> Values<NEIGHBORHOOD_SIZE> {
    let mut weights = Values::zero();
    let mut arg_buffer = [0.0; NEIGHBORHOOD_SIZE];
    for n in 0..NEIGHBORHOOD_SIZE {
        arg_buffer[n] = 1.0;
        weights[n] = f(&arg_buffer);
        arg_buffer[n] = 0.0;
    }
    weights
}

/// Linear 1D stencil as a combination of neighbor offsets and weights.
#[derive(Clone, Debug, PartialEq)]
pub struct Stencil<const NEIGHBORHOOD_SIZE: usize> {
    pub weights: Values<NEIGHBORHOOD_SIZE>,
    pub offsets: [i32; NEIGHBORHOOD_SIZE],
}

impl<const NEIGHBORHOOD_SIZE: usize> Stencil<NEIGHBORHOOD_SIZE> {
    pub fn new<F: Fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64>(
        offsets: [i32; NEIGHBORHOOD_SIZE],
        operation: F,
    ) -> Self {
        let weights = extract_weights(operation);
        Stencil { offsets, weights }
    }

    pub fn weights(&self) -> &Values<NEIGHBORHOOD_SIZE> {
        &self.weights
    }

    pub fn offsets(&self) -> &[i32; NEIGHBORHOOD_SIZE] {
        &self.offsets
    }

    /// How far the stencil reaches to the left and right.
    pub fn slopes(&self) -> (usize, usize) {
        let mut result = (0, 0);
        for &offset in &self.offsets {
            if offset > 0 {
                result.1 = result.1.max(offset as usize);
            } else {
                result.0 = result.0.max((-offset) as usize);
            }
        }
        result
    }

    pub fn apply(&self, args: &Values<NEIGHBORHOOD_SIZE>) -> f64 {
        self.weights.component_mul(args).sum()
    }

    /// Gather neighbors of `i` from `input`, caller guarantees
    /// the whole neighborhood is in bounds.
    pub fn gather(&self, input: &[f64], i: usize) -> Values<NEIGHBORHOOD_SIZE> {
        Values::from_fn(|n, _| input[(i as i64 + self.offsets[n] as i64) as usize])
    }

    /// Von Neumann amplification factor for the Fourier mode
    /// `u_j = exp(-i j kappa)`.
    pub fn amplification(&self, kappa: f64) -> Complex64 {
        let mut result = Complex64::zero();
        for (w, &offset) in self.weights.iter().zip(self.offsets.iter()) {
            result += Complex64::from_polar(*w, -(offset as f64) * kappa);
        }
        result
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn extract_weights() {
        {
            let s = Stencil::new([1], |args: &[f64; 1]| 2.0 * args[0]);
            let w = s.weights()[0];
            assert_approx_eq!(f64, w, 2.0);
        }

        {
            let s = Stencil::new([1, 2, 3], |args: &[f64; 3]| {
                2.0 * args[0] + 3.0 * args[1] + 5.0 * args[2]
            });
            let w = s.weights();
            assert_approx_eq!(f64, w[0], 2.0, ulps = 1);
            assert_approx_eq!(f64, w[1], 3.0, ulps = 1);
            assert_approx_eq!(f64, w[2], 5.0, ulps = 1);
        }
    }

    #[test]
    fn slopes() {
        {
            let s = Stencil::new([1], |args: &[f64; 1]| 2.0 * args[0]);
            assert_eq!(s.slopes(), (0, 1));
        }

        {
            let s = Stencil::new([-1], |args: &[f64; 1]| 2.0 * args[0]);
            assert_eq!(s.slopes(), (1, 0));
        }

        {
            let s = Stencil::new([-1, 0, 1, 2, -3], |args: &[f64; 5]| {
                2.0 * args[0] + args[1]
            });
            assert_eq!(s.slopes(), (3, 2));
        }
    }

    #[test]
    fn gather_and_apply() {
        let s = Stencil::new([-1, 0, 1], |args: &[f64; 3]| {
            args[0] + 10.0 * args[1] + 100.0 * args[2]
        });
        let input = [1.0, 2.0, 3.0, 4.0];
        let args = s.gather(&input, 2);
        assert_eq!(args, vector![2.0, 3.0, 4.0]);
        assert_approx_eq!(f64, s.apply(&args), 432.0);
    }

    #[test]
    fn amplification_of_shift() {
        // Pure shift from the left neighbor rotates each mode by kappa.
        let s = Stencil::new([-1, 0, 1], |args: &[f64; 3]| args[0]);
        for kappa in [0.0, 0.3, 1.0, std::f64::consts::PI] {
            let l = s.amplification(kappa);
            assert_approx_eq!(f64, l.norm(), 1.0, epsilon = 1e-14);
            assert_approx_eq!(f64, l.re, kappa.cos(), epsilon = 1e-14);
            assert_approx_eq!(f64, l.im, kappa.sin(), epsilon = 1e-14);
        }
    }
}

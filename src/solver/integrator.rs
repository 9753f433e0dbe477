use crate::solver::*;
use crate::stencil::*;

/// One step of `stencil` over the interior points `1..n-1`.
/// The two boundary samples are copied through unchanged.
pub fn apply_step(stencil: &Stencil<3>, input: &[f64], output: &mut [f64]) {
    profiling::scope!("integrator::apply_step");
    debug_assert_eq!(input.len(), output.len());
    debug_assert_eq!(stencil.slopes(), (1, 1));
    let n = input.len();
    if n == 0 {
        return;
    }
    output[0] = input[0];
    output[n - 1] = input[n - 1];
    for i in 1..n.saturating_sub(1) {
        let args = stencil.gather(input, i);
        output[i] = stencil.apply(&args);
    }
}

/// Apply `steps` steps, ping-ponging between the two buffers.
/// The result ends up in `input`.
pub fn box_apply(
    stencil: &Stencil<3>,
    input: &mut Vec<f64>,
    output: &mut Vec<f64>,
    steps: usize,
) {
    debug_assert_eq!(input.len(), output.len());
    for _ in 0..steps {
        apply_step(stencil, input, output);
        std::mem::swap(input, output);
    }
}

/// Owns the active state and its scratch buffer for one scheme.
#[derive(Clone, Debug)]
pub struct Integrator {
    scheme: Scheme,
    stencil: Stencil<3>,
    input: Vec<f64>,
    output: Vec<f64>,
}

impl Integrator {
    pub fn new(scheme: Scheme, alpha: f64, initial: &[f64]) -> Self {
        Integrator {
            scheme,
            stencil: scheme.stencil(alpha),
            input: initial.to_vec(),
            output: vec![0.0; initial.len()],
        }
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn stencil(&self) -> &Stencil<3> {
        &self.stencil
    }

    pub fn state(&self) -> &[f64] {
        &self.input
    }

    /// Overwrite the active state, reusing the buffers when the size matches.
    pub fn reseed(&mut self, values: &[f64]) {
        self.input.clear();
        self.input.extend_from_slice(values);
        self.output.resize(values.len(), 0.0);
    }

    pub fn step(&mut self) {
        apply_step(&self.stencil, &self.input, &mut self.output);
        std::mem::swap(&mut self.input, &mut self.output);
    }
}

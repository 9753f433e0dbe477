use crate::error::*;
use fftw::array::AlignedVec;
use fftw::plan::{R2CPlan, R2CPlan64};
use fftw::types::{c64, Flag};

/// The largest non-DC bin is scaled to this value.
pub const SPECTRUM_SCALE: f64 = 1.5;

/// Non-DC content below this fraction of the total counts as rounding noise.
pub const DEGENERATE_TOLERANCE: f64 = 1e-12;

/// Magnitude spectrum of states on a fixed grid size.
/// The last sample of the closed interval duplicates the first one
/// under a periodic view, so only the first `nx - 1` samples are transformed.
pub struct SpectrumAnalyzer {
    nx: usize,
    forward_plan: R2CPlan64,
    input: AlignedVec<f64>,
    output: AlignedVec<c64>,
}

impl SpectrumAnalyzer {
    pub fn new(nx: usize) -> Result<Self> {
        let n = nx.saturating_sub(1).max(1);
        let forward_plan = R2CPlan64::aligned(&[n], Flag::ESTIMATE)?;
        let mut input = AlignedVec::new(n);
        let mut output = AlignedVec::new(n / 2 + 1);
        for v in input.iter_mut() {
            *v = 0.0;
        }
        for v in output.iter_mut() {
            *v = c64::new(0.0, 0.0);
        }
        Ok(SpectrumAnalyzer {
            nx,
            forward_plan,
            input,
            output,
        })
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of bins `spectrum` returns, bin 0 is the mean.
    pub fn bins(&self) -> usize {
        self.nx.saturating_sub(1) / 2
    }

    pub fn spectrum(&mut self, state: &[f64]) -> Result<Vec<f64>> {
        profiling::scope!("spectrum::spectrum");
        if state.len() != self.nx {
            return Err(Error::StateLength {
                expected: self.nx,
                found: state.len(),
            });
        }
        let bins = self.bins();
        if bins < 2 {
            return Err(Error::DegenerateSpectrum);
        }

        let n = self.nx - 1;
        self.input[..].copy_from_slice(&state[0..n]);
        self.forward_plan.r2c(&mut self.input, &mut self.output)?;

        let mut magnitudes: Vec<f64> =
            self.output[0..bins].iter().map(|c| c.norm()).collect();
        normalize(&mut magnitudes)?;
        Ok(magnitudes)
    }
}

/// Scale so the largest bin past the DC one equals `SPECTRUM_SCALE`.
pub fn normalize(magnitudes: &mut [f64]) -> Result<()> {
    let dc = magnitudes.first().copied().unwrap_or(0.0);
    let peak = magnitudes
        .iter()
        .skip(1)
        .copied()
        .fold(0.0, f64::max);
    if peak == 0.0 || peak <= DEGENERATE_TOLERANCE * dc.max(peak) {
        return Err(Error::DegenerateSpectrum);
    }
    for m in magnitudes.iter_mut() {
        *m *= SPECTRUM_SCALE / peak;
    }
    Ok(())
}

/// Plans are expensive to build, keep one analyzer per grid size.
pub struct SpectrumPlanLibrary {
    pub plan_map: std::collections::HashMap<usize, SpectrumAnalyzer>,
}

impl Default for SpectrumPlanLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectrumPlanLibrary {
    pub fn new() -> Self {
        SpectrumPlanLibrary {
            plan_map: std::collections::HashMap::new(),
        }
    }

    pub fn get_plan(&mut self, nx: usize) -> Result<&mut SpectrumAnalyzer> {
        match self.plan_map.entry(nx) {
            std::collections::hash_map::Entry::Occupied(e) => Ok(e.into_mut()),
            std::collections::hash_map::Entry::Vacant(e) => {
                Ok(e.insert(SpectrumAnalyzer::new(nx)?))
            }
        }
    }
}

/// One-off spectrum, plans a transform for `state.len()`.
pub fn spectrum(state: &[f64]) -> Result<Vec<f64>> {
    if state.len() < 2 {
        return Err(Error::DegenerateSpectrum);
    }
    SpectrumAnalyzer::new(state.len())?.spectrum(state)
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use std::f64::consts::PI;

    #[test]
    fn single_mode() {
        // Mode 3 on 16 periodic samples, plus the repeated end point.
        let n = 16;
        let state: Vec<f64> = (0..=n)
            .map(|i| 2.0 + (2.0 * PI * 3.0 * i as f64 / n as f64).cos())
            .collect();
        let s = spectrum(&state).unwrap();
        assert_eq!(s.len(), 8);
        assert_approx_eq!(f64, s[3], SPECTRUM_SCALE, epsilon = 1e-12);
        // DC is 2 * n against n / 2 for the mode.
        assert_approx_eq!(f64, s[0], 4.0 * SPECTRUM_SCALE, epsilon = 1e-12);
        for (k, v) in s.iter().enumerate() {
            if k != 0 && k != 3 {
                assert!(v.abs() < 1e-12, "bin {} = {}", k, v);
            }
        }
    }

    #[test]
    fn constant_is_degenerate() {
        for nx in [2, 3, 16, 17, 129] {
            assert_eq!(spectrum(&vec![0.7; nx]), Err(Error::DegenerateSpectrum));
            assert_eq!(spectrum(&vec![0.0; nx]), Err(Error::DegenerateSpectrum));
        }
        assert_eq!(spectrum(&[]), Err(Error::DegenerateSpectrum));
    }

    #[test]
    fn length_checked() {
        let mut analyzer = SpectrumAnalyzer::new(16).unwrap();
        assert_eq!(analyzer.bins(), 7);
        assert_eq!(
            analyzer.spectrum(&[1.0; 8]),
            Err(Error::StateLength {
                expected: 16,
                found: 8
            })
        );
    }

    #[test]
    fn normalize_ignores_dc() {
        let mut m = vec![100.0, 1.0, 2.0, 0.5];
        normalize(&mut m).unwrap();
        assert_approx_eq!(f64, m[0], 75.0);
        assert_approx_eq!(f64, m[1], 0.75);
        assert_approx_eq!(f64, m[2], 1.5);
        assert_approx_eq!(f64, m[3], 0.375);
    }

    #[test]
    fn library_reuses_plans() {
        let mut library = SpectrumPlanLibrary::new();
        library.get_plan(17).unwrap();
        library.get_plan(33).unwrap();
        assert_eq!(library.get_plan(17).unwrap().nx(), 17);
        assert_eq!(library.plan_map.len(), 2);
    }
}

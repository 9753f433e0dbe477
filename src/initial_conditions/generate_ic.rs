use crate::grid::*;
use crate::initial_conditions::*;

/// Sample the profile at `x_i = i * dx` for every grid point.
pub fn generate_ic_1d(grid: &GridParameters, ic_type: ICType) -> Vec<f64> {
    let mut result = vec![0.0; grid.nx()];
    set_ic_1d(&mut result, grid, ic_type);
    result
}

/// Fill an existing buffer with the sampled profile,
/// used when re-seeding without reallocating.
pub fn set_ic_1d(buffer: &mut [f64], grid: &GridParameters, ic_type: ICType) {
    debug_assert_eq!(buffer.len(), grid.nx());
    for (i, value) in buffer.iter_mut().enumerate() {
        *value = evaluate(grid.x(i), ic_type, grid.range_x());
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn gauss_sampling() {
        let grid = GridParameters::new(16, 10, 10.0, 5.0).unwrap();
        let state = generate_ic_1d(&grid, ICType::Gauss);
        assert_eq!(state.len(), 16);
        for (i, v) in state.iter().enumerate() {
            let x = i as f64 * (10.0 / 15.0);
            assert_approx_eq!(f64, *v, (-(x - 2.5) * (x - 2.5)).exp());
        }
    }

    #[test]
    fn step_sampling() {
        let grid = GridParameters::new(17, 10, 10.0, 5.0).unwrap();
        let state = generate_ic_1d(&grid, ICType::Step);
        // dx = 0.625, x_4 = 2.5 lands exactly on the step
        assert_eq!(&state[0..4], &[0.0; 4]);
        assert!(state[4..].iter().all(|v| *v == 1.0));
    }

    #[test]
    fn reseed_in_place() {
        let grid = GridParameters::new(32, 10, 10.0, 5.0).unwrap();
        let mut buffer = vec![7.0; 32];
        set_ic_1d(&mut buffer, &grid, ICType::Rectangle);
        assert_eq!(buffer, generate_ic_1d(&grid, ICType::Rectangle));
    }
}

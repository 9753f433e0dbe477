mod generate_ic;
use clap::ValueEnum;
pub use generate_ic::*;

/// Analytic pulse shapes, all anchored at a quarter of the domain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum ICType {
    #[default]
    Gauss,
    SuperGauss,
    Rectangle,
    Step,
}

impl ICType {
    pub const ALL: [ICType; 4] = [
        ICType::Gauss,
        ICType::SuperGauss,
        ICType::Rectangle,
        ICType::Step,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ICType::Gauss => "gauss",
            ICType::SuperGauss => "super_gauss",
            ICType::Rectangle => "rectangle",
            ICType::Step => "step",
        }
    }
}

/// Value of the initial profile at `x` for a domain of width `range_x`.
pub fn evaluate(x: f64, ic_type: ICType, range_x: f64) -> f64 {
    let center = range_x / 4.0;
    match ic_type {
        ICType::Gauss => (-(x - center).powi(2)).exp(),
        ICType::SuperGauss => (-(x - center).powi(8)).exp(),
        ICType::Rectangle => {
            if x > range_x / 8.0 && x < range_x * 3.0 / 8.0 {
                1.0
            } else {
                0.0
            }
        }
        ICType::Step => {
            if x < center {
                0.0
            } else {
                1.0
            }
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    const RANGE_X: f64 = 10.0;

    #[test]
    fn peaks_at_quarter() {
        assert_approx_eq!(f64, evaluate(2.5, ICType::Gauss, RANGE_X), 1.0);
        assert_approx_eq!(f64, evaluate(2.5, ICType::SuperGauss, RANGE_X), 1.0);
        assert_approx_eq!(
            f64,
            evaluate(3.5, ICType::Gauss, RANGE_X),
            (-1.0f64).exp()
        );
        assert_approx_eq!(
            f64,
            evaluate(3.5, ICType::SuperGauss, RANGE_X),
            (-1.0f64).exp()
        );
    }

    #[test]
    fn super_gauss_is_flatter() {
        let g = evaluate(3.0, ICType::Gauss, RANGE_X);
        let sg = evaluate(3.0, ICType::SuperGauss, RANGE_X);
        assert!(sg > g);
        let g = evaluate(4.0, ICType::Gauss, RANGE_X);
        let sg = evaluate(4.0, ICType::SuperGauss, RANGE_X);
        assert!(sg < g);
    }

    #[test]
    fn rectangle_is_open_interval() {
        assert_eq!(evaluate(1.25, ICType::Rectangle, RANGE_X), 0.0);
        assert_eq!(evaluate(1.26, ICType::Rectangle, RANGE_X), 1.0);
        assert_eq!(evaluate(3.74, ICType::Rectangle, RANGE_X), 1.0);
        assert_eq!(evaluate(3.75, ICType::Rectangle, RANGE_X), 0.0);
        assert_eq!(evaluate(-100.0, ICType::Rectangle, RANGE_X), 0.0);
    }

    #[test]
    fn step_switches_at_quarter() {
        assert_eq!(evaluate(2.49, ICType::Step, RANGE_X), 0.0);
        assert_eq!(evaluate(2.5, ICType::Step, RANGE_X), 1.0);
        assert_eq!(evaluate(1.0e9, ICType::Step, RANGE_X), 1.0);
    }

    #[test]
    fn total_over_reals() {
        for ic_type in ICType::ALL {
            for x in [-1.0e6, -1.0, 0.0, 2.5, 7.0, 1.0e6] {
                let v = evaluate(x, ic_type, RANGE_X);
                assert!(v.is_finite());
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }
}

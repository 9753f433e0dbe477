use crate::config::*;
use crate::error::*;

/// Immutable snapshot of the discretization.
/// `alpha` is derived on construction, change a setting by building
/// a new snapshot with one of the `with_*` methods.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridParameters {
    nx: usize,
    nt: usize,
    range_x: f64,
    range_t: f64,
    alpha: f64,
}

impl GridParameters {
    pub fn new(nx: usize, nt: usize, range_x: f64, range_t: f64) -> Result<Self> {
        if nx < 2 || nt < 1 {
            return Err(Error::Domain { nx, nt });
        }
        let mut result = GridParameters {
            nx,
            nt,
            range_x,
            range_t,
            alpha: 0.0,
        };
        result.alpha = result.dt() / result.dx();
        Ok(result)
    }

    /// Build from an interactive selection of `cells` intervals,
    /// the grid then holds `cells + 1` points.
    pub fn from_selection(
        cells: usize,
        nt: usize,
        config: &SimulationConfig,
    ) -> Result<Self> {
        Self::new(cells + 1, nt, config.range_x, config.range_t)
    }

    pub fn with_nx(&self, nx: usize) -> Result<Self> {
        Self::new(nx, self.nt, self.range_x, self.range_t)
    }

    pub fn with_nt(&self, nt: usize) -> Result<Self> {
        Self::new(self.nx, nt, self.range_x, self.range_t)
    }

    pub fn with_range_x(&self, range_x: f64) -> Result<Self> {
        Self::new(self.nx, self.nt, range_x, self.range_t)
    }

    pub fn with_range_t(&self, range_t: f64) -> Result<Self> {
        Self::new(self.nx, self.nt, self.range_x, range_t)
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn nt(&self) -> usize {
        self.nt
    }

    pub fn range_x(&self) -> f64 {
        self.range_x
    }

    pub fn range_t(&self) -> f64 {
        self.range_t
    }

    pub fn dx(&self) -> f64 {
        self.range_x / (self.nx - 1) as f64
    }

    pub fn dt(&self) -> f64 {
        self.range_t / self.nt as f64
    }

    /// Courant number, `dt / dx`.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Position of grid point `i`.
    pub fn x(&self, i: usize) -> f64 {
        i as f64 * self.dx()
    }
}

impl std::fmt::Display for GridParameters {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::result::Result<(), std::fmt::Error> {
        write!(
            f,
            "nx: {}, nt: {}, dx: {:.3}, dt: {:.3}, alpha: {:.3}",
            self.nx,
            self.nt,
            self.dx(),
            self.dt(),
            self.alpha
        )
    }
}

/// Round to the nearest power of two and clamp into `[NX_MIN, NX_MAX]`.
pub fn snap_nx(n: usize) -> usize {
    let n_log = (n.max(1) as f64).log2().round() as u32;
    1usize << n_log.clamp(NX_MIN.trailing_zeros(), NX_MAX.trailing_zeros())
}

pub fn clamp_nt(n: usize) -> usize {
    n.clamp(NT_MIN, NT_MAX)
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn derived_steps() {
        let grid = GridParameters::new(16, 10, 10.0, 5.0).unwrap();
        assert_approx_eq!(f64, grid.dx(), 10.0 / 15.0);
        assert_approx_eq!(f64, grid.dt(), 0.5);
        assert_approx_eq!(f64, grid.alpha(), 0.75, ulps = 2);
        assert_approx_eq!(f64, grid.x(15), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn domain_errors() {
        assert_eq!(
            GridParameters::new(1, 10, 10.0, 5.0),
            Err(Error::Domain { nx: 1, nt: 10 })
        );
        assert_eq!(
            GridParameters::new(16, 0, 10.0, 5.0),
            Err(Error::Domain { nx: 16, nt: 0 })
        );
        assert!(GridParameters::new(2, 1, 10.0, 5.0).is_ok());
    }

    #[test]
    fn alpha_follows_every_setting() {
        let grid = GridParameters::new(16, 10, 10.0, 5.0).unwrap();

        let g = grid.with_nx(31).unwrap();
        assert_approx_eq!(f64, g.alpha(), 0.5 / (10.0 / 30.0), ulps = 2);

        let g = grid.with_nt(20).unwrap();
        assert_approx_eq!(f64, g.alpha(), 0.25 / (10.0 / 15.0), ulps = 2);

        let g = grid.with_range_x(5.0).unwrap();
        assert_approx_eq!(f64, g.alpha(), 0.5 / (5.0 / 15.0), ulps = 2);

        let g = grid.with_range_t(10.0).unwrap();
        assert_approx_eq!(f64, g.alpha(), 1.0 / (10.0 / 15.0), ulps = 2);

        assert!(grid.with_nx(0).is_err());
    }

    #[test]
    fn selection() {
        let config = SimulationConfig::default();
        let grid = GridParameters::from_selection(16, 10, &config).unwrap();
        assert_eq!(grid.nx(), 17);
        assert_approx_eq!(f64, grid.dx(), 10.0 / 16.0);

        assert_eq!(snap_nx(0), NX_MIN);
        assert_eq!(snap_nx(16), 16);
        assert_eq!(snap_nx(22), 16);
        assert_eq!(snap_nx(23), 32);
        assert_eq!(snap_nx(24), 32);
        assert_eq!(snap_nx(100), 128);
        assert_eq!(snap_nx(4000), NX_MAX);

        assert_eq!(clamp_nt(3), NT_MIN);
        assert_eq!(clamp_nt(55), 55);
        assert_eq!(clamp_nt(1000), NT_MAX);
    }
}

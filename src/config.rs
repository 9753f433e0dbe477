/// Smallest grid (in cells) the interactive selection allows.
pub const NX_MIN: usize = 16;

/// Largest grid (in cells) the interactive selection allows.
pub const NX_MAX: usize = 128;

pub const NT_MIN: usize = 10;
pub const NT_MAX: usize = 100;

/// Run and presentation tuning.
/// `range_x` and `range_t` are the physical extents of the domain,
/// the rest control when a run emits samples and when it gives up.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub range_x: f64,
    pub range_t: f64,

    /// Any sample with magnitude above this terminates the run.
    pub blowup_threshold: f64,

    /// Number of evenly spaced samples emitted over `range_t`,
    /// the last one coincides with termination.
    pub samples_per_run: usize,

    /// Fraction of `dt` tolerated when comparing accumulated time.
    pub time_tolerance: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            range_x: 10.0,
            range_t: 5.0,
            blowup_threshold: 10.0,
            samples_per_run: 5,
            time_tolerance: 1e-3,
        }
    }
}

impl SimulationConfig {
    /// Simulated time between two emitted samples.
    pub fn sample_interval(&self) -> f64 {
        self.range_t / self.samples_per_run.max(1) as f64
    }
}

use std::error;
use std::fmt;

/// Errors raised while configuring or analyzing a simulation.
/// Numerical blow-up is not an error, see `solver::Termination`.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Grid needs at least two points and one time step.
    Domain { nx: usize, nt: usize },

    /// Every non-DC magnitude is zero, nothing to normalize against.
    DegenerateSpectrum,

    /// Configuration changes are rejected while a run is in progress.
    RunInProgress,

    /// Tick or stop requested without a run in progress.
    NotRunning,

    StateLength { expected: usize, found: usize },

    Fft(String),
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;

        match self {
            Domain { nx, nt } => write!(
                fmt,
                "invalid grid: nx = {} (needs >= 2), nt = {} (needs >= 1)",
                nx, nt
            ),
            DegenerateSpectrum => {
                write!(fmt, "degenerate spectrum: state has no non-DC content")
            }
            RunInProgress => write!(fmt, "run in progress"),
            NotRunning => write!(fmt, "no run in progress"),
            StateLength { expected, found } => write!(
                fmt,
                "state length mismatch: expected {}, found {}",
                expected, found
            ),
            Fft(msg) => write!(fmt, "fftw: {}", msg),
        }
    }
}

impl error::Error for Error {}

impl From<fftw::error::Error> for Error {
    fn from(e: fftw::error::Error) -> Self {
        Error::Fft(format!("{:?}", e))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

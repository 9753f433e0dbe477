use crate::config::*;
use crate::error::*;
use crate::grid::*;
use crate::initial_conditions::*;
use crate::solver::*;
use crate::spectrum::*;
use crate::stability::*;
use crate::util::*;

/// Full copy of the state at simulated time `t`.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub t: f64,
    pub values: Vec<f64>,
}

/// Why a run went back to idle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Termination {
    /// Reached the end of the time range.
    Completed,
    /// A sample exceeded the blow-up threshold or became non-finite.
    BlowUp,
    Stopped,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TickOutcome {
    Advanced,
    Sampled(Sample),
    /// The run is over, the sample is the last state it produced.
    Finished(Termination, Sample),
}

/// Everything a run emitted, in order.
#[derive(Clone, Debug)]
pub struct RunReport {
    pub samples: Vec<Sample>,
    pub termination: Termination,
    pub ticks: usize,
}

#[derive(Copy, Clone, Debug)]
struct Run {
    t_cur: f64,
    ticks: usize,
    next_sample: usize,
}

/// A simulation session: grid, profile, scheme and the evolving state.
/// Settings can only change while no run is in progress, any change
/// re-seeds the state and recomputes the derived products.
pub struct Session {
    config: SimulationConfig,
    grid: GridParameters,
    ic_type: ICType,
    initial: Vec<f64>,
    integrator: Integrator,
    spectrum_library: SpectrumPlanLibrary,
    spectrum: Result<Vec<f64>>,
    dispersion_curves: [DispersionCurve; 3],
    run: Option<Run>,
}

impl Session {
    pub fn new(
        config: SimulationConfig,
        nx: usize,
        nt: usize,
        ic_type: ICType,
        scheme: Scheme,
    ) -> Result<Self> {
        let grid = GridParameters::new(nx, nt, config.range_x, config.range_t)?;
        let initial = generate_ic_1d(&grid, ic_type);
        let integrator = Integrator::new(scheme, grid.alpha(), &initial);
        let mut result = Session {
            config,
            grid,
            ic_type,
            initial,
            integrator,
            spectrum_library: SpectrumPlanLibrary::new(),
            spectrum: Err(Error::DegenerateSpectrum),
            dispersion_curves: dispersion_curves(&grid),
            run: None,
        };
        result.reset()?;
        Ok(result)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn grid(&self) -> &GridParameters {
        &self.grid
    }

    pub fn ic_type(&self) -> ICType {
        self.ic_type
    }

    pub fn scheme(&self) -> Scheme {
        self.integrator.scheme()
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Simulated time of the current run, zero while idle.
    pub fn t_cur(&self) -> f64 {
        self.run.map(|r| r.t_cur).unwrap_or(0.0)
    }

    /// Ticks taken by the current run, zero while idle.
    pub fn ticks(&self) -> usize {
        self.run.map(|r| r.ticks).unwrap_or(0)
    }

    pub fn initial_state(&self) -> &[f64] {
        &self.initial
    }

    pub fn state(&self) -> &[f64] {
        self.integrator.state()
    }

    /// Normalized spectrum of the last re-seeded state.
    pub fn spectrum(&self) -> Result<&[f64]> {
        self.spectrum.as_deref().map_err(Clone::clone)
    }

    pub fn dispersion_curves(&self) -> &[DispersionCurve; 3] {
        &self.dispersion_curves
    }

    /// Curve of the selected scheme.
    pub fn dispersion_curve(&self) -> &DispersionCurve {
        let scheme = self.scheme();
        self.dispersion_curves
            .iter()
            .find(|c| c.scheme == scheme)
            .unwrap_or(&self.dispersion_curves[0])
    }

    fn check_idle(&self) -> Result<()> {
        if self.is_running() {
            Err(Error::RunInProgress)
        } else {
            Ok(())
        }
    }

    pub fn set_grid(&mut self, nx: usize, nt: usize) -> Result<()> {
        self.check_idle()?;
        self.grid = GridParameters::new(nx, nt, self.config.range_x, self.config.range_t)?;
        self.reset()
    }

    pub fn set_profile(&mut self, ic_type: ICType) -> Result<()> {
        self.check_idle()?;
        self.ic_type = ic_type;
        self.reset()
    }

    /// Switch scheme, the state is kept.
    pub fn set_scheme(&mut self, scheme: Scheme) -> Result<()> {
        self.check_idle()?;
        let state = self.integrator.state().to_vec();
        self.integrator = Integrator::new(scheme, self.grid.alpha(), &state);
        Ok(())
    }

    pub fn set_config(&mut self, config: SimulationConfig) -> Result<()> {
        self.check_idle()?;
        self.grid = GridParameters::new(
            self.grid.nx(),
            self.grid.nt(),
            config.range_x,
            config.range_t,
        )?;
        self.config = config;
        self.reset()
    }

    /// Re-sample the initial profile and recompute spectrum and curves.
    pub fn reset(&mut self) -> Result<()> {
        profiling::scope!("session::reset");
        self.check_idle()?;
        self.initial.resize(self.grid.nx(), 0.0);
        set_ic_1d(&mut self.initial, &self.grid, self.ic_type);
        self.integrator = Integrator::new(self.scheme(), self.grid.alpha(), &self.initial);

        let analyzer = self.spectrum_library.get_plan(self.grid.nx())?;
        self.spectrum = analyzer.spectrum(&self.initial);
        if let Err(Error::Fft(msg)) = &self.spectrum {
            return Err(Error::Fft(msg.clone()));
        }

        self.dispersion_curves = dispersion_curves(&self.grid);
        Ok(())
    }

    /// Idle to Running. Re-seeds the state and returns it as the first sample.
    pub fn start(&mut self) -> Result<Sample> {
        self.check_idle()?;
        self.reset()?;
        self.run = Some(Run {
            t_cur: 0.0,
            ticks: 0,
            next_sample: 1,
        });
        Ok(self.sample(0.0))
    }

    /// Running to Idle without finishing the time range.
    pub fn stop(&mut self) -> Result<TickOutcome> {
        let run = self.run.take().ok_or(Error::NotRunning)?;
        Ok(TickOutcome::Finished(
            Termination::Stopped,
            self.sample(run.t_cur),
        ))
    }

    pub fn tick(&mut self) -> Result<TickOutcome> {
        profiling::scope!("session::tick");
        let dt = self.grid.dt();
        let tolerance = self.config.time_tolerance * dt;
        let interval = self.config.sample_interval();

        let run = self.run.as_mut().ok_or(Error::NotRunning)?;
        run.t_cur += dt;
        run.ticks += 1;
        let t = run.t_cur;
        let sample_due = t >= interval * run.next_sample as f64 - tolerance;
        if sample_due {
            run.next_sample = ((t + tolerance) / interval).floor() as usize + 1;
        }

        self.integrator.step();

        let peak = max_abs(self.integrator.state());
        if peak.is_nan() || peak > self.config.blowup_threshold {
            self.run = None;
            return Ok(TickOutcome::Finished(Termination::BlowUp, self.sample(t)));
        }

        if t >= self.grid.range_t() - tolerance {
            self.run = None;
            return Ok(TickOutcome::Finished(Termination::Completed, self.sample(t)));
        }

        if sample_due {
            Ok(TickOutcome::Sampled(self.sample(t)))
        } else {
            Ok(TickOutcome::Advanced)
        }
    }

    /// Start a run and tick it to termination.
    pub fn run(&mut self) -> Result<RunReport> {
        let mut samples = vec![self.start()?];
        let mut ticks = 0;
        loop {
            let outcome = self.tick()?;
            ticks += 1;
            match outcome {
                TickOutcome::Advanced => {}
                TickOutcome::Sampled(sample) => samples.push(sample),
                TickOutcome::Finished(termination, sample) => {
                    samples.push(sample);
                    return Ok(RunReport {
                        samples,
                        termination,
                        ticks,
                    });
                }
            }
        }
    }

    fn sample(&self, t: f64) -> Sample {
        Sample {
            t,
            values: self.integrator.state().to_vec(),
        }
    }
}

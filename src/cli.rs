use crate::build_info;
use crate::config::*;
use crate::error::*;
use crate::grid::*;
use crate::initial_conditions::*;
use crate::solver::*;
use crate::util::*;
use clap::Parser;
use std::path::PathBuf;

/// advect1d linear advection executable
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory for output files, will be created.
    /// WARNING, if this Directory
    /// already exists, current contents will be removed.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Grid size in cells, snapped to a power of two in [16, 128].
    /// The grid holds one more point than cells.
    #[arg(short = 'x', long, default_value = "16")]
    pub cells: usize,

    /// Number of time steps, clamped to [10, 100].
    #[arg(short = 't', long, default_value = "10")]
    pub steps: usize,

    #[arg(short, long, value_enum, default_value_t = Scheme::Upwind)]
    pub scheme: Scheme,

    #[arg(short, long, value_enum, default_value_t = ICType::Gauss)]
    pub profile: ICType,

    /// Terminate the run once any sample exceeds this magnitude.
    #[arg(long, default_value = "10.0")]
    pub blowup_threshold: f64,

    /// Number of samples emitted over the time range.
    #[arg(long, default_value = "5")]
    pub samples_per_run: usize,

    /// Write out a space-time image of the run.
    #[arg(short, long)]
    pub write_image: bool,

    /// FFTW wisdom, imported if the file exists and saved on finish.
    #[arg(long)]
    pub wisdom_file: Option<PathBuf>,

    /// Print build information and exit.
    #[arg(long)]
    pub build_info: bool,
}

impl Args {
    pub fn cli_setup(name: &str) -> Self {
        let args = Args::parse();

        if args.build_info {
            build_info::print_report(name);
            std::process::exit(0);
        }

        println!("EXAMPLE: {}", name);
        if let Some(output_dir) = &args.output_dir {
            let _ = std::fs::remove_dir_all(output_dir);
            if let Err(e) = ensure_dir_exists(output_dir) {
                println!("WARNING: cannot create {:?}, {}", output_dir, e);
            }
        }

        if let Some(ref wisdom_path) = args.wisdom_file {
            if wisdom_path.exists() {
                if let Err(e) = fftw::wisdom::import_wisdom_file_f64(wisdom_path) {
                    println!("WARNING: ignoring wisdom {:?}, {:?}", wisdom_path, e);
                }
            }
        }

        args
    }

    pub fn config(&self) -> SimulationConfig {
        SimulationConfig {
            blowup_threshold: self.blowup_threshold,
            samples_per_run: self.samples_per_run,
            ..Default::default()
        }
    }

    /// Grid points after snapping the cell count.
    pub fn nx(&self) -> usize {
        snap_nx(self.cells) + 1
    }

    pub fn nt(&self) -> usize {
        clamp_nt(self.steps)
    }

    pub fn session(&self) -> Result<Session> {
        Session::new(self.config(), self.nx(), self.nt(), self.profile, self.scheme)
    }

    pub fn output_path(&self, file_name: &str) -> Option<PathBuf> {
        self.output_dir.as_ref().map(|dir| {
            let mut result = dir.clone();
            result.push(file_name);
            result
        })
    }

    pub fn finish(&self) {
        if let Some(ref wisdom_path) = self.wisdom_file {
            profiling::scope!("fftw3::saving_wisdom");
            println!("Saving wisdom: {:?}", wisdom_path);
            if let Err(e) = fftw::wisdom::export_wisdom_file_f64(wisdom_path) {
                println!("WARNING: failed to save wisdom, {:?}", e);
            }
        }
    }
}

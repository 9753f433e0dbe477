use advect1d::cli::*;
use advect1d::csv;
use advect1d::image::Image1D;
use advect1d::solver::*;

fn main() {
    let args = Args::cli_setup("advect_1d");

    let mut session = args.session().unwrap();
    println!("GRID: {}", session.grid());
    println!("SCHEME: {}, PROFILE: {:?}", session.scheme(), session.ic_type());

    match session.spectrum() {
        Ok(spectrum) => println!("SPECTRUM: {:?}", spectrum),
        Err(e) => println!("SPECTRUM: none, {}", e),
    }

    let mut samples = vec![session.start().unwrap()];
    let termination = loop {
        match session.tick().unwrap() {
            TickOutcome::Advanced => {}
            TickOutcome::Sampled(sample) => {
                println!("t: {:.3}", sample.t);
                samples.push(sample);
            }
            TickOutcome::Finished(termination, sample) => {
                println!("t: {:.3}", sample.t);
                samples.push(sample);
                break termination;
            }
        }
    };
    println!("TERMINATION: {:?}", termination);

    if let Some(path) = args.output_path("samples.csv") {
        csv::write_samples_file(&samples, &path).unwrap();
    }
    if let Some(path) = args.output_path("dispersion.csv") {
        csv::write_curve_file(session.dispersion_curve(), &path).unwrap();
    }
    if args.write_image {
        if let Some(path) = args.output_path("advect_1d.png") {
            Image1D::from_samples(&samples).write(&path).unwrap();
        }
    }

    args.finish();
}

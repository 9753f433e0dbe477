use advect1d::cli::*;
use advect1d::csv;
use advect1d::stability::*;

fn main() {
    let args = Args::cli_setup("stability_1d");

    let session = args.session().unwrap();
    println!("GRID: {}", session.grid());

    for curve in session.dispersion_curves() {
        println!("SCHEME: {}", curve.scheme);
        println!("  q       dispersion  dissipation");
        for ((q, d), p) in curve.normalized_dispersion().iter().zip(curve.points.iter()) {
            println!("  {:.4}  {:+.6}  {:+.6}", q, d, p.dissipation);
        }
        if let Some(path) = args.output_path(&format!("{}.csv", curve.scheme)) {
            csv::write_curve_file(curve, &path).unwrap();
        }
    }
    println!("IDEAL: {:?}", ideal_dispersion());

    args.finish();
}

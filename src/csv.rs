use crate::solver::Sample;
use crate::stability::*;
use std::io::prelude::*;

/// One line per sample: `t, v_0, v_1, ...`.
pub fn write_samples<W: Write>(output: &mut W, samples: &[Sample]) -> std::io::Result<()> {
    for sample in samples {
        write!(output, "{}", sample.t)?;
        for v in &sample.values {
            write!(output, ", {v}")?;
        }
        writeln!(output)?;
    }
    Ok(())
}

/// One line per wavenumber:
/// `q, dispersion, normalized_dispersion, dissipation`.
pub fn write_curve<W: Write>(output: &mut W, curve: &DispersionCurve) -> std::io::Result<()> {
    writeln!(output, "q, dispersion, normalized_dispersion, dissipation")?;
    let normalized = curve.normalized_dispersion();
    for (p, (_, n)) in curve.points.iter().zip(normalized) {
        writeln!(output, "{}, {}, {}, {}", p.q, p.dispersion, n, p.dissipation)?;
    }
    Ok(())
}

pub fn write_samples_file<P: AsRef<std::path::Path>>(
    samples: &[Sample],
    path: &P,
) -> std::io::Result<()> {
    println!("Writing: {:?}", path.as_ref());
    let mut output = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_samples(&mut output, samples)?;
    output.flush()
}

pub fn write_curve_file<P: AsRef<std::path::Path>>(
    curve: &DispersionCurve,
    path: &P,
) -> std::io::Result<()> {
    println!("Writing: {:?}", path.as_ref());
    let mut output = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_curve(&mut output, curve)?;
    output.flush()
}

pub use nalgebra::vector;
pub use num::complex::Complex64;
pub use num::Zero;

/// Fixed size buffer of stencil weights or gathered neighbor values.
pub type Values<const NEIGHBORHOOD_SIZE: usize> =
    nalgebra::SVector<f64, { NEIGHBORHOOD_SIZE }>;

/// Utility function to ensure output directories exist when needed
pub fn ensure_dir_exists<P: AsRef<std::path::Path>>(path: &P) -> std::io::Result<()> {
    let p = path.as_ref();
    if p.exists() {
        if p.is_dir() {
            println!("Exists: {p:?}");
            Ok(())
        } else {
            Err(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("not a directory {p:?}"),
            ))
        }
    } else {
        println!("Creating: {p:?}");
        std::fs::create_dir_all(p)
    }
}

/// Largest absolute value, `NaN` if any value is `NaN`.
pub fn max_abs(values: &[f64]) -> f64 {
    let mut result: f64 = 0.0;
    for v in values {
        if v.is_nan() {
            return f64::NAN;
        }
        result = result.max(v.abs());
    }
    result
}

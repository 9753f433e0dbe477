use crate::solver::Sample;

/// Space-time picture of a run, one line per emitted sample.
pub struct Image1D {
    img_buffer: image::RgbImage,
}

impl Image1D {
    pub fn new(nx: usize, lines: u32) -> Self {
        Image1D {
            img_buffer: image::RgbImage::new(nx as u32, lines),
        }
    }

    /// Values outside `[0, 1]` saturate the gradient.
    pub fn add_line(&mut self, l: u32, v: &[f64]) {
        debug_assert!(l < self.img_buffer.height());
        debug_assert_eq!(v.len(), self.img_buffer.width() as usize);
        let gradient = colorous::TURBO;
        for x in 0..self.img_buffer.width() {
            let r = v[x as usize];
            let r = if r.is_nan() { 0.0 } else { r.clamp(0.0, 1.0) };
            let c = gradient.eval_continuous(r);
            self.img_buffer.put_pixel(x, l, image::Rgb(c.as_array()));
        }
    }

    pub fn from_samples(samples: &[Sample]) -> Self {
        let nx = samples.first().map(|s| s.values.len()).unwrap_or(0);
        let mut result = Image1D::new(nx, samples.len() as u32);
        for (l, sample) in samples.iter().enumerate() {
            result.add_line(l as u32, &sample.values);
        }
        result
    }

    pub fn pixel(&self, x: u32, l: u32) -> [u8; 3] {
        self.img_buffer.get_pixel(x, l).0
    }

    pub fn write<F: AsRef<std::path::Path>>(self, s: &F) -> image::ImageResult<()> {
        println!("Writing: {:?}", s.as_ref());
        self.img_buffer.save(s)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn saturates() {
        let samples = vec![
            Sample {
                t: 0.0,
                values: vec![0.0, 1.0, -3.0, 12.0],
            },
            Sample {
                t: 1.0,
                values: vec![f64::NAN, 0.5, 0.5, 0.5],
            },
        ];
        let img = Image1D::from_samples(&samples);
        assert_eq!(img.pixel(0, 0), img.pixel(2, 0));
        assert_eq!(img.pixel(1, 0), img.pixel(3, 0));
        assert_eq!(img.pixel(0, 1), img.pixel(0, 0));
        assert_ne!(img.pixel(1, 1), img.pixel(1, 0));
    }
}

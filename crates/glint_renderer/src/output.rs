//! Binary PPM (P6) image output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::ImageBuffer;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for image output.
pub type OutputResult<T> = Result<T, OutputError>;

/// Write the image as binary PPM: an ASCII header followed by raw RGB bytes.
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> OutputResult<()> {
    write!(writer, "P6\n{} {}\n255\n", image.width, image.height)?;
    writer.write_all(&image.to_rgb8())?;
    writer.flush()?;
    Ok(())
}

/// Save the image to a PPM file.
pub fn save_ppm<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> OutputResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_ppm(image, BufWriter::new(file))?;

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::Color;

    #[test]
    fn test_ppm_layout() {
        let mut image = ImageBuffer::new(2, 2);
        image.set(0, 0, Color::new(1.0, 0.0, 0.0));
        image.set(1, 0, Color::new(0.0, 1.0, 0.0));
        image.set(0, 1, Color::new(0.0, 0.0, 1.0));
        image.set(1, 1, Color::splat(2.0));

        let mut bytes = Vec::new();
        write_ppm(&image, &mut bytes).unwrap();

        let header = b"P6\n2 2\n255\n";
        assert_eq!(&bytes[..header.len()], header);
        assert_eq!(
            &bytes[header.len()..],
            &[255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255]
        );
    }

    #[test]
    fn test_ppm_size() {
        let image = ImageBuffer::new(7, 5);
        let mut bytes = Vec::new();
        write_ppm(&image, &mut bytes).unwrap();

        assert_eq!(bytes.len(), "P6\n7 5\n255\n".len() + 7 * 5 * 3);
    }

    #[test]
    fn test_save_ppm() {
        let path = std::env::temp_dir().join(format!("glint_output_{}.ppm", std::process::id()));
        let image = ImageBuffer::new(3, 1);

        save_ppm(&image, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert!(bytes.starts_with(b"P6\n3 1\n255\n"));
        assert_eq!(bytes.len(), 11 + 9);
    }

    #[test]
    fn test_save_ppm_bad_path() {
        let image = ImageBuffer::new(1, 1);
        let result = save_ppm(&image, "/definitely/not/here/out.ppm");
        assert!(matches!(result, Err(OutputError::Io(_))));
    }
}

use std::path::{Path, PathBuf};

use clicksteer_interface::{Error, FrameDisplay, RgbImage};

/// Shows frames by writing each one to an image file, replacing the
/// previous one. The format follows the file extension.
#[derive(Debug, Clone)]
pub struct ImageFileDisplay {
    path: PathBuf,
}

impl ImageFileDisplay {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FrameDisplay for ImageFileDisplay {
    fn show(&self, frame: &RgbImage) -> Result<(), Error> {
        frame.save(&self.path).map_err(|e| Error::Display {
            message: format!("failed to write {:?}: {e}", self.path),
        })
    }
}

#[cfg(test)]
mod tests {
    use clicksteer_interface::Rgb;

    use super::*;

    #[test]
    fn test_show() {
        let dir = tempfile::tempdir().unwrap();
        let display = ImageFileDisplay::new(dir.path().join("view.png"));
        let mut frame = RgbImage::new(4, 2);
        frame.put_pixel(3, 1, Rgb([0, 0, 255]));
        display.show(&frame).unwrap();

        let written = image::open(display.path()).unwrap().to_rgb8();
        assert_eq!(written.dimensions(), (4, 2));
        assert_eq!(*written.get_pixel(3, 1), Rgb([0, 0, 255]));
    }

    #[test]
    fn test_show_error() {
        let dir = tempfile::tempdir().unwrap();
        let display = ImageFileDisplay::new(dir.path().join("missing").join("view.png"));
        assert!(matches!(
            display.show(&RgbImage::new(1, 1)),
            Err(Error::Display { .. })
        ));
    }
}

use auto_impl::auto_impl;
use image::RgbImage;

use crate::error::Error;

/// Window surface that shows annotated frames.
///
/// The display is released when the implementor is dropped.
#[auto_impl(&, Box, Arc)]
pub trait FrameDisplay: Send + Sync {
    fn show(&self, frame: &RgbImage) -> Result<(), Error>;
}

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use clicksteer_interface::{
    Encoding, Error as InterfaceError, FrameDisplay, FrameSource, RawFrame, RgbImage,
};
use image::ColorType;
use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::{Error, FrameAnnotator, SelectionState};

const RGB_CHANNELS: u8 = 3;

/// Decodes a delivered frame into a 3-channel color image.
pub fn decode_frame(frame: RawFrame) -> Result<RgbImage, InterfaceError> {
    let RawFrame {
        width,
        height,
        encoding,
        mut data,
    } = frame;

    if encoding == Encoding::Compressed {
        let decoded = image::load_from_memory(&data).map_err(|e| InterfaceError::Decode {
            message: e.to_string(),
        })?;
        return match decoded.color() {
            ColorType::Rgb8 | ColorType::Rgba8 | ColorType::Rgb16 | ColorType::Rgba16 => {
                Ok(decoded.to_rgb8())
            }
            color => Err(InterfaceError::UnsupportedEncoding {
                encoding: format!("{encoding} ({color:?})"),
                channels: color.channel_count(),
                expected: RGB_CHANNELS,
            }),
        };
    }

    let channels = encoding.channels().unwrap_or_default();
    if channels != RGB_CHANNELS {
        return Err(InterfaceError::UnsupportedEncoding {
            encoding: encoding.to_string(),
            channels,
            expected: RGB_CHANNELS,
        });
    }
    if width == 0 || height == 0 {
        return Err(InterfaceError::Decode {
            message: format!("empty frame ({width}x{height})"),
        });
    }
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(RGB_CHANNELS as usize));
    if expected != Some(data.len()) {
        return Err(InterfaceError::BufferSizeMismatch {
            width: width as usize,
            height: height as usize,
            channels: RGB_CHANNELS as usize,
            input: data.len(),
        });
    }
    if encoding == Encoding::Bgr8 {
        for pixel in data.chunks_exact_mut(3) {
            pixel.swap(0, 2);
        }
    }
    RgbImage::from_raw(width, height, data).ok_or_else(|| InterfaceError::Decode {
        message: format!("failed to build {width}x{height} image"),
    })
}

/// Decodes, annotates and displays every delivered frame.
///
/// A frame that cannot be decoded or displayed is logged and skipped; the
/// selection state is only ever read here.
#[derive(Debug)]
pub struct FrameIngest<D> {
    selection: Arc<SelectionState>,
    annotator: FrameAnnotator,
    display: D,
    height_mismatch_reported: AtomicBool,
}

impl<D> FrameIngest<D>
where
    D: FrameDisplay,
{
    pub fn new(selection: Arc<SelectionState>, display: D) -> Self {
        Self::with_annotator(selection, FrameAnnotator::default(), display)
    }

    pub fn with_annotator(
        selection: Arc<SelectionState>,
        annotator: FrameAnnotator,
        display: D,
    ) -> Self {
        Self {
            selection,
            annotator,
            display,
            height_mismatch_reported: AtomicBool::new(false),
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn try_handle_frame(&self, frame: RawFrame) -> Result<(), Error> {
        let mut image = decode_frame(frame)?;
        let expected_height = self.selection.geometry().height;
        if image.height() != expected_height
            && !self.height_mismatch_reported.swap(true, Ordering::Relaxed)
        {
            warn!(
                frame_height = image.height(),
                expected_height, "frame height differs from the configured height"
            );
        }
        let snapshot = self.selection.snapshot();
        self.annotator.annotate(&mut image, &snapshot);
        self.display.show(&image)?;
        Ok(())
    }

    /// Returns `true` if the frame was displayed.
    pub fn handle_frame(&self, frame: RawFrame) -> bool {
        match self.try_handle_frame(frame) {
            Ok(()) => true,
            Err(e) => {
                warn!("skipping frame: {e}");
                false
            }
        }
    }

    /// Handles frames from `source` until it ends or `shutdown` becomes `true`.
    ///
    /// Decoding, annotation and display run on the blocking thread pool, one
    /// frame at a time.
    pub async fn run<F>(self: Arc<Self>, source: F, mut shutdown: watch::Receiver<bool>)
    where
        F: FrameSource,
        D: 'static,
    {
        loop {
            let frame = tokio::select! {
                _ = shutdown.wait_for(|stopped| *stopped) => break,
                frame = source.next_frame() => frame,
            };
            match frame {
                Some(frame) => {
                    let ingest = self.clone();
                    if let Err(e) =
                        tokio::task::spawn_blocking(move || ingest.handle_frame(frame)).await
                    {
                        error!("frame handler failed: {e}");
                    }
                }
                None => {
                    info!("frame stream ended");
                    break;
                }
            }
        }
    }
}

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use image::RgbImage;

use crate::{error::Error, traits::FrameDisplay};

/// Dummy FrameDisplay which keeps every shown frame.
#[derive(Debug, Default)]
pub struct DummyFrameDisplay {
    pub frames: Mutex<Vec<RgbImage>>,
    fail: AtomicBool,
}

impl DummyFrameDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::Relaxed);
    }

    pub fn shown_count(&self) -> usize {
        self.frames.lock().unwrap().len()
    }

    pub fn last_frame(&self) -> Option<RgbImage> {
        self.frames.lock().unwrap().last().cloned()
    }
}

impl FrameDisplay for DummyFrameDisplay {
    fn show(&self, frame: &RgbImage) -> Result<(), Error> {
        if self.fail.load(Ordering::Relaxed) {
            return Err(Error::Display {
                message: "dummy display is closed".to_owned(),
            });
        }
        self.frames.lock().unwrap().push(frame.clone());
        Ok(())
    }
}

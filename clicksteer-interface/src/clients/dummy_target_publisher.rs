use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use crate::{
    error::Error,
    messages::{AnnotationSize, TargetPoint},
    traits::TargetPublisher,
};

/// Dummy TargetPublisher for debug or tests.
#[derive(Debug, Default)]
pub struct DummyTargetPublisher {
    pub points: Mutex<Vec<TargetPoint>>,
    pub sizes: Mutex<Vec<AnnotationSize>>,
    fail: AtomicBool,
}

impl DummyTargetPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::Relaxed);
    }

    pub fn sent_points(&self) -> Vec<TargetPoint> {
        self.points.lock().unwrap().clone()
    }

    pub fn sent_sizes(&self) -> Vec<AnnotationSize> {
        self.sizes.lock().unwrap().clone()
    }

    fn check_connection(&self) -> Result<(), Error> {
        if self.fail.load(Ordering::Relaxed) {
            return Err(Error::Connection {
                message: "dummy target publisher is disconnected".to_owned(),
            });
        }
        Ok(())
    }
}

impl TargetPublisher for DummyTargetPublisher {
    fn send_point(&self, point: &TargetPoint) -> Result<(), Error> {
        self.check_connection()?;
        self.points.lock().unwrap().push(*point);
        Ok(())
    }

    fn send_annotation_size(&self, size: AnnotationSize) -> Result<(), Error> {
        self.check_connection()?;
        self.sizes.lock().unwrap().push(size);
        Ok(())
    }
}

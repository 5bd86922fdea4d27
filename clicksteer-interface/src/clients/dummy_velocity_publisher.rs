use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use crate::{error::Error, messages::VelocityCommand, traits::VelocityPublisher};

/// Dummy VelocityPublisher for debug or tests.
#[derive(Debug, Default)]
pub struct DummyVelocityPublisher {
    pub sent: Mutex<Vec<VelocityCommand>>,
    fail: AtomicBool,
}

impl DummyVelocityPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following `send_velocity` return a connection error.
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::Relaxed);
    }

    pub fn sent_velocities(&self) -> Vec<VelocityCommand> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last_velocity(&self) -> Option<VelocityCommand> {
        self.sent.lock().unwrap().last().copied()
    }
}

impl VelocityPublisher for DummyVelocityPublisher {
    fn send_velocity(&self, velocity: &VelocityCommand) -> Result<(), Error> {
        if self.fail.load(Ordering::Relaxed) {
            return Err(Error::Connection {
                message: "dummy velocity publisher is disconnected".to_owned(),
            });
        }
        self.sent.lock().unwrap().push(*velocity);
        Ok(())
    }
}

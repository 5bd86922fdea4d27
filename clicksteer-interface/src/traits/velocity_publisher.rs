use auto_impl::auto_impl;

use crate::{error::Error, messages::VelocityCommand};

/// Transport for the velocity command consumed by the motion controller.
#[auto_impl(&, Box, Arc)]
pub trait VelocityPublisher: Send + Sync {
    fn send_velocity(&self, velocity: &VelocityCommand) -> Result<(), Error>;
}

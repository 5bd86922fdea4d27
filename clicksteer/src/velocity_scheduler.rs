use std::{sync::Arc, time::Duration};

use clicksteer_interface::{VelocityCommand, VelocityPublisher};
use tokio::{sync::watch, time::MissedTickBehavior};
use tracing::{error, trace};

use crate::{SelectionState, TICK_PERIOD};

/// Republishes the current velocity command on a fixed period.
///
/// Each tick publishes whatever the last completed update left in the
/// selection, whether or not anything was clicked since the previous tick.
#[derive(Debug)]
pub struct VelocityScheduler<V> {
    selection: Arc<SelectionState>,
    publisher: V,
    period: Duration,
}

impl<V> VelocityScheduler<V>
where
    V: VelocityPublisher,
{
    pub fn new(selection: Arc<SelectionState>, publisher: V) -> Self {
        Self::with_period(selection, publisher, TICK_PERIOD)
    }

    pub fn with_period(selection: Arc<SelectionState>, publisher: V, period: Duration) -> Self {
        Self {
            selection,
            publisher,
            period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Publishes the current command once and returns it.
    pub fn tick(&self) -> VelocityCommand {
        let velocity = self.selection.snapshot().velocity;
        trace!(linear = velocity.linear, angular = velocity.angular, "tick");
        if let Err(e) = self.publisher.send_velocity(&velocity) {
            error!("failed to publish velocity: {e}");
        }
        velocity
    }

    /// Ticks until `shutdown` becomes `true` or its sender is dropped.
    ///
    /// The first tick fires immediately.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = tokio::time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = shutdown.wait_for(|stopped| *stopped) => break,
                _ = interval.tick() => {
                    self.tick();
                }
            }
        }
    }
}

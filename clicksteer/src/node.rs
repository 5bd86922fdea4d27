use std::sync::Arc;

use clicksteer_interface::{
    FrameDisplay, FrameSource, PointerEvent, PointerInput, TargetPublisher, VelocityPublisher,
};
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::{
    ClickHandler, ClickSteerConfig, Error, FrameIngest, SelectionState, VelocityScheduler,
};

/// Stops a running [`ClickSteerNode`] from anywhere.
#[derive(Debug, Clone)]
pub struct StopHandle {
    shutdown: Arc<watch::Sender<bool>>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.shutdown.send_replace(true);
    }

    pub fn is_stopped(&self) -> bool {
        *self.shutdown.borrow()
    }
}

/// Click-to-target steering node.
///
/// Ties the three event sources (pointer input, frame delivery and the
/// velocity timer) to one [`SelectionState`].
#[derive(Debug)]
pub struct ClickSteerNode<V, T, D> {
    selection: Arc<SelectionState>,
    click_handler: ClickHandler<T>,
    scheduler: Arc<VelocityScheduler<V>>,
    frame_ingest: Arc<FrameIngest<D>>,
    stop_handle: StopHandle,
}

impl<V, T, D> ClickSteerNode<V, T, D>
where
    V: VelocityPublisher + 'static,
    T: TargetPublisher,
    D: FrameDisplay + 'static,
{
    /// Creates a node. Fails if the configured annotation size is not positive.
    pub fn new(
        config: &ClickSteerConfig,
        velocity_publisher: V,
        target_publisher: T,
        display: D,
    ) -> Result<Self, Error> {
        let annotation_size = config.validate()?;
        let selection = Arc::new(SelectionState::new(annotation_size));
        let (shutdown, _) = watch::channel(false);
        debug!(%annotation_size, "creating node");

        Ok(Self {
            click_handler: ClickHandler::new(selection.clone(), target_publisher),
            scheduler: Arc::new(VelocityScheduler::new(
                selection.clone(),
                velocity_publisher,
            )),
            frame_ingest: Arc::new(FrameIngest::new(selection.clone(), display)),
            selection,
            stop_handle: StopHandle {
                shutdown: Arc::new(shutdown),
            },
        })
    }

    pub fn selection(&self) -> &Arc<SelectionState> {
        &self.selection
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop_handle.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.stop_handle.is_stopped()
    }

    pub fn stop(&self) {
        self.stop_handle.stop();
    }

    /// Runs the node until it is stopped or `pointer` reports
    /// [`PointerEvent::Unknown`].
    ///
    /// The velocity timer and the frame loop run on their own tasks; pointer
    /// events are handled on the calling task. When the frame stream ends the
    /// node keeps steering with the last selection. A stopped node cannot be
    /// run again.
    pub async fn run<P, F>(&self, pointer: P, frames: F)
    where
        P: PointerInput,
        F: FrameSource + 'static,
    {
        let shutdown = &self.stop_handle.shutdown;
        info!(
            annotation_size = %self.selection.annotation_size(),
            period = ?self.scheduler.period(),
            "click steer node started"
        );

        let scheduler_task = tokio::spawn({
            let scheduler = self.scheduler.clone();
            let shutdown = shutdown.subscribe();
            async move { scheduler.run(shutdown).await }
        });
        let frame_task = tokio::spawn({
            let frame_ingest = self.frame_ingest.clone();
            let shutdown = shutdown.subscribe();
            async move { frame_ingest.run(frames, shutdown).await }
        });

        let mut stopped = shutdown.subscribe();
        loop {
            let event = tokio::select! {
                _ = stopped.wait_for(|stopped| *stopped) => break,
                event = pointer.next_event() => event,
            };
            debug!("event: {event:?}");
            if event == PointerEvent::Unknown {
                warn!("pointer input closed");
                break;
            }
            self.click_handler.handle_event(event);
        }

        self.stop();
        pointer.stop();
        for (name, task) in [("velocity scheduler", scheduler_task), ("frame", frame_task)] {
            if let Err(e) = task.await {
                error!("{name} task failed: {e}");
            }
        }
        info!("click steer node stopped");
    }
}

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tracing::error;

use crate::traits::{PointerEvent, PointerInput};

/// Dummy PointerInput fed through a channel.
#[derive(Debug)]
pub struct DummyPointerInput {
    sender: flume::Sender<PointerEvent>,
    receiver: flume::Receiver<PointerEvent>,
    stopped: AtomicBool,
}

impl DummyPointerInput {
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            sender,
            receiver,
            stopped: AtomicBool::new(false),
        }
    }

    /// Returns a sender; events sent through it are returned by `next_event` in order.
    pub fn sender(&self) -> flume::Sender<PointerEvent> {
        self.sender.clone()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

impl Default for DummyPointerInput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PointerInput for DummyPointerInput {
    async fn next_event(&self) -> PointerEvent {
        match self.receiver.recv_async().await {
            Ok(e) => e,
            Err(e) => {
                error!("recv error: {e}");
                PointerEvent::Unknown
            }
        }
    }

    fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }
}

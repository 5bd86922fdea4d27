use std::sync::Mutex;

use async_trait::async_trait;

use crate::traits::{FrameSource, RawFrame};

/// Dummy FrameSource fed through a channel.
///
/// The stream ends after [`DummyFrameSource::finish`] once every queued frame
/// has been delivered.
#[derive(Debug)]
pub struct DummyFrameSource {
    sender: Mutex<Option<flume::Sender<RawFrame>>>,
    receiver: flume::Receiver<RawFrame>,
}

impl DummyFrameSource {
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            sender: Mutex::new(Some(sender)),
            receiver,
        }
    }

    /// Creates a source that delivers `frames` and then ends.
    pub fn with_frames(frames: impl IntoIterator<Item = RawFrame>) -> Self {
        let source = Self::new();
        for frame in frames {
            source.push(frame);
        }
        source.finish();
        source
    }

    /// Queues a frame. Frames pushed after `finish` are dropped.
    pub fn push(&self, frame: RawFrame) {
        if let Some(sender) = &*self.sender.lock().unwrap() {
            // the receiver lives as long as self
            let _ = sender.send(frame);
        }
    }

    pub fn finish(&self) {
        self.sender.lock().unwrap().take();
    }
}

impl Default for DummyFrameSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FrameSource for DummyFrameSource {
    async fn next_frame(&self) -> Option<RawFrame> {
        self.receiver.recv_async().await.ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Encoding;

    #[tokio::test]
    async fn test_with_frames() {
        let source = DummyFrameSource::with_frames(vec![
            RawFrame::new(1, 1, Encoding::Rgb8, vec![1, 2, 3]),
            RawFrame::new(1, 1, Encoding::Mono8, vec![4]),
        ]);
        assert_eq!(source.next_frame().await.unwrap().data, vec![1, 2, 3]);
        assert_eq!(source.next_frame().await.unwrap().encoding, Encoding::Mono8);
        assert!(source.next_frame().await.is_none());
        source.push(RawFrame::new(1, 1, Encoding::Rgb8, vec![0; 3]));
        assert!(source.next_frame().await.is_none());
    }
}

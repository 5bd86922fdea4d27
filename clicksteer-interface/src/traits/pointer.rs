use async_trait::async_trait;
use auto_impl::auto_impl;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Unknown,
}

/// Pointer event in frame pixel coordinates.
///
/// Coordinates are signed because a pointer can be reported outside the
/// displayed frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerEvent {
    ButtonPressed { button: MouseButton, x: i32, y: i32 },
    ButtonReleased { button: MouseButton, x: i32, y: i32 },
    Moved { x: i32, y: i32 },
    /// The input channel is closed or delivered something unrecognizable.
    Unknown,
}

#[async_trait]
#[auto_impl(Box, Arc)]
pub trait PointerInput: Send + Sync {
    async fn next_event(&self) -> PointerEvent;

    fn stop(&self) {}
}

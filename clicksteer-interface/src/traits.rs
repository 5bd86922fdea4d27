pub mod frame;
mod frame_display;
pub mod pointer;
mod target_publisher;
mod velocity_publisher;

pub use frame::{Encoding, FrameSource, RawFrame};
pub use frame_display::*;
pub use pointer::{MouseButton, PointerEvent, PointerInput};
pub use target_publisher::*;
pub use velocity_publisher::*;

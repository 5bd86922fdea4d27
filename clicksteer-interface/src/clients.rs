mod dummy_frame_display;
mod dummy_frame_source;
mod dummy_pointer_input;
mod dummy_target_publisher;
mod dummy_velocity_publisher;

pub use dummy_frame_display::*;
pub use dummy_frame_source::*;
pub use dummy_pointer_input::*;
pub use dummy_target_publisher::*;
pub use dummy_velocity_publisher::*;

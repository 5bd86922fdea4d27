use std::sync::Arc;

use clicksteer_interface::{MouseButton, Point, PointerEvent, TargetPublisher};
use tracing::{debug, error};

use crate::SelectionState;

/// Turns primary-button presses into a new selection.
#[derive(Debug)]
pub struct ClickHandler<T> {
    selection: Arc<SelectionState>,
    publisher: T,
}

impl<T> ClickHandler<T>
where
    T: TargetPublisher,
{
    pub fn new(selection: Arc<SelectionState>, publisher: T) -> Self {
        Self {
            selection,
            publisher,
        }
    }

    /// Handles one pointer event and returns the newly selected point.
    ///
    /// Only a left-button press inside the frame selects a point; every other
    /// event is ignored. The selection is updated before the point and the
    /// annotation size are published, and a failed publish leaves it in place.
    pub fn handle_event(&self, event: PointerEvent) -> Option<Point> {
        let (x, y) = match event {
            PointerEvent::ButtonPressed {
                button: MouseButton::Left,
                x,
                y,
            } => (x, y),
            _ => return None,
        };
        if !self.selection.geometry().contains(x, y) {
            debug!(x, y, "ignoring click outside the frame");
            return None;
        }
        let point = Point::new(x as u32, y as u32);
        let snapshot = self.selection.update(point);
        debug!(
            %point,
            linear = snapshot.velocity.linear,
            angular = snapshot.velocity.angular,
            "target selected"
        );

        if let Err(e) = self.publisher.send_point(&point.into()) {
            error!("failed to publish point {point}: {e}");
        }
        if let Err(e) = self
            .publisher
            .send_annotation_size(snapshot.annotation_size)
        {
            error!("failed to publish annotation size: {e}");
        }
        Some(point)
    }
}

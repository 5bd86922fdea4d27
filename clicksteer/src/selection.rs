use std::sync::{Mutex, MutexGuard, PoisonError};

use clicksteer_interface::{AnnotationSize, Point, VelocityCommand};

use crate::{FrameGeometry, VelocityPolicy};

/// Consistent copy of [`SelectionState`] taken in one critical section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    /// `None` until the first qualifying click.
    pub point: Option<Point>,
    pub annotation_size: AnnotationSize,
    pub velocity: VelocityCommand,
}

#[derive(Debug)]
struct Selection {
    point: Option<Point>,
    velocity: VelocityCommand,
}

/// The only state shared between the frame, input and timer event sources.
///
/// `update` and `snapshot` are mutually exclusive, so the velocity a reader
/// sees always belongs to the point it sees. Neither does I/O while holding
/// the lock.
#[derive(Debug)]
pub struct SelectionState {
    annotation_size: AnnotationSize,
    geometry: FrameGeometry,
    policy: VelocityPolicy,
    inner: Mutex<Selection>,
}

impl SelectionState {
    pub fn new(annotation_size: AnnotationSize) -> Self {
        Self::with_policy(
            annotation_size,
            FrameGeometry::DEFAULT,
            VelocityPolicy::default(),
        )
    }

    pub fn with_policy(
        annotation_size: AnnotationSize,
        geometry: FrameGeometry,
        policy: VelocityPolicy,
    ) -> Self {
        Self {
            annotation_size,
            geometry,
            policy,
            inner: Mutex::new(Selection {
                point: None,
                velocity: policy.idle(),
            }),
        }
    }

    /// Selects `point` and recomputes the velocity for it.
    ///
    /// Returns the state as written.
    pub fn update(&self, point: Point) -> Snapshot {
        let mut inner = self.lock();
        inner.point = Some(point);
        inner.velocity = self.policy.command(point, self.geometry.height);
        self.snapshot_of(&inner)
    }

    pub fn snapshot(&self) -> Snapshot {
        let inner = self.lock();
        self.snapshot_of(&inner)
    }

    pub fn annotation_size(&self) -> AnnotationSize {
        self.annotation_size
    }

    pub fn geometry(&self) -> FrameGeometry {
        self.geometry
    }

    fn snapshot_of(&self, inner: &Selection) -> Snapshot {
        Snapshot {
            point: inner.point,
            annotation_size: self.annotation_size,
            velocity: inner.velocity,
        }
    }

    // Every critical section only assigns plain values, so a poisoned lock
    // still holds a consistent selection.
    fn lock(&self) -> MutexGuard<'_, Selection> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::{ANGULAR_SPEED, FORWARD_SPEED};

    fn state() -> SelectionState {
        SelectionState::new(AnnotationSize::new(100).unwrap())
    }

    #[test]
    fn test_initial_snapshot() {
        let snapshot = state().snapshot();
        assert!(snapshot.point.is_none());
        assert_eq!(snapshot.annotation_size.get(), 100);
        assert_approx_eq!(snapshot.velocity.linear, 0.0);
        assert_approx_eq!(snapshot.velocity.angular, ANGULAR_SPEED);
    }

    #[test]
    fn test_update_then_snapshot() {
        let state = state();
        let policy = VelocityPolicy::default();
        for point in [Point::new(300, 100), Point::new(300, 400), Point::new(0, 256)] {
            let written = state.update(point);
            let snapshot = state.snapshot();
            assert_eq!(written, snapshot);
            assert_eq!(snapshot.point, Some(point));
            assert_approx_eq!(snapshot.velocity.linear, policy.derive(point, 512));
            assert_approx_eq!(snapshot.velocity.angular, ANGULAR_SPEED);
        }
    }

    #[test]
    fn test_last_write_wins() {
        let state = state();
        state.update(Point::new(300, 100));
        state.update(Point::new(300, 400));
        let snapshot = state.snapshot();
        assert_eq!(snapshot.point, Some(Point::new(300, 400)));
        assert_approx_eq!(snapshot.velocity.linear, 0.0);
    }

    #[test]
    fn test_custom_geometry() {
        let state = SelectionState::with_policy(
            AnnotationSize::new(10).unwrap(),
            FrameGeometry {
                width: 640,
                height: 100,
            },
            VelocityPolicy::new(1.0, 0.0),
        );
        assert_approx_eq!(state.update(Point::new(600, 49)).velocity.linear, 1.0);
        assert_approx_eq!(state.update(Point::new(600, 50)).velocity.linear, 0.0);
        assert_eq!(state.geometry().width, 640);
    }

    #[test]
    fn test_concurrent_snapshots_are_consistent() {
        let state = Arc::new(state());
        let writers: Vec<_> = (0..4)
            .map(|i| {
                let state = state.clone();
                thread::spawn(move || {
                    for n in 0..2000 {
                        let y = (n * 7 + i * 131) % 512;
                        state.update(Point::new(i, y));
                    }
                })
            })
            .collect();
        let reader = {
            let state = state.clone();
            thread::spawn(move || {
                for _ in 0..5000 {
                    let snapshot = state.snapshot();
                    let Some(point) = snapshot.point else {
                        assert_approx_eq!(snapshot.velocity.linear, 0.0);
                        continue;
                    };
                    let expected = if point.y < 256 { FORWARD_SPEED } else { 0.0 };
                    assert_approx_eq!(snapshot.velocity.linear, expected);
                }
            })
        };
        for writer in writers {
            writer.join().unwrap();
        }
        reader.join().unwrap();
    }
}

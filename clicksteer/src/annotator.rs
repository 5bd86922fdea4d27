use clicksteer_interface::{Rgb, RgbImage};

use crate::Snapshot;

pub const ANNOTATION_COLOR: Rgb<u8> = Rgb([0, 0, 255]);
pub const ANNOTATION_THICKNESS: u32 = 2;

/// Draws the selection overlay onto frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameAnnotator {
    color: Rgb<u8>,
    thickness: u32,
}

impl Default for FrameAnnotator {
    fn default() -> Self {
        Self::new(ANNOTATION_COLOR, ANNOTATION_THICKNESS)
    }
}

impl FrameAnnotator {
    pub fn new(color: Rgb<u8>, thickness: u32) -> Self {
        Self { color, thickness }
    }

    /// Draws a non-filled square whose top-left corner is the selected point
    /// and whose side is the annotation size. Does nothing before the first
    /// selection.
    pub fn annotate(&self, frame: &mut RgbImage, snapshot: &Snapshot) {
        if let Some(point) = snapshot.point {
            draw_square(
                frame,
                point.x,
                point.y,
                snapshot.annotation_size.get(),
                self.thickness,
                self.color,
            );
        }
    }
}

// The stroke grows inwards from the square's outline and is clipped to the frame.
fn draw_square(
    image: &mut RgbImage,
    left: u32,
    top: u32,
    side: u32,
    thickness: u32,
    color: Rgb<u8>,
) {
    let (width, height) = (u64::from(image.width()), u64::from(image.height()));
    if width == 0 || height == 0 {
        return;
    }
    let layers = u64::from(thickness.min(side - side / 2));
    let (left, top, side) = (u64::from(left), u64::from(top), u64::from(side));

    for layer in 0..layers {
        let l = left + layer;
        let t = top + layer;
        let r = left + side - 1 - layer;
        let b = top + side - 1 - layer;

        if l < width {
            for x in l..=r.min(width - 1) {
                if t < height {
                    image.put_pixel(x as u32, t as u32, color);
                }
                if b < height {
                    image.put_pixel(x as u32, b as u32, color);
                }
            }
        }
        if t < height {
            for y in t..=b.min(height - 1) {
                if l < width {
                    image.put_pixel(l as u32, y as u32, color);
                }
                if r < width {
                    image.put_pixel(r as u32, y as u32, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use clicksteer_interface::{AnnotationSize, Point, VelocityCommand};

    use super::*;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    fn snapshot(point: Option<Point>, size: i64) -> Snapshot {
        Snapshot {
            point,
            annotation_size: AnnotationSize::new(size).unwrap(),
            velocity: VelocityCommand::default(),
        }
    }

    fn painted(image: &RgbImage) -> usize {
        image.pixels().filter(|p| **p == ANNOTATION_COLOR).count()
    }

    #[test]
    fn test_no_point_no_overlay() {
        let mut image = RgbImage::new(64, 64);
        FrameAnnotator::default().annotate(&mut image, &snapshot(None, 10));
        assert_eq!(painted(&image), 0);
    }

    #[test]
    fn test_square_outline() {
        let mut image = RgbImage::new(64, 64);
        FrameAnnotator::default().annotate(&mut image, &snapshot(Some(Point::new(10, 20)), 10));

        // outer ring
        assert_eq!(*image.get_pixel(10, 20), ANNOTATION_COLOR);
        assert_eq!(*image.get_pixel(19, 20), ANNOTATION_COLOR);
        assert_eq!(*image.get_pixel(10, 29), ANNOTATION_COLOR);
        assert_eq!(*image.get_pixel(19, 29), ANNOTATION_COLOR);
        // second ring
        assert_eq!(*image.get_pixel(11, 21), ANNOTATION_COLOR);
        assert_eq!(*image.get_pixel(18, 28), ANNOTATION_COLOR);
        // inside and outside are untouched
        assert_eq!(*image.get_pixel(12, 22), BLACK);
        assert_eq!(*image.get_pixel(15, 25), BLACK);
        assert_eq!(*image.get_pixel(9, 20), BLACK);
        assert_eq!(*image.get_pixel(20, 29), BLACK);
        assert_eq!(*image.get_pixel(10, 30), BLACK);
        // 10x10 minus the 6x6 interior
        assert_eq!(painted(&image), 100 - 36);
    }

    #[test]
    fn test_clipped_at_frame_edge() {
        let mut image = RgbImage::new(64, 64);
        FrameAnnotator::default().annotate(&mut image, &snapshot(Some(Point::new(60, 62)), 100));
        // the visible part is the top stroke, two rows of four pixels
        assert_eq!(*image.get_pixel(60, 62), ANNOTATION_COLOR);
        assert_eq!(*image.get_pixel(63, 62), ANNOTATION_COLOR);
        assert_eq!(*image.get_pixel(60, 63), ANNOTATION_COLOR);
        assert_eq!(*image.get_pixel(63, 63), ANNOTATION_COLOR);
        assert_eq!(*image.get_pixel(59, 62), BLACK);
        assert_eq!(painted(&image), 8);
    }

    #[test]
    fn test_tiny_square() {
        let mut image = RgbImage::new(8, 8);
        FrameAnnotator::default().annotate(&mut image, &snapshot(Some(Point::new(2, 2)), 1));
        assert_eq!(painted(&image), 1);

        let mut image = RgbImage::new(8, 8);
        FrameAnnotator::default().annotate(&mut image, &snapshot(Some(Point::new(2, 2)), 3));
        assert_eq!(painted(&image), 9);
    }

    #[test]
    fn test_huge_square_does_not_overflow() {
        let mut image = RgbImage::new(8, 8);
        FrameAnnotator::new(Rgb([1, 2, 3]), 3)
            .annotate(&mut image, &snapshot(Some(Point::new(u32::MAX, 0)), i64::from(u32::MAX)));
        assert!(image.pixels().all(|p| *p == BLACK));
    }
}

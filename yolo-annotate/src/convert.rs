//! Conversion between pixel boxes and normalized YOLO boxes.
//!
//! Normalization validates: boxes without a positive width and height, or
//! with a non-finite coordinate, are dropped. Denormalization trusts its input
//! and keeps every box.

use crate::{
    boxes::{Conversion, ImageSize, NormalizedBoundingBox, PixelBoundingBox},
    common::*,
};
use bbox::{RectNum, Transform};
use label::Label;

/// Normalize pixel boxes against an image of `original_width` x `original_height` pixels.
///
/// Degenerate boxes and boxes with NaN or infinite coordinates are silently
/// dropped. Fails if the image size is not finite and positive.
pub fn to_normalized(
    pixel_boxes: &[PixelBoundingBox],
    original_width: f64,
    original_height: f64,
) -> Result<Vec<NormalizedBoundingBox>> {
    let report = to_normalized_with_report(pixel_boxes, original_width, original_height)?;
    Ok(report.into_inner())
}

/// Same as [to_normalized], but also reports how many boxes were dropped.
pub fn to_normalized_with_report(
    pixel_boxes: &[PixelBoundingBox],
    original_width: f64,
    original_height: f64,
) -> Result<Conversion<NormalizedBoundingBox>> {
    let image_size = ImageSize::try_from_wh(original_width, original_height)?;
    Ok(normalize_boxes(pixel_boxes, &image_size))
}

/// Map normalized boxes back onto an image of `original_width` x `original_height` pixels.
///
/// Every input box yields exactly one output box. Fails if the image size is
/// not finite and positive.
pub fn to_pixel(
    normalized_boxes: &[NormalizedBoundingBox],
    original_width: f64,
    original_height: f64,
) -> Result<Vec<PixelBoundingBox>> {
    let image_size = ImageSize::try_from_wh(original_width, original_height)?;
    Ok(denormalize_boxes(normalized_boxes, &image_size))
}

pub fn normalize_boxes(
    pixel_boxes: &[PixelBoundingBox],
    image_size: &ImageSize,
) -> Conversion<NormalizedBoundingBox> {
    let mut skipped = 0;

    let converted: Vec<_> = pixel_boxes
        .iter()
        .filter_map(|pixel| {
            if !is_normalizable(pixel) {
                skipped += 1;
                return None;
            }

            let label = Label {
                rect: pixel.to_cycxhw().normalize(image_size),
                class: pixel.class_id,
            };
            Some(NormalizedBoundingBox::from(&label))
        })
        .collect();

    if skipped > 0 {
        debug!(
            "dropped {} boxes without finite coordinates and positive extent out of {}",
            skipped,
            pixel_boxes.len()
        );
    }

    Conversion { converted, skipped }
}

/// A box is normalized only if its extent is positive and every coordinate is finite.
fn is_normalizable(pixel: &PixelBoundingBox) -> bool {
    pixel.has_positive_extent() && pixel.tlhw().iter().all(|value| value.is_finite())
}

pub fn denormalize_boxes(
    normalized_boxes: &[NormalizedBoundingBox],
    image_size: &ImageSize,
) -> Vec<PixelBoundingBox> {
    let transform = Transform::denormalizing(image_size);

    normalized_boxes
        .iter()
        .map(|normalized| {
            let label = Label {
                rect: normalized.to_tlhw(),
                class: normalized.class_id,
            };
            PixelBoundingBox::from(&(&transform * &label))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn pixel(class_id: i32, x: f64, y: f64, width: f64, height: f64) -> PixelBoundingBox {
        PixelBoundingBox {
            class_id,
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn normalize_box() {
        let boxes = to_normalized(&[pixel(1, 10.0, 20.0, 30.0, 40.0)], 100.0, 200.0).unwrap();
        assert_eq!(boxes.len(), 1);

        let NormalizedBoundingBox {
            class_id,
            center_x,
            center_y,
            width,
            height,
        } = boxes[0];
        assert_eq!(class_id, 1);
        assert_abs_diff_eq!(center_x, 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(center_y, 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(width, 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(height, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn normalize_drops_degenerate_boxes() {
        let boxes = [
            pixel(0, 0.0, 0.0, 0.0, 10.0),
            pixel(1, 5.0, 5.0, 10.0, 10.0),
            pixel(2, 0.0, 0.0, 10.0, 0.0),
            pixel(3, 0.0, 0.0, -4.0, 10.0),
            pixel(4, 1.0, 1.0, 2.0, 2.0),
        ];
        let report = to_normalized_with_report(&boxes, 100.0, 100.0).unwrap();

        assert_eq!(report.skipped, 3);
        let classes: Vec<_> = report.converted.iter().map(|b| b.class_id).collect();
        assert_eq!(classes, [1, 4]);

        assert!(to_normalized(&[pixel(0, 1.0, 1.0, 0.0, 0.0)], 10.0, 10.0)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn normalize_divides_like_the_label_formula() {
        let boxes = [
            pixel(2, 14.43, 100.0, 13.3, 50.0),
            pixel(5, 321.7, 17.01, 0.3, 401.9),
        ];
        let normalized = to_normalized(&boxes, 640.0, 480.0).unwrap();

        for (pixel, normalized) in boxes.iter().zip(&normalized) {
            assert_eq!(normalized.center_x, (pixel.x + pixel.width / 2.0) / 640.0);
            assert_eq!(normalized.center_y, (pixel.y + pixel.height / 2.0) / 480.0);
            assert_eq!(normalized.width, pixel.width / 640.0);
            assert_eq!(normalized.height, pixel.height / 480.0);
        }
        assert_eq!(
            crate::label_text::format(&normalized[..1]),
            "2 0.032937 0.260417 0.020781 0.104167\n"
        );
    }

    #[test]
    fn normalize_drops_non_finite_coordinates() {
        let boxes = [
            pixel(0, f64::NAN, 1.0, 2.0, 2.0),
            pixel(1, 1.0, f64::INFINITY, 2.0, 2.0),
            pixel(2, 1.0, 1.0, f64::INFINITY, 2.0),
            pixel(3, 1.0, 1.0, 2.0, 2.0),
        ];
        let report = to_normalized_with_report(&boxes, 100.0, 100.0).unwrap();

        assert_eq!(report.skipped, 3);
        assert_eq!(report.converted.len(), 1);
        assert_eq!(report.converted[0].class_id, 3);
    }

    #[test]
    fn denormalize_keeps_every_box() {
        let normalized = [
            NormalizedBoundingBox {
                class_id: 0,
                center_x: 0.5,
                center_y: 0.5,
                width: 0.0,
                height: 0.0,
            },
            NormalizedBoundingBox {
                class_id: 1,
                center_x: 0.25,
                center_y: 0.75,
                width: 0.5,
                height: -0.1,
            },
        ];
        let boxes = to_pixel(&normalized, 200.0, 100.0).unwrap();

        assert_eq!(boxes.len(), 2);
        assert_abs_diff_eq!(boxes[0].x, 100.0);
        assert_abs_diff_eq!(boxes[0].width, 0.0);
        assert_abs_diff_eq!(boxes[1].x, 0.0);
        assert_abs_diff_eq!(boxes[1].y, 80.0, epsilon = 1e-9);
        assert_abs_diff_eq!(boxes[1].height, -10.0, epsilon = 1e-9);
    }

    #[test]
    fn round_trip_reproduces_pixel_box() {
        let originals = [
            pixel(0, 10.5, 20.25, 100.75, 50.5),
            pixel(7, 0.0, 0.0, 1920.0, 1080.0),
            pixel(3, 1234.567, 89.0123, 0.001, 7.5),
        ];
        let normalized = to_normalized(&originals, 1920.0, 1080.0).unwrap();
        let restored = to_pixel(&normalized, 1920.0, 1080.0).unwrap();

        assert_eq!(restored.len(), originals.len());
        for (orig, back) in originals.iter().zip(&restored) {
            assert_eq!(orig.class_id, back.class_id);
            assert_relative_eq!(orig.x, back.x, epsilon = 1e-9, max_relative = 1e-9);
            assert_relative_eq!(orig.y, back.y, epsilon = 1e-9, max_relative = 1e-9);
            assert_relative_eq!(orig.width, back.width, max_relative = 1e-9);
            assert_relative_eq!(orig.height, back.height, max_relative = 1e-9);
        }
    }

    #[test]
    fn invalid_image_size_fails() {
        let boxes = [pixel(0, 1.0, 1.0, 2.0, 2.0)];
        assert!(to_normalized(&boxes, 0.0, 100.0).is_err());
        assert!(to_normalized(&boxes, 100.0, -1.0).is_err());
        assert!(to_pixel(&[], f64::NAN, 100.0).is_err());
        assert!(to_pixel(&[], 100.0, 0.0).is_err());
    }
}

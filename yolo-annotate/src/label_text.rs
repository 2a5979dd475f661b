//! The YOLO label file text for normalized boxes.

use crate::{boxes::NormalizedBoundingBox, common::*};
use label::YoloLabel;

/// Render normalized boxes as label file text, one line per box.
///
/// Lines read `"<class_id> <cx> <cy> <w> <h>\n"` with 6 fractional digits in
/// fixed-point notation. No boxes give an empty string.
pub fn format(boxes: &[NormalizedBoundingBox]) -> String {
    let labels: Vec<YoloLabel> = boxes.iter().map(|bbox| bbox.to_label()).collect();
    label::format_labels(&labels)
}

/// Parse label file text into normalized boxes.
pub fn parse(text: &str) -> Result<Vec<NormalizedBoundingBox>> {
    let boxes = label::parse_labels(text)?
        .iter()
        .map(NormalizedBoundingBox::from)
        .collect();
    Ok(boxes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{to_normalized, to_pixel};
    use crate::PixelBoundingBox;
    use approx::assert_abs_diff_eq;

    #[test]
    fn format_example_line() {
        let text = format(&[NormalizedBoundingBox {
            class_id: 3,
            center_x: 0.5,
            center_y: 0.25,
            width: 0.1,
            height: 0.2,
        }]);
        assert_eq!(text, "3 0.500000 0.250000 0.100000 0.200000\n");
    }

    #[test]
    fn format_no_boxes() {
        assert_eq!(format(&[]), "");
    }

    #[test]
    fn label_file_round_trip_within_precision() {
        let (width, height) = (1280.0, 720.0);
        let original = PixelBoundingBox {
            class_id: 9,
            x: 101.3,
            y: 57.9,
            width: 333.3,
            height: 222.2,
        };

        let text = format(&to_normalized(&[original], width, height).unwrap());
        let restored = to_pixel(&parse(&text).unwrap(), width, height).unwrap();

        assert_eq!(restored.len(), 1);
        assert_eq!(restored[0].class_id, 9);
        // 6 decimal digits of a normalized value
        assert_abs_diff_eq!(restored[0].x, original.x, epsilon = width * 1e-6);
        assert_abs_diff_eq!(restored[0].y, original.y, epsilon = height * 1e-6);
        assert_abs_diff_eq!(restored[0].width, original.width, epsilon = width * 1e-6);
        assert_abs_diff_eq!(restored[0].height, original.height, epsilon = height * 1e-6);
    }
}

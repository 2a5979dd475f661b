//! Post-processing of raw detector output into pixel boxes.

use crate::{
    boxes::{Conversion, PixelBoundingBox},
    common::*,
    config::DetectionConfig,
};
use bbox::{TLBR, TLHW};
use label::Label;

/// One detector row, `[x1, y1, x2, y2, confidence, class_id]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawDetection {
    pub tlbr: TLBR<f64>,
    pub confidence: f64,
    pub class_id: i32,
}

impl RawDetection {
    /// Read a detector row. Rows with fewer than 6 fields give `None` and
    /// fields past the sixth are ignored.
    ///
    /// The class id is truncated toward zero. Out-of-range values saturate and
    /// NaN becomes 0.
    pub fn from_row(row: &[f64]) -> Option<Self> {
        match *row {
            [x1, y1, x2, y2, confidence, class_id, ..] => Some(Self {
                tlbr: TLBR::from_xyxy([x1, y1, x2, y2]),
                confidence,
                class_id: class_id as i32,
            }),
            _ => None,
        }
    }

    /// The box spanned by the corners. Unordered corners give negative extents.
    pub fn to_pixel_box(&self) -> PixelBoundingBox {
        let label = Label {
            rect: TLHW::from(&self.tlbr),
            class: self.class_id,
        };
        PixelBoundingBox::from(&label)
    }
}

/// Filters detector rows by confidence and converts them to pixel boxes.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionPostProcessor {
    confidence_threshold: f64,
}

impl DetectionPostProcessor {
    pub fn new(confidence_threshold: f64) -> Self {
        Self {
            confidence_threshold,
        }
    }

    pub fn from_config(config: &DetectionConfig) -> Self {
        Self::new(config.confidence_threshold.raw())
    }

    pub fn confidence_threshold(&self) -> f64 {
        self.confidence_threshold
    }

    /// Keep rows whose confidence is strictly above the threshold.
    pub fn process<Row>(&self, raw_rows: &[Row]) -> Vec<PixelBoundingBox>
    where
        Row: AsRef<[f64]>,
    {
        self.process_with_report(raw_rows).into_inner()
    }

    pub fn process_with_report<Row>(&self, raw_rows: &[Row]) -> Conversion<PixelBoundingBox>
    where
        Row: AsRef<[f64]>,
    {
        let mut malformed = 0;
        let mut rejected = 0;

        let converted: Vec<_> = raw_rows
            .iter()
            .filter_map(|row| {
                let detection = match RawDetection::from_row(row.as_ref()) {
                    Some(detection) => detection,
                    None => {
                        malformed += 1;
                        return None;
                    }
                };

                if !(detection.confidence > self.confidence_threshold) {
                    rejected += 1;
                    return None;
                }

                Some(detection.to_pixel_box())
            })
            .collect();

        if malformed > 0 {
            debug!("skipped {} detector rows with fewer than 6 fields", malformed);
        }
        debug!(
            "kept {} of {} detections above confidence {}",
            converted.len(),
            raw_rows.len(),
            self.confidence_threshold
        );

        Conversion {
            converted,
            skipped: malformed + rejected,
        }
    }
}

/// Convert raw detector rows into pixel boxes, keeping rows with
/// `confidence > confidence_threshold`.
pub fn process<Row>(raw_rows: &[Row], confidence_threshold: f64) -> Vec<PixelBoundingBox>
where
    Row: AsRef<[f64]>,
{
    DetectionPostProcessor::new(confidence_threshold).process(raw_rows)
}

use crate::{Label, YoloLabel};
use anyhow::{Context as _, Result};
use bbox::{CyCxHW, Rect};
use log::debug;
use std::fmt::Display;

/// Number of fields a YOLO label line must carry.
const LABEL_FIELDS: usize = 5;

/// Render labels in the YOLO label file layout.
///
/// Each label becomes one line `"<class> <cx> <cy> <w> <h>\n"` with every
/// coordinate printed in fixed-point notation with 6 fractional digits. An
/// empty input gives an empty string.
pub fn format_labels<R, C>(labels: &[Label<R, C>]) -> String
where
    R: Rect,
    R::Type: Display,
    C: Display,
{
    labels
        .iter()
        .map(|label| {
            let Label { rect, class } = label;
            format!(
                "{} {:.6} {:.6} {:.6} {:.6}\n",
                class,
                rect.cx(),
                rect.cy(),
                rect.w(),
                rect.h()
            )
        })
        .collect()
}

/// Parse the content of a YOLO label file.
///
/// Blank lines and lines with fewer than five fields are skipped. Fields past
/// the fifth are ignored. A field that fails to parse is an error.
pub fn parse_labels(text: &str) -> Result<Vec<YoloLabel>> {
    let mut labels = vec![];

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();

        if fields.is_empty() {
            continue;
        }
        if fields.len() < LABEL_FIELDS {
            debug!(
                "skip label line {} with {} fields: {:?}",
                line_no,
                fields.len(),
                line
            );
            continue;
        }

        let class: i32 = fields[0]
            .parse()
            .with_context(|| format!("invalid class id '{}' at line {}", fields[0], line_no))?;
        let parse_coord = |field: &str| -> Result<f64> {
            field
                .parse()
                .with_context(|| format!("invalid coordinate '{}' at line {}", field, line_no))
        };
        let cx = parse_coord(fields[1])?;
        let cy = parse_coord(fields[2])?;
        let w = parse_coord(fields[3])?;
        let h = parse_coord(fields[4])?;

        labels.push(Label {
            rect: CyCxHW::from_cycxhw([cy, cx, h, w]),
            class,
        });
    }

    Ok(labels)
}

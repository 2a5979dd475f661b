use super::label_path_for;
use crate::{
    boxes::{Conversion, ImageSize, PixelBoundingBox},
    common::*,
    convert::{denormalize_boxes, normalize_boxes},
    label_text,
};

/// Read the pixel size of an image from its header.
pub fn image_size_of(image_path: impl AsRef<Path>) -> Result<ImageSize> {
    let image_path = image_path.as_ref();
    let imagesize::ImageSize { width, height } = imagesize::size(image_path)
        .with_context(|| format!("unable to read the size of '{}'", image_path.display()))?;
    ImageSize::try_from_wh(width as f64, height as f64)
        .with_context(|| format!("invalid image size of '{}'", image_path.display()))
}

/// Load the boxes of an image in pixel units.
///
/// An image without a label file has no boxes.
pub fn load_image_labels(
    image_path: impl AsRef<Path>,
    image_size: &ImageSize,
) -> Result<Vec<PixelBoundingBox>> {
    let label_path = label_path_for(image_path);
    if !label_path.exists() {
        return Ok(vec![]);
    }

    let text = fs::read_to_string(&label_path)
        .with_context(|| format!("unable to read '{}'", label_path.display()))?;
    let normalized = label_text::parse(&text)
        .with_context(|| format!("malformed label file '{}'", label_path.display()))?;

    Ok(denormalize_boxes(&normalized, image_size))
}

/// Write the boxes of an image to its label file.
///
/// Saving no boxes removes the label file. Boxes without a positive extent
/// are left out. Returns whether the image counts as labelled afterwards.
pub fn save_image_labels(
    image_path: impl AsRef<Path>,
    boxes: &[PixelBoundingBox],
    image_size: &ImageSize,
) -> Result<bool> {
    let label_path = label_path_for(image_path);

    if boxes.is_empty() {
        if label_path.exists() {
            fs::remove_file(&label_path)
                .with_context(|| format!("unable to remove '{}'", label_path.display()))?;
            info!("removed empty label file '{}'", label_path.display());
        }
        return Ok(false);
    }

    let Conversion { converted, skipped } = normalize_boxes(boxes, image_size);
    if skipped > 0 {
        warn!(
            "left out {} boxes without positive extent from '{}'",
            skipped,
            label_path.display()
        );
    }

    let text = label_text::format(&converted);
    fs::write(&label_path, &text)
        .with_context(|| format!("unable to write '{}'", label_path.display()))?;
    info!(
        "saved {} boxes to '{}'",
        converted.len(),
        label_path.display()
    );

    Ok(!text.is_empty())
}

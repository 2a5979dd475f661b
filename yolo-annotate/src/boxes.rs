//! Box types exchanged with the annotation front end.

use crate::common::*;
use bbox::{CyCxHW, Rect, HW, TLHW};
use label::{Label, YoloLabel};

/// The size of an image in pixels. Both extents are finite and positive.
pub type ImageSize = HW<f64>;

/// A box in image pixel units, given by its top-left corner and extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelBoundingBox {
    pub class_id: i32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelBoundingBox {
    pub fn to_label(&self) -> Label<TLHW<f64>, i32> {
        Label {
            rect: TLHW::from_tlhw([self.y, self.x, self.height, self.width]),
            class: self.class_id,
        }
    }
}

impl From<&Label<TLHW<f64>, i32>> for PixelBoundingBox {
    fn from(from: &Label<TLHW<f64>, i32>) -> Self {
        let Label {
            rect: TLHW { t, l, h, w },
            class,
        } = *from;
        Self {
            class_id: class,
            x: l,
            y: t,
            width: w,
            height: h,
        }
    }
}

impl Rect for PixelBoundingBox {
    type Type = f64;

    fn t(&self) -> f64 {
        self.y
    }

    fn l(&self) -> f64 {
        self.x
    }

    fn b(&self) -> f64 {
        self.y + self.height
    }

    fn r(&self) -> f64 {
        self.x + self.width
    }

    fn cy(&self) -> f64 {
        self.y + self.height / 2.0
    }

    fn cx(&self) -> f64 {
        self.x + self.width / 2.0
    }

    fn h(&self) -> f64 {
        self.height
    }

    fn w(&self) -> f64 {
        self.width
    }
}

/// A box relative to the image size, as stored in YOLO label files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedBoundingBox {
    pub class_id: i32,
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

impl NormalizedBoundingBox {
    pub fn to_label(&self) -> YoloLabel {
        Label {
            rect: CyCxHW::from_cycxhw([self.center_y, self.center_x, self.height, self.width]),
            class: self.class_id,
        }
    }
}

impl From<&YoloLabel> for NormalizedBoundingBox {
    fn from(from: &YoloLabel) -> Self {
        let Label {
            rect: CyCxHW { cy, cx, h, w },
            class,
        } = *from;
        Self {
            class_id: class,
            center_x: cx,
            center_y: cy,
            width: w,
            height: h,
        }
    }
}

impl Rect for NormalizedBoundingBox {
    type Type = f64;

    fn t(&self) -> f64 {
        self.center_y - self.height / 2.0
    }

    fn l(&self) -> f64 {
        self.center_x - self.width / 2.0
    }

    fn b(&self) -> f64 {
        self.center_y + self.height / 2.0
    }

    fn r(&self) -> f64 {
        self.center_x + self.width / 2.0
    }

    fn cy(&self) -> f64 {
        self.center_y
    }

    fn cx(&self) -> f64 {
        self.center_x
    }

    fn h(&self) -> f64 {
        self.height
    }

    fn w(&self) -> f64 {
        self.width
    }
}

/// The outcome of a batch conversion that tolerates invalid items.
///
/// `converted` keeps the input order of the accepted items. `skipped` counts
/// the items that were left out.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion<T> {
    pub converted: Vec<T>,
    pub skipped: usize,
}

impl<T> Conversion<T> {
    pub fn into_inner(self) -> Vec<T> {
        self.converted
    }
}

//! Class-tagged bounding boxes and the YOLO label text format.

use bbox::{CyCxHW, Rect, Transform, TLHW};
use num_traits::Num;
use std::ops::Mul;

mod format;
pub use format::*;

/// A rectangle tagged with its object class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label<R, C>
where
    R: Rect,
{
    pub rect: R,
    pub class: C,
}

/// A label line of a YOLO label file, in normalized coordinates.
pub type YoloLabel = Label<CyCxHW<f64>, i32>;

impl<'a, T, C> Mul<&'a Label<TLHW<T>, C>> for &'a Transform<T>
where
    T: Copy + Num,
    C: Copy,
{
    type Output = Label<TLHW<T>, C>;

    fn mul(self, rhs: &'a Label<TLHW<T>, C>) -> Self::Output {
        Label {
            rect: self * &rhs.rect,
            class: rhs.class,
        }
    }
}
